use crate::constants::{ARC_BULGE, ARC_SAMPLES, GLOBE_RADIUS};
use glam::{Mat4, Vec3};

/// A named stop on the journey, in geographic degrees.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f32,
    pub lon: f32,
}

/// The journey, in visiting order. Consecutive stops are joined by an arc.
pub const JOURNEY: [Location; 14] = [
    Location { name: "Lisbona", lat: 38.74, lon: -9.2 },
    Location { name: "Syros", lat: 37.43, lon: 24.87 },
    Location { name: "Valfrejus", lat: 45.17, lon: 6.64 },
    Location { name: "Albenga", lat: 44.05, lon: 8.19 },
    Location { name: "Salerno", lat: 40.67, lon: 14.75 },
    Location { name: "Milano", lat: 45.46, lon: 9.09 },
    Location { name: "Torino", lat: 45.07, lon: 7.63 },
    Location { name: "Hội An", lat: 15.91, lon: 108.33 },
    Location { name: "Ko Lanta", lat: 7.66, lon: 98.92 },
    Location { name: "Kyoto", lat: 35.09, lon: 135.55 },
    Location { name: "Ko Samet", lat: 12.55, lon: 101.43 },
    Location { name: "Tokyo", lat: 35.5, lon: 139.11 },
    Location { name: "Hanoi", lat: 21.02, lon: 105.81 },
    Location { name: "Kuala Lumpur", lat: 3.13, lon: 101.6 },
];

/// Map geographic degrees to a point on a sphere of the given radius.
///
/// Y is up; the polar angle is measured from the north pole and the
/// azimuth is offset by 90° so the texture seam lands on the date line.
pub fn project(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let theta = (90.0 - lat_deg).to_radians();
    let phi = (lon_deg + 90.0).to_radians();
    Vec3::new(
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
        radius * theta.sin() * phi.cos(),
    )
}

/// Sample points along the flight arc between two stops.
///
/// Chord points are lerped, pushed back onto the sphere, and scaled by a
/// half-sine bulge so the arc lifts off the surface and lands again.
pub fn arc_points(a: &Location, b: &Location) -> Vec<Vec3> {
    let pa = project(a.lat, a.lon, GLOBE_RADIUS);
    let pb = project(b.lat, b.lon, GLOBE_RADIUS);
    let fallback = pa.normalize();

    let n = ARC_SAMPLES - 1;
    let mut points = Vec::with_capacity(ARC_SAMPLES);
    for i in 0..ARC_SAMPLES {
        let t = i as f32 / n as f32;
        let dir = pa.lerp(pb, t).try_normalize().unwrap_or(fallback);
        let radius = GLOBE_RADIUS + ARC_BULGE * (std::f32::consts::PI * t).sin();
        points.push(dir * radius);
    }
    points
}

/// Evaluate a uniform Catmull-Rom spline through `points`, endpoint-clamped,
/// returning `segments + 1` samples from the first point to the last.
pub fn catmull_rom(points: &[Vec3], segments: usize) -> Vec<Vec3> {
    assert!(points.len() >= 2);
    let last = points.len() - 1;
    let at = |i: isize| points[i.clamp(0, last as isize) as usize];

    let mut out = Vec::with_capacity(segments + 1);
    for s in 0..=segments {
        let t = s as f32 / segments as f32 * last as f32;
        let i = (t.floor() as isize).min(last as isize - 1);
        let u = t - i as f32;

        let p0 = at(i - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);

        let u2 = u * u;
        let u3 = u2 * u;
        out.push(
            ((p1 * 2.0)
                + (p2 - p0) * u
                + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * u2
                + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * u3)
                * 0.5,
        );
    }
    out
}

/// Build the model matrix that places a marker at `pos` with its local +Z
/// axis pointing away from the globe center.
pub fn marker_basis(pos: Vec3) -> Mat4 {
    let n = pos.normalize();
    let t = if n.y.abs() > 0.999 {
        Vec3::X
    } else {
        Vec3::Y.cross(n).normalize()
    };
    let b = n.cross(t);
    Mat4::from_cols(t.extend(0.0), b.extend(0.0), n.extend(0.0), pos.extend(1.0))
}

/// Human-readable coordinates for the info cards, e.g. "38.74° N, 9.20° W".
pub fn format_coords(lat: f32, lon: f32) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}° {}, {:.2}° {}", lat.abs(), ns, lon.abs(), ew)
}
