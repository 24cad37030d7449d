// Host-side tests for the pure geometry functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geo {
    include!("../src/geo.rs");
}

use constants::*;
use geo::*;
use glam::{Vec3, Vec4};

#[test]
fn projection_lands_on_the_requested_radius() {
    for lat in [-90.0_f32, -60.0, -30.0, -0.5, 0.0, 12.55, 45.17, 89.0, 90.0] {
        for lon in [-180.0_f32, -9.2, 0.0, 24.87, 101.6, 139.11, 180.0] {
            let p = project(lat, lon, GLOBE_RADIUS);
            assert!(
                (p.length() - GLOBE_RADIUS).abs() < 1e-3,
                "|project({}, {})| = {}",
                lat,
                lon,
                p.length()
            );
        }
    }
}

#[test]
fn poles_ignore_longitude() {
    let reference = project(90.0, 0.0, GLOBE_RADIUS);
    for lon in [-180.0_f32, -45.0, 10.0, 99.0, 180.0] {
        let p = project(90.0, lon, GLOBE_RADIUS);
        assert!((p - reference).length() < 1e-3, "north pole moved for lon {}", lon);
    }
    let reference = project(-90.0, 0.0, GLOBE_RADIUS);
    for lon in [-120.0_f32, 0.0, 77.0] {
        let p = project(-90.0, lon, GLOBE_RADIUS);
        assert!((p - reference).length() < 1e-3, "south pole moved for lon {}", lon);
    }
}

#[test]
fn projection_axis_convention() {
    // Equator at the prime meridian sits on +X (the azimuth is offset 90°).
    let p = project(0.0, 0.0, GLOBE_RADIUS);
    assert!((p - Vec3::new(GLOBE_RADIUS, 0.0, 0.0)).length() < 1e-3);

    // North pole is +Y.
    let p = project(90.0, 0.0, GLOBE_RADIUS);
    assert!((p - Vec3::new(0.0, GLOBE_RADIUS, 0.0)).length() < 1e-3);
}

#[test]
fn arc_has_eleven_samples_with_half_sine_bulge() {
    let points = arc_points(&JOURNEY[0], &JOURNEY[1]);
    assert_eq!(points.len(), ARC_SAMPLES);

    let n = (ARC_SAMPLES - 1) as f32;
    for (i, p) in points.iter().enumerate() {
        let expected = GLOBE_RADIUS + ARC_BULGE * (std::f32::consts::PI * i as f32 / n).sin();
        assert!(
            (p.length() - expected).abs() < 1e-3,
            "sample {} has radius {}, expected {}",
            i,
            p.length(),
            expected
        );
    }
}

#[test]
fn arc_endpoints_sit_on_the_surface() {
    let a = &JOURNEY[3];
    let b = &JOURNEY[4];
    let points = arc_points(a, b);

    let pa = project(a.lat, a.lon, GLOBE_RADIUS);
    let pb = project(b.lat, b.lon, GLOBE_RADIUS);
    assert!((points[0] - pa).length() < 1e-3);
    assert!((points[ARC_SAMPLES - 1] - pb).length() < 1e-3);
}

#[test]
fn arc_between_identical_stops_stays_finite() {
    let loc = JOURNEY[7];
    let points = arc_points(&loc, &loc);
    assert_eq!(points.len(), ARC_SAMPLES);
    for p in &points {
        assert!(p.is_finite());
    }
}

#[test]
fn catmull_rom_sample_count_and_endpoints() {
    let control = arc_points(&JOURNEY[1], &JOURNEY[2]);
    let samples = catmull_rom(&control, TUBE_SEGMENTS);
    assert_eq!(samples.len(), TUBE_SEGMENTS + 1);
    assert!((samples[0] - control[0]).length() < 1e-3);
    assert!((samples[TUBE_SEGMENTS] - control[control.len() - 1]).length() < 1e-3);
}

#[test]
fn catmull_rom_interpolates_control_points() {
    let control = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 1.0, -1.0),
    ];
    // Four segments over two spans: every other sample lands on a control point.
    let samples = catmull_rom(&control, 4);
    assert!((samples[0] - control[0]).length() < 1e-5);
    assert!((samples[2] - control[1]).length() < 1e-5);
    assert!((samples[4] - control[2]).length() < 1e-5);
}

#[test]
fn marker_basis_aims_local_z_outward() {
    for loc in JOURNEY.iter() {
        let pos = project(loc.lat, loc.lon, MARKER_ALTITUDE);
        let basis = marker_basis(pos);
        let z = (basis * Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
        assert!((z.normalize() - pos.normalize()).length() < 1e-3, "{}", loc.name);
        let origin = (basis * Vec4::new(0.0, 0.0, 0.0, 1.0)).truncate();
        assert!((origin - pos).length() < 1e-3);
    }
}

#[test]
fn marker_basis_handles_the_pole() {
    let pos = Vec3::new(0.0, MARKER_ALTITUDE, 0.0);
    let basis = marker_basis(pos);
    let z = (basis * Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
    assert!(z.is_finite());
    assert!((z.normalize() - Vec3::Y).length() < 1e-3);
}

#[test]
fn coords_format_with_hemisphere_letters() {
    assert_eq!(format_coords(38.74, -9.2), "38.74° N, 9.20° W");
    assert_eq!(format_coords(-12.5, 130.85), "12.50° S, 130.85° E");
}
