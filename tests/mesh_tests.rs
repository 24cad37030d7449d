// Host-side tests for the mesh generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geo {
    include!("../src/geo.rs");
}
mod mesh {
    include!("../src/mesh.rs");
}

use constants::*;
use glam::Vec3;
use mesh::*;

#[test]
fn sphere_vertex_and_index_counts() {
    let m = uv_sphere(8, 8);
    assert_eq!(m.vertex_count(), 9 * 9);
    assert_eq!(m.indices.len(), 8 * 8 * 6);
    assert_eq!(m.normals.len(), m.vertex_count());
    assert_eq!(m.uvs.len(), m.vertex_count());
}

#[test]
fn sphere_vertices_sit_on_the_unit_sphere() {
    let m = uv_sphere(12, 16);
    for p in &m.positions {
        let len = Vec3::from_array(*p).length();
        assert!((len - 1.0).abs() < 1e-4, "vertex at radius {}", len);
    }
}

#[test]
fn sphere_indices_stay_in_range() {
    let m = uv_sphere(10, 10);
    let count = m.vertex_count() as u32;
    assert!(m.indices.iter().all(|&i| i < count));
}

#[test]
fn marker_disc_is_a_squat_cylinder() {
    let m = marker_disc(MARKER_RADIUS, MARKER_HEIGHT, MARKER_SEGMENTS);
    let half = MARKER_HEIGHT * 0.5;
    for p in &m.positions {
        assert!(p[2].abs() <= half + 1e-5);
        let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
        assert!(r <= MARKER_RADIUS + 1e-5);
    }
    let count = m.vertex_count() as u32;
    assert!(m.indices.iter().all(|&i| i < count));
}

#[test]
fn tube_rings_hug_the_curve() {
    let control = geo::arc_points(&geo::JOURNEY[0], &geo::JOURNEY[1]);
    let centers = geo::catmull_rom(&control, TUBE_SEGMENTS);
    let m = tube(&centers, TUBE_RADIUS, TUBE_RADIAL_SEGMENTS);

    let ring = TUBE_RADIAL_SEGMENTS + 1;
    assert_eq!(m.vertex_count(), centers.len() * ring);
    assert_eq!(m.indices.len(), (centers.len() - 1) * TUBE_RADIAL_SEGMENTS * 6);

    for (i, center) in centers.iter().enumerate() {
        for k in 0..ring {
            let p = Vec3::from_array(m.positions[i * ring + k]);
            let d = (p - *center).length();
            assert!(
                (d - TUBE_RADIUS).abs() < 1e-4,
                "ring {} vertex {} at distance {}",
                i,
                k,
                d
            );
        }
    }
}

#[test]
fn tube_normals_are_radial_unit_vectors() {
    let centers = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::new(2.0, 0.0, 0.5),
    ];
    let m = tube(&centers, 0.1, 6);
    for n in &m.normals {
        let len = Vec3::from_array(*n).length();
        assert!((len - 1.0).abs() < 1e-4);
    }
}

#[test]
fn append_rebases_indices() {
    let mut merged = uv_sphere(4, 4);
    let first_verts = merged.vertex_count() as u32;
    let disc = marker_disc(0.5, 0.1, 6);
    merged.append(&disc);

    assert_eq!(merged.vertex_count(), first_verts as usize + disc.vertex_count());
    let count = merged.vertex_count() as u32;
    assert!(merged.indices.iter().all(|&i| i < count));
    // The appended half must reference only appended vertices.
    let tail = &merged.indices[merged.indices.len() - disc.indices.len()..];
    assert!(tail.iter().all(|&i| i >= first_verts));
}
