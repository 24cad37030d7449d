// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let center = Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    let result = ray_sphere(ray_origin, ray_dir, center, radius);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);

    // Ray goes in X, sphere is in Z
    let center = Vec3::new(0.0, 0.0, 5.0);
    let radius = 2.0;

    assert!(ray_sphere(ray_origin, ray_dir, center, radius).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn nearest_hit_picks_the_closest_sphere() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    let centers = vec![
        Vec3::new(0.0, 0.0, 9.0),
        Vec3::new(0.0, 0.0, 4.0),
        Vec3::new(50.0, 0.0, 4.0), // off the ray entirely
    ];
    let hit = nearest_hit(ray_origin, ray_dir, &centers, 1.0);
    let (index, t) = hit.expect("expected a hit");
    assert_eq!(index, 1);
    assert!((t - 3.0).abs() < 1e-4);
}

#[test]
fn nearest_hit_with_no_spheres_on_the_ray() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 1.0, 0.0);

    let centers = vec![Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, -5.0, 0.0)];
    assert!(nearest_hit(ray_origin, ray_dir, &centers, 1.0).is_none());
}

#[test]
fn nearest_hit_on_empty_list() {
    assert!(nearest_hit(Vec3::ZERO, Vec3::Z, &[], 1.0).is_none());
}
