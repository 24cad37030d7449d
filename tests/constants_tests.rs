// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn shells_are_ordered_inside_out() {
    assert!(WATER_RADIUS < GLOBE_RADIUS);
    assert!(GLOBE_RADIUS < MARKER_ALTITUDE);
    assert!(MARKER_ALTITUDE < ATMOSPHERE_RADIUS);
    assert!(ATMOSPHERE_RADIUS < CLOUDS_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn arc_parameters_are_sane() {
    assert!(ARC_SAMPLES >= 3);
    assert!(ARC_BULGE > 0.0);
    assert!(TUBE_SEGMENTS >= ARC_SAMPLES);
    assert!(TUBE_RADIAL_SEGMENTS >= 3);
    assert!(TUBE_RADIUS > 0.0 && TUBE_RADIUS < MARKER_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_tuning_is_consistent() {
    assert!(HOVER_SCALE > 1.0);
    assert!(HOVER_RISE_TAU_SEC > 0.0);
    assert!(HOVER_FALL_TAU_SEC > 0.0);
    // Cards linger: fall is slower than rise.
    assert!(HOVER_FALL_TAU_SEC > HOVER_RISE_TAU_SEC);
    // Picking is more forgiving than the marker's visual footprint.
    assert!(PICK_RADIUS > MARKER_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_limits_contain_the_initial_placement() {
    assert!(CAMERA_DISTANCE_MIN < CAMERA_DISTANCE_MAX);
    let initial = (CAMERA_INITIAL_EYE - CAMERA_FOCUS).length();
    assert!(initial > CAMERA_DISTANCE_MIN && initial < CAMERA_DISTANCE_MAX);
    assert!(CAMERA_FOV_Y > 0.0 && CAMERA_FOV_Y < std::f32::consts::PI);
    assert!(PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_TAU_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotation_and_display_tuning() {
    assert!(BASE_ANGULAR_VEL > 0.0);
    assert!(GLOBE_SPIN_FACTOR > 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(ATMOSPHERE_ALPHA > 0.0 && ATMOSPHERE_ALPHA <= 1.0);
}
