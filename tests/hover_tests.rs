// Host-side tests for the hover easing behavior.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod anim {
    include!("../src/anim.rs");
}

use anim::*;
use constants::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn ease_toward_never_overshoots() {
    let mut v = 0.0_f32;
    for _ in 0..600 {
        let next = ease_toward(v, 1.0, DT, HOVER_RISE_TAU_SEC);
        assert!(next <= 1.0 + 1e-6);
        assert!(next >= v);
        v = next;
    }
    assert!((v - 1.0).abs() < 1e-3);
}

#[test]
fn hover_scale_rises_monotonically_toward_target() {
    let mut anim = HoverAnim::default();
    let mut prev_scale = anim.scale;
    let mut prev_opacity = anim.opacity;
    for _ in 0..600 {
        anim.step(true, DT);
        assert!(anim.scale >= prev_scale);
        assert!(anim.scale <= HOVER_SCALE + 1e-6);
        assert!(anim.opacity >= prev_opacity);
        assert!(anim.opacity <= 1.0 + 1e-6);
        prev_scale = anim.scale;
        prev_opacity = anim.opacity;
    }
    assert!((anim.scale - HOVER_SCALE).abs() < 1e-2);
    assert!((anim.opacity - 1.0).abs() < 1e-2);
}

#[test]
fn losing_hover_resets_toward_baseline() {
    let mut anim = HoverAnim::default();
    for _ in 0..300 {
        anim.step(true, DT);
    }
    let mut prev_scale = anim.scale;
    for _ in 0..600 {
        anim.step(false, DT);
        assert!(anim.scale <= prev_scale);
        assert!(anim.scale >= 1.0 - 1e-6);
        prev_scale = anim.scale;
    }
    assert!((anim.scale - 1.0).abs() < 1e-2);
    assert!(anim.opacity < 1e-2);
}

#[test]
fn easing_is_stable_for_large_steps() {
    // A hitchy frame (huge dt) must still land inside the valid range.
    let mut anim = HoverAnim::default();
    anim.step(true, 5.0);
    assert!(anim.scale > 1.0 && anim.scale <= HOVER_SCALE + 1e-6);
    assert!(anim.opacity > 0.0 && anim.opacity <= 1.0 + 1e-6);
}
