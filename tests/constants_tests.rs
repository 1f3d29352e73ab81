// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::GalleryConfig;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_proper_fraction() {
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert!(ROTATION_RANGE_DEG > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn activation_styles_are_ordered() {
    // Activated tile is the largest, dimmed tiles the smallest
    assert!(ACTIVE_SCALE > NEUTRAL_SCALE);
    assert!(NEUTRAL_SCALE > DIMMED_SCALE);
    assert!(ACTIVE_OPACITY > DIMMED_OPACITY);
    assert!(DIMMED_BLUR_PX > 0.0);
    assert!(ACTIVE_Z_INDEX > DIMMED_Z_INDEX);
}

#[test]
fn activated_tile_stacks_above_any_depth() {
    // The activated tile must sit above every ambient z-index the default sphere can produce
    let radius = GalleryConfig::default().radius;
    assert!(ACTIVE_Z_INDEX as f64 > radius);
}

#[test]
fn ambient_opacity_stays_visible_on_default_sphere() {
    let radius = GalleryConfig::default().radius;
    let back = AMBIENT_OPACITY_BASE - radius / DEPTH_DIVISOR;
    let front = AMBIENT_OPACITY_BASE + radius / DEPTH_DIVISOR;
    assert!(back > 0.0);
    assert!(front <= 1.0);
    assert!(AMBIENT_SCALE_BASE - radius / DEPTH_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(RESET_DURATION_SEC > 0.0);
    assert!(INTRO_FADE_MS > 0);
}
