// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn viewport_offset_center_and_corners() {
    assert_eq!(viewport_offset(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
    assert_eq!(viewport_offset(0.0, 0.0, 800.0, 600.0), [-1.0, -1.0]);
    assert_eq!(viewport_offset(800.0, 600.0, 800.0, 600.0), [1.0, 1.0]);
    assert_eq!(viewport_offset(200.0, 450.0, 800.0, 600.0), [-0.5, 0.5]);
}

#[test]
fn viewport_offset_is_not_clamped() {
    // Events reported outside the viewport map outside [-1, 1]
    let [x, y] = viewport_offset(1200.0, -300.0, 800.0, 600.0);
    assert_eq!(x, 2.0);
    assert_eq!(y, -2.0);
}

#[test]
fn track_only_touches_raw_offset() {
    let mut p = PointerState::default();
    p.track(800.0, 0.0, 800.0, 600.0);
    assert_eq!(p.mouse_x, 1.0);
    assert_eq!(p.mouse_y, -1.0);
    assert_eq!(p.current_x, 0.0);
    assert_eq!(p.current_y, 0.0);
}

#[test]
fn smooth_closes_five_percent_of_the_gap() {
    let mut p = PointerState {
        mouse_x: 1.0,
        mouse_y: -0.5,
        ..PointerState::default()
    };
    p.smooth();
    assert!((p.current_x - 0.05).abs() < 1e-12);
    assert!((p.current_y + 0.025).abs() < 1e-12);
}

#[test]
fn smoothing_decays_geometrically() {
    let mut p = PointerState {
        mouse_x: 1.0,
        mouse_y: 1.0,
        ..PointerState::default()
    };
    for _ in 0..60 {
        p.smooth();
    }
    let gap = 1.0 - p.current_x;
    assert!((gap - 0.95_f64.powi(60)).abs() < 1e-9);
    assert!(gap < 0.05);

    for _ in 60..90 {
        p.smooth();
    }
    assert!((1.0 - p.current_x).abs() < 0.01);
    assert!((1.0 - p.current_y).abs() < 0.01);
}

#[test]
fn smoothing_never_overshoots() {
    let mut p = PointerState {
        mouse_x: -0.8,
        ..PointerState::default()
    };
    let mut prev = p.current_x;
    for _ in 0..200 {
        p.smooth();
        assert!(p.current_x <= prev);
        assert!(p.current_x >= -0.8);
        prev = p.current_x;
    }
}

#[test]
fn smooth_toward_fixed_point() {
    assert_eq!(smooth_toward(0.3, 0.3, 0.05), 0.3);
    assert_eq!(smooth_toward(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smooth_toward(0.0, 1.0, 0.0), 0.0);
}
