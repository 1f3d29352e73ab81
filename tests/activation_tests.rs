// Host-side tests for the activation state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod activation {
    include!("../src/activation.rs");
}

use activation::*;

#[test]
fn starts_idle() {
    let a = Activation::default();
    assert_eq!(a, Activation::Idle);
    assert_eq!(a.active(), None);
    assert!(!a.is_active(0));
}

#[test]
fn tile_click_toggles() {
    let mut a = Activation::Idle;
    assert_eq!(a.click_tile(4), ClickOutcome::Activated(4));
    assert!(a.is_active(4));
    assert_eq!(a.active(), Some(4));
    assert_eq!(a.click_tile(4), ClickOutcome::Deactivated(4));
    assert_eq!(a, Activation::Idle);
}

#[test]
fn other_tile_click_is_a_no_op_while_active() {
    let mut a = Activation::Active(2);
    assert_eq!(a.click_tile(9), ClickOutcome::Unchanged);
    assert_eq!(a, Activation::Active(2));
    assert!(!a.is_active(9));
}

#[test]
fn outside_click() {
    let mut a = Activation::Idle;
    assert_eq!(a.click_outside(), ClickOutcome::Unchanged);
    assert_eq!(a, Activation::Idle);

    let mut a = Activation::Active(7);
    assert_eq!(a.click_outside(), ClickOutcome::Deactivated(7));
    assert_eq!(a, Activation::Idle);
}

#[test]
fn reactivation_after_release() {
    let mut a = Activation::Idle;
    a.click_tile(1);
    a.click_outside();
    assert_eq!(a.click_tile(3), ClickOutcome::Activated(3));
    assert_eq!(a.active(), Some(3));
}
