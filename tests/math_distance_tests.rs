#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use gridprice::internals::math::distance::{delta, delta_squared, scalar};

// ============================================================================
// Weighted Distance Tests
// ============================================================================

#[test]
fn test_delta_unit_scale() {
    let x = [0.0, 0.0];
    let y = [3.0, 4.0];
    assert_relative_eq!(delta(&x, &y, &[1.0, 1.0]), 5.0);
}

#[test]
fn test_delta_divides_by_scale() {
    // (2² / 4) + (4² / 16) = 1 + 1
    let x = [0.0, 0.0];
    let y = [2.0, 4.0];
    assert_relative_eq!(delta(&x, &y, &[4.0, 16.0]), 2.0f64.sqrt());
}

#[test]
fn test_delta_squared_skips_root() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 4.0, 6.0, 8.0];
    let scale = [1.0, 2.0, 3.0, 4.0];
    // 1/1 + 4/2 + 9/3 + 16/4 = 10
    assert_relative_eq!(delta_squared(&x, &y, &scale), 10.0);
    assert_relative_eq!(delta(&x, &y, &scale), 10.0f64.sqrt());
}

#[test]
fn test_delta_identity_is_zero() {
    let x = [2.0, 2.0, 16.0, 1024.0];
    for scale in [[1.0; 4], [0.5, 3.0, 100.0, 1e-6], [0.0, 1.0, 0.0, 7.0]] {
        assert_eq!(delta(&x, &x, &scale), 0.0);
    }
}

#[test]
fn test_delta_ignores_non_positive_scale() {
    let x = [0.0, 0.0, 0.0];
    let y = [3.0, 100.0, -50.0];
    // Only the first dimension has a positive scale.
    assert_relative_eq!(delta(&x, &y, &[1.0, 0.0, -1.0]), 3.0);
}

#[test]
fn test_delta_all_dimensions_disabled() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [9.0, 8.0, 7.0, 6.0];
    assert_eq!(delta(&x, &y, &[0.0; 4]), 0.0);
}

// ============================================================================
// Ragged Input Tests
// ============================================================================

#[test]
fn test_delta_tail_of_longer_x() {
    // Matched prefix contributes nothing; tail x[2]² / 1 = 9
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 2.0];
    assert_relative_eq!(delta(&x, &y, &[1.0, 1.0, 1.0]), 3.0);
}

#[test]
fn test_delta_tail_of_longer_y() {
    // Tail: 2² / 1 + 2² / 4 = 5
    let x = [1.0];
    let y = [1.0, 2.0, 2.0];
    assert_relative_eq!(delta(&x, &y, &[1.0, 1.0, 4.0]), 5.0f64.sqrt());
}

#[test]
fn test_delta_tail_stops_at_scale_length() {
    // Only index 1 of the tail lies within the scale.
    let x = [1.0, 2.0, 3.0];
    let y = [1.0];
    assert_relative_eq!(delta(&x, &y, &[1.0, 1.0]), 2.0);
}

#[test]
fn test_delta_tail_respects_positivity_guard() {
    let x = [0.0, 5.0];
    let y = [0.0];
    assert_eq!(delta(&x, &y, &[1.0, 0.0]), 0.0);
}

#[test]
fn test_delta_short_scale_truncates_prefix() {
    let x = [1.0, 10.0];
    let y = [4.0, 20.0];
    assert_relative_eq!(delta(&x, &y, &[1.0]), 3.0);
}

#[test]
fn test_delta_symmetric() {
    let x = [1.0, 7.0, 3.0, 12.0];
    let y = [4.0, 2.0, 8.0, 1.0];
    let scale = [2.0, 0.0, 5.0, 9.0];
    assert_eq!(delta(&x, &y, &scale), delta(&y, &x, &scale));
}

// ============================================================================
// Weighted Inner Product Tests
// ============================================================================

#[test]
fn test_scalar_unit_scale() {
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 5.0, 6.0];
    assert_relative_eq!(scalar(&x, &y, &[1.0, 1.0, 1.0]), 32.0);
}

#[test]
fn test_scalar_divides_by_scale() {
    // 4/2 + 10/5 + 18/3
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 5.0, 6.0];
    assert_relative_eq!(scalar(&x, &y, &[2.0, 5.0, 3.0]), 10.0);
}

#[test]
fn test_scalar_matched_prefix_only() {
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 2.0];
    assert_relative_eq!(scalar(&x, &y, &[1.0, 1.0, 1.0]), 5.0);
}

#[test]
fn test_scalar_ignores_non_positive_scale() {
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 5.0, 6.0];
    assert_relative_eq!(scalar(&x, &y, &[1.0, 0.0, -1.0]), 4.0);
}

#[test]
fn test_scalar_symmetric() {
    let x = [0.3, -1.7, 2.9, 4.1];
    let y = [5.5, 0.2, -3.3, 1.0];
    let scale = [0.7, 1.3, 2.0, 0.0];
    assert_eq!(scalar(&x, &y, &scale), scalar(&y, &x, &scale));
}

#[test]
fn test_scalar_self_is_squared_delta_from_origin() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let origin = [0.0; 4];
    let scale = [1.0, 4.0, 9.0, 0.0];
    assert_relative_eq!(scalar(&x, &x, &scale), delta_squared(&x, &origin, &scale));
}
