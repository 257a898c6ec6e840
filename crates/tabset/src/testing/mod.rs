//! Testing utilities for tabset.
//!
//! Assertion helpers plus fixtures that stand in for the toy dataset files,
//! usable from both unit and integration tests.
//!
//! ```ignore
//! use tabset::testing::{assert_slice_approx_eq, write_digits_fixture, DEFAULT_TOLERANCE};
//! ```

mod fixtures;

pub use fixtures::{
    synthetic_diabetes, synthetic_digits, write_diabetes_fixture, write_digits_fixture,
    StaticSource,
};

use approx::AbsDiffEq;

use crate::data::{TabularDataset, Targets};

/// Default tolerance for `f32` comparisons of values around O(1).
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Assert that two `f32` slices are approximately equal element-wise.
///
/// # Panics
///
/// If lengths differ or any element differs by more than `tolerance`.
pub fn assert_slice_approx_eq(actual: &[f32], expected: &[f32], tolerance: f32, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.abs_diff_eq(e, tolerance),
            "{context}[{i}]: {a} ≠ {e} (diff={}, tolerance={tolerance})",
            (a - e).abs()
        );
    }
}

/// Assert that a regression dataset holds `expected` as its targets.
///
/// `expected` is `f64` since that is what test inputs are usually built from.
///
/// # Panics
///
/// If the dataset holds class indices or any value differs by more than
/// `tolerance` after rounding `expected` to `f32`.
pub fn assert_regression_targets(ds: &TabularDataset, expected: &[f64], tolerance: f32) {
    let Targets::Values(values) = ds.targets() else {
        panic!("expected regression targets, dataset task is {}", ds.task());
    };
    let expected: Vec<f32> = expected.iter().map(|&v| v as f32).collect();
    let actual = values.to_vec();
    assert_slice_approx_eq(&actual, &expected, tolerance, "targets");
}
