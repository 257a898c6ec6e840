//! tabset: tabular datasets for training loops.
//!
//! Wraps feature and target arrays into a validated, indexable dataset with
//! task-appropriate element types, and loads scikit-learn's toy datasets.
//!
//! # Key Types
//!
//! - [`TabularDataset`] - Validated `(features, targets)` container
//! - [`Dataset`] - Indexable, length-reporting interface for batching loops
//! - [`TaskKind`] - Classification (`i64` class indices) or regression (`f32`)
//! - [`Container`] / [`Tensor`] - Accepted input kinds
//!
//! # Toy Datasets
//!
//! Use [`toys::mnist()`] and [`toys::diabetes()`], or the
//! [`toys::ToyDataset`] registry. See the [`toys`] module for where the
//! files are read from.

// Re-export approx traits for users who want to compare converted values
pub use approx;

pub mod data;
pub mod testing;
pub mod toys;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{
    Container, Dataset, DatasetError, Sample, TabularDataset, Target, Targets, TaskKind, Tensor,
};

pub use toys::{diabetes, mnist, ToyDataset, ToyLoadError};
