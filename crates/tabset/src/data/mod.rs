//! Tabular datasets for training loops.
//!
//! # Overview
//!
//! [`TabularDataset`] validates a `(features, targets, task)` triple once and
//! then serves `(features, target)` pairs through the [`Dataset`] trait.
//!
//! # Inputs
//!
//! Features and targets are passed as anything convertible into a
//! [`Container`]: owned [`ndarray`] arrays or views of `f32`, `f64`, `i32`,
//! `i64` or `u8`, or a [`Tensor`]. Both must have rank 1 or 2 and the same
//! number of samples along the first axis.
//!
//! # Element Types
//!
//! Features are stored as `f32`. Targets are flattened to one entry per
//! sample and stored as `i64` class indices for [`TaskKind::Classification`]
//! or `f32` values for [`TaskKind::Regression`].

mod container;
mod dataset;
mod error;
mod task;
mod tensor;

pub use container::{Container, DType, Element, NumericArray};
pub use dataset::{Dataset, Sample, TabularDataset, Target, Targets};
pub use error::{DatasetError, Role};
pub use task::TaskKind;
pub use tensor::{Tensor, TensorData};
