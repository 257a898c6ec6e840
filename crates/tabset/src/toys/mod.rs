//! Built-in toy datasets.
//!
//! Two named datasets, wrapped in a [`TabularDataset`] with a fixed task:
//!
//! - [`mnist()`]: 8x8 handwritten digits (1797 samples, 64 features), classification
//! - [`diabetes()`]: diabetes progression (442 samples, 10 features), regression
//!
//! The raw arrays come from a [`ToySource`]. The free functions use
//! [`DataHome::from_env`]; the `*_from` variants and [`ToyDataset::load_from`]
//! take an explicit source. Source failures propagate unchanged.
//!
//! # Example
//!
//! ```no_run
//! use tabset::data::Dataset;
//! use tabset::toys::{self, DataHome, ToyDataset};
//!
//! let digits = toys::mnist().unwrap();
//! assert_eq!(digits.task().as_str(), "c");
//!
//! let home = DataHome::new("/srv/tabset");
//! let diabetes = ToyDataset::Diabetes.load_from(&home).unwrap();
//! assert_eq!(diabetes.len(), 442);
//! ```

mod error;
mod source;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{TabularDataset, TaskKind};

pub use error::{ConfigError, ToyLoadError};
pub use source::{
    DataHome, DataHomeBuilder, ToyArrays, ToySource, DATA_HOME_ENV, DIABETES_DATA_FILE,
    DIABETES_N_FEATURES, DIABETES_TARGET_FILE, DIGITS_FILE, DIGITS_N_FEATURES,
};

/// Named toy datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToyDataset {
    /// Handwritten digits; also known as `"mnist"`.
    #[serde(alias = "mnist")]
    Digits,
    Diabetes,
}

impl ToyDataset {
    pub const ALL: [ToyDataset; 2] = [ToyDataset::Digits, ToyDataset::Diabetes];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Digits => "digits",
            Self::Diabetes => "diabetes",
        }
    }

    /// Task the dataset is loaded for.
    pub fn task(&self) -> TaskKind {
        match self {
            Self::Digits => TaskKind::Classification,
            Self::Diabetes => TaskKind::Regression,
        }
    }

    /// Sample count of the standard files.
    pub fn n_samples(&self) -> usize {
        match self {
            Self::Digits => 1797,
            Self::Diabetes => 442,
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            Self::Digits => DIGITS_N_FEATURES,
            Self::Diabetes => DIABETES_N_FEATURES,
        }
    }

    /// Fetch the raw arrays from `source`.
    pub fn fetch<S: ToySource + ?Sized>(&self, source: &S) -> Result<ToyArrays, ToyLoadError> {
        match self {
            Self::Digits => source.load_digits(),
            Self::Diabetes => source.load_diabetes(),
        }
    }

    /// Fetch from `source` and wrap in a dataset with this dataset's task.
    pub fn load_from<S: ToySource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<TabularDataset, ToyLoadError> {
        let dataset = self.fetch(source)?.into_dataset(self.task())?;
        tracing::info!(
            dataset = self.name(),
            n_samples = dataset.n_samples(),
            n_features = dataset.n_features(),
            "loaded toy dataset"
        );
        Ok(dataset)
    }

    /// Load from the data home resolved from the environment.
    pub fn load(&self) -> Result<TabularDataset, ToyLoadError> {
        self.load_from(&DataHome::from_env())
    }
}

impl FromStr for ToyDataset {
    type Err = ToyLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digits" | "mnist" => Ok(Self::Digits),
            "diabetes" => Ok(Self::Diabetes),
            other => Err(ToyLoadError::UnknownDataset(other.to_string())),
        }
    }
}

impl fmt::Display for ToyDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handwritten digits as a classification dataset.
pub fn mnist() -> Result<TabularDataset, ToyLoadError> {
    ToyDataset::Digits.load()
}

/// Diabetes progression as a regression dataset.
pub fn diabetes() -> Result<TabularDataset, ToyLoadError> {
    ToyDataset::Diabetes.load()
}

/// [`mnist()`] with an explicit source.
pub fn mnist_from<S: ToySource + ?Sized>(source: &S) -> Result<TabularDataset, ToyLoadError> {
    ToyDataset::Digits.load_from(source)
}

/// [`diabetes()`] with an explicit source.
pub fn diabetes_from<S: ToySource + ?Sized>(source: &S) -> Result<TabularDataset, ToyLoadError> {
    ToyDataset::Diabetes.load_from(source)
}
