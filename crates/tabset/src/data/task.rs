//! Learning task kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

/// Type of learning task a dataset is prepared for.
///
/// The task decides the element type of the stored targets: class indices
/// (`i64`) for classification, `f32` values for regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskKind {
    /// Classification (integer class-index targets).
    #[default]
    #[serde(rename = "c", alias = "classification")]
    Classification,
    /// Regression (continuous targets).
    #[serde(rename = "r", alias = "regression")]
    Regression,
}

impl TaskKind {
    /// Canonical short form: `"c"` or `"r"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classification => "c",
            Self::Regression => "r",
        }
    }

    /// Returns true if this is a classification task.
    pub fn is_classification(&self) -> bool {
        matches!(self, Self::Classification)
    }

    /// Returns true if this is a regression task.
    pub fn is_regression(&self) -> bool {
        matches!(self, Self::Regression)
    }
}

impl FromStr for TaskKind {
    type Err = DatasetError;

    /// Accepts `"c"`, `"classification"`, `"r"` and `"regression"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "classification" => Ok(Self::Classification),
            "r" | "regression" => Ok(Self::Regression),
            other => Err(DatasetError::InvalidTaskKind(other.to_string())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
