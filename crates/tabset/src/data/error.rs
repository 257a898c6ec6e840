//! Dataset validation errors.

use std::fmt;

/// Which input of a dataset an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Features,
    Targets,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Features => f.write_str("features"),
            Role::Targets => f.write_str("targets"),
        }
    }
}

/// Dataset conversion/validation errors.
///
/// All of these are raised by the dataset constructors before any data is
/// converted; a dataset is never partially built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("the array dimension of {role} is too high: ndim {ndim}, expected at most 2")]
    DimensionTooHigh { role: Role, ndim: usize },

    #[error("{role} is a scalar (ndim 0) and has no sample axis")]
    MissingSampleAxis { role: Role },

    #[error("features and targets have different numbers of samples: {features} vs {targets}")]
    SampleCountMismatch { features: usize, targets: usize },

    #[error("targets of shape {shape:?} cannot be flattened to one value per sample")]
    MultiOutputTargets { shape: Vec<usize> },

    #[error("task kind must be 'c'/'classification' or 'r'/'regression', got {0:?}")]
    InvalidTaskKind(String),

    #[error("unsupported container type for {role}: {kind} (expected an ndarray or a tensor)")]
    UnsupportedContainerType { role: Role, kind: &'static str },

    #[error("tensor buffer of length {len} does not match shape {shape:?}")]
    TensorShape { len: usize, shape: Vec<usize> },
}
