//! Tabular dataset container.
//!
//! [`TabularDataset`] pairs a feature array with one target per sample and
//! serves `(features, target)` pairs by index to a batching loop.

use ndarray::{Array1, ArrayD, ArrayViewD, Axis};

use super::container::{Container, NumericArray};
use super::error::{DatasetError, Role};
use super::task::TaskKind;

// =============================================================================
// Dataset trait
// =============================================================================

/// An indexable, length-reporting collection of samples.
///
/// This is the interface a batching or training loop consumes.
pub trait Dataset {
    /// A single sample.
    type Item<'a>
    where
        Self: 'a;

    /// Number of samples.
    fn len(&self) -> usize;

    /// Returns true if the dataset has no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<Self::Item<'_>>;
}

// =============================================================================
// Targets
// =============================================================================

/// Stored targets, one per sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets {
    /// Class indices (classification).
    Classes(Array1<i64>),
    /// Continuous values (regression).
    Values(Array1<f32>),
}

impl Targets {
    /// Number of targets.
    pub fn len(&self) -> usize {
        match self {
            Targets::Classes(t) => t.len(),
            Targets::Values(t) => t.len(),
        }
    }

    /// Returns true if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Target of one sample.
    pub fn get(&self, index: usize) -> Option<Target> {
        match self {
            Targets::Classes(t) => t.get(index).copied().map(Target::Class),
            Targets::Values(t) => t.get(index).copied().map(Target::Value),
        }
    }

    /// Class indices, if these are classification targets.
    pub fn as_classes(&self) -> Option<&Array1<i64>> {
        match self {
            Targets::Classes(t) => Some(t),
            Targets::Values(_) => None,
        }
    }

    /// Continuous values, if these are regression targets.
    pub fn as_values(&self) -> Option<&Array1<f32>> {
        match self {
            Targets::Values(t) => Some(t),
            Targets::Classes(_) => None,
        }
    }
}

/// Target of a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Class(i64),
    Value(f32),
}

/// A `(features, target)` pair.
///
/// The feature view has one dimension less than the dataset's feature array:
/// a row for 2-D features, a scalar for 1-D features.
pub type Sample<'a> = (ArrayViewD<'a, f32>, Target);

// =============================================================================
// TabularDataset
// =============================================================================

/// Features and targets validated and converted for a learning task.
///
/// # Storage
///
/// - Features: `f32`, shape unchanged from the input (rank 1 or 2,
///   `[n_samples, n_features]` in practice).
/// - Targets: flattened to one entry per sample; `i64` class indices for
///   [`TaskKind::Classification`], `f32` for [`TaskKind::Regression`].
///
/// The dataset owns its storage. Owned inputs are moved in (an `f32`
/// feature array without a copy); views are copied on conversion into a
/// [`Container`]. It is immutable after construction.
///
/// # Example
///
/// ```
/// use tabset::data::{Dataset, TabularDataset, Target, TaskKind};
/// use ndarray::array;
///
/// let x = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let y = array![0i64, 1, 0];
/// let ds = TabularDataset::new(x, y, TaskKind::Classification).unwrap();
///
/// assert_eq!(ds.len(), 3);
/// let (row, target) = ds.get(1).unwrap();
/// assert_eq!(row.as_slice().unwrap(), &[3.0, 4.0]);
/// assert_eq!(target, Target::Class(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    features: ArrayD<f32>,
    targets: Targets,
    task: TaskKind,
}

impl TabularDataset {
    /// Validate and convert features and targets for `task`.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::UnsupportedContainerType`]: an input is a plain list
    /// - [`DatasetError::DimensionTooHigh`]: an input has more than 2 dimensions
    /// - [`DatasetError::MissingSampleAxis`]: an input is a scalar
    /// - [`DatasetError::SampleCountMismatch`]: first dimensions differ
    /// - [`DatasetError::MultiOutputTargets`]: 2-D targets with more than one column
    pub fn new(
        features: impl Into<Container>,
        targets: impl Into<Container>,
        task: TaskKind,
    ) -> Result<Self, DatasetError> {
        let features = features.into();
        let targets = targets.into();

        let n_samples = validate(&features, &targets)?;

        let features = features.into_numeric(Role::Features)?.into_f32();
        let targets = convert_targets(targets.into_numeric(Role::Targets)?, task);
        debug_assert_eq!(targets.len(), n_samples);

        tracing::debug!(
            n_samples,
            features_shape = ?features.shape(),
            task = %task,
            "built tabular dataset"
        );

        Ok(Self {
            features,
            targets,
            task,
        })
    }

    /// Like [`new`](Self::new), with the task given by its spelling
    /// (`"c"`, `"classification"`, `"r"` or `"regression"`).
    ///
    /// # Errors
    ///
    /// [`DatasetError::InvalidTaskKind`] for any other spelling, before the
    /// inputs are looked at; otherwise the errors of [`new`](Self::new).
    pub fn with_kind(
        features: impl Into<Container>,
        targets: impl Into<Container>,
        kind: &str,
    ) -> Result<Self, DatasetError> {
        let task = kind.parse()?;
        Self::new(features, targets, task)
    }

    /// Classification dataset (the default task).
    pub fn classification(
        features: impl Into<Container>,
        targets: impl Into<Container>,
    ) -> Result<Self, DatasetError> {
        Self::new(features, targets, TaskKind::Classification)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.len_of(Axis(0))
    }

    /// Number of features per sample (1 for one-dimensional features).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.shape()[1..].iter().product()
    }

    #[inline]
    pub fn task(&self) -> TaskKind {
        self.task
    }

    /// Feature array, `f32`, in the input shape.
    pub fn features(&self) -> &ArrayD<f32> {
        &self.features
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Sample at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.n_samples()`.
    pub fn sample(&self, index: usize) -> Sample<'_> {
        let features = self.features.index_axis(Axis(0), index);
        let target = match &self.targets {
            Targets::Classes(t) => Target::Class(t[index]),
            Targets::Values(t) => Target::Value(t[index]),
        };
        (features, target)
    }

    /// Iterate over all samples in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample<'_>> + '_ {
        (0..self.n_samples()).map(|i| self.sample(i))
    }
}

impl Dataset for TabularDataset {
    type Item<'a> = Sample<'a>;

    fn len(&self) -> usize {
        self.n_samples()
    }

    fn get(&self, index: usize) -> Option<Sample<'_>> {
        (index < self.n_samples()).then(|| self.sample(index))
    }
}

// =============================================================================
// Validation and conversion
// =============================================================================

/// Check both inputs before any conversion. Returns the sample count.
fn validate(features: &Container, targets: &Container) -> Result<usize, DatasetError> {
    let features_shape = sample_shape(features, Role::Features)?;
    let targets_shape = sample_shape(targets, Role::Targets)?;

    let n_samples = features_shape[0];
    if targets_shape[0] != n_samples {
        return Err(DatasetError::SampleCountMismatch {
            features: n_samples,
            targets: targets_shape[0],
        });
    }

    if targets_shape.len() == 2 && targets_shape[1] != 1 {
        return Err(DatasetError::MultiOutputTargets {
            shape: targets_shape.to_vec(),
        });
    }

    Ok(n_samples)
}

/// Shape of an accepted input with rank 1 or 2.
fn sample_shape(container: &Container, role: Role) -> Result<&[usize], DatasetError> {
    let shape = container
        .shape()
        .ok_or(DatasetError::UnsupportedContainerType {
            role,
            kind: container.kind(),
        })?;
    match shape.len() {
        0 => Err(DatasetError::MissingSampleAxis { role }),
        1 | 2 => Ok(shape),
        ndim => Err(DatasetError::DimensionTooHigh { role, ndim }),
    }
}

/// Flatten targets to one entry per sample in the task's element type.
fn convert_targets(targets: NumericArray, task: TaskKind) -> Targets {
    match task {
        TaskKind::Regression => Targets::Values(flatten(targets.into_f32())),
        TaskKind::Classification => Targets::Classes(flatten(targets.into_i64())),
    }
}

fn flatten<T: Copy>(array: ArrayD<T>) -> Array1<T> {
    array.iter().copied().collect()
}
