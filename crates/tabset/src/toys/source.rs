//! Toy dataset sources.
//!
//! A [`ToySource`] hands out the raw arrays of a toy dataset: a 2-D feature
//! matrix and a 1-D target array. [`DataHome`] reads them from the gzip CSV
//! files scikit-learn ships:
//!
//! | File                        | Format                                     |
//! |-----------------------------|--------------------------------------------|
//! | `digits.csv.gz`             | comma-separated, 64 pixels + class label    |
//! | `diabetes_data_raw.csv.gz`  | whitespace-separated, 10 features          |
//! | `diabetes_target.csv.gz`    | one target per line                        |

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use bon::Builder;
use flate2::read::GzDecoder;
use ndarray::{s, Array1, Array2, Axis};

use super::error::{ConfigError, ToyLoadError};
use crate::data::{DatasetError, NumericArray, TabularDataset, TaskKind};

/// Environment variable overriding the default data home.
pub const DATA_HOME_ENV: &str = "TABSET_DATA";

pub const DIGITS_FILE: &str = "digits.csv.gz";
pub const DIABETES_DATA_FILE: &str = "diabetes_data_raw.csv.gz";
pub const DIABETES_TARGET_FILE: &str = "diabetes_target.csv.gz";

/// Pixels per 8x8 digit image.
pub const DIGITS_N_FEATURES: usize = 64;
pub const DIABETES_N_FEATURES: usize = 10;

// =============================================================================
// ToySource
// =============================================================================

/// Raw arrays of a toy dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ToyArrays {
    /// Feature matrix `[n_samples, n_features]`.
    pub data: Array2<f64>,
    /// Targets, one per sample.
    pub target: NumericArray,
}

impl ToyArrays {
    /// Wrap the arrays in a [`TabularDataset`] for `task`.
    pub fn into_dataset(self, task: TaskKind) -> Result<TabularDataset, DatasetError> {
        TabularDataset::new(self.data, self.target, task)
    }
}

/// Provider of the built-in toy datasets.
pub trait ToySource {
    /// 8x8 handwritten digit images with class labels.
    fn load_digits(&self) -> Result<ToyArrays, ToyLoadError>;

    /// Diabetes progression regression data.
    fn load_diabetes(&self) -> Result<ToyArrays, ToyLoadError>;
}

// =============================================================================
// DataHome
// =============================================================================

/// Directory holding the toy dataset files.
///
/// # Example
///
/// ```
/// use tabset::toys::DataHome;
///
/// let home = DataHome::builder()
///     .root("/srv/tabset")
///     .digits_n_class(5)
///     .build()
///     .unwrap();
/// assert_eq!(home.digits_n_class(), 5);
/// assert!(home.diabetes_scaled());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct DataHome {
    /// Directory containing the dataset files.
    #[builder(into)]
    root: PathBuf,

    /// Keep only digits with a class in `0..digits_n_class`. Default: 10 (all).
    #[builder(default = 10)]
    digits_n_class: u8,

    /// Center and scale every diabetes feature column to unit L2 norm.
    /// Default: true.
    #[builder(default = true)]
    diabetes_scaled: bool,
}

impl<S: data_home_builder::IsComplete> DataHomeBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidNClass`] if `digits_n_class` is not in `1..=10`.
    pub fn build(self) -> Result<DataHome, ConfigError> {
        let home = self.__build_internal();
        home.validate()?;
        Ok(home)
    }
}

impl DataHome {
    /// Data home at `root` with default options.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            digits_n_class: 10,
            diabetes_scaled: true,
        }
    }

    /// Data home resolved from the environment.
    ///
    /// Uses `$TABSET_DATA` if set, else `$HOME/tabset_data`, else
    /// `./tabset_data`.
    pub fn from_env() -> Self {
        Self::new(default_root())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=10).contains(&self.digits_n_class) {
            return Err(ConfigError::InvalidNClass(self.digits_n_class));
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn digits_n_class(&self) -> u8 {
        self.digits_n_class
    }

    pub fn diabetes_scaled(&self) -> bool {
        self.diabetes_scaled
    }
}

fn default_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_HOME_ENV) {
        return PathBuf::from(dir);
    }
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join("tabset_data"),
        None => PathBuf::from("tabset_data"),
    }
}

impl ToySource for DataHome {
    fn load_digits(&self) -> Result<ToyArrays, ToyLoadError> {
        let path = self.root.join(DIGITS_FILE);
        let table = read_table(&path, b',', DIGITS_N_FEATURES + 1)?;

        let n_class = i64::from(self.digits_n_class);
        let labels = table.column(DIGITS_N_FEATURES);
        let keep: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| (0..n_class).contains(&(label as i64)))
            .map(|(i, _)| i)
            .collect();

        let data = table
            .select(Axis(0), &keep)
            .slice(s![.., ..DIGITS_N_FEATURES])
            .to_owned();
        let target: Array1<i64> = keep.iter().map(|&i| labels[i] as i64).collect();

        Ok(ToyArrays {
            data,
            target: target.into(),
        })
    }

    fn load_diabetes(&self) -> Result<ToyArrays, ToyLoadError> {
        let mut data = read_table(&self.root.join(DIABETES_DATA_FILE), b' ', DIABETES_N_FEATURES)?;
        let target = read_table(&self.root.join(DIABETES_TARGET_FILE), b' ', 1)?;

        if data.nrows() != target.nrows() {
            return Err(ToyLoadError::RowCountMismatch {
                data: data.nrows(),
                target: target.nrows(),
            });
        }

        if self.diabetes_scaled {
            scale_columns(&mut data);
        }

        let target: Array1<f64> = target.column(0).to_owned();
        Ok(ToyArrays {
            data,
            target: target.into(),
        })
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Read a gzip-compressed delimited file into a `[rows, n_cols]` matrix.
///
/// Runs of the delimiter count as one separator.
fn read_table(path: &Path, delimiter: u8, n_cols: usize) -> Result<Array2<f64>, ToyLoadError> {
    let file = File::open(path).map_err(|source| ToyLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(GzDecoder::new(file));

    let mut values = Vec::new();
    let mut n_rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| ToyLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |reason: String| ToyLoadError::Malformed {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let start = values.len();
        for field in record.iter().filter(|f| !f.is_empty()) {
            let value = field
                .parse::<f64>()
                .map_err(|e| malformed(format!("invalid number {field:?}: {e}")))?;
            values.push(value);
        }
        match values.len() - start {
            0 => continue,
            n if n == n_cols => n_rows += 1,
            n => return Err(malformed(format!("expected {n_cols} columns, found {n}"))),
        }
    }

    tracing::debug!(path = %path.display(), n_rows, n_cols, "read toy dataset file");

    Array2::from_shape_vec((n_rows, n_cols), values).map_err(|e| ToyLoadError::Malformed {
        path: path.to_path_buf(),
        line: 0,
        reason: e.to_string(),
    })
}

/// Center each column, divide by its population standard deviation (when
/// non-zero), then by `sqrt(n_rows)`.
fn scale_columns(data: &mut Array2<f64>) {
    let n_rows = data.nrows();
    if n_rows == 0 {
        return;
    }
    let norm = (n_rows as f64).sqrt();
    for mut col in data.columns_mut() {
        let mean = col.mean().unwrap_or(0.0);
        col.mapv_inplace(|v| v - mean);
        let std = col.std(0.0);
        let scale = if std > 0.0 { std * norm } else { norm };
        col.mapv_inplace(|v| v / scale);
    }
}
