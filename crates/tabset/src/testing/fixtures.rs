//! Synthetic stand-ins for the toy datasets.
//!
//! The generated arrays have the shapes and value ranges of the real files
//! but random content. Digit labels cycle through `0..10` so class
//! filtering is predictable.

use std::fs::File;
use std::io;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::toys::{
    ToyArrays, ToyLoadError, ToySource, DIABETES_DATA_FILE, DIABETES_N_FEATURES,
    DIABETES_TARGET_FILE, DIGITS_FILE, DIGITS_N_FEATURES,
};

/// Random digit images: pixels in `0..=16`, label `i % 10` for row `i`.
pub fn synthetic_digits(rows: usize, seed: u64) -> (Array2<f64>, Array1<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = Array2::from_shape_fn((rows, DIGITS_N_FEATURES), |_| {
        f64::from(rng.gen_range(0u8..=16))
    });
    let labels = (0..rows).map(|i| (i % 10) as i64).collect();
    (data, labels)
}

/// Random raw diabetes rows and targets in the ranges of the real data.
pub fn synthetic_diabetes(rows: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = Array2::from_shape_fn((rows, DIABETES_N_FEATURES), |(_, col)| match col {
        0 => f64::from(rng.gen_range(19u8..=79)),
        1 => f64::from(rng.gen_range(1u8..=2)),
        _ => (rng.gen_range(20.0..300.0f64) * 100.0).round() / 100.0,
    });
    let target = (0..rows)
        .map(|_| f64::from(rng.gen_range(25u16..=346)))
        .collect();
    (data, target)
}

/// Write `digits.csv.gz` with `rows` synthetic images into `dir`.
pub fn write_digits_fixture(dir: &Path, rows: usize, seed: u64) -> io::Result<()> {
    let (data, labels) = synthetic_digits(rows, seed);
    let records = data.outer_iter().zip(labels.iter()).map(|(row, label)| {
        row.iter()
            .map(|v| format!("{v:.1}"))
            .chain(std::iter::once(format!("{label}.0")))
            .collect::<Vec<_>>()
    });
    write_gz_records(&dir.join(DIGITS_FILE), b',', records)
}

/// Write the two diabetes files with `rows` synthetic samples into `dir`.
pub fn write_diabetes_fixture(dir: &Path, rows: usize, seed: u64) -> io::Result<()> {
    let (data, target) = synthetic_diabetes(rows, seed);
    let records = data
        .outer_iter()
        .map(|row| row.iter().map(f64::to_string).collect::<Vec<_>>());
    write_gz_records(&dir.join(DIABETES_DATA_FILE), b' ', records)?;

    let targets = target.iter().map(|v| vec![format!("{v:.1}")]);
    write_gz_records(&dir.join(DIABETES_TARGET_FILE), b' ', targets)
}

fn write_gz_records<I>(path: &Path, delimiter: u8, records: I) -> io::Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(GzEncoder::new(file, Compression::default()));
    for record in records {
        writer.write_record(&record)?;
    }
    let encoder = writer.into_inner().map_err(|e| e.into_error())?;
    encoder.finish()?;
    Ok(())
}

/// In-memory [`ToySource`] returning fixed arrays.
#[derive(Debug, Clone)]
pub struct StaticSource {
    pub digits: ToyArrays,
    pub diabetes: ToyArrays,
}

impl StaticSource {
    /// Synthetic arrays with the sample counts of the real datasets.
    pub fn synthetic(seed: u64) -> Self {
        let (data, target) = synthetic_digits(1797, seed);
        let digits = ToyArrays {
            data,
            target: target.into(),
        };
        let (data, target) = synthetic_diabetes(442, seed);
        let diabetes = ToyArrays {
            data,
            target: target.into(),
        };
        Self { digits, diabetes }
    }
}

impl ToySource for StaticSource {
    fn load_digits(&self) -> Result<ToyArrays, ToyLoadError> {
        Ok(self.digits.clone())
    }

    fn load_diabetes(&self) -> Result<ToyArrays, ToyLoadError> {
        Ok(self.diabetes.clone())
    }
}
