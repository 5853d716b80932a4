use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReferencePValue {
    pub t: f32,
    pub df: f32,
    pub p_value: f64,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Read high-precision p-values from a CSV fixture under `tests/data`.
pub fn read_reference_pvalues(filename: &str) -> Result<Vec<ReferencePValue>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(filename);
    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("Error opening fixture: {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ReferencePValue = result.context("Malformed fixture row")?;
        rows.push(row);
    }
    Ok(rows)
}

/// Two-sided p-value from statrs, used as an independent reference.
pub fn statrs_p_value(t: f32, df: f32) -> f64 {
    use statrs::distribution::{ContinuousCDF, StudentsT};

    let t_dist = StudentsT::new(0.0, 1.0, df as f64).unwrap();
    2.0 * t_dist.cdf(-(t as f64).abs())
}

pub fn check_close(label: &str, expected: f64, got: f32, tol: f64) {
    assert!(
        (expected - got as f64).abs() < tol,
        "{} - Expected: {}, Got: {}",
        label,
        expected,
        got
    );
}
