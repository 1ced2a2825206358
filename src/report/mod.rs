//! Runtime-log ingestion.
//!
//! Benchmark runs append rows to a CSV log with headers
//! `size,program,runtime`. The size column is a descriptor whose last
//! whitespace-separated token is the numeric size (graph logs store
//! "nodes edges" pairs and plot the edge count).

pub mod plot;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub use plot::render_chart;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: invalid size descriptor '{value}'")]
    InvalidSize { row: usize, value: String },

    #[error("runtime log is empty")]
    EmptyLog,

    #[error("failed to render chart: {0}")]
    Render(String),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    size: String,
    program: String,
    runtime: f64,
}

/// One benchmark measurement: a program ran an input of `size` elements in
/// `runtime` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimePoint {
    pub size: u64,
    pub program: String,
    pub runtime: f64,
}

/// Load a runtime log from disk.
pub fn load_runtime_log(path: &Path) -> Result<Vec<RuntimePoint>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();

    for (index, record) in reader.deserialize::<RawRecord>().enumerate() {
        let record = record?;
        // Header is row 1, so data rows start at 2.
        let row = index + 2;
        let size = parse_size(&record.size).ok_or_else(|| ReportError::InvalidSize {
            row,
            value: record.size.clone(),
        })?;
        points.push(RuntimePoint {
            size,
            program: record.program,
            runtime: record.runtime,
        });
    }

    Ok(points)
}

/// Extract the numeric size from a descriptor, taking the last
/// whitespace-separated token.
fn parse_size(descriptor: &str) -> Option<u64> {
    descriptor.split_whitespace().last()?.parse().ok()
}

/// Group measurements by program, each series sorted by size.
pub fn group_by_program(points: &[RuntimePoint]) -> BTreeMap<String, Vec<(u64, f64)>> {
    let mut series: BTreeMap<String, Vec<(u64, f64)>> = BTreeMap::new();
    for point in points {
        series
            .entry(point.program.clone())
            .or_default()
            .push((point.size, point.runtime));
    }
    for values in series.values_mut() {
        values.sort_by_key(|(size, _)| *size);
    }
    series
}
