//! Benchmark summary serialization.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::BenchError;

/// Default location for the JSON summary, matching the layout the plotting
/// utilities expect.
pub const DEFAULT_SUMMARY_PATH: &str = "results/benchmark.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkSummary {
    pub problem: String,
    pub input_size: u64,
    pub results: Vec<LanguageResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageResult {
    pub language: String,
    pub time_seconds: f64,
}

impl BenchmarkSummary {
    /// Write the summary as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), BenchError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| BenchError::WriteSummary {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| BenchError::WriteSummary {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Round a wall-clock measurement to 4 decimal places for the summary.
pub fn round_seconds(seconds: f64) -> f64 {
    (seconds * 10_000.0).round() / 10_000.0
}
