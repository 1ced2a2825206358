//! Benchmark suite configuration.
//!
//! A suite is described in TOML: the problem being benchmarked, its input
//! size, and one runner per language implementation. Runners may carry an
//! optional compile step that is executed before the timed run.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// Name of the problem, e.g. "parallel_sum".
    pub problem: String,
    /// Number of elements the implementations are expected to process.
    pub input_size: u64,
    /// Where the JSON summary is written; defaults to `results/benchmark.json`.
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub runners: Vec<RunnerSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSpec {
    /// Display name recorded in the summary, e.g. "Python" or "OCaml".
    pub language: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Optional compile step executed (untimed) before the run.
    pub compile: Option<CommandSpec>,
    pub working_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl SuiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SuiteConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.problem.trim().is_empty() {
            return Err(Error::Config("problem name must not be empty".to_string()));
        }
        if self.input_size == 0 {
            return Err(Error::Config("input_size must be positive".to_string()));
        }
        if self.runners.is_empty() {
            return Err(Error::Config(
                "at least one runner must be configured".to_string(),
            ));
        }
        for runner in &self.runners {
            if runner.language.trim().is_empty() {
                return Err(Error::Config("runner language must not be empty".to_string()));
            }
            if runner.program.trim().is_empty() {
                return Err(Error::Config(format!(
                    "runner '{}' has an empty program",
                    runner.language
                )));
            }
        }
        Ok(())
    }
}
