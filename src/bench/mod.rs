//! Benchmark driver.
//!
//! Runs each configured language implementation as a black-box subprocess,
//! measures wall-clock time around the invocation, and collects the
//! successful runs into a JSON summary. A runner that fails to compile or
//! run is logged and left out of the summary; it does not abort the suite.

pub mod summary;

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::{CommandSpec, RunnerSpec, SuiteConfig};
use crate::subprocess::{ProcessCommandBuilder, ProcessError, ProcessOutput, SubprocessManager};

pub use summary::{round_seconds, BenchmarkSummary, LanguageResult, DEFAULT_SUMMARY_PATH};

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("failed to write summary to {path}: {source}")]
    WriteSummary {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct BenchDriver {
    subprocess: SubprocessManager,
}

impl BenchDriver {
    pub fn new(subprocess: SubprocessManager) -> Self {
        Self { subprocess }
    }

    pub fn production() -> Self {
        Self::new(SubprocessManager::production())
    }

    /// Run every configured runner and collect the successful timings.
    pub async fn run_suite(&self, config: &SuiteConfig) -> BenchmarkSummary {
        info!(
            "Benchmarking '{}' with input size {} across {} runners",
            config.problem,
            config.input_size,
            config.runners.len()
        );

        let progress = create_progress_bar(config.runners.len());
        let mut results = Vec::new();

        for runner in &config.runners {
            progress.set_message(runner.language.clone());

            match self.run_one(runner).await {
                Ok(output) => {
                    let seconds = round_seconds(output.duration.as_secs_f64());
                    info!("{} finished in {:.4} seconds", runner.language, seconds);
                    results.push(LanguageResult {
                        language: runner.language.clone(),
                        time_seconds: seconds,
                    });
                }
                Err(e) => {
                    warn!("Skipping {}: {}", runner.language, e);
                }
            }

            progress.inc(1);
        }

        progress.finish_with_message(format!(
            "Completed: {} of {} runners succeeded",
            results.len(),
            config.runners.len()
        ));

        BenchmarkSummary {
            problem: config.problem.clone(),
            input_size: config.input_size,
            results,
        }
    }

    /// Compile (if configured) and run a single implementation, returning
    /// the timed output of the run itself.
    async fn run_one(&self, spec: &RunnerSpec) -> Result<ProcessOutput, ProcessError> {
        if let Some(compile) = &spec.compile {
            info!("Compiling {} implementation", spec.language);
            self.run_untimed(compile, spec).await?;
        }

        debug!("Running {} implementation: {}", spec.language, spec.program);

        let mut builder = ProcessCommandBuilder::new(&spec.program).args(&spec.args);
        if let Some(dir) = &spec.working_dir {
            builder = builder.current_dir(dir);
        }
        if let Some(secs) = spec.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let output = self.subprocess.runner().run(builder.build()).await?;
        check_status(output)
    }

    async fn run_untimed(
        &self,
        command: &CommandSpec,
        spec: &RunnerSpec,
    ) -> Result<(), ProcessError> {
        let mut builder = ProcessCommandBuilder::new(&command.program).args(&command.args);
        if let Some(dir) = &spec.working_dir {
            builder = builder.current_dir(dir);
        }

        let output = self.subprocess.runner().run(builder.build()).await?;
        check_status(output).map(|_| ())
    }
}

fn check_status(output: ProcessOutput) -> Result<ProcessOutput, ProcessError> {
    use crate::subprocess::ExitStatus;

    match output.status {
        ExitStatus::Success => Ok(output),
        ExitStatus::Error(code) => Err(ProcessError::ExitCode(code)),
        ExitStatus::Signal(signal) => Err(ProcessError::Signal(signal)),
        ExitStatus::Timeout => Err(ProcessError::Timeout(output.duration)),
    }
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("█▓▒░ "),
    );
    pb
}
