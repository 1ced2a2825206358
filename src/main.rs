use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error};

use parbench::bench::{BenchDriver, DEFAULT_SUMMARY_PATH};
use parbench::config::SuiteConfig;
use parbench::reduce::chunked_sum;
use parbench::report::{load_runtime_log, render_chart};

/// Benchmark parallel implementations and plot their runtimes
#[derive(Parser)]
#[command(name = "parbench")]
#[command(about = "Run parallel-sum benchmarks, collect runtimes, and plot results", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the sequence 1..=N with a parallel chunked reduction
    Sum {
        /// Number of elements to sum
        #[arg(short = 'n', long, default_value = "10000000")]
        size: u64,

        /// Worker count (default: available CPU cores)
        #[arg(short = 'w', long)]
        workers: Option<usize>,

        /// Sum as 64-bit floats instead of integers
        #[arg(long)]
        floats: bool,
    },
    /// Run a benchmark suite and write a JSON summary
    Bench {
        /// Path to the suite configuration file
        #[arg(short = 'c', long)]
        config: PathBuf,

        /// Where to write the JSON summary (overrides the config)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Render a runtime-vs-size chart from a CSV runtime log
    Plot {
        /// Path to the CSV runtime log
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output PNG path
        #[arg(short = 'o', long, default_value = "runtimes.png")]
        output: PathBuf,

        /// Chart title
        #[arg(long, default_value = "Runtime vs Input Size by Program")]
        title: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("parbench started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Sum {
            size,
            workers,
            floats,
        } => run_sum(size, workers, floats).await,
        Commands::Bench { config, output } => run_bench(config, output).await,
        Commands::Plot {
            input,
            output,
            title,
        } => run_plot(input, output, title),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run_sum(size: u64, workers: Option<usize>, floats: bool) -> anyhow::Result<()> {
    let workers = workers.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });

    debug!("Summing 1..={} with {} workers", size, workers);

    let start = Instant::now();
    if floats {
        let values: Vec<f64> = (1..=size).map(|i| i as f64).collect();
        let total = chunked_sum(&values, workers).await?;
        println!("Sum = {total}");
    } else {
        let values: Vec<i64> = (1..=size).map(|i| i as i64).collect();
        let total = chunked_sum(&values, workers).await?;
        println!("Sum = {total}");
    }
    println!(
        "Time taken = {:.4} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

async fn run_bench(config_path: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let config = SuiteConfig::load(&config_path)
        .with_context(|| format!("Failed to load suite config from {}", config_path.display()))?;

    let summary = BenchDriver::production().run_suite(&config).await;

    let output = output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_PATH));
    summary
        .write_to(&output)
        .with_context(|| format!("Failed to write summary to {}", output.display()))?;

    println!("Benchmark saved to {}", output.display());
    Ok(())
}

fn run_plot(input: PathBuf, output: PathBuf, title: String) -> anyhow::Result<()> {
    let points = load_runtime_log(&input)
        .with_context(|| format!("Failed to load runtime log from {}", input.display()))?;

    render_chart(&points, &output, &title)
        .with_context(|| format!("Failed to render chart to {}", output.display()))?;

    println!("Chart saved to {}", output.display());
    Ok(())
}
