//! # Parbench
//!
//! A small CLI toolkit for running parallel-sum style benchmarks across
//! language implementations, collecting their runtimes, and plotting the
//! results.
//!
//! ## Usage
//!
//! ```bash
//! parbench sum --size 10000000 --workers 8
//! parbench bench --config suite.toml
//! parbench plot --input runtimes.csv --output runtimes.png
//! ```
//!
//! ## Modules
//!
//! - `reduce` - Parallel chunked reduction, the algorithmic core
//! - `bench` - Benchmark driver that times external implementations
//! - `config` - Benchmark suite configuration loading
//! - `report` - CSV runtime-log ingestion and chart rendering
//! - `subprocess` - Unified subprocess abstraction layer for testing
pub mod bench;
pub mod config;
pub mod error;
pub mod reduce;
pub mod report;
pub mod subprocess;
