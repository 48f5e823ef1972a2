//! Simulation harness.
//!
//! Everything that touches the filesystem: loading the memory images,
//! rendering and writing the per-cycle trace files, and the lockstep
//! driver that advances both cores until they halt.

/// Lockstep driver loop.
pub mod driver;

/// Memory image loader.
pub mod loader;

/// Result rendering and file writers.
pub mod output;

pub use driver::{run, run_with_results_root, RunSummary};
