//! Core implementations.
//!
//! Two cores execute the same instruction image: a single-stage reference
//! core that completes one instruction per cycle, and a five-stage in-order
//! pipeline with forwarding, load-use stalls, and decode-stage control-flow
//! resolution. Each core owns its data memory, register file, and counters;
//! the instruction memory is shared read-only.

/// Five-stage pipelined core.
pub mod pipeline;

/// Single-stage reference core.
pub mod single_stage;

/// Execution units shared by both cores.
pub mod units;

pub use pipeline::FiveStageCore;
pub use single_stage::SingleStageCore;
