//! Pipeline stage implementations.
//!
//! Each stage is a pure-ish function from the current-cycle latches to one
//! next-cycle latch. The core drives them in reverse order (WB, MEM, EX,
//! ID, IF) so every stage sees the unmodified current-cycle outputs of the
//! stages ahead of it, while decode can additionally see the freshly built
//! EX/MEM and MEM/WB latches for branch forwarding.

/// Instruction decode stage, stall detection, branch/jump resolution.
pub mod decode;

/// ALU execute stage.
pub mod execute;

/// Instruction fetch stage.
pub mod fetch;

/// Data memory access stage.
pub mod memory;

/// Register writeback stage.
pub mod writeback;

pub use decode::{decode_stage, DecodeOutcome};
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
