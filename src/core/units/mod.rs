//! Execution units shared by both cores.

/// Arithmetic logic unit.
pub mod alu;
