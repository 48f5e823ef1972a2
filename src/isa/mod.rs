//! Instruction Set Architecture definitions.
//!
//! The supported subset of RV32I: register-register and register-immediate
//! ALU operations, LW/SW, BEQ/BNE, JAL, and the non-standard HALT sentinel
//! (major opcode `0x7F`).

/// Instruction decoder and immediate extraction.
pub mod decode;

/// `funct3` minor opcode values.
pub mod funct3;

/// Major opcode values.
pub mod opcodes;

pub use decode::Decoded;
