//! Major opcodes (bits 6-0) of the supported RV32I subset.

/// Register-register arithmetic (ADD, SUB, XOR, OR, AND).
pub const OP_REG: u32 = 0b011_0011;

/// Immediate arithmetic (ADDI, XORI, ORI, ANDI).
pub const OP_IMM: u32 = 0b001_0011;

/// Load word (LW).
pub const OP_LOAD: u32 = 0b000_0011;

/// Store word (SW).
pub const OP_STORE: u32 = 0b010_0011;

/// Conditional branch (BEQ, BNE).
pub const OP_BRANCH: u32 = 0b110_0011;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b110_1111;

/// Architectural stop sentinel. Not a standard RISC-V encoding.
pub const OP_HALT: u32 = 0b111_1111;
