//! `funct3` minor opcodes (bits 14-12) of the supported RV32I subset.

/// Add / Subtract (distinguished by `funct7`).
pub const ADD_SUB: u32 = 0b000;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

/// Load Word.
pub const LW: u32 = 0b010;
/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;

/// `funct7` value selecting SUB under [`ADD_SUB`].
pub const FUNCT7_SUB: u32 = 0b010_0000;
