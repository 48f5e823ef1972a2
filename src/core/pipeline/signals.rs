//! Pipeline control signals.
//!
//! Control signals are derived once in the decode stage and ride the
//! latches down the pipe. The ALU-op class is a 2-bit code in the snapshot
//! format, so it is modeled as a four-variant enum with a fixed encoding.

use crate::isa::{opcodes, Decoded};

/// ALU operation class carried in the ID/EX latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluOp {
    /// `00`: effective-address / link addition (loads, stores, JAL).
    #[default]
    Address,
    /// `01`: branch comparison.
    Branch,
    /// `10`: R-type, operation chosen by `funct3`/`funct7`.
    Register,
    /// `11`: I-type immediate operation chosen by `funct3`.
    Immediate,
}

impl AluOp {
    /// The 2-bit snapshot encoding.
    pub fn code(self) -> &'static str {
        match self {
            Self::Address => "00",
            Self::Branch => "01",
            Self::Register => "10",
            Self::Immediate => "11",
        }
    }
}

/// Control signals produced by the decode stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlSignals {
    /// Instruction reads data memory (LW).
    pub mem_read: bool,
    /// Instruction writes data memory (SW).
    pub mem_write: bool,
    /// Instruction writes a destination register.
    pub reg_write: bool,
    /// Writeback value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// Second ALU operand is the immediate rather than rs2.
    pub alu_src: bool,
    /// ALU operation class.
    pub alu_op: AluOp,
    /// Instruction is JAL.
    pub is_jal: bool,
    /// Instruction is the HALT sentinel.
    pub is_halt: bool,
}

impl ControlSignals {
    /// Derives the control signals for a decoded instruction.
    ///
    /// Unsupported opcodes yield all-false signals, so they drift down the
    /// pipe with no architectural effect.
    pub fn decode(d: &Decoded) -> Self {
        let mut c = Self::default();
        match d.opcode {
            opcodes::OP_REG => {
                c.reg_write = true;
                c.alu_op = AluOp::Register;
            }
            opcodes::OP_IMM => {
                c.reg_write = true;
                c.alu_src = true;
                c.alu_op = AluOp::Immediate;
            }
            opcodes::OP_LOAD => {
                c.reg_write = true;
                c.mem_read = true;
                c.mem_to_reg = true;
                c.alu_src = true;
            }
            opcodes::OP_STORE => {
                c.mem_write = true;
                c.alu_src = true;
            }
            opcodes::OP_BRANCH => {
                c.alu_op = AluOp::Branch;
            }
            opcodes::OP_JAL => {
                c.reg_write = true;
                c.is_jal = true;
            }
            opcodes::OP_HALT => {
                c.is_halt = true;
            }
            _ => {}
        }
        c
    }
}
