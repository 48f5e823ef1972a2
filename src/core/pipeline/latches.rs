//! Pipeline latches.
//!
//! One fixed-shape record per inter-stage boundary, plus the fetch latch
//! holding the program counter. A latch with `nop` set is a bubble: its
//! payload fields are zero and it must cause no architectural effect. The
//! whole set is rebuilt from scratch every cycle and swapped in atomically,
//! so a bubble can never carry stale payload.

use crate::core::pipeline::signals::ControlSignals;

/// Fetch latch: the PC governing the next instruction fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfLatch {
    /// Bubble flag; once set by a halt, the PC stays pinned.
    pub nop: bool,
    /// Next fetch address.
    pub pc: u32,
}

/// IF/ID latch: a fetched, not yet decoded instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfIdLatch {
    /// Bubble flag.
    pub nop: bool,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw 32-bit encoding.
    pub instr: u32,
}

/// ID/EX latch: a decoded instruction with register values and controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdExLatch {
    /// Bubble flag.
    pub nop: bool,
    /// Raw 32-bit encoding.
    pub instr: u32,
    /// Instruction address.
    pub pc: u32,
    /// rs1 value as read from the register file in decode.
    pub read_data1: u32,
    /// rs2 value as read from the register file in decode.
    pub read_data2: u32,
    /// Sign-extended immediate selected by format (zero for branches).
    pub imm: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Major opcode.
    pub opcode: u32,
    /// Minor opcode.
    pub funct3: u32,
    /// Function modifier.
    pub funct7: u32,
    /// Control signals for the downstream stages.
    pub ctrl: ControlSignals,
}

/// EX/MEM latch: the ALU result and store datum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExMemLatch {
    /// Bubble flag.
    pub nop: bool,
    /// Instruction address.
    pub pc: u32,
    /// ALU output (memory address for loads/stores, link for JAL).
    pub alu_result: u32,
    /// Forwarded rs2 value, the datum a store writes.
    pub write_data: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Control signals.
    pub ctrl: ControlSignals,
}

/// MEM/WB latch: the value about to be written back.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemWbLatch {
    /// Bubble flag.
    pub nop: bool,
    /// ALU output.
    pub alu_result: u32,
    /// Word loaded from data memory (zero for non-loads).
    pub read_data: u32,
    /// Post-MEM writeback value: the loaded word for loads, the ALU result
    /// otherwise. This is also the value the forwarding network serves.
    pub write_data: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Control signals.
    pub ctrl: ControlSignals,
}

macro_rules! impl_bubble {
    ($($ty:ty),+) => {
        $(impl $ty {
            /// A bubble: `nop` set, every payload field zero.
            pub fn bubble() -> Self {
                Self {
                    nop: true,
                    ..Self::default()
                }
            }
        })+
    };
}

impl_bubble!(IfLatch, IfIdLatch, IdExLatch, ExMemLatch, MemWbLatch);

/// The full latch set for one cycle boundary.
#[derive(Debug, Clone, Copy)]
pub struct Latches {
    /// Fetch latch.
    pub fetch: IfLatch,
    /// IF/ID latch.
    pub if_id: IfIdLatch,
    /// ID/EX latch.
    pub id_ex: IdExLatch,
    /// EX/MEM latch.
    pub ex_mem: ExMemLatch,
    /// MEM/WB latch.
    pub mem_wb: MemWbLatch,
}

impl Latches {
    /// All five latches as bubbles.
    pub fn bubbles() -> Self {
        Self {
            fetch: IfLatch::bubble(),
            if_id: IfIdLatch::bubble(),
            id_ex: IdExLatch::bubble(),
            ex_mem: ExMemLatch::bubble(),
            mem_wb: MemWbLatch::bubble(),
        }
    }

    /// Reset state: an empty pipe about to fetch from address zero.
    pub fn reset() -> Self {
        Self {
            fetch: IfLatch { nop: false, pc: 0 },
            ..Self::bubbles()
        }
    }

    /// Whether every latch is a bubble (the pipe has drained).
    pub fn all_nop(&self) -> bool {
        self.fetch.nop
            && self.if_id.nop
            && self.id_ex.nop
            && self.ex_mem.nop
            && self.mem_wb.nop
    }
}
