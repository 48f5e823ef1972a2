//! Single-Stage Reference Core.
//!
//! Fetch, decode, execute, memory, and writeback all complete within one
//! `step()`, so every cycle retires exactly one instruction. The core halts
//! when the fetch reaches the HALT sentinel or runs past the end of the
//! instruction image; the halting fetch pins the PC and emits a nop fetch
//! latch for two consecutive cycles before the core reports halted, which
//! is why the trace shows two identical final snapshots.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::units::alu::{alu, AluFunction};
use crate::isa::{funct3, opcodes, Decoded};
use crate::mem::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Fetch-latch view emitted once per executed cycle.
#[derive(Debug, Clone, Copy)]
pub struct FetchState {
    /// Cycle number the snapshot belongs to.
    pub cycle: u64,
    /// PC governing the next fetch (pinned at the halt address once nop).
    pub pc: u32,
    /// Whether the fetch latch is a bubble.
    pub nop: bool,
}

/// The single-stage core.
pub struct SingleStageCore<'a> {
    imem: &'a InstructionMemory,
    /// Private data memory image.
    pub dmem: DataMemory,
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Cycle and retirement counters.
    pub stats: SimStats,
    pc: u32,
    fetch_nop: bool,
    halted: bool,
    max_cycles: u64,
    trace: bool,
}

impl<'a> SingleStageCore<'a> {
    /// Creates a core over the shared instruction image and its own data
    /// memory instance.
    pub fn new(imem: &'a InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        Self {
            imem,
            dmem,
            regs: RegisterFile::new(),
            stats: SimStats::default(),
            pc: 0,
            fetch_nop: false,
            halted: false,
            max_cycles: config.limits.single_stage_max_cycles,
            trace: config.general.trace_instructions,
        }
    }

    /// Whether the core has stopped executing.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Executes one cycle and returns the fetch-latch snapshot for it.
    pub fn step(&mut self) -> FetchState {
        let was_nop = self.fetch_nop;
        let instr = if was_nop {
            0
        } else {
            self.imem.read_word(self.pc)
        };
        let past_end = self.pc as usize >= self.imem.len();
        let halt_fetch = past_end || (instr & 0x7f) == opcodes::OP_HALT;

        if was_nop || halt_fetch {
            // PC stays pinned at the halt address; the HALT itself counts
            // as one retired instruction.
            if !was_nop {
                self.stats.instructions_retired += 1;
                if self.trace {
                    eprintln!("IF  pc={:#x} halt", self.pc);
                }
            }
            self.fetch_nop = true;
            if was_nop {
                self.halted = true;
            }
        } else {
            self.execute(instr);
        }

        let cycle = self.stats.cycles;
        self.stats.cycles += 1;
        if self.stats.cycles >= self.max_cycles {
            self.halted = true;
        }

        FetchState {
            cycle,
            pc: self.pc,
            nop: self.fetch_nop,
        }
    }

    fn execute(&mut self, instr: u32) {
        let d = Decoded::new(instr);
        let rv1 = self.regs.read(d.rs1);
        let rv2 = self.regs.read(d.rs2);
        let link = self.pc.wrapping_add(4);
        let mut next_pc = link;

        if self.trace {
            eprintln!("IF  pc={:#x} inst={:#010x}", self.pc, instr);
        }

        match d.opcode {
            opcodes::OP_REG => {
                let func = AluFunction::for_r_type(d.funct3, d.funct7);
                self.regs.write(d.rd, alu(func, rv1, rv2));
            }
            opcodes::OP_IMM => {
                let func = AluFunction::for_i_type(d.funct3);
                self.regs.write(d.rd, alu(func, rv1, d.imm_i()));
            }
            opcodes::OP_LOAD => {
                let addr = rv1.wrapping_add(d.imm_i());
                self.regs.write(d.rd, self.dmem.read_word(addr));
            }
            opcodes::OP_STORE => {
                let addr = rv1.wrapping_add(d.imm_s());
                self.dmem.write_word(addr, rv2);
            }
            opcodes::OP_BRANCH => {
                let taken = match d.funct3 {
                    funct3::BEQ => rv1 == rv2,
                    funct3::BNE => rv1 != rv2,
                    _ => false,
                };
                if taken {
                    next_pc = self.pc.wrapping_add(d.imm_b());
                }
            }
            opcodes::OP_JAL => {
                self.regs.write(d.rd, link);
                next_pc = self.pc.wrapping_add(d.imm_j());
            }
            // Undefined opcodes execute as no-effect instructions.
            _ => {}
        }

        self.stats.instructions_retired += 1;
        self.pc = next_pc;
    }
}
