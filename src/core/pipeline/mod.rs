//! Five-Stage Pipelined Core.
//!
//! IF/ID/EX/MEM/WB with data forwarding, a one-cycle load-use stall, and
//! branch/jump resolution in decode (no prediction: fetch assumes
//! not-taken and decode squashes the one wrong-path fetch on a taken
//! branch or jump).
//!
//! Each cycle rebuilds a zeroed next-cycle latch set by traversing the
//! stages in reverse, WB first and IF last. The order is a correctness
//! requirement: writeback must update the register file before decode
//! reads it, execute must see the current-cycle EX/MEM and MEM/WB latches
//! before they are replaced, and decode's branch comparison uses the
//! freshly built ones. The data flow between stages looks cyclic but the
//! reverse walk makes it acyclic: the next-cycle latches depend only on
//! the current-cycle latches plus the new fetch.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::mem::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Data hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

use latches::Latches;
use stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};

/// The five-stage pipelined core.
pub struct FiveStageCore<'a> {
    imem: &'a InstructionMemory,
    /// Private data memory image.
    pub dmem: DataMemory,
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Cycle and retirement counters.
    pub stats: SimStats,
    latches: Latches,
    halted: bool,
    max_cycles: u64,
    trace: bool,
}

impl<'a> FiveStageCore<'a> {
    /// Creates a core over the shared instruction image and its own data
    /// memory instance, with an empty pipe about to fetch from address 0.
    pub fn new(imem: &'a InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        Self {
            imem,
            dmem,
            regs: RegisterFile::new(),
            stats: SimStats::default(),
            latches: Latches::reset(),
            halted: false,
            max_cycles: config.limits.five_stage_max_cycles,
            trace: config.general.trace_instructions,
        }
    }

    /// Whether the core has stopped executing.
    ///
    /// The core halts the cycle after all five latches are simultaneously
    /// bubbles, so the final all-nop state appears in the trace twice.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// The latch set as of the last completed cycle.
    pub fn latches(&self) -> &Latches {
        &self.latches
    }

    /// Executes one cycle and returns its cycle number.
    ///
    /// Stages run WB → MEM → EX → ID → IF over the current latches, the
    /// freshly built set is swapped in, and the post-cycle state is what
    /// the snapshot for the returned cycle number shows.
    pub fn step(&mut self) -> u64 {
        let cur = self.latches;
        let drained = cur.all_nop();
        let mut next = Latches::bubbles();

        wb_stage(&cur.mem_wb, &mut self.regs, &mut self.stats, self.trace);
        next.mem_wb = mem_stage(&cur.ex_mem, &mut self.dmem, self.trace);
        next.ex_mem = execute_stage(&cur.id_ex, &cur.ex_mem, &cur.mem_wb, self.trace);

        let outcome = decode_stage(
            &cur.if_id,
            &cur.id_ex,
            &next.ex_mem,
            &next.mem_wb,
            &self.regs,
            self.trace,
        );
        next.id_ex = outcome.id_ex;

        let (fetch, if_id) = fetch_stage(&cur.fetch, &cur.if_id, &outcome, self.imem, self.trace);
        next.fetch = fetch;
        next.if_id = if_id;

        self.latches = next;

        let cycle = self.stats.cycles;
        self.stats.cycles += 1;
        if drained || self.stats.cycles >= self.max_cycles {
            self.halted = true;
        }
        cycle
    }
}
