use crate::common::RegisterFile;
use crate::core::pipeline::latches::MemWbLatch;
use crate::stats::SimStats;

/// Writeback stage.
///
/// Commits the MEM/WB value to the register file when the instruction
/// writes one. Every non-bubble latch that reaches this stage counts as a
/// retired instruction, stores, branches, and the drained HALT payload
/// included.
pub fn wb_stage(mem_wb: &MemWbLatch, regs: &mut RegisterFile, stats: &mut SimStats, trace: bool) {
    if mem_wb.nop {
        return;
    }

    if mem_wb.ctrl.reg_write && mem_wb.rd != 0 {
        regs.write(mem_wb.rd, mem_wb.write_data);
        if trace {
            eprintln!("WB  x{} <= {:#010x}", mem_wb.rd, mem_wb.write_data);
        }
    }

    stats.instructions_retired += 1;
}
