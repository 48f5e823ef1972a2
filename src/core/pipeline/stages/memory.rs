use crate::core::pipeline::latches::{ExMemLatch, MemWbLatch};
use crate::mem::DataMemory;

/// Memory access stage.
///
/// Loads read the word addressed by the ALU result; stores write the
/// forwarded rs2 datum there. The latch produced for WB carries the final
/// writeback value so the forwarding network can serve it without caring
/// whether the producer was a load.
pub fn mem_stage(ex_mem: &ExMemLatch, dmem: &mut DataMemory, trace: bool) -> MemWbLatch {
    if ex_mem.nop {
        return MemWbLatch::bubble();
    }

    let mut read_data = 0;
    if ex_mem.ctrl.mem_read {
        read_data = dmem.read_word(ex_mem.alu_result);
        if trace {
            eprintln!(
                "MEM pc={:#x} load addr={:#x} data={:#010x}",
                ex_mem.pc, ex_mem.alu_result, read_data
            );
        }
    } else if ex_mem.ctrl.mem_write {
        dmem.write_word(ex_mem.alu_result, ex_mem.write_data);
        if trace {
            eprintln!(
                "MEM pc={:#x} store addr={:#x} data={:#010x}",
                ex_mem.pc, ex_mem.alu_result, ex_mem.write_data
            );
        }
    }

    let write_data = if ex_mem.ctrl.mem_to_reg {
        read_data
    } else {
        ex_mem.alu_result
    };

    MemWbLatch {
        nop: false,
        alu_result: ex_mem.alu_result,
        read_data,
        write_data,
        rd: ex_mem.rd,
        rs1: ex_mem.rs1,
        rs2: ex_mem.rs2,
        ctrl: ex_mem.ctrl,
    }
}
