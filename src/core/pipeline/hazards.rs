//! Data hazard detection and forwarding.
//!
//! Read-after-write hazards are resolved by forwarding from the EX/MEM and
//! MEM/WB latches. The one case forwarding cannot cover is a load whose
//! value is needed by the very next instruction; that is detected here and
//! resolved by a one-cycle stall.
//!
//! Two stages consume the forwarding network with different latch views:
//! the execute stage forwards from the current-cycle latches, while the
//! decode stage (branch comparison) forwards from the latches already
//! rebuilt this cycle by the execute and memory stages. The reverse
//! traversal order makes both views available without copying.

use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, MemWbLatch};

/// Selects the most recent value of source register `reg`.
///
/// Priority: a non-load in EX/MEM, then MEM/WB, then the register-file
/// value read in decode. Register 0 is never forwarded.
pub fn forward_operand(
    reg: usize,
    reg_file_value: u32,
    ex_mem: &ExMemLatch,
    mem_wb: &MemWbLatch,
) -> u32 {
    if reg != 0 {
        if !ex_mem.nop && ex_mem.ctrl.reg_write && !ex_mem.ctrl.mem_read && ex_mem.rd == reg {
            return ex_mem.alu_result;
        }
        if !mem_wb.nop && mem_wb.ctrl.reg_write && mem_wb.rd == reg {
            return mem_wb.write_data;
        }
    }
    reg_file_value
}

/// Detects a load-use hazard between the instruction in ID/EX and the
/// instruction being decoded.
///
/// True when ID/EX holds a load whose destination is a source of the
/// decoding instruction; the loaded word only exists after MEM, so the
/// consumer has to wait one cycle.
pub fn need_stall_load_use(id_ex: &IdExLatch, rs1: usize, rs2: usize) -> bool {
    !id_ex.nop
        && id_ex.ctrl.mem_read
        && id_ex.rd != 0
        && (id_ex.rd == rs1 || id_ex.rd == rs2)
}
