use crate::core::pipeline::hazards::forward_operand;
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, MemWbLatch};
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::{alu, AluFunction};

/// Execute stage.
///
/// Selects operands through the forwarding network against the
/// current-cycle EX/MEM and MEM/WB latches, then computes the ALU result:
/// the link value for JAL, the effective address for loads and stores, or
/// the arithmetic/logical result. The forwarded rs2 rides along as the
/// store datum.
pub fn execute_stage(
    id_ex: &IdExLatch,
    ex_mem: &ExMemLatch,
    mem_wb: &MemWbLatch,
    trace: bool,
) -> ExMemLatch {
    if id_ex.nop {
        return ExMemLatch::bubble();
    }

    let op1 = forward_operand(id_ex.rs1, id_ex.read_data1, ex_mem, mem_wb);
    let op2 = forward_operand(id_ex.rs2, id_ex.read_data2, ex_mem, mem_wb);

    let alu_result = if id_ex.ctrl.is_jal {
        id_ex.pc.wrapping_add(4)
    } else {
        match id_ex.ctrl.alu_op {
            AluOp::Address => alu(AluFunction::Add, op1, id_ex.imm),
            AluOp::Branch => alu(AluFunction::Sub, op1, op2),
            AluOp::Register => alu(
                AluFunction::for_r_type(id_ex.funct3, id_ex.funct7),
                op1,
                op2,
            ),
            AluOp::Immediate => alu(AluFunction::for_i_type(id_ex.funct3), op1, id_ex.imm),
        }
    };

    if trace {
        eprintln!("EX  pc={:#x} alu={:#010x}", id_ex.pc, alu_result);
    }

    ExMemLatch {
        nop: false,
        pc: id_ex.pc,
        alu_result,
        write_data: op2,
        rd: id_ex.rd,
        rs1: id_ex.rs1,
        rs2: id_ex.rs2,
        ctrl: id_ex.ctrl,
    }
}
