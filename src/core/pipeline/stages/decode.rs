use crate::common::RegisterFile;
use crate::core::pipeline::hazards::{forward_operand, need_stall_load_use};
use crate::core::pipeline::latches::{ExMemLatch, IdExLatch, IfIdLatch, MemWbLatch};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::{funct3, opcodes, Decoded};

/// What decode tells the fetch stage to do next cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOutcome {
    /// The ID/EX latch produced this cycle (a bubble on stall).
    pub id_ex: IdExLatch,
    /// Hold IF/ID and the PC; a load-use hazard needs one bubble.
    pub stall: bool,
    /// Redirect fetch to this target; the in-flight wrong-path fetch is
    /// squashed.
    pub redirect: Option<u32>,
}

/// Decode stage.
///
/// Extracts fields and control signals, reads the register file, detects
/// the load-use hazard against the instruction currently in ID/EX, and
/// resolves branches and jumps. Branch comparison applies the forwarding
/// rule against the EX/MEM and MEM/WB latches already rebuilt this cycle,
/// so the values of the two in-flight elder instructions are the post-EX
/// and post-MEM ones; anything older has already reached the register file
/// through this cycle's writeback.
pub fn decode_stage(
    if_id: &IfIdLatch,
    cur_id_ex: &IdExLatch,
    fresh_ex_mem: &ExMemLatch,
    fresh_mem_wb: &MemWbLatch,
    regs: &RegisterFile,
    trace: bool,
) -> DecodeOutcome {
    if if_id.nop {
        return DecodeOutcome {
            id_ex: IdExLatch::bubble(),
            ..DecodeOutcome::default()
        };
    }

    let d = Decoded::new(if_id.instr);

    // The HALT payload drains with every control signal off.
    if d.opcode == opcodes::OP_HALT {
        return DecodeOutcome {
            id_ex: IdExLatch {
                nop: false,
                instr: if_id.instr,
                pc: if_id.pc,
                ctrl: ControlSignals::decode(&d),
                ..IdExLatch::default()
            },
            ..DecodeOutcome::default()
        };
    }

    if need_stall_load_use(cur_id_ex, d.rs1, d.rs2) {
        if trace {
            eprintln!("ID  pc={:#x} load-use stall", if_id.pc);
        }
        return DecodeOutcome {
            id_ex: IdExLatch::bubble(),
            stall: true,
            redirect: None,
        };
    }

    let rv1 = regs.read(d.rs1);
    let rv2 = regs.read(d.rs2);
    let ctrl = ControlSignals::decode(&d);

    let mut redirect = None;
    match d.opcode {
        opcodes::OP_BRANCH => {
            let cmp1 = forward_operand(d.rs1, rv1, fresh_ex_mem, fresh_mem_wb);
            let cmp2 = forward_operand(d.rs2, rv2, fresh_ex_mem, fresh_mem_wb);
            let taken = match d.funct3 {
                funct3::BEQ => cmp1 == cmp2,
                funct3::BNE => cmp1 != cmp2,
                _ => false,
            };
            if taken {
                redirect = Some(if_id.pc.wrapping_add(d.imm_b()));
            }
        }
        opcodes::OP_JAL => {
            redirect = Some(if_id.pc.wrapping_add(d.imm_j()));
        }
        _ => {}
    }

    if trace {
        if let Some(target) = redirect {
            eprintln!("ID  pc={:#x} redirect -> {:#x}", if_id.pc, target);
        }
    }

    let imm = match d.opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD => d.imm_i(),
        opcodes::OP_STORE => d.imm_s(),
        // Branch and jump targets are consumed here in decode.
        _ => 0,
    };

    DecodeOutcome {
        id_ex: IdExLatch {
            nop: false,
            instr: if_id.instr,
            pc: if_id.pc,
            read_data1: rv1,
            read_data2: rv2,
            imm,
            rs1: d.rs1,
            rs2: d.rs2,
            rd: d.rd,
            opcode: d.opcode,
            funct3: d.funct3,
            funct7: d.funct7,
            ctrl,
        },
        stall: false,
        redirect,
    }
}
