use crate::core::pipeline::latches::{IfIdLatch, IfLatch};
use crate::core::pipeline::stages::decode::DecodeOutcome;
use crate::isa::opcodes;
use crate::mem::InstructionMemory;

/// Fetch stage.
///
/// Runs last in the reverse traversal so it can honor what decode resolved
/// this cycle: on a stall both the fetch latch and IF/ID are re-presented
/// unchanged; on a redirect the wrong-path word fetched this cycle is
/// squashed and the PC moves to the target. A fetched HALT is injected into
/// IF/ID exactly once, after which the fetch latch pins itself nop at the
/// halt address. Running past the end of the instruction image stops fetch
/// the same way but injects nothing.
pub fn fetch_stage(
    cur_fetch: &IfLatch,
    cur_if_id: &IfIdLatch,
    outcome: &DecodeOutcome,
    imem: &InstructionMemory,
    trace: bool,
) -> (IfLatch, IfIdLatch) {
    if outcome.stall {
        return (*cur_fetch, *cur_if_id);
    }

    if let Some(target) = outcome.redirect {
        return (
            IfLatch {
                nop: false,
                pc: target,
            },
            IfIdLatch::bubble(),
        );
    }

    if cur_fetch.nop {
        return (*cur_fetch, IfIdLatch::bubble());
    }

    let pc = cur_fetch.pc;
    if pc as usize >= imem.len() {
        return (IfLatch { nop: true, pc }, IfIdLatch::bubble());
    }

    let instr = imem.read_word(pc);
    if trace {
        eprintln!("IF  pc={:#x} inst={:#010x}", pc, instr);
    }

    let if_id = IfIdLatch {
        nop: false,
        pc,
        instr,
    };

    if (instr & 0x7f) == opcodes::OP_HALT {
        (IfLatch { nop: true, pc }, if_id)
    } else {
        (
            IfLatch {
                nop: false,
                pc: pc.wrapping_add(4),
            },
            if_id,
        )
    }
}
