//! Integration tests for the single-stage reference core.

mod common;

use common::*;
use rv32sim::config::Config;
use rv32sim::core::SingleStageCore;
use rv32sim::mem::InstructionMemory;

fn run_core(imem: &InstructionMemory) -> SingleStageCore<'_> {
    let config = Config::default();
    let mut core = SingleStageCore::new(imem, empty_dmem(), &config);
    while !core.halted() {
        core.step();
    }
    core
}

/// Tests the pure-arithmetic scenario: two ADDIs feeding an ADD.
#[test]
fn test_arithmetic_program() {
    let imem = imem_from_words(&[addi(1, 0, 5), addi(2, 0, 7), add(3, 1, 2), HALT]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(1), 5);
    assert_eq!(core.regs.read(2), 7);
    assert_eq!(core.regs.read(3), 12);
    // Three instructions plus the HALT itself.
    assert_eq!(core.stats.instructions_retired, 4);
    // One cycle per instruction plus the extra halt snapshot cycle.
    assert_eq!(core.stats.cycles, 5);
}

/// Tests that the halting fetch emits two pinned-nop snapshots.
#[test]
fn test_halt_emits_two_nop_snapshots() {
    let imem = imem_from_words(&[addi(1, 0, 1), HALT]);
    let config = Config::default();
    let mut core = SingleStageCore::new(&imem, empty_dmem(), &config);

    let first = core.step();
    assert!(!first.nop);
    assert_eq!(first.pc, 4);

    let second = core.step();
    let third = core.step();
    assert!(core.halted());
    assert!(second.nop && third.nop);
    assert_eq!(second.cycle + 1, third.cycle);
    assert_eq!(second.pc, 4);
    assert_eq!(third.pc, 4);
}

/// Tests running off the end of the image: same halt path as HALT.
#[test]
fn test_running_past_imem_halts() {
    let imem = imem_from_words(&[addi(1, 0, 3)]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(1), 3);
    assert_eq!(core.stats.instructions_retired, 2);
    assert_eq!(core.stats.cycles, 3);
}

/// Tests logical immediates with sign extension.
#[test]
fn test_logical_immediates() {
    let imem = imem_from_words(&[
        addi(1, 0, 0x55),
        xori(2, 1, -1),
        ori(3, 1, 0x0F),
        andi(4, 1, 0x0F),
        HALT,
    ]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(2), 0xFFFF_FFAA);
    assert_eq!(core.regs.read(3), 0x5F);
    assert_eq!(core.regs.read(4), 0x05);
}

/// Tests R-type SUB, XOR, OR, AND.
#[test]
fn test_r_type_operations() {
    let imem = imem_from_words(&[
        addi(1, 0, 12),
        addi(2, 0, 10),
        sub(3, 1, 2),
        xor(4, 1, 2),
        or(5, 1, 2),
        and(6, 1, 2),
        HALT,
    ]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(3), 2);
    assert_eq!(core.regs.read(4), 0b0110);
    assert_eq!(core.regs.read(5), 0b1110);
    assert_eq!(core.regs.read(6), 0b1000);
}

/// Tests the taken-BEQ scenario: the fall-through write is skipped.
#[test]
fn test_taken_beq_skips_wrong_path() {
    let imem = imem_from_words(&[
        addi(1, 0, 1),
        addi(2, 0, 1),
        beq(1, 2, 8),
        addi(3, 0, 111),
        addi(3, 0, 222),
        HALT,
    ]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(3), 222);
}

/// Tests the not-taken-BNE scenario: execution falls through.
#[test]
fn test_not_taken_bne_falls_through() {
    let imem = imem_from_words(&[
        addi(1, 0, 1),
        addi(2, 0, 1),
        bne(1, 2, 8),
        addi(3, 0, 111),
        addi(3, 0, 222),
        HALT,
    ]);
    let core = run_core(&imem);
    // Both writes execute; the second wins.
    assert_eq!(core.regs.read(3), 222);
}

/// Tests a backward branch loop: counts down from 3 to 0.
#[test]
fn test_backward_branch_loop() {
    let imem = imem_from_words(&[
        addi(1, 0, 3),
        addi(2, 0, 0),
        // loop: x2 += x1; x1 -= 1; bne x1, x0, loop
        add(2, 2, 1),
        addi(1, 1, -1),
        bne(1, 0, -8),
        HALT,
    ]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(1), 0);
    assert_eq!(core.regs.read(2), 6);
}

/// Tests the JAL scenario: link written, shadowed instruction skipped.
#[test]
fn test_jal_links_and_skips() {
    let imem = imem_from_words(&[jal(1, 8), addi(2, 0, 0xAA), addi(3, 0, 0xBB), HALT]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(1), 4);
    assert_eq!(core.regs.read(2), 0);
    assert_eq!(core.regs.read(3), 0xBB);
}

/// Tests LW/SW through data memory, including the byte-order asymmetry.
#[test]
fn test_store_then_load_round_trip() {
    let imem = imem_from_words(&[
        addi(1, 0, 0x7B),
        sw(1, 0, 100),
        lw(2, 0, 100),
        HALT,
    ]);
    let core = run_core(&imem);
    // 0x0000007B stored little-endian, read back big-endian.
    assert_eq!(core.regs.read(2), 0x7B00_0000);
}

/// Tests that writes targeting x0 are dropped.
#[test]
fn test_writes_to_x0_are_dropped() {
    let imem = imem_from_words(&[addi(0, 0, 55), add(0, 0, 0), HALT]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(0), 0);
}

/// Tests that an undefined opcode executes as a no-effect instruction.
#[test]
fn test_undefined_opcode_is_noop() {
    // Major opcode 0x57 is outside the supported subset.
    let imem = imem_from_words(&[addi(1, 0, 9), 0x0000_0057, addi(2, 0, 1), HALT]);
    let core = run_core(&imem);
    assert_eq!(core.regs.read(1), 9);
    assert_eq!(core.regs.read(2), 1);
    assert_eq!(core.stats.instructions_retired, 4);
}

/// Tests the runaway-execution cap.
#[test]
fn test_cycle_cap_halts_infinite_loop() {
    // beq x0, x0, 0 branches to itself forever.
    let imem = imem_from_words(&[beq(0, 0, 0)]);
    let core = run_core(&imem);
    assert!(core.halted());
    assert_eq!(core.stats.cycles, 10_000);
}
