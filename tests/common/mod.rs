//! Shared helpers for the integration tests: instruction encoders and
//! memory builders for the supported RV32I subset.

#![allow(dead_code)]

use rv32sim::config::Config;
use rv32sim::mem::{DataMemory, InstructionMemory};

/// The architectural stop sentinel as a full instruction word.
pub const HALT: u32 = 0x0000_007f;

fn r_type(f7: u32, rs2: u32, rs1: u32, f3: u32, rd: u32, op: u32) -> u32 {
    (f7 << 25) | (rs2 << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | op
}

fn i_type(imm: i32, rs1: u32, f3: u32, rd: u32, op: u32) -> u32 {
    ((imm as u32 & 0xfff) << 20) | (rs1 << 15) | (f3 << 12) | (rd << 7) | op
}

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0b000, rd, 0x33)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x20, rs2, rs1, 0b000, rd, 0x33)
}

pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0b100, rd, 0x33)
}

pub fn or(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0b110, rd, 0x33)
}

pub fn and(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(0x00, rs2, rs1, 0b111, rd, 0x33)
}

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b000, rd, 0x13)
}

pub fn xori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b100, rd, 0x13)
}

pub fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b110, rd, 0x13)
}

pub fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b111, rd, 0x13)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(imm, rs1, 0b010, rd, 0x03)
}

pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    let i = imm as u32 & 0xfff;
    ((i >> 5) << 25) | (rs2 << 20) | (rs1 << 15) | (0b010 << 12) | ((i & 0x1f) << 7) | 0x23
}

fn b_type(rs1: u32, rs2: u32, f3: u32, imm: i32) -> u32 {
    let i = imm as u32 & 0x1fff;
    (((i >> 12) & 0x1) << 31)
        | (((i >> 5) & 0x3f) << 25)
        | (rs2 << 20)
        | (rs1 << 15)
        | (f3 << 12)
        | (((i >> 1) & 0xf) << 8)
        | (((i >> 11) & 0x1) << 7)
        | 0x63
}

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(rs1, rs2, 0b000, imm)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(rs1, rs2, 0b001, imm)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    let i = imm as u32 & 0x1f_ffff;
    (((i >> 20) & 0x1) << 31)
        | (((i >> 1) & 0x3ff) << 21)
        | (((i >> 11) & 0x1) << 20)
        | (((i >> 12) & 0xff) << 12)
        | (rd << 7)
        | 0x6f
}

/// Builds an instruction memory from instruction words in program order.
///
/// Instruction memory stores bytes most-significant first, matching the
/// big-endian word fetch.
pub fn imem_from_words(words: &[u32]) -> InstructionMemory {
    InstructionMemory::new(words.iter().flat_map(|w| w.to_be_bytes()).collect())
}

/// An empty (all-zero, default-sized) data memory.
pub fn empty_dmem() -> DataMemory {
    DataMemory::new(Vec::new(), &Config::default().memory)
}

/// A data memory preloaded with the given bytes, zero-padded as usual.
pub fn dmem_from_bytes(bytes: &[u8]) -> DataMemory {
    DataMemory::new(bytes.to_vec(), &Config::default().memory)
}

/// Renders instruction words as an `imem.txt` image, one binary byte per
/// line in fetch order.
pub fn imem_text(words: &[u32]) -> String {
    words
        .iter()
        .flat_map(|w| w.to_be_bytes())
        .map(|b| format!("{b:08b}\n"))
        .collect()
}

/// Renders raw bytes as a `dmem.txt` image.
pub fn dmem_text(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:08b}\n")).collect()
}
