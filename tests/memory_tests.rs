//! Integration tests for the memory images and their byte-order contract.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use rv32sim::config::{ByteOrder, Config, MemoryConfig};
use rv32sim::mem::DataMemory;

/// Tests big-endian instruction fetch over the byte image.
#[test]
fn test_imem_word_fetch() {
    let imem = imem_from_words(&[0x0102_0304, 0xAABB_CCDD]);
    assert_eq!(imem.read_word(0), 0x0102_0304);
    assert_eq!(imem.read_word(4), 0xAABB_CCDD);
    // Unaligned fetches straddle words.
    assert_eq!(imem.read_word(2), 0x0304_AABB);
}

/// Tests that fetches past the image read zero bytes.
#[test]
fn test_imem_out_of_range_reads_zero() {
    let imem = imem_from_words(&[0x0102_0304]);
    assert_eq!(imem.read_word(2), 0x0304_0000);
    assert_eq!(imem.read_word(400), 0);
}

/// Tests zero-padding of the initial data image to 1000 bytes.
#[test]
fn test_dmem_padded_to_contract_size() {
    let dmem = dmem_from_bytes(&[0xFF]);
    let lines = dmem.dump_lines();
    assert_eq!(lines.len(), 1000);
    assert_eq!(lines[0], "11111111");
    assert!(lines[1..].iter().all(|l| l == "00000000"));
}

/// Tests the documented store/load asymmetry: a stored word reads back
/// byte-swapped.
#[test]
fn test_dmem_store_load_asymmetry() {
    let mut dmem = empty_dmem();
    dmem.write_word(0, 0x0102_0304);
    assert_eq!(dmem.read_word(0), 0x0403_0201);
    // The bytes themselves land least-significant first.
    assert_eq!(dmem.dump_lines()[0], "00000100");
    assert_eq!(dmem.dump_lines()[3], "00000001");
}

/// Tests that a configured symmetric byte order round-trips.
#[test]
fn test_dmem_configurable_byte_order() {
    let cfg = MemoryConfig {
        load_order: ByteOrder::Little,
        store_order: ByteOrder::Little,
        ..Config::default().memory
    };
    let mut dmem = DataMemory::new(Vec::new(), &cfg);
    dmem.write_word(8, 0xCAFE_F00D);
    assert_eq!(dmem.read_word(8), 0xCAFE_F00D);
}

/// Tests stores past the image end: memory grows, the dump does not.
#[test]
fn test_dmem_growth_is_clamped_in_dump() {
    let mut dmem = empty_dmem();
    dmem.write_word(1100, 0xFFFF_FFFF);
    assert_eq!(dmem.read_word(1100), 0xFFFF_FFFF);
    assert_eq!(dmem.dump_lines().len(), 1000);
}

/// Tests that loads beyond the current image length read zero.
#[test]
fn test_dmem_out_of_range_load_is_zero() {
    let dmem = empty_dmem();
    assert_eq!(dmem.read_word(5000), 0);
}
