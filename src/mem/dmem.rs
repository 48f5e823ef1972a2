//! Data Memory.
//!
//! A byte-addressable read-write image, zero-padded at load time to the
//! configured persisted size (1000 bytes by default). Word loads assemble
//! bytes in the configured load order (big-endian by default); word stores
//! scatter bytes in the configured store order (little-endian by default).
//! Loads past the end of the image read zero bytes; stores grow the image
//! to cover the highest byte written. The dump is clamped back to the
//! persisted size.

use crate::config::{ByteOrder, MemoryConfig};

/// Read-write data memory image owned by one core.
#[derive(Clone)]
pub struct DataMemory {
    bytes: Vec<u8>,
    dump_size: usize,
    load_order: ByteOrder,
    store_order: ByteOrder,
}

impl DataMemory {
    /// Builds a data memory from a loaded image, padding with zero bytes up
    /// to the configured persisted size.
    pub fn new(mut bytes: Vec<u8>, config: &MemoryConfig) -> Self {
        if bytes.len() < config.dmem_size {
            bytes.resize(config.dmem_size, 0);
        }
        Self {
            bytes,
            dump_size: config.dmem_size,
            load_order: config.load_order,
            store_order: config.store_order,
        }
    }

    /// Reads the 32-bit word at byte address `addr` in the load byte order.
    ///
    /// Out-of-range bytes contribute zero.
    pub fn read_word(&self, addr: u32) -> u32 {
        let byte = |i: u32| {
            u32::from(
                self.bytes
                    .get(addr.wrapping_add(i) as usize)
                    .copied()
                    .unwrap_or(0),
            )
        };
        match self.load_order {
            ByteOrder::Big => byte(0) << 24 | byte(1) << 16 | byte(2) << 8 | byte(3),
            ByteOrder::Little => byte(3) << 24 | byte(2) << 16 | byte(1) << 8 | byte(0),
        }
    }

    /// Stores the 32-bit word `value` at byte address `addr` in the store
    /// byte order, growing the image if the access lands past the end.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        let end = addr as usize + 4;
        if end > self.bytes.len() {
            self.bytes.resize(end, 0);
        }
        let split = match self.store_order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        self.bytes[addr as usize..end].copy_from_slice(&split);
    }

    /// Renders the persisted image as 8-bit binary lines.
    ///
    /// Exactly `dump_size` lines regardless of any growth caused by stores
    /// past the initial image.
    pub fn dump_lines(&self) -> Vec<String> {
        (0..self.dump_size)
            .map(|i| format!("{:08b}", self.bytes.get(i).copied().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dmem(bytes: Vec<u8>) -> DataMemory {
        DataMemory::new(bytes, &MemoryConfig::default())
    }

    #[test]
    fn pads_to_persisted_size() {
        let mem = dmem(vec![1, 2, 3]);
        assert_eq!(mem.dump_lines().len(), 1000);
        assert_eq!(mem.read_word(0), 0x0102_0300);
    }

    #[test]
    fn store_le_then_load_be_byte_swaps() {
        let mut mem = dmem(vec![]);
        mem.write_word(0, 0x0102_0304);
        assert_eq!(mem.read_word(0), 0x0403_0201);
    }

    #[test]
    fn store_past_end_grows_but_dump_clamps() {
        let mut mem = dmem(vec![]);
        mem.write_word(1200, 0xDEAD_BEEF);
        assert_eq!(mem.read_word(1200), 0xEFBE_ADDE);
        assert_eq!(mem.dump_lines().len(), 1000);
    }

    #[test]
    fn symmetric_orders_round_trip() {
        let cfg = MemoryConfig {
            load_order: ByteOrder::Little,
            ..MemoryConfig::default()
        };
        let mut mem = DataMemory::new(vec![], &cfg);
        mem.write_word(16, 0x1234_5678);
        assert_eq!(mem.read_word(16), 0x1234_5678);
    }
}
