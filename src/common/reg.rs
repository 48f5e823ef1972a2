//! Architectural Register File.
//!
//! Thirty-two 32-bit registers, `x0`-`x31`. Register `x0` is hardwired to
//! zero: writes to it are dropped and reads always return 0. Out-of-range
//! indices behave the same way rather than panicking, so a garbage register
//! field decoded from arbitrary bytes cannot take the simulator down.

/// 32-entry architectural register file.
pub struct RegisterFile {
    regs: [u32; 32],
}

impl RegisterFile {
    /// Creates a register file with every register initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `x0` and
    /// out-of-range indices always return 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 || idx >= self.regs.len() {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    /// * `val` - The 32-bit value to write
    ///
    /// # Note
    ///
    /// Writes to `x0` and to out-of-range indices are silently dropped.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 && idx < self.regs.len() {
            self.regs[idx] = val;
        }
    }

    /// Renders all 32 registers as zero-padded binary lines, `x0` first.
    ///
    /// This is the 32-line body of a register-file snapshot block.
    pub fn dump_lines(&self) -> Vec<String> {
        self.regs.iter().map(|v| format!("{v:032b}")).collect()
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
