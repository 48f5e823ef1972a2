//! Memory images.
//!
//! Byte-addressable instruction and data memories. Word fetches from
//! instruction memory are big-endian. Data memory defaults to big-endian
//! loads and little-endian stores; the resulting read-back byte swap is an
//! intentional, observable contract of the simulator.

/// Read-write data memory image.
pub mod dmem;

/// Read-only instruction memory image.
pub mod imem;

pub use dmem::DataMemory;
pub use imem::InstructionMemory;
