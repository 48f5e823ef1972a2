//! Result rendering and file writers.
//!
//! The text formats in this module are the simulator's observable contract:
//! snapshot headers, field order, bit widths, and boolean spelling are all
//! fixed. Rendering is separated from file handling so the formats can be
//! asserted on directly in tests.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::common::{RegisterFile, SimError};
use crate::core::pipeline::latches::Latches;
use crate::core::single_stage::FetchState;
use crate::mem::DataMemory;
use crate::stats::SimStats;

/// Rule line separating snapshot blocks: exactly 70 dashes.
pub const RULE: &str =
    "----------------------------------------------------------------------";

fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Instruction slots display empty while the latch is a bubble.
fn instr_slot(nop: bool, instr: u32) -> String {
    if nop {
        String::new()
    } else {
        format!("{instr:032b}")
    }
}

/// Renders one single-stage state block.
pub fn render_ss_state(state: &FetchState) -> String {
    format!(
        "{RULE}\nState after executing cycle: {}\nIF.PC: {}\nIF.nop: {}\n",
        state.cycle,
        state.pc,
        py_bool(state.nop)
    )
}

/// Renders one single-stage register-file block.
///
/// The header carries two spaces before the cycle number.
pub fn render_ss_rf(cycle: u64, regs: &RegisterFile) -> String {
    let mut out = format!("State of RF after executing cycle:  {cycle}\n");
    for line in regs.dump_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders one five-stage register-file block.
///
/// Unlike the single-stage header there is no space before the cycle
/// number, and the block opens with a rule line.
pub fn render_fs_rf(cycle: u64, regs: &RegisterFile) -> String {
    let mut out = format!("{RULE}\nState of RF after executing cycle:{cycle}\n");
    for line in regs.dump_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders one five-stage state block: every latch field in data-model
/// order, booleans as `True`/`False`, PCs decimal, data values 32-bit
/// binary, register indices 5-bit, opcode/funct3/funct7 7/3/7-bit, and the
/// ALU-op class as its 2-bit code.
pub fn render_fs_state(cycle: u64, latches: &Latches) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "State after executing cycle: {cycle}");

    let fetch = &latches.fetch;
    let _ = writeln!(out, "IF.nop: {}", py_bool(fetch.nop));
    let _ = writeln!(out, "IF.PC: {}", fetch.pc);

    let id = &latches.if_id;
    let _ = writeln!(out, "ID.nop: {}", py_bool(id.nop));
    let _ = writeln!(out, "ID.PC: {}", id.pc);
    let _ = writeln!(out, "ID.Instr: {}", instr_slot(id.nop, id.instr));

    let ex = &latches.id_ex;
    let _ = writeln!(out, "EX.nop: {}", py_bool(ex.nop));
    let _ = writeln!(out, "EX.Instr: {}", instr_slot(ex.nop, ex.instr));
    let _ = writeln!(out, "EX.PC: {}", ex.pc);
    let _ = writeln!(out, "EX.Read_data1: {:032b}", ex.read_data1);
    let _ = writeln!(out, "EX.Read_data2: {:032b}", ex.read_data2);
    let _ = writeln!(out, "EX.Imm: {:032b}", ex.imm);
    let _ = writeln!(out, "EX.rs1: {:05b}", ex.rs1);
    let _ = writeln!(out, "EX.rs2: {:05b}", ex.rs2);
    let _ = writeln!(out, "EX.rd: {:05b}", ex.rd);
    let _ = writeln!(out, "EX.opcode: {:07b}", ex.opcode);
    let _ = writeln!(out, "EX.funct3: {:03b}", ex.funct3);
    let _ = writeln!(out, "EX.funct7: {:07b}", ex.funct7);
    let _ = writeln!(out, "EX.MemRead: {}", py_bool(ex.ctrl.mem_read));
    let _ = writeln!(out, "EX.MemWrite: {}", py_bool(ex.ctrl.mem_write));
    let _ = writeln!(out, "EX.RegWrite: {}", py_bool(ex.ctrl.reg_write));
    let _ = writeln!(out, "EX.MemtoReg: {}", py_bool(ex.ctrl.mem_to_reg));
    let _ = writeln!(out, "EX.ALUSrc: {}", py_bool(ex.ctrl.alu_src));
    let _ = writeln!(out, "EX.ALUOp: {}", ex.ctrl.alu_op.code());
    let _ = writeln!(out, "EX.isJAL: {}", py_bool(ex.ctrl.is_jal));
    let _ = writeln!(out, "EX.is_halt: {}", py_bool(ex.ctrl.is_halt));

    let mem = &latches.ex_mem;
    let _ = writeln!(out, "MEM.nop: {}", py_bool(mem.nop));
    let _ = writeln!(out, "MEM.PC: {}", mem.pc);
    let _ = writeln!(out, "MEM.ALUResult: {:032b}", mem.alu_result);
    let _ = writeln!(out, "MEM.WriteData: {:032b}", mem.write_data);
    let _ = writeln!(out, "MEM.rd: {:05b}", mem.rd);
    let _ = writeln!(out, "MEM.rs1: {:05b}", mem.rs1);
    let _ = writeln!(out, "MEM.rs2: {:05b}", mem.rs2);
    let _ = writeln!(out, "MEM.MemRead: {}", py_bool(mem.ctrl.mem_read));
    let _ = writeln!(out, "MEM.MemWrite: {}", py_bool(mem.ctrl.mem_write));
    let _ = writeln!(out, "MEM.RegWrite: {}", py_bool(mem.ctrl.reg_write));
    let _ = writeln!(out, "MEM.MemtoReg: {}", py_bool(mem.ctrl.mem_to_reg));
    let _ = writeln!(out, "MEM.isJAL: {}", py_bool(mem.ctrl.is_jal));
    let _ = writeln!(out, "MEM.is_halt: {}", py_bool(mem.ctrl.is_halt));

    let wb = &latches.mem_wb;
    let _ = writeln!(out, "WB.nop: {}", py_bool(wb.nop));
    let _ = writeln!(out, "WB.ALUResult: {:032b}", wb.alu_result);
    let _ = writeln!(out, "WB.ReadData: {:032b}", wb.read_data);
    let _ = writeln!(out, "WB.WriteData: {:032b}", wb.write_data);
    let _ = writeln!(out, "WB.rd: {:05b}", wb.rd);
    let _ = writeln!(out, "WB.rs1: {:05b}", wb.rs1);
    let _ = writeln!(out, "WB.rs2: {:05b}", wb.rs2);
    let _ = writeln!(out, "WB.RegWrite: {}", py_bool(wb.ctrl.reg_write));
    let _ = writeln!(out, "WB.MemtoReg: {}", py_bool(wb.ctrl.mem_to_reg));
    let _ = writeln!(out, "WB.isJAL: {}", py_bool(wb.ctrl.is_jal));
    let _ = writeln!(out, "WB.is_halt: {}", py_bool(wb.ctrl.is_halt));

    out
}

/// Renders a data-memory image: one 8-bit binary line per persisted byte.
pub fn render_dmem(dmem: &DataMemory) -> String {
    let mut out = String::new();
    for line in dmem.dump_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders the performance-metrics file, single-stage block first.
pub fn render_metrics(ss: &SimStats, fs: &SimStats) -> String {
    format!(
        "{}\n{}",
        ss.render_block("Single Stage Core Performance Metrics:"),
        fs.render_block("Five Stage Core Performance Metrics:")
    )
}

/// Open file handles for one run's result directory.
///
/// Each per-cycle file is truncated when the writer is created and then
/// appended to through the same handle, matching the write-then-append
/// discipline of the trace contract.
pub struct ResultsWriter {
    dir: PathBuf,
    ss_rf: File,
    fs_rf: File,
    ss_state: File,
    fs_state: File,
}

impl ResultsWriter {
    /// Creates the results directory and truncates the per-cycle files.
    pub fn new(dir: &Path) -> Result<Self, SimError> {
        std::fs::create_dir_all(dir).map_err(|e| SimError::io(dir, e))?;
        let create = |name: &str| -> Result<File, SimError> {
            let path = dir.join(name);
            File::create(&path).map_err(|e| SimError::io(path, e))
        };
        Ok(Self {
            dir: dir.to_path_buf(),
            ss_rf: create("SS_RFResult.txt")?,
            fs_rf: create("FS_RFResult.txt")?,
            ss_state: create("StateResult_SS.txt")?,
            fs_state: create("StateResult_FS.txt")?,
        })
    }

    /// Path of the results directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends one single-stage cycle (register file block + state block).
    pub fn append_ss_cycle(&mut self, rf: &str, state: &str) -> Result<(), SimError> {
        write_all(&mut self.ss_rf, self.dir.join("SS_RFResult.txt"), rf)?;
        write_all(&mut self.ss_state, self.dir.join("StateResult_SS.txt"), state)
    }

    /// Appends one five-stage cycle (register file block + state block).
    pub fn append_fs_cycle(&mut self, rf: &str, state: &str) -> Result<(), SimError> {
        write_all(&mut self.fs_rf, self.dir.join("FS_RFResult.txt"), rf)?;
        write_all(&mut self.fs_state, self.dir.join("StateResult_FS.txt"), state)
    }

    /// Writes the end-of-run artifacts: both DMEM images and the metrics.
    pub fn finish(
        &mut self,
        ss_dmem: &DataMemory,
        fs_dmem: &DataMemory,
        ss_stats: &SimStats,
        fs_stats: &SimStats,
    ) -> Result<(), SimError> {
        let write_file = |name: &str, content: String| -> Result<(), SimError> {
            let path = self.dir.join(name);
            std::fs::write(&path, content).map_err(|e| SimError::io(path, e))
        };
        write_file("SS_DMEMResult.txt", render_dmem(ss_dmem))?;
        write_file("FS_DMEMResult.txt", render_dmem(fs_dmem))?;
        write_file(
            "PerformanceMetrics.txt",
            render_metrics(ss_stats, fs_stats),
        )
    }
}

fn write_all(file: &mut File, path: PathBuf, text: &str) -> Result<(), SimError> {
    file.write_all(text.as_bytes())
        .map_err(|e| SimError::io(path, e))
}
