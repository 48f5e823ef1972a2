//! Lockstep Driver.
//!
//! Owns one shared instruction image and two cores with private data
//! memories, advances whichever cores are still running each global cycle,
//! appends their per-cycle snapshots, and writes the end-of-run artifacts
//! once both have halted. The cores keep independent cycle counters;
//! neither observes the other.

use std::path::{Path, PathBuf};

use crate::common::SimError;
use crate::config::Config;
use crate::core::{FiveStageCore, SingleStageCore};
use crate::mem::{DataMemory, InstructionMemory};
use crate::sim::loader::load_image;
use crate::sim::output::{
    render_fs_rf, render_fs_state, render_ss_rf, render_ss_state, ResultsWriter,
};
use crate::stats::SimStats;

/// Where the results landed and what each core counted.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Directory the result files were written to.
    pub results_dir: PathBuf,
    /// Single-stage core counters.
    pub ss: SimStats,
    /// Five-stage core counters.
    pub fs: SimStats,
}

/// Runs a full simulation with results under `results/<testcase>/` in the
/// current working directory.
pub fn run(iodir: &Path, config: &Config) -> Result<RunSummary, SimError> {
    run_with_results_root(iodir, Path::new("results"), config)
}

/// Runs a full simulation, writing under `<results_root>/<testcase>/`.
///
/// The test-case name is the final segment of `iodir`, which must contain
/// `imem.txt` and `dmem.txt`.
pub fn run_with_results_root(
    iodir: &Path,
    results_root: &Path,
    config: &Config,
) -> Result<RunSummary, SimError> {
    let imem = InstructionMemory::new(load_image(&iodir.join("imem.txt"))?);
    let dmem_image = load_image(&iodir.join("dmem.txt"))?;
    let dmem = DataMemory::new(dmem_image, &config.memory);

    let testcase = iodir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("testcase");
    let mut writer = ResultsWriter::new(&results_root.join(testcase))?;

    let mut ss = SingleStageCore::new(&imem, dmem.clone(), config);
    let mut fs = FiveStageCore::new(&imem, dmem, config);

    while !(ss.halted() && fs.halted()) {
        if !ss.halted() {
            let snapshot = ss.step();
            writer.append_ss_cycle(
                &render_ss_rf(snapshot.cycle, &ss.regs),
                &render_ss_state(&snapshot),
            )?;
        }
        if !fs.halted() {
            let cycle = fs.step();
            writer.append_fs_cycle(
                &render_fs_rf(cycle, &fs.regs),
                &render_fs_state(cycle, fs.latches()),
            )?;
        }
    }

    writer.finish(&ss.dmem, &fs.dmem, &ss.stats, &fs.stats)?;

    Ok(RunSummary {
        results_dir: writer.dir().to_path_buf(),
        ss: ss.stats,
        fs: fs.stats,
    })
}
