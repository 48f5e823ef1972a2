//! RV32I Lockstep Simulator CLI.
//!
//! Parses the command line, loads the optional configuration file, and
//! runs both cores over the images in the I/O directory. Results land
//! under `results/<testcase>/`, where the test-case name is the final
//! segment of the I/O directory path.

use std::path::Path;
use std::process;

use clap::Parser;

use rv32sim::config::Config;
use rv32sim::sim;

/// Command-line arguments for the lockstep simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV32I lockstep dual-core cycle simulator")]
struct Args {
    /// Directory containing imem.txt and dmem.txt.
    #[arg(long)]
    iodir: String,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load(Path::new(path)),
        None => Ok(Config::default()),
    }
    .unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    match sim::run(Path::new(&args.iodir), &config) {
        Ok(summary) => {
            println!("Results written to {}", summary.results_dir.display());
            println!(
                "SS: {} cycles, {} instructions",
                summary.ss.cycles, summary.ss.instructions_retired
            );
            println!(
                "FS: {} cycles, {} instructions",
                summary.fs.cycles, summary.fs.instructions_retired
            );
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    }
}
