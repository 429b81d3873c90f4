//! MIPS pipeline simulator CLI.
//!
//! This binary runs one program through the pipeline. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by a JSON file and flags.
//! 2. **Loading:** An ELF32 big-endian MIPS executable, or a raw image at a base address.
//! 3. **Execution:** Ticks until the program exits or the instruction budget drains, then
//!    exits with the program's status. An illegal instruction prints the register dump
//!    and exits with status 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{fs, num::ParseIntError};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::sim::loader::{self, ImageFormat};
use mipsim_core::sim::{EmulatedSyscalls, RunOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-level five-stage MIPS pipeline simulator",
    long_about = "Run a MIPS32 big-endian program through a five-stage pipeline model.\n\nExamples:\n  mipsim run hello.elf --stats\n  mipsim run prog.bin --raw --base 0x400000 --max-instructions 10000\n  RUST_LOG=mipsim=trace mipsim run prog.elf"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it exits.
    Run {
        /// Program to execute (ELF32 big-endian MIPS, or raw with --raw).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Treat the program as a flat image instead of ELF.
        #[arg(long)]
        raw: bool,

        /// Load address and entry point for raw images (decimal or 0x-prefixed).
        #[arg(long, value_parser = parse_u32)]
        base: Option<u32>,

        /// Stop fetching after this many instructions.
        #[arg(long)]
        max_instructions: Option<u64>,

        /// Emit per-stage trace events.
        #[arg(long)]
        trace: bool,

        /// Print statistics when the run ends.
        #[arg(long)]
        stats: bool,

        /// Print only these statistics sections (summary, pipeline, instruction_mix).
        #[arg(long, value_delimiter = ',')]
        stats_sections: Vec<String>,
    },
}

fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map_or_else(|| s.parse(), |hex| u32::from_str_radix(hex, 16))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            raw,
            base,
            max_instructions,
            trace,
            stats,
            stats_sections,
        } => {
            init_tracing(trace);
            let options = RunOptions {
                config,
                raw,
                base,
                max_instructions,
                trace,
                stats: (stats || !stats_sections.is_empty()).then_some(stats_sections),
            };
            match cmd_run(&program, options) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("\n[!] FATAL: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "mipsim=trace" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// Flags of the `run` subcommand.
struct RunOptions {
    config: Option<PathBuf>,
    raw: bool,
    base: Option<u32>,
    max_instructions: Option<u64>,
    trace: bool,
    /// Sections to report, or `None` for no report; empty means all.
    stats: Option<Vec<String>>,
}

/// Loads the program, runs it and maps the outcome to a process exit code.
fn cmd_run(program: &Path, options: RunOptions) -> Result<ExitCode, SimError> {
    let RunOptions {
        config: config_path,
        raw,
        base,
        max_instructions,
        trace,
        stats,
    } = options;
    let mut config = match config_path {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    config.general.trace |= trace;
    if max_instructions.is_some() {
        config.general.max_instructions = max_instructions;
    }

    let image = loader::load_binary(program)?;
    let format = if raw || !loader::is_elf(&image) {
        ImageFormat::Raw {
            base: base.unwrap_or(config.memory.load_base),
        }
    } else {
        ImageFormat::Elf
    };

    let handler = Box::new(EmulatedSyscalls::stdio());
    let mut sim = Simulator::with_image(&config, &image, format, handler)?;
    info!(program = %program.display(), pc = sim.cpu.pc, "starting simulation");

    let result = sim.run();
    if let Some(sections) = stats {
        sim.cpu.stats.print_sections(&sections);
    }

    match result {
        Ok(RunOutcome::Exited(code)) => Ok(ExitCode::from((code & 0xff) as u8)),
        Ok(RunOutcome::BudgetDrained) => Ok(ExitCode::SUCCESS),
        Err(err @ SimError::IllegalInstruction { .. }) => {
            eprintln!("\n[!] {err}");
            eprint!("{}", sim.cpu.dump_state());
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
