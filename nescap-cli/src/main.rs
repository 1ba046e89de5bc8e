//! nescap - NES Screenshot Capture CLI
//!
//! Drives a ROM headlessly for a bounded number of frames and saves PNG
//! screenshots at fixed frame offsets, for documentation and CI snapshot
//! runs. The command surface is positional and order-sensitive:
//!
//! ```text
//! nescap <rom_source> [output_location] [max_frame_budget]
//! ```

mod colors;
mod exit_codes;

use std::path::PathBuf;

use clap::Parser;
use nescap_core::env::headless::HeadlessEnv;
use nescap_core::{run, CaptureRequest, DEFAULT_MAX_FRAMES, DEFAULT_TARGETS};
use tracing_subscriber::EnvFilter;

use exit_codes::ExitCode;

/// nescap - deterministic NES screenshot capture
#[derive(Parser, Debug)]
#[command(name = "nescap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the NES ROM file
    rom_source: PathBuf,

    /// Directory to save screenshots into
    #[arg(default_value = "screenshots")]
    output_location: PathBuf,

    /// Maximum number of frames to run
    #[arg(default_value_t = DEFAULT_MAX_FRAMES)]
    max_frame_budget: u64,

    /// Print the final report as JSON for scripting
    #[arg(long)]
    json: bool,

    /// Suppress the capture report (errors still go to stderr)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Diagnostics go to stderr so stdout carries only the capture report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run_capture(cli).as_i32());
}

fn run_capture(cli: Cli) -> ExitCode {
    let request = match CaptureRequest::new(
        cli.rom_source,
        cli.output_location,
        DEFAULT_TARGETS.to_vec(),
        cli.max_frame_budget,
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", colors::error(&e.to_string()));
            return ExitCode::Failure;
        }
    };

    match run(&request, HeadlessEnv::from_rom, cli.quiet) {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            }
            if report.is_success() {
                ExitCode::Success
            } else {
                eprintln!(
                    "{}",
                    colors::warning("run completed but no screenshots were created")
                );
                ExitCode::Failure
            }
        }
        Err(e) => {
            eprintln!("{}", colors::error(&e.to_string()));
            ExitCode::Failure
        }
    }
}
