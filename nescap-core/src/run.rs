//! Orchestrates one capture run: environment lifecycle, tick loop, report.
//!
//! The run moves through a fixed sequence of states: validate the request,
//! acquire and reset the environment, drive the tick loop, drain (close the
//! environment exactly once, on every exit path), then report from the
//! on-disk artifact listing.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::env::{Environment, NOOP_ACTION};
use crate::error::HarnessError;
use crate::request::CaptureRequest;
use crate::scheduler::FrameScheduler;
use crate::sink::{ArtifactFile, CaptureSink, ScreenshotRecord};

/// Outcome of a completed run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Captures made this run, in order
    pub records: Vec<ScreenshotRecord>,
    /// PNGs present in the output directory after the run (ground truth)
    pub artifacts: Vec<ArtifactFile>,
    /// Ticks actually executed
    pub frames_run: u64,
}

impl RunReport {
    /// A run succeeds only if it left at least one artifact on disk.
    pub fn is_success(&self) -> bool {
        !self.artifacts.is_empty()
    }
}

/// Execute one capture run.
///
/// The environment is built by `make_env` only after the ROM source has been
/// validated, so a bad request acquires nothing and creates no directories.
/// Once built, the environment is closed exactly once before any error from
/// the loop surfaces.
pub fn run<E, F>(
    request: &CaptureRequest,
    make_env: F,
    quiet: bool,
) -> Result<RunReport, HarnessError>
where
    E: Environment,
    F: FnOnce(&Path) -> Result<E, String>,
{
    // Validated: fail before any resource acquisition.
    if !request.rom_path.is_file() {
        return Err(HarnessError::InvalidInput(format!(
            "ROM file not found: {}",
            request.rom_path.display()
        )));
    }

    fs::create_dir_all(&request.output_dir).map_err(|e| {
        HarnessError::Persistence(format!(
            "failed to create {}: {}",
            request.output_dir.display(),
            e
        ))
    })?;

    if !quiet {
        println!("=== NES Screenshot Capture ===");
        println!("ROM: {}", request.rom_path.display());
        println!("Output Directory: {}", request.output_dir.display());
        println!("Frames to capture: {:?}", request.targets);
        println!("Max frames: {}", request.max_frames);
        println!();
    }

    let mut env = make_env(&request.rom_path).map_err(HarnessError::Environment)?;
    info!(rom = %request.rom_path.display(), "environment created");

    // Running -> Draining: close exactly once on every exit path, then let
    // a loop error surface before a close error.
    let outcome = drive(&mut env, request, quiet);
    let close_outcome = env.close().map_err(HarnessError::Environment);
    let (sink, frames_run) = outcome?;
    close_outcome?;
    info!(frames_run, captured = sink.records().len(), "environment closed");

    // Reported: the on-disk listing, not the in-memory manifest, decides
    // success.
    let artifacts = sink.scan_artifacts();
    if !quiet {
        println!();
        println!("=== Capture Complete ===");
        println!("Screenshots captured: {}", sink.records().len());
        if artifacts.is_empty() {
            println!("Warning: No screenshots were created!");
        } else {
            println!();
            println!("Screenshots saved to {}:", request.output_dir.display());
            for artifact in &artifacts {
                println!(
                    "  {} ({:.1} KB)",
                    artifact.filename,
                    artifact.bytes as f64 / 1024.0
                );
            }
        }
    }

    Ok(RunReport {
        records: sink.into_records(),
        artifacts,
        frames_run,
    })
}

/// The tick loop: step, schedule, persist, reset on terminal states.
fn drive<E: Environment>(
    env: &mut E,
    request: &CaptureRequest,
    quiet: bool,
) -> Result<(CaptureSink, u64), HarnessError> {
    env.reset().map_err(HarnessError::Environment)?;

    let mut scheduler = FrameScheduler::new(&request.targets);
    let mut sink = CaptureSink::new(&request.output_dir, scheduler.total_targets(), quiet);

    while scheduler.frame_count() < request.max_frames && !scheduler.exhausted() {
        let step = env.step(NOOP_ACTION).map_err(HarnessError::Environment)?;
        if let Some(index) = scheduler.tick() {
            sink.persist(&step.snapshot, index, scheduler.frame_count())?;
        }
        // A terminal play-through restarts the environment in place; the
        // frame counter and the capture pointer keep going.
        if step.done {
            debug!(frame = scheduler.frame_count(), "terminal state, resetting environment");
            env.reset().map_err(HarnessError::Environment)?;
        }
    }

    Ok((sink, scheduler.frame_count()))
}
