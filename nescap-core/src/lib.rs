//! nescap-core: frame scheduling and capture bookkeeping for a deterministic
//! NES screenshot harness.
//!
//! The harness drives an emulation environment for a bounded number of
//! simulated frames and persists PNG stills at prescribed frame offsets.
//! Three pieces compose linearly: [`FrameScheduler`] decides, each tick,
//! whether a capture is due; [`CaptureSink`] turns raw snapshots into named
//! artifacts and keeps the run's manifest; [`run`] owns the environment
//! lifecycle, drives the tick loop, and produces the final report.
//!
//! The emulation engine itself is consumed through the [`Environment`]
//! trait; [`env::headless::HeadlessEnv`] is the built-in deterministic
//! implementation used by the CLI.

pub mod env;
pub mod error;
pub mod request;
pub mod run;
pub mod scheduler;
pub mod sink;

pub use env::{Environment, FrameSnapshot, StepOutput, NOOP_ACTION};
pub use error::HarnessError;
pub use request::{CaptureRequest, DEFAULT_MAX_FRAMES, DEFAULT_TARGETS};
pub use run::{run, RunReport};
pub use scheduler::FrameScheduler;
pub use sink::{ArtifactFile, CaptureSink, ScreenshotRecord};
