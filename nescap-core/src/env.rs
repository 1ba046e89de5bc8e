//! The emulation environment seam consumed by the capture harness.
//!
//! The harness never emulates anything itself; it drives whatever sits
//! behind [`Environment`] with a fixed no-op action and consumes the frames
//! it gets back.

use std::collections::HashMap;

pub mod headless;

/// Frame width in pixels (NES PPU output).
pub const FRAME_WIDTH: u32 = 256;

/// Frame height in pixels.
pub const FRAME_HEIGHT: u32 = 240;

/// Channels per pixel: RGB, 8 bits per channel.
pub const FRAME_CHANNELS: u32 = 3;

/// The fixed controller action driven on every tick.
pub const NOOP_ACTION: u8 = 0;

/// One rendered frame: row-major RGB8 pixel data.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel data, `width * height * 3` bytes
    pub pixels: Vec<u8>,
}

impl FrameSnapshot {
    /// Expected buffer length for this frame's dimensions.
    pub fn expected_len(&self) -> usize {
        (self.width * self.height * FRAME_CHANNELS) as usize
    }
}

/// Everything the environment reports for one tick.
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// The rendered frame for this tick
    pub snapshot: FrameSnapshot,
    /// Numeric reward signal (unused by the harness, passed through)
    pub reward: f32,
    /// Terminal-state flag: the play-through ended and the environment
    /// must be reset before it can produce further frames
    pub done: bool,
    /// Free-form diagnostics, passed through untouched
    pub info: HashMap<String, String>,
}

/// An emulation environment driven by the orchestrator.
///
/// One tick of `step` advances simulated time by exactly one frame.
/// `close` is called exactly once per run, on every exit path, including
/// after a failed `reset` or `step`.
pub trait Environment {
    /// Restart the play-through and return the initial frame.
    fn reset(&mut self) -> Result<FrameSnapshot, String>;

    /// Advance one frame with the given controller action.
    fn step(&mut self, action: u8) -> Result<StepOutput, String>;

    /// Release the environment. Must be safe to call after any sequence of
    /// `reset`/`step` calls, including after one of them has failed.
    fn close(&mut self) -> Result<(), String>;
}
