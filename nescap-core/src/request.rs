//! Validated parameters for one capture run.

use std::path::PathBuf;

use crate::error::HarnessError;

/// Default frame offsets: 1s, 3s, 6s, 10s, 15s, 20s, 25s and 30s at 60 fps.
pub const DEFAULT_TARGETS: [u64; 8] = [60, 180, 360, 600, 900, 1200, 1500, 1800];

/// Default maximum number of frames to run.
pub const DEFAULT_MAX_FRAMES: u64 = 1800;

/// Immutable parameters for one capture run.
///
/// Built once before the run starts; the scheduler relies on the target
/// sequence being strictly increasing and does not sort or deduplicate.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// Path to the ROM image driving the environment
    pub rom_path: PathBuf,
    /// Directory screenshots are written into
    pub output_dir: PathBuf,
    /// Frame offsets at which a capture is due, strictly increasing
    pub targets: Vec<u64>,
    /// Hard ceiling on the number of ticks executed
    pub max_frames: u64,
}

impl CaptureRequest {
    /// Build a request, rejecting parameters the scheduler cannot honor.
    ///
    /// Target offsets must be positive and strictly increasing; the frame
    /// budget must be positive. An empty target list is allowed (the run
    /// then executes zero ticks and reports the empty-capture warning).
    pub fn new(
        rom_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        targets: Vec<u64>,
        max_frames: u64,
    ) -> Result<Self, HarnessError> {
        if targets.first() == Some(&0) {
            return Err(HarnessError::InvalidInput(
                "target frame offsets must be positive".to_string(),
            ));
        }
        if let Some(pair) = targets.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(HarnessError::InvalidInput(format!(
                "target frame offsets must be strictly increasing ({} followed by {})",
                pair[0], pair[1]
            )));
        }
        if max_frames == 0 {
            return Err(HarnessError::InvalidInput(
                "max frame budget must be positive".to_string(),
            ));
        }
        Ok(Self {
            rom_path: rom_path.into(),
            output_dir: output_dir.into(),
            targets,
            max_frames,
        })
    }
}
