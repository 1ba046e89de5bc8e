//! Built-in deterministic environment.
//!
//! The harness only needs `reset`/`step`/`close`, so the shipped environment
//! does not carry a full emulator core: it validates the iNES header and
//! synthesizes frames from a rolling hash of the ROM image and the frame
//! index. The same ROM always yields the same pixels at the same frame
//! index, which is what a snapshot harness needs from its frame source.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Environment, FrameSnapshot, StepOutput, FRAME_CHANNELS, FRAME_HEIGHT, FRAME_WIDTH};

/// iNES file magic: "NES" followed by 0x1A.
const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Minimum ROM length: the 16-byte iNES header.
const INES_HEADER_LEN: usize = 16;

/// Frames per simulated play-through before the terminal flag is raised.
const EPISODE_LEN: u64 = 600;

/// Deterministic headless environment seeded from a ROM image.
#[derive(Debug)]
pub struct HeadlessEnv {
    rom_seed: u64,
    /// Total frames stepped since construction; never resets
    frame_index: u64,
    /// Frames stepped since the last reset; drives the terminal flag
    since_reset: u64,
    closed: bool,
}

impl HeadlessEnv {
    /// Load a ROM and build an environment seeded from its contents.
    ///
    /// Rejects files that are missing the 16-byte iNES header or its
    /// magic bytes.
    pub fn from_rom(path: &Path) -> Result<Self, String> {
        let bytes = fs::read(path)
            .map_err(|e| format!("failed to read ROM {}: {}", path.display(), e))?;
        if bytes.len() < INES_HEADER_LEN || bytes[..4] != INES_MAGIC {
            return Err(format!(
                "{} is not an iNES ROM (bad or missing header)",
                path.display()
            ));
        }

        // FNV-1a over the whole image seeds the frame generator.
        let mut seed: u64 = 0xcbf29ce484222325;
        for &b in &bytes {
            seed ^= b as u64;
            seed = seed.wrapping_mul(0x100000001b3);
        }

        debug!(rom = %path.display(), seed, "loaded ROM");
        Ok(Self {
            rom_seed: seed,
            frame_index: 0,
            since_reset: 0,
            closed: false,
        })
    }

    /// Render the frame for the current frame index.
    fn render(&self) -> FrameSnapshot {
        let len = (FRAME_WIDTH * FRAME_HEIGHT * FRAME_CHANNELS) as usize;
        let mut pixels = vec![0u8; len];

        // xorshift64 stream keyed by ROM seed and frame index.
        let mut state = self.rom_seed ^ self.frame_index.wrapping_mul(0x9e3779b97f4a7c15);
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }
        for px in pixels.chunks_exact_mut(3) {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            px[0] = (state >> 16) as u8;
            px[1] = (state >> 8) as u8;
            px[2] = state as u8;
        }

        FrameSnapshot {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            pixels,
        }
    }
}

impl Environment for HeadlessEnv {
    fn reset(&mut self) -> Result<FrameSnapshot, String> {
        if self.closed {
            return Err("environment already closed".to_string());
        }
        self.since_reset = 0;
        Ok(self.render())
    }

    fn step(&mut self, _action: u8) -> Result<StepOutput, String> {
        if self.closed {
            return Err("environment already closed".to_string());
        }
        self.frame_index += 1;
        self.since_reset += 1;
        Ok(StepOutput {
            snapshot: self.render(),
            reward: 0.0,
            done: self.since_reset >= EPISODE_LEN,
            info: HashMap::new(),
        })
    }

    fn close(&mut self) -> Result<(), String> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_rom(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    fn fake_rom() -> tempfile::NamedTempFile {
        let mut bytes = vec![0x4E, 0x45, 0x53, 0x1A];
        bytes.resize(16, 0);
        bytes.extend_from_slice(b"PRG-ROM PAYLOAD");
        write_rom(&bytes)
    }

    #[test]
    fn test_rejects_missing_magic() {
        let rom = write_rom(b"definitely not an iNES image");
        let err = HeadlessEnv::from_rom(rom.path()).unwrap_err();
        assert!(err.contains("not an iNES ROM"));
    }

    #[test]
    fn test_rejects_truncated_header() {
        let rom = write_rom(&[0x4E, 0x45, 0x53, 0x1A, 0x00]);
        assert!(HeadlessEnv::from_rom(rom.path()).is_err());
    }

    #[test]
    fn test_frames_are_deterministic_per_index() {
        let rom = fake_rom();
        let mut a = HeadlessEnv::from_rom(rom.path()).unwrap();
        let mut b = HeadlessEnv::from_rom(rom.path()).unwrap();
        a.reset().unwrap();
        b.reset().unwrap();
        for _ in 0..5 {
            let fa = a.step(0).unwrap();
            let fb = b.step(0).unwrap();
            assert_eq!(fa.snapshot.pixels, fb.snapshot.pixels);
        }
    }

    #[test]
    fn test_consecutive_frames_differ() {
        let rom = fake_rom();
        let mut env = HeadlessEnv::from_rom(rom.path()).unwrap();
        env.reset().unwrap();
        let first = env.step(0).unwrap();
        let second = env.step(0).unwrap();
        assert_ne!(first.snapshot.pixels, second.snapshot.pixels);
    }

    #[test]
    fn test_terminal_flag_after_episode() {
        let rom = fake_rom();
        let mut env = HeadlessEnv::from_rom(rom.path()).unwrap();
        env.reset().unwrap();
        for i in 1..=EPISODE_LEN {
            let out = env.step(0).unwrap();
            assert_eq!(out.done, i == EPISODE_LEN);
        }
        // Reset clears the flag but keeps the global frame index moving.
        env.reset().unwrap();
        assert!(!env.step(0).unwrap().done);
    }

    #[test]
    fn test_step_after_close_fails() {
        let rom = fake_rom();
        let mut env = HeadlessEnv::from_rom(rom.path()).unwrap();
        env.close().unwrap();
        assert!(env.step(0).is_err());
        assert!(env.reset().is_err());
    }
}
