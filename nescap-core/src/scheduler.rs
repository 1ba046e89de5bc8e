//! Frame scheduling: deciding which tick triggers which capture.

/// Progress through one capture run.
///
/// Owned exclusively by [`FrameScheduler`]; only its tick operation mutates
/// it. The frame count moves by exactly one per tick and never resets, even
/// when the environment is reset mid-run.
#[derive(Debug, Clone, Copy, Default)]
struct RunState {
    frame_count: u64,
    next_target: usize,
}

/// Decides, each tick, whether a capture is due.
///
/// Purely a decision function over [`RunState`]; performs no I/O. Loop
/// termination (budget reached, targets exhausted) is the caller's concern.
#[derive(Debug)]
pub struct FrameScheduler {
    targets: Vec<u64>,
    state: RunState,
}

impl FrameScheduler {
    /// Construct a scheduler over a strictly increasing target sequence.
    pub fn new(targets: &[u64]) -> Self {
        Self {
            targets: targets.to_vec(),
            state: RunState::default(),
        }
    }

    /// Advance one tick and report the capture due at it, if any.
    ///
    /// Returns the 1-based sequence index of the captured target. The rule
    /// is `frame_count >= next unreached target`, not strict equality, so a
    /// counter that has moved past a target still yields exactly one capture
    /// for it; a target is never re-reported and at most one capture fires
    /// per tick.
    pub fn tick(&mut self) -> Option<usize> {
        self.state.frame_count += 1;
        match self.targets.get(self.state.next_target) {
            Some(&target) if self.state.frame_count >= target => {
                self.state.next_target += 1;
                Some(self.state.next_target)
            }
            _ => None,
        }
    }

    /// Ticks executed so far.
    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    /// True once every target has been reported.
    pub fn exhausted(&self) -> bool {
        self.state.next_target >= self.targets.len()
    }

    /// Number of targets this run is scheduled to capture.
    pub fn total_targets(&self) -> usize {
        self.targets.len()
    }
}
