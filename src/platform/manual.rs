//! Manually driven platform
//!
//! Nothing happens on its own: frame requests are only counted, and the
//! owner decides when to run them (see `Game::pump`). Used by tests and the
//! headless native binary.

use super::{FrameScheduler, Readouts, RoundNotifier};
use crate::sim::RoundOutcome;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualPlatform {
    /// Total frames requested since creation
    pub frame_requests: u32,
    /// Every end-of-round notification, oldest first
    pub notifications: Vec<RoundOutcome>,
    /// Every (score, lives) pair pushed to the readouts, oldest first
    pub readouts: Vec<(u64, u32)>,
}

impl ManualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent readout values
    pub fn last_readout(&self) -> Option<(u64, u32)> {
        self.readouts.last().copied()
    }
}

impl FrameScheduler for ManualPlatform {
    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }
}

impl RoundNotifier for ManualPlatform {
    fn notify(&mut self, outcome: RoundOutcome) {
        log::info!("Round over: {}", outcome.message());
        self.notifications.push(outcome);
    }
}

impl Readouts for ManualPlatform {
    fn show(&mut self, score: u64, lives: u32) {
        self.readouts.push((score, lives));
    }
}
