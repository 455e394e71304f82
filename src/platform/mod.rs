//! Platform abstraction layer
//!
//! The loop controller only talks to the host through these seams:
//! - Frame scheduling (display refresh on the web, a manual clock in tests)
//! - Blocking end-of-round notifications
//! - Score / lives readouts
//! - At most one live game per host

mod instance;
mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use instance::InstanceSlot;
pub use manual::ManualPlatform;

use crate::sim::RoundOutcome;

/// Schedules exactly one future call to `Game::frame`
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Shows the end-of-round message
///
/// Must not return until the player has acknowledged it; the game is reset
/// right after this returns.
pub trait RoundNotifier {
    fn notify(&mut self, outcome: RoundOutcome);
}

/// Live score and lives display
pub trait Readouts {
    fn show(&mut self, score: u64, lives: u32);
}

/// Everything a host provides to a running game
pub trait Platform: FrameScheduler + RoundNotifier + Readouts {}

impl<T: FrameScheduler + RoundNotifier + Readouts> Platform for T {}
