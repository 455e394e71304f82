//! Game loop controller
//!
//! Owns one session (state, input, host platform) and drives the
//! update -> render cycle. Frames only happen when the platform calls back
//! into [`Game::frame`], so the same controller runs against a browser's
//! display refresh or a manual clock.

use crate::error::GameError;
use crate::input::{Action, InputTracker};
use crate::platform::Platform;
use crate::renderer::{DrawList, draw};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RoundOutcome, tick};

pub struct Game<P: Platform> {
    state: GameState,
    input: InputTracker,
    platform: P,
    /// Last rendered frame
    frame: DrawList,
    /// A frame has been requested from the platform and has not run yet
    frame_pending: bool,
}

impl<P: Platform> Game<P> {
    /// Start a paused session and render its first frame
    pub fn new(settings: Settings, seed: u64, platform: P) -> Result<Self, GameError> {
        settings.tuning.validate()?;

        let mut game = Self {
            state: GameState::new(seed, settings.tuning),
            input: InputTracker::new(settings.keymap),
            platform,
            frame: DrawList::new(),
            frame_pending: false,
        };
        game.push_readouts();
        game.render();

        log::info!("New game with seed {}", seed);
        Ok(game)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts staging a position (and for tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Most recently rendered frame
    pub fn draw_list(&self) -> &DrawList {
        &self.frame
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Feed a key-down; returns true if the key is bound to a game control
    pub fn key_down(&mut self, raw: &str) -> bool {
        if let Some(Action::Toggle) = self.input.key_down(raw) {
            self.toggle();
        }
        self.input.is_bound(raw)
    }

    /// Feed a key-up; returns true if the key is bound to a game control
    pub fn key_up(&mut self, raw: &str) -> bool {
        self.input.key_up(raw);
        self.input.is_bound(raw)
    }

    /// Host lost focus: no key-ups will arrive for keys held now
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    /// Start or pause
    pub fn toggle(&mut self) {
        self.state.running = !self.state.running;
        log::info!(
            "{}",
            if self.state.running { "Running" } else { "Paused" }
        );
        if self.state.running {
            self.request_frame();
        }
    }

    /// Run one display frame: update, report, render, reschedule
    pub fn frame(&mut self) {
        self.frame_pending = false;

        let before = (self.state.score, self.state.lives);
        let events = tick(&mut self.state, &self.input.snapshot());

        if (self.state.score, self.state.lives) != before {
            self.push_readouts();
        }

        let outcome = events.iter().find_map(|e| match e {
            GameEvent::RoundOver(outcome) => Some(*outcome),
            _ => None,
        });
        if let Some(outcome) = outcome {
            self.finish_round(outcome);
        }

        self.render();

        if self.state.running {
            self.request_frame();
        }
    }

    /// Run the pending frame, if any; returns whether one ran
    pub fn pump(&mut self) -> bool {
        if self.frame_pending {
            self.frame();
            true
        } else {
            false
        }
    }

    /// End the session and hand the platform back to the host
    pub fn dispose(mut self) -> P {
        self.state.running = false;
        self.input.release_all();
        log::info!("Game disposed at score {}", self.state.score);
        self.platform
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        log::info!("Round over ({:?}) with score {}", outcome, self.state.score);
        // Blocks until acknowledged
        self.platform.notify(outcome);
        self.state.running = false;
        self.state.reset_game();
        self.push_readouts();
    }

    fn request_frame(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.platform.request_frame();
        }
    }

    fn push_readouts(&mut self) {
        self.platform.show(self.state.score, self.state.lives);
    }

    fn render(&mut self) {
        draw(&self.state, &mut self.frame);
    }
}
