//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per display frame
//! - Seeded RNG only
//! - Stable iteration order (block creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_hits_paddle, ball_lost, ball_wall_contact, paddle_spin};
pub use state::{Ball, Block, GameState, Paddle, row_color};
pub use tick::{GameEvent, RoundOutcome, TickInput, tick};
