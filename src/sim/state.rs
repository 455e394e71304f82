//! Game state and core entity types
//!
//! Plain records: every mutation happens in `tick` or in the reset helpers
//! below, which the loop controller calls between rounds.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::BLOCK_HUE_STEP;
use crate::tuning::Tuning;
use crate::{Rgba, hsl_to_rgba};

/// The player's paddle (y is fixed for the whole session)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per frame
    pub speed: f32,
}

impl Paddle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.field_width / 2.0 - tuning.paddle_width / 2.0,
                tuning.paddle_y(),
            ),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Normalized contact position: 0 = left edge, 1 = right edge
    pub fn hit_fraction(&self, x: f32) -> f32 {
        (x - self.pos.x) / self.width
    }
}

/// The ball (position is its center)
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Alive flag; flips to false exactly once per round
    pub visible: bool,
    pub color: Rgba,
    /// Grid row this block was laid out in
    pub row: usize,
}

impl Block {
    /// Strict containment of a point (block edges do not count)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.width
            && point.y > self.pos.y
            && point.y < self.pos.y + self.height
    }
}

/// Deterministic row color: hsl(row * 30, 70%, 50%)
pub fn row_color(row: usize) -> Rgba {
    hsl_to_rgba(row as f32 * BLOCK_HUE_STEP, 0.7, 0.5)
}

/// Complete session state for one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the ball-direction RNG was created with
    pub seed: u64,
    pub tuning: Tuning,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major block grid
    pub blocks: Vec<Block>,
    /// Never decreases within a round
    pub score: u64,
    pub lives: u32,
    /// Simulation advances only while true
    pub running: bool,
    /// Frames simulated since the last full reset
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a freshly reset, paused game
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            paddle: Paddle::new(&tuning),
            ball: Ball::new(tuning.ball_radius),
            blocks: Vec::with_capacity(tuning.block_count()),
            score: 0,
            lives: tuning.starting_lives,
            running: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.reset_game();
        state
    }

    /// Rebuild the block grid: rows x cols, row-major, all visible
    pub fn init_blocks(&mut self) {
        let t = &self.tuning;
        self.blocks.clear();
        for row in 0..t.block_rows {
            for col in 0..t.block_cols {
                self.blocks.push(Block {
                    pos: Vec2::new(
                        col as f32 * (t.block_width + t.block_padding) + t.block_offset_left,
                        row as f32 * (t.block_height + t.block_padding) + t.block_offset_top,
                    ),
                    width: t.block_width,
                    height: t.block_height,
                    visible: true,
                    color: row_color(row),
                    row,
                });
            }
        }
    }

    /// Recenter the ball and relaunch it upward with a random horizontal sign
    pub fn reset_ball(&mut self) {
        let t = &self.tuning;
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.pos = Vec2::new(t.field_width / 2.0, t.field_height / 2.0);
        self.ball.vel = Vec2::new(sign * t.ball_launch_dx.abs(), t.ball_launch_dy);
    }

    /// Full reset: score, lives, paddle, ball and blocks
    ///
    /// Leaves `running` untouched; callers stop the loop before resetting.
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.time_ticks = 0;
        self.paddle = Paddle::new(&self.tuning);
        self.ball.radius = self.tuning.ball_radius;
        self.reset_ball();
        self.init_blocks();
        log::info!(
            "Game reset: {} blocks, {} lives (seed {})",
            self.blocks.len(),
            self.lives,
            self.seed
        );
    }

    pub fn visible_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.visible).count()
    }

    pub fn all_blocks_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.visible)
    }
}
