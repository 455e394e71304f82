//! Block Breaker - A classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, physics, collisions)
//! - `input`: Keyboard state tracking
//! - `renderer`: Display list recording and WebGPU presentation
//! - `game`: Frame loop controller (start/pause/reset)
//! - `platform`: Host seams (frame scheduling, round notifications, readouts)
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (logical units, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - sits near the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle's top edge and the bottom of the field
    pub const PADDLE_BOTTOM_GAP: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Horizontal launch speed (sign is randomized on every reset)
    pub const BALL_LAUNCH_DX: f32 = 5.0;
    /// Vertical launch velocity (negative = upward)
    pub const BALL_LAUNCH_DY: f32 = -5.0;
    /// dx = SPIN_FACTOR * (hit_fraction - 0.5) on paddle hits
    pub const SPIN_FACTOR: f32 = 8.0;

    /// Block grid layout
    pub const BLOCK_ROWS: usize = 6;
    pub const BLOCK_COLS: usize = 10;
    pub const BLOCK_WIDTH: f32 = 70.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_PADDING: f32 = 5.0;
    pub const BLOCK_OFFSET_TOP: f32 = 60.0;
    pub const BLOCK_OFFSET_LEFT: f32 = 35.0;
    /// Hue step between block rows (degrees)
    pub const BLOCK_HUE_STEP: f32 = 30.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const POINTS_PER_BLOCK: u64 = 10;

    /// Player-facing text
    pub const START_PROMPT: &str = "Press SPACE to start";
    pub const WIN_MESSAGE: &str = "Congratulations! You won!";
    pub const GAME_OVER_MESSAGE: &str = "Game Over! Press SPACE to restart.";
    pub const CONTROLS_HELP: [&str; 2] = [
        "Use ← → arrow keys or A/D to move the paddle",
        "Press SPACE to start/pause the game",
    ];
}

/// RGBA color with components in [0, 1]
pub type Rgba = [f32; 4];

/// Convert an HSL color (hue in degrees, saturation/lightness in [0, 1]) to RGBA
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> Rgba {
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    [r + m, g + m, b + m, 1.0]
}

/// Parse a `#rrggbb` hex color
pub const fn rgb_hex(hex: u32, alpha: f32) -> Rgba {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Decode an sRGB color to linear light (alpha is left alone)
pub fn srgb_to_linear(color: Rgba) -> Rgba {
    let decode = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [decode(color[0]), decode(color[1]), decode(color[2]), color[3]]
}
