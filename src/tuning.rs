//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a host can ship a JSON
//! override without rebuilding. Defaults give the classic 800x600 layout.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the paddle's top edge to the bottom of the field
    pub paddle_bottom_gap: f32,
    /// Horizontal movement per frame while a direction key is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_launch_dx: f32,
    pub ball_launch_dy: f32,
    pub spin_factor: f32,

    // === Blocks ===
    pub block_rows: usize,
    pub block_cols: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_padding: f32,
    pub block_offset_top: f32,
    pub block_offset_left: f32,

    // === Session ===
    pub starting_lives: u32,
    pub points_per_block: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_launch_dx: BALL_LAUNCH_DX,
            ball_launch_dy: BALL_LAUNCH_DY,
            spin_factor: SPIN_FACTOR,

            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_padding: BLOCK_PADDING,
            block_offset_top: BLOCK_OFFSET_TOP,
            block_offset_left: BLOCK_OFFSET_LEFT,

            starting_lives: STARTING_LIVES,
            points_per_block: POINTS_PER_BLOCK,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Paddle's fixed top edge
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_gap
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Blocks in the grid (saturates on absurd layouts; `validate` rejects those)
    pub fn block_count(&self) -> usize {
        self.block_rows.saturating_mul(self.block_cols)
    }

    /// Reject layouts the simulation cannot honor
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::invalid_tuning(field, format!("must be positive, got {value}")));
            }
        }

        if self.paddle_width > self.field_width {
            return Err(GameError::invalid_tuning(
                "paddle_width",
                "must not exceed field width",
            ));
        }
        if self.paddle_speed > self.field_width {
            return Err(GameError::invalid_tuning(
                "paddle_speed",
                "must not exceed field width",
            ));
        }
        if !(0.0..self.field_height).contains(&self.paddle_y()) {
            return Err(GameError::invalid_tuning(
                "paddle_bottom_gap",
                "paddle must sit inside the field",
            ));
        }
        match self.block_rows.checked_mul(self.block_cols) {
            None => {
                return Err(GameError::invalid_tuning(
                    "block_rows",
                    format!("{} x {} grid is too large", self.block_rows, self.block_cols),
                ));
            }
            Some(0) => {
                return Err(GameError::invalid_tuning(
                    "block_rows",
                    "grid needs at least one block",
                ));
            }
            Some(_) => {}
        }

        let grid_right = self.block_offset_left
            + self.block_cols as f32 * (self.block_width + self.block_padding)
            - self.block_padding;
        let grid_bottom = self.block_offset_top
            + self.block_rows as f32 * (self.block_height + self.block_padding)
            - self.block_padding;
        if self.block_offset_left < 0.0 || grid_right > self.field_width {
            return Err(GameError::invalid_tuning(
                "block_cols",
                format!("grid spans to x={grid_right}, field is {}", self.field_width),
            ));
        }
        if self.block_offset_top < 0.0 || grid_bottom >= self.paddle_y() {
            return Err(GameError::invalid_tuning(
                "block_rows",
                format!("grid reaches y={grid_bottom}, paddle is at {}", self.paddle_y()),
            ));
        }

        if self.starting_lives == 0 {
            return Err(GameError::invalid_tuning("starting_lives", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.block_count(), 60);
        assert_eq!(tuning.paddle_y(), 570.0);
        assert_eq!(tuning.paddle_max_x(), 700.0);
    }

    #[test]
    fn test_rejects_grid_size_overflow() {
        let err =
            Tuning::from_json(r#"{ "block_rows": 4294967296, "block_cols": 4294967296 }"#)
                .unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTuning {
                field: "block_rows",
                ..
            }
        ));

        let tuning = Tuning {
            block_rows: usize::MAX,
            block_cols: 2,
            ..Tuning::default()
        };
        assert_eq!(tuning.block_count(), usize::MAX);
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "paddle_speed": 12.0 }"#).unwrap();
        assert_eq!(tuning.paddle_speed, 12.0);
        assert_eq!(tuning.block_rows, BLOCK_ROWS);
    }

    #[test]
    fn test_rejects_wide_paddle() {
        let err = Tuning::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTuning {
                field: "paddle_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_overflowing_grid() {
        let tuning = Tuning {
            block_cols: 11,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_lives() {
        let tuning = Tuning {
            starting_lives: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_garbage_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(GameError::SettingsParse(_))
        ));
    }
}
