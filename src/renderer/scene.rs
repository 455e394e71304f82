//! Scene drawing
//!
//! Paints the current game state onto any [`DrawSurface`]. Reads only; the
//! state is borrowed immutably so drawing can never change the game.

use glam::Vec2;

use super::surface::DrawSurface;
use super::vertex::colors;
use crate::consts::START_PROMPT;
use crate::sim::GameState;

/// Font size of the paused prompt
pub const PROMPT_SIZE: f32 = 48.0;
/// Block outline width
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Draw one frame: paddle, ball, live blocks, and the pause overlay
pub fn draw(state: &GameState, surface: &mut impl DrawSurface) {
    let field = Vec2::new(state.tuning.field_width, state.tuning.field_height);

    surface.clear(colors::BACKGROUND);

    let paddle = &state.paddle;
    surface.fill_rect(
        paddle.pos,
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    );

    surface.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);

    for block in state.blocks.iter().filter(|b| b.visible) {
        let size = Vec2::new(block.width, block.height);
        surface.fill_rect(block.pos, size, block.color);
        surface.stroke_rect(block.pos, size, colors::BLOCK_OUTLINE, OUTLINE_WIDTH);
    }

    if !state.running {
        surface.fill_rect(Vec2::ZERO, field, colors::SCRIM);
        surface.fill_text(START_PROMPT, field / 2.0, PROMPT_SIZE, colors::PROMPT_TEXT);
    }
}
