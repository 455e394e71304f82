//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame. There is no
//! delta-time scaling: velocities are in field units per frame.

use super::collision::{ball_hits_paddle, ball_lost, ball_wall_contact, paddle_spin};
use super::state::GameState;
use crate::consts::{GAME_OVER_MESSAGE, WIN_MESSAGE};

/// Movement keys sampled at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every block destroyed
    Won,
    /// Last life lost
    GameOver,
}

impl RoundOutcome {
    /// Text shown in the blocking end-of-round notification
    pub fn message(&self) -> &'static str {
        match self {
            RoundOutcome::Won => WIN_MESSAGE,
            RoundOutcome::GameOver => GAME_OVER_MESSAGE,
        }
    }
}

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off a side or the top wall
    WallBounce,
    /// Ball reflected off the paddle
    PaddleHit { hit_fraction: f32 },
    /// Block at `index` destroyed and `points` awarded
    BlockDestroyed { index: usize, points: u64 },
    /// Ball fell past the bottom edge
    LifeLost { lives_left: u32 },
    /// Round finished; the simulation has already stopped running
    RoundOver(RoundOutcome),
}

/// Advance the game state by one frame
///
/// Does nothing while the game is not running. Order within a frame:
/// paddle, ball translation, walls, paddle bounce, blocks, win check, then
/// loss check. A frame that clears the last block never also costs a life.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.running {
        return events;
    }
    state.time_ticks += 1;

    let field_width = state.tuning.field_width;
    let field_height = state.tuning.field_height;
    let max_x = state.tuning.paddle_max_x();

    // Paddle: guard, move, then clamp so a large step can't overshoot
    let paddle = &mut state.paddle;
    if input.left && paddle.pos.x > 0.0 {
        paddle.pos.x -= paddle.speed;
    }
    if input.right && paddle.pos.x < max_x {
        paddle.pos.x += paddle.speed;
    }
    paddle.pos.x = paddle.pos.x.clamp(0.0, max_x);

    // Explicit Euler, one step per frame
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let walls = ball_wall_contact(ball, field_width);
    if walls.side {
        ball.vel.x = -ball.vel.x;
    }
    if walls.top {
        ball.vel.y = -ball.vel.y;
    }
    if walls.any() {
        events.push(GameEvent::WallBounce);
    }

    if ball_hits_paddle(ball, &state.paddle) {
        let hit_fraction = state.paddle.hit_fraction(ball.pos.x);
        ball.vel.y = -ball.vel.y;
        ball.vel.x = paddle_spin(hit_fraction, state.tuning.spin_factor);
        log::debug!("Paddle hit at {:.2}, dx={:.2}", hit_fraction, ball.vel.x);
        events.push(GameEvent::PaddleHit { hit_fraction });
    }

    // Every visible block containing the ball center breaks this frame,
    // each one flipping dy and scoring on its own.
    let points = state.tuning.points_per_block;
    for (index, block) in state.blocks.iter_mut().enumerate().rev() {
        if block.visible && block.contains(state.ball.pos) {
            block.visible = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += points;
            log::debug!("Block {} destroyed, score {}", index, state.score);
            events.push(GameEvent::BlockDestroyed { index, points });
        }
    }

    if state.all_blocks_cleared() {
        state.running = false;
        log::info!("All blocks cleared, final score {}", state.score);
        events.push(GameEvent::RoundOver(RoundOutcome::Won));
        return events;
    }

    if ball_lost(&state.ball, field_height) {
        state.lives = state.lives.saturating_sub(1);
        log::debug!("Ball lost, {} lives left", state.lives);
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        if state.lives == 0 {
            state.running = false;
            log::info!("Out of lives, final score {}", state.score);
            events.push(GameEvent::RoundOver(RoundOutcome::GameOver));
        } else {
            state.reset_ball();
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::Block;
    use crate::tuning::Tuning;

    fn running_state() -> GameState {
        let mut state = GameState::new(12345, Tuning::default());
        state.running = true;
        state
    }

    /// Park the ball somewhere harmless, moving slowly down
    fn park_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(400.0, 400.0);
        state.ball.vel = Vec2::new(0.0, 1.0);
    }

    #[test]
    fn test_tick_paused_does_nothing() {
        let mut state = GameState::new(12345, Tuning::default());
        let before = (state.ball.clone(), state.paddle.clone());
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        assert!(events.is_empty());
        assert_eq!((state.ball, state.paddle), before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_ball_translates_by_velocity() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 400.0);
        state.ball.vel = Vec2::new(3.0, -2.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, Vec2::new(403.0, 398.0));
    }

    #[test]
    fn test_paddle_moves_left_and_clamps() {
        let mut state = running_state();
        park_ball(&mut state);
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.pos.x, 342.0);
        for _ in 0..100 {
            park_ball(&mut state);
            tick(&mut state, &input);
            assert!(state.paddle.pos.x >= 0.0);
        }
        assert_eq!(state.paddle.pos.x, 0.0);
    }

    #[test]
    fn test_paddle_moves_right_and_clamps() {
        let mut state = running_state();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..100 {
            park_ball(&mut state);
            tick(&mut state, &input);
            assert!(state.paddle.pos.x <= 700.0);
        }
        assert_eq!(state.paddle.pos.x, 700.0);
    }

    #[test]
    fn test_left_and_right_cancel() {
        let mut state = running_state();
        park_ball(&mut state);
        let input = TickInput {
            left: true,
            right: true,
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(790.0, 400.0);
        state.ball.vel = Vec2::new(5.0, 1.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(state.ball.vel.y, 1.0);
        assert!(events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 10.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, 5.0);
    }

    #[test]
    fn test_paddle_bounce_applies_spin() {
        let mut state = running_state();
        // Lands at x=425 (hit fraction 0.75) with its lower edge past the paddle top
        state.ball.pos = Vec2::new(425.0, 557.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -5.0);
        assert!((state.ball.vel.x - 2.0).abs() < 1e-5);
        assert!(matches!(events[0], GameEvent::PaddleHit { .. }));
    }

    #[test]
    fn test_paddle_does_not_retrigger_while_rising() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(400.0, 566.0);
        state.ball.vel = Vec2::new(0.0, -1.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -1.0);
    }

    #[test]
    fn test_block_destroyed_scores_once() {
        let mut state = running_state();
        // Block 0 spans x 35..105, y 60..80; ball enters it this frame
        state.ball.pos = Vec2::new(70.0, 84.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        let events = tick(&mut state, &TickInput::default());
        assert!(!state.blocks[0].visible);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel.y, 5.0);
        assert!(events.contains(&GameEvent::BlockDestroyed {
            index: 0,
            points: 10
        }));

        // Passing back through the destroyed block scores nothing
        state.ball.pos = Vec2::new(70.0, 66.0);
        state.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel.y, 1.0);
    }

    #[test]
    fn test_overlapping_blocks_all_break_in_one_frame() {
        let mut state = running_state();
        let template = state.blocks[0].clone();
        state.blocks = vec![
            template.clone(),
            Block {
                pos: template.pos + Vec2::new(10.0, 0.0),
                ..template.clone()
            },
            // Keep one far away so the round doesn't end
            Block {
                pos: Vec2::new(600.0, 200.0),
                ..template
            },
        ];
        state.ball.pos = Vec2::new(60.0, 74.0);
        state.ball.vel = Vec2::new(0.0, -4.0);
        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 20);
        // Two flips cancel out
        assert_eq!(state.ball.vel.y, -4.0);
        // Scanned newest first
        let destroyed: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::BlockDestroyed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(destroyed, vec![1, 0]);
    }

    #[test]
    fn test_last_block_wins() {
        let mut state = running_state();
        for block in state.blocks.iter_mut().skip(1) {
            block.visible = false;
        }
        state.ball.pos = Vec2::new(70.0, 84.0);
        state.ball.vel = Vec2::new(0.0, -5.0);
        let events = tick(&mut state, &TickInput::default());
        assert!(!state.running);
        assert_eq!(
            events.last(),
            Some(&GameEvent::RoundOver(RoundOutcome::Won))
        );
    }

    #[test]
    fn test_life_lost_keeps_running() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(20.0, 590.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 2);
        assert!(state.running);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.visible_blocks(), 60);
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
    }

    #[test]
    fn test_last_life_ends_round() {
        let mut state = running_state();
        state.lives = 1;
        state.ball.pos = Vec2::new(20.0, 590.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert!(!state.running);
        assert_eq!(
            events,
            vec![
                GameEvent::LifeLost { lives_left: 0 },
                GameEvent::RoundOver(RoundOutcome::GameOver)
            ]
        );
    }

    #[test]
    fn test_round_outcome_messages() {
        assert_eq!(RoundOutcome::Won.message(), "Congratulations! You won!");
        assert_eq!(
            RoundOutcome::GameOver.message(),
            "Game Over! Press SPACE to restart."
        );
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = running_state();
        let mut state2 = running_state();

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            let e1 = tick(&mut state1, input);
            let e2 = tick(&mut state2, input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.score, state2.score);
    }
}
