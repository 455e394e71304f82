//! Collision predicates and responses
//!
//! Everything here is a pure function of entity geometry so the tick can be
//! read as a sequence of "test, then respond" steps.

use super::state::{Ball, Paddle};

/// Which walls the ball's edge is beyond this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Crossed the left or right boundary
    pub side: bool,
    /// Crossed the top boundary
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Check the ball against the left, right and top walls
///
/// There is no bottom wall: falling past it is a life loss, see [`ball_lost`].
pub fn ball_wall_contact(ball: &Ball, field_width: f32) -> WallContact {
    WallContact {
        side: ball.right() > field_width || ball.left() < 0.0,
        top: ball.top() < 0.0,
    }
}

/// Paddle hit predicate
///
/// The ball's lower edge has reached the paddle's top edge, its center is
/// within the paddle span (inclusive), and it is still moving down. The
/// direction check stops a ball that still overlaps after bouncing from
/// triggering again.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.pos.y
        && ball.pos.x >= paddle.pos.x
        && ball.pos.x <= paddle.right()
        && ball.vel.y > 0.0
}

/// Horizontal velocity after a paddle hit
///
/// Center hits go nearly straight up, edge hits leave at up to
/// +/- `spin_factor / 2`.
#[inline]
pub fn paddle_spin(hit_fraction: f32, spin_factor: f32) -> f32 {
    spin_factor * (hit_fraction - 0.5)
}

/// Has the ball's lower edge dropped past the bottom of the field?
pub fn ball_lost(ball: &Ball, field_height: f32) -> bool {
    ball.bottom() > field_height
}
