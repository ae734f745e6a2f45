//! Per-frame simulation step
//!
//! One call moves the ball by exactly one frame's velocity. There is no
//! delta time: simulation speed follows however often the host steps it.

use log::debug;

use super::collision::{
    ball_hits_ceiling, ball_hits_floor, ball_hits_side_wall, ball_overlaps_rect,
};
use super::state::{GamePhase, GameState};

/// What a single frame concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameOutcome {
    /// Still running, another frame is wanted
    Continue,
    /// Last life lost
    Lost,
    /// Every brick broken
    Won,
}

/// Advance the running game state by one frame
///
/// Order is fixed: move, side walls, ceiling, floor, paddle, bricks, then the
/// terminal check. Reflections only flip velocity; the ball is never pushed
/// back inside the walls, so it may overlap one for a frame.
pub(crate) fn step_frame(state: &mut GameState) -> FrameOutcome {
    let width = state.config.width;
    let height = state.config.height;

    // Translate
    let vel = state.ball.vel;
    state.ball.pos += vel;

    // Side walls
    if ball_hits_side_wall(state.ball.pos, state.ball.radius, width) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Ceiling
    if ball_hits_ceiling(state.ball.pos, state.ball.radius) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Floor costs a life
    if ball_hits_floor(state.ball.pos, state.ball.radius, height) {
        state.lives = state.lives.saturating_sub(1);
        debug!("Ball lost, {} lives left", state.lives);
        if state.lives == 0 {
            state.phase = GamePhase::Ended;
            return FrameOutcome::Lost;
        }
        // Paddle and brick checks below still see the respawned ball
        state.serve_ball();
    }

    // Paddle: vertical reflection only, snapped on top to avoid re-triggering
    let paddle = state.paddle.rect();
    if ball_overlaps_rect(state.ball.pos, state.ball.radius, &paddle) {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = paddle.y - state.ball.radius;
    }

    // Bricks: every overlapping intact brick counts, each flips dy
    let award = state.config.brick_score;
    for (idx, brick) in state.bricks.iter_mut().enumerate() {
        if brick.broken || !ball_overlaps_rect(state.ball.pos, state.ball.radius, &brick.rect())
        {
            continue;
        }
        state.ball.vel.y = -state.ball.vel.y;
        brick.broken = true;
        state.score += award;
        debug!("Brick {idx} broken, score {}", state.score);
    }

    if state.lives == 0 {
        state.phase = GamePhase::Ended;
        FrameOutcome::Lost
    } else if state.all_bricks_broken() {
        state.phase = GamePhase::Ended;
        FrameOutcome::Won
    } else {
        FrameOutcome::Continue
    }
}
