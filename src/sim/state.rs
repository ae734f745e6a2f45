//! Game state and core simulation types
//!
//! Entity fields are crate-private: outside the simulation they are only
//! reachable through shared references and accessor methods, so the engine is
//! the sole writer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::FieldConfig;
use crate::consts::BRICK_KINDS;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed or stopped; bricks are laid out for display
    #[default]
    Idle,
    /// Frames are being advanced
    Running,
    /// Run finished by a win or a loss
    Ended,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Paddle {
    /// Paddle centered horizontally at its fixed height
    pub(crate) fn new(config: &FieldConfig) -> Self {
        Self {
            x: config.paddle_center_x(),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal center of the paddle
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub(crate) pos: Vec2,
    /// Displacement per frame
    pub(crate) vel: Vec2,
    pub(crate) radius: f32,
}

impl Ball {
    /// Ball resting on top of the paddle's center with serve velocity
    pub(crate) fn served(paddle: &Paddle, radius: f32, speed: f32) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        };
        ball.serve(paddle, speed);
        ball
    }

    /// Reset to the serve position above `paddle` and the canonical velocity
    pub(crate) fn serve(&mut self, paddle: &Paddle, speed: f32) {
        self.pos = Vec2::new(paddle.center_x(), paddle.y - self.radius);
        self.vel = Vec2::new(speed, -speed);
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn dx(&self) -> f32 {
        self.vel.x
    }

    pub fn dy(&self) -> f32 {
        self.vel.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Bounding square used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) broken: bool,
    /// Sprite category, no gameplay effect
    pub(crate) kind: u8,
}

impl Brick {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Cosmetic category in `0..BRICK_KINDS`, picked per row
    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Lay out a fresh grid, row-major, all bricks intact
pub(crate) fn build_bricks(config: &FieldConfig) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(config.brick_count().unwrap_or_default());
    for row in 0..config.brick_rows {
        for col in 0..config.brick_cols {
            bricks.push(Brick {
                x: col as f32 * (config.brick_width + config.brick_padding)
                    + config.brick_offset_left,
                y: row as f32 * (config.brick_height + config.brick_padding)
                    + config.brick_offset_top,
                width: config.brick_width,
                height: config.brick_height,
                broken: false,
                kind: (row % BRICK_KINDS as u32) as u8,
            });
        }
    }
    bricks
}

/// Complete mutable session state, owned by the engine
#[derive(Debug, Clone)]
pub(crate) struct GameState {
    pub config: FieldConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major grid order
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Idle state with the grid already laid out for display
    pub fn new(config: FieldConfig) -> Self {
        let paddle = Paddle::new(&config);
        let ball = Ball::served(&paddle, config.ball_radius, config.ball_speed);
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: config.initial_lives,
            bricks: build_bricks(&config),
            paddle,
            ball,
            config,
        }
    }

    /// Restore score, lives, bricks, paddle and ball for a new run
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.bricks = build_bricks(&self.config);
        self.paddle.x = self.config.paddle_center_x();
        self.serve_ball();
    }

    /// Put the ball back above the paddle's current position
    pub fn serve_ball(&mut self) {
        self.ball.serve(&self.paddle, self.config.ball_speed);
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.broken).count()
    }

    pub fn all_bricks_broken(&self) -> bool {
        self.bricks.iter().all(|b| b.broken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_grid_layout_row_major() {
        let bricks = build_bricks(&FieldConfig::default());
        assert_eq!(bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);

        let first = &bricks[0];
        assert_eq!((first.x, first.y), (BRICK_OFFSET_LEFT, BRICK_OFFSET_TOP));

        // Second brick is the next column of the first row
        assert_eq!(bricks[1].x, BRICK_OFFSET_LEFT + BRICK_WIDTH + BRICK_PADDING);
        assert_eq!(bricks[1].y, BRICK_OFFSET_TOP);

        // Eleventh brick starts the second row
        let row1 = &bricks[BRICK_COLS as usize];
        assert_eq!(row1.x, BRICK_OFFSET_LEFT);
        assert_eq!(row1.y, BRICK_OFFSET_TOP + BRICK_HEIGHT + BRICK_PADDING);

        let last = bricks.last().unwrap();
        assert_eq!(last.x, 30.0 + 9.0 * 69.0);
        assert_eq!(last.y, 30.0 + 4.0 * 33.0);
        assert!(bricks.iter().all(|b| !b.broken));
    }

    #[test]
    fn test_brick_kind_follows_row() {
        let config = FieldConfig {
            brick_rows: 8,
            brick_cols: 2,
            ..Default::default()
        };
        let kinds: Vec<u8> = build_bricks(&config).iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 0, 0, 1, 1]);
    }

    #[test]
    fn test_new_state_is_idle_with_serve_position() {
        let state = GameState::new(FieldConfig::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.paddle.x, 311.0);
        assert_eq!(state.paddle.y, 562.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 548.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(state.bricks_remaining(), 50);
    }

    #[test]
    fn test_serve_tracks_paddle() {
        let mut state = GameState::new(FieldConfig::default());
        state.paddle.x = 0.0;
        state.ball.vel = Vec2::new(-3.0, 2.0);
        state.serve_ball();
        assert_eq!(state.ball.pos, Vec2::new(89.0, 548.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_ball_bounds() {
        let state = GameState::new(FieldConfig::default());
        let bounds = state.ball.bounds();
        assert_eq!(bounds, Rect::new(386.0, 534.0, 28.0, 28.0));
    }
}
