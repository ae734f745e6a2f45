//! Seeded paddle controller
//!
//! Plays the game for demos and soak runs: keeps the paddle under the ball
//! with a small random aim error, re-rolled on a fixed cadence. The same seed
//! always produces the same paddle inputs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::SimulationEngine;

/// Frames between aim re-rolls
pub const RETARGET_FRAMES: u32 = 30;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Largest aim error either side of the paddle center
    max_offset: f32,
    offset: f32,
    frames_until_retarget: u32,
}

impl Autopilot {
    pub fn new(seed: u64, max_offset: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_offset: max_offset.abs(),
            offset: 0.0,
            frames_until_retarget: 0,
        }
    }

    /// Paddle X to request this frame
    pub fn target_x(&mut self, engine: &SimulationEngine) -> f32 {
        if self.frames_until_retarget == 0 {
            self.offset = if self.max_offset > 0.0 {
                self.rng.random_range(-self.max_offset..=self.max_offset)
            } else {
                0.0
            };
            self.frames_until_retarget = RETARGET_FRAMES;
        }
        self.frames_until_retarget -= 1;

        let paddle = engine.paddle();
        engine.ball().x() - paddle.width() / 2.0 + self.offset
    }

    /// Feed this frame's target to the engine
    pub fn steer(&mut self, engine: &mut SimulationEngine) {
        let x = self.target_x(engine);
        engine.set_paddle_position(x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_inputs() {
        let mut engine = SimulationEngine::new();
        engine.start();
        let mut a = Autopilot::new(7, 40.0);
        let mut b = Autopilot::new(7, 40.0);
        for _ in 0..100 {
            assert_eq!(a.target_x(&engine), b.target_x(&engine));
        }
    }

    #[test]
    fn test_zero_offset_centers_under_ball() {
        let mut engine = SimulationEngine::new();
        engine.start();
        let mut pilot = Autopilot::new(1, 0.0);
        pilot.steer(&mut engine);
        assert_eq!(engine.paddle().center_x(), engine.ball().x());
    }

    #[test]
    fn test_offset_stays_bounded() {
        let engine = SimulationEngine::new();
        let mut pilot = Autopilot::new(99, 25.0);
        let centered = engine.ball().x() - engine.paddle().width() / 2.0;
        for _ in 0..(RETARGET_FRAMES * 20) {
            let x = pilot.target_x(&engine);
            assert!((x - centered).abs() <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn test_autopilot_keeps_ball_alive() {
        let mut engine = SimulationEngine::new();
        engine.start();
        let mut pilot = Autopilot::new(3, 30.0);
        for _ in 0..2_000 {
            let Some(token) = engine.pending_frame() else {
                break;
            };
            pilot.steer(&mut engine);
            engine.run_frame(token);
        }
        assert_eq!(engine.lives(), 3);
        assert!(engine.score() > 0);
    }
}
