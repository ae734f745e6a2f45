//! Simulation engine: lifecycle, commands and read-only state access

use log::info;

use super::schedule::{FrameSchedule, FrameToken};
use super::snapshot::Snapshot;
use super::state::{Ball, Brick, GamePhase, GameState, Paddle};
use super::tick::{FrameOutcome, step_frame};
use crate::config::{ConfigError, FieldConfig};

/// Terminal signal, fired once when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Every brick broken
    Won { score: u32 },
    /// Last life lost
    Lost { score: u32 },
}

impl GameEvent {
    pub fn score(self) -> u32 {
        match self {
            GameEvent::Won { score } | GameEvent::Lost { score } => score,
        }
    }
}

type EventListener = Box<dyn FnMut(GameEvent)>;

/// Owns all game state; the only writer of it
///
/// Hosts drive it by calling [`SimulationEngine::run_frame`] with the token
/// from [`SimulationEngine::pending_frame`] once per display frame, and feed
/// the desired paddle position in between.
pub struct SimulationEngine {
    state: GameState,
    schedule: FrameSchedule,
    listener: Option<EventListener>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// Engine with the standard playfield
    pub fn new() -> Self {
        Self::from_valid_config(FieldConfig::default())
    }

    /// Engine with a custom playfield, rejected if any value is out of range
    pub fn with_config(config: FieldConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected field config: {e}");
            return Err(e);
        }
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FieldConfig) -> Self {
        Self {
            state: GameState::new(config),
            schedule: FrameSchedule::new(),
            listener: None,
        }
    }

    /// Receive win/loss signals synchronously as they happen
    pub fn set_event_listener(&mut self, listener: impl FnMut(GameEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_event_listener(&mut self) {
        self.listener = None;
    }

    // --- Read-only state ---

    pub fn config(&self) -> &FieldConfig {
        &self.state.config
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    /// Bricks in row-major grid order
    pub fn bricks(&self) -> &[Brick] {
        &self.state.bricks
    }

    pub fn bricks_remaining(&self) -> usize {
        self.state.bricks_remaining()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Token the host should pass to `run_frame` next, if a frame is wanted
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.schedule.pending()
    }

    // --- Commands ---

    /// Reset everything and begin running; restarts a run already in progress
    pub fn start(&mut self) {
        self.state.reset();
        self.state.phase = GamePhase::Running;
        self.schedule.request();
        info!(
            "Game started: {} bricks, {} lives",
            self.state.bricks.len(),
            self.state.lives
        );
    }

    /// Stop running and cancel the pending frame; score and positions are kept
    pub fn stop(&mut self) {
        self.schedule.cancel();
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Idle;
            info!("Game stopped at score {}", self.state.score);
        }
    }

    /// Move the paddle, clamped to the field; ignored unless running
    pub fn set_paddle_position(&mut self, x: f32) {
        if !self.running() || x.is_nan() {
            return;
        }
        self.state.paddle.x = x.clamp(0.0, self.state.config.paddle_max_x());
    }

    /// Scheduled-frame entry point; stale or cancelled tokens do nothing
    pub fn run_frame(&mut self, token: FrameToken) -> Option<GameEvent> {
        if !self.schedule.claim(token) {
            return None;
        }
        self.advance()
    }

    /// Step one frame; a no-op unless running
    ///
    /// Returns the terminal signal when this frame ends the run, otherwise
    /// requests the next frame.
    pub fn advance(&mut self) -> Option<GameEvent> {
        if !self.running() {
            self.schedule.cancel();
            return None;
        }

        let event = match step_frame(&mut self.state) {
            FrameOutcome::Continue => {
                self.schedule.request();
                return None;
            }
            FrameOutcome::Lost => GameEvent::Lost {
                score: self.state.score,
            },
            FrameOutcome::Won => GameEvent::Won {
                score: self.state.score,
            },
        };

        self.schedule.cancel();
        match event {
            GameEvent::Won { score } => info!("All bricks cleared! Final score {score}"),
            GameEvent::Lost { score } => info!("Game over. Final score {score}"),
        }
        if let Some(listener) = self.listener.as_mut() {
            listener(event);
        }
        Some(event)
    }

    /// Direct state access for tests
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
