//! Owned copy of everything a renderer may observe

use serde::{Deserialize, Serialize};

use super::state::{Ball, Brick, GamePhase, GameState, Paddle};

/// Frame snapshot for polling renderers
///
/// Detached from the engine: changing a snapshot never affects the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub running: bool,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
}

impl Snapshot {
    pub(crate) fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            running: state.phase == GamePhase::Running,
            score: state.score,
            lives: state.lives,
            paddle: state.paddle.clone(),
            ball: state.ball.clone(),
            bricks: state.bricks.clone(),
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_broken()).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::new(FieldConfig::default());
        let snapshot = Snapshot::capture(&state);
        state.score = 40;
        state.bricks[0].broken = true;
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.bricks_remaining(), 50);
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::new(FieldConfig::default());
        let json = Snapshot::capture(&state).to_json().expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["phase"], "Idle");
        assert_eq!(value["running"], false);
        assert_eq!(value["lives"], 3);
        assert_eq!(value["paddle"]["x"], 311.0);
        assert_eq!(value["bricks"].as_array().map(Vec::len), Some(50));
    }
}
