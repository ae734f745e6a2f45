//! Playfield configuration
//!
//! The defaults are the fixed constants in [`crate::consts`]. A host may load
//! an override from JSON, but it is validated once at engine construction:
//! an out-of-range value is a programming error, never a runtime condition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a [`FieldConfig`] is rejected
#[derive(Debug)]
pub enum ConfigError {
    /// A dimension or speed is NaN or infinite
    NonFinite(&'static str),
    /// A size that must be strictly positive is not
    NonPositive(&'static str),
    /// An offset or margin that must not be negative is
    Negative(&'static str),
    /// Paddle is wider than the playfield
    PaddleTooWide { paddle: f32, field: f32 },
    /// Ball cannot fit between the paddle and the ceiling
    BallTooLarge { radius: f32 },
    /// Brick grid needs at least one row and one column
    EmptyGrid,
    /// Brick grid extends past the playfield edges
    GridOutOfBounds { right: f32, bottom: f32 },
    /// Clearing the full grid would overflow the score counter
    ScoreOverflow { brick_score: u32, bricks: usize },
    /// A session with no lives cannot be played
    NoLives,
    /// Malformed JSON
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite(field) => write!(f, "{field} must be finite"),
            ConfigError::NonPositive(field) => write!(f, "{field} must be > 0"),
            ConfigError::Negative(field) => write!(f, "{field} must be >= 0"),
            ConfigError::PaddleTooWide { paddle, field } => {
                write!(f, "paddle width {paddle} exceeds field width {field}")
            }
            ConfigError::BallTooLarge { radius } => {
                write!(f, "ball radius {radius} does not fit above the paddle")
            }
            ConfigError::EmptyGrid => write!(f, "brick grid needs at least one row and column"),
            ConfigError::GridOutOfBounds { right, bottom } => {
                write!(f, "brick grid extends to ({right}, {bottom}), outside the field")
            }
            ConfigError::ScoreOverflow {
                brick_score,
                bricks,
            } => write!(f, "{bricks} bricks at {brick_score} points overflow the score"),
            ConfigError::NoLives => write!(f, "initial lives must be at least 1"),
            ConfigError::Parse(_) => write!(f, "invalid config json"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Playfield, entity and rule settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between paddle and floor
    pub paddle_bottom_margin: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Serve velocity is (+speed, -speed) per frame
    pub ball_speed: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Rules ===
    pub initial_lives: u32,
    pub brick_score: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_INITIAL_SPEED,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            initial_lives: INITIAL_LIVES,
            brick_score: BRICK_SCORE,
        }
    }
}

impl FieldConfig {
    /// Top edge of the paddle (fixed for the session)
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_height - self.paddle_bottom_margin
    }

    /// Paddle X that centers it horizontally
    pub fn paddle_center_x(&self) -> f32 {
        self.width / 2.0 - self.paddle_width / 2.0
    }

    /// Largest legal paddle X
    pub fn paddle_max_x(&self) -> f32 {
        self.width - self.paddle_width
    }

    /// Number of bricks in a full grid, `None` if it does not fit a `usize`
    pub fn brick_count(&self) -> Option<usize> {
        (self.brick_rows as usize).checked_mul(self.brick_cols as usize)
    }

    /// Score for clearing the whole grid, `None` on overflow
    pub fn max_score(&self) -> Option<u32> {
        self.brick_count()
            .and_then(|n| u32::try_from(n).ok())
            .and_then(|n| n.checked_mul(self.brick_score))
    }

    /// Check every value once, before an engine is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_bottom_margin", self.paddle_bottom_margin),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive(*name));
        }
        for (name, v) in [
            ("paddle_bottom_margin", self.paddle_bottom_margin),
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ] {
            if v < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }

        if self.paddle_width > self.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.width,
            });
        }
        if self.paddle_y() - 2.0 * self.ball_radius < 0.0 || 2.0 * self.ball_radius > self.width
        {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
            });
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let right = self.brick_offset_left
            + self.brick_cols as f32 * (self.brick_width + self.brick_padding)
            - self.brick_padding;
        let bottom = self.brick_offset_top
            + self.brick_rows as f32 * (self.brick_height + self.brick_padding)
            - self.brick_padding;
        if right > self.width || bottom > self.paddle_y() {
            return Err(ConfigError::GridOutOfBounds { right, bottom });
        }
        if self.max_score().is_none() {
            return Err(ConfigError::ScoreOverflow {
                brick_score: self.brick_score,
                bricks: self.brick_count().unwrap_or(usize::MAX),
            });
        }

        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Parse and validate a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        if let Err(e) = config.validate() {
            log::warn!("Rejected field config: {e}");
            return Err(e);
        }
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paddle_y(), 562.0);
        assert_eq!(config.paddle_center_x(), 311.0);
        assert_eq!(config.paddle_max_x(), 622.0);
        assert_eq!(config.brick_count(), Some(50));
        assert_eq!(config.max_score(), Some(500));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FieldConfig::from_json(r#"{ "initial_lives": 5, "ball_speed": 7.5 }"#)
            .expect("valid override");
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.ball_speed, 7.5);
        assert_eq!(config.width, GAME_WIDTH);
        assert_eq!(config.brick_rows, BRICK_ROWS);
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let config = FieldConfig {
            brick_rows: 3,
            brick_score: 25,
            ..Default::default()
        };
        let parsed = FieldConfig::from_json(&config.to_json()).expect("roundtrip");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let wide = FieldConfig {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));

        let empty = FieldConfig {
            brick_cols: 0,
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyGrid)));

        let crowded = FieldConfig {
            brick_cols: 20,
            ..Default::default()
        };
        assert!(matches!(
            crowded.validate(),
            Err(ConfigError::GridOutOfBounds { .. })
        ));

        let dead = FieldConfig {
            initial_lives: 0,
            ..Default::default()
        };
        assert!(matches!(dead.validate(), Err(ConfigError::NoLives)));

        let nan = FieldConfig {
            ball_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NonFinite("ball_speed"))
        ));

        let flat = FieldConfig {
            brick_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            flat.validate(),
            Err(ConfigError::NonPositive("brick_height"))
        ));
    }

    #[test]
    fn test_rejects_score_that_would_overflow() {
        let greedy = FieldConfig {
            brick_score: u32::MAX,
            ..Default::default()
        };
        assert_eq!(greedy.max_score(), None);
        assert!(matches!(
            greedy.validate(),
            Err(ConfigError::ScoreOverflow {
                brick_score: u32::MAX,
                bricks: 50
            })
        ));

        // Largest award whose full-grid total still fits
        let edge = FieldConfig {
            brick_score: u32::MAX / 50,
            ..Default::default()
        };
        assert!(edge.validate().is_ok());
        assert_eq!(edge.max_score(), Some(u32::MAX / 50 * 50));

        let rejected = FieldConfig::from_json(r#"{ "brick_score": 4294967295 }"#);
        assert!(matches!(rejected, Err(ConfigError::ScoreOverflow { .. })));
    }

    #[test]
    fn test_malformed_json_keeps_source() {
        use std::error::Error;

        let err = FieldConfig::from_json("{ width: ").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
        let source = err.source().expect("json error attached");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }
}
