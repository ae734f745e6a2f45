//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (row-major brick grid)
//! - No rendering or input-device dependencies

pub mod collision;
pub mod engine;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub(crate) mod tick;

pub use collision::{Rect, ball_overlaps_rect};
pub use engine::{GameEvent, SimulationEngine};
pub use schedule::{FrameSchedule, FrameToken};
pub use snapshot::Snapshot;
pub use state::{Ball, Brick, GamePhase, Paddle};
