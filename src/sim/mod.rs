//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use difficulty::Difficulty;
pub use obstacles::ObstacleField;
pub use player::{AnimState, Controls, Player};
pub use snapshot::{PlayerView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, LoopControl, TickInput, tick};
