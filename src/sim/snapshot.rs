//! Read-only view of the state for renderers
//!
//! Draw order is up to the caller. Nothing here feeds back into the
//! simulation.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::player::AnimState;
use super::state::{GamePhase, GameState};
use crate::assets::{FrameSource, SpriteFrame};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub state: AnimState,
    pub frame: SpriteFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub highscore: u64,
    pub floor_top: f32,
    pub player: PlayerView,
    pub obstacles: Vec<Rect>,
    pub obstacle_sprite: FrameSource,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            highscore: state.highscore,
            floor_top: state.settings.floor_top(),
            player: PlayerView {
                rect: state.player.rect(),
                state: state.player.state,
                frame: state.player.current_frame(&state.sprites),
            },
            obstacles: state.obstacles.rects().collect(),
            obstacle_sprite: state.obstacle_sprite,
        }
    }
}

impl GameState {
    /// Capture what a renderer needs for this frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Color;
    use crate::settings::Settings;

    #[test]
    fn test_snapshot_of_fresh_state() {
        let state = GameState::new(Settings::default(), 3);
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::MainMenu);
        assert_eq!(snap.floor_top, 500.0);
        assert_eq!(snap.player.rect, Rect::new(50.0, 480.0, 20.0, 20.0));
        assert_eq!(
            snap.player.frame,
            SpriteFrame::Solid {
                color: Color::GREEN,
                flipped: false
            }
        );
        assert_eq!(snap.obstacles.len(), 3);
        assert_eq!(snap.obstacles[0], Rect::new(650.0, 480.0, 20.0, 20.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Settings::default(), 3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"MainMenu\""));
    }
}
