//! Game state and session transitions
//!
//! One `GameState` lives for the whole process. Each play session replaces
//! its player, obstacle field and difficulty checkpoint in one step; score
//! and highscore stay on the state so menus can keep showing them.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::obstacles::ObstacleField;
use super::player::Player;
use crate::assets::{Color, FrameSource, PlayerSprites};
use crate::consts::PLAYER_START_X;
use crate::highscores::HighscoreStore;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulates
    #[default]
    MainMenu,
    /// Active session
    Playing,
    /// Session suspended behind the pause overlay
    Paused,
    /// The session just ended; becomes `MainMenu` on the next tick
    GameOver,
}

/// Notifications for the sound and UI layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Jumped,
    /// Obstacles left the screen this tick
    Scored { points: u32, score: u64 },
    SpeedIncreased { speed: f32 },
    /// The player hit an obstacle
    Died { score: u64 },
    NewHighscore { highscore: u64 },
    SessionEnded { score: u64, highscore: u64 },
    Paused,
    Resumed,
    ReturnedToMenu,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub sprites: PlayerSprites,
    pub obstacle_sprite: FrameSource,
    pub phase: GamePhase,
    /// Score of the current (or last) session
    pub score: u64,
    /// Best score, cached from the store
    pub highscore: u64,
    pub player: Player,
    pub obstacles: ObstacleField,
    pub difficulty: Difficulty,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Seeds each session's obstacle field
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state sitting on the main menu
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = fresh_player(&settings);
        let obstacles = fresh_field(&settings, rng.next_u64());
        let difficulty = Difficulty::new(settings.speed_increment, settings.score_band);
        Self {
            settings,
            sprites: PlayerSprites::placeholders(),
            obstacle_sprite: FrameSource::Placeholder(Color::RED),
            phase: GamePhase::MainMenu,
            score: 0,
            highscore: 0,
            player,
            obstacles,
            difficulty,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// True while a session is being simulated
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Re-read the highscore from the store
    pub fn refresh_highscore(&mut self, store: &dyn HighscoreStore) {
        self.highscore = store.load();
    }

    /// Begin a new session from the menu
    pub fn start_session(&mut self, store: &dyn HighscoreStore) {
        self.refresh_highscore(store);
        self.player = fresh_player(&self.settings);
        self.obstacles = fresh_field(&self.settings, self.rng.next_u64());
        self.difficulty = Difficulty::new(self.settings.speed_increment, self.settings.score_band);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.push_event(GameEvent::SessionStarted);
        log::info!("Session started (highscore {})", self.highscore);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            self.push_event(GameEvent::Paused);
            log::debug!("Paused at score {}", self.score);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            self.push_event(GameEvent::Resumed);
            log::debug!("Resumed");
        }
    }

    /// Abandon a paused session without recording it
    pub fn return_to_menu(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::MainMenu;
            self.push_event(GameEvent::ReturnedToMenu);
            log::info!("Session abandoned at score {}", self.score);
        }
    }

    /// End the session after a collision, persisting a beaten highscore
    pub fn end_session(&mut self, store: &mut dyn HighscoreStore) {
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::Died { score: self.score });

        if self.score > self.highscore {
            self.highscore = self.score;
            if let Err(e) = store.save(self.highscore) {
                log::warn!("Failed to save highscore {}: {}", self.highscore, e);
            }
            self.push_event(GameEvent::NewHighscore {
                highscore: self.highscore,
            });
            log::info!("New highscore: {}", self.highscore);
        }

        self.push_event(GameEvent::SessionEnded {
            score: self.score,
            highscore: self.highscore,
        });
        log::info!(
            "Game over: score {} (highscore {})",
            self.score,
            self.highscore
        );
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn fresh_player(settings: &Settings) -> Player {
    Player::new(PLAYER_START_X, settings.floor_top(), settings)
}

fn fresh_field(settings: &Settings, seed: u64) -> ObstacleField {
    ObstacleField::new(
        settings.obstacle_count,
        settings.screen_width,
        settings.floor_top(),
        settings.player_size,
        settings.obstacle_speed,
        seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryHighscoreStore;

    #[test]
    fn test_new_state_on_menu() {
        let state = GameState::new(Settings::default(), 1);
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert!(!state.is_active());
        assert_eq!(state.obstacles.positions, vec![650.0, 800.0, 950.0]);
        assert_eq!(state.player.pos.y, 480.0);
    }

    #[test]
    fn test_start_resets_session() {
        let store = MemoryHighscoreStore::with_highscore(9);
        let mut state = GameState::new(Settings::default(), 1);
        state.score = 30;
        state.obstacles.speed = 7.0;
        state.player.pos.x = 300.0;
        state.difficulty.last_speed_increase = 30;

        state.start_session(&store);
        assert!(state.is_active());
        assert_eq!(state.score, 0);
        assert_eq!(state.highscore, 9);
        assert_eq!(state.obstacles.speed, 2.0);
        assert_eq!(state.player.pos.x, 50.0);
        assert_eq!(state.difficulty.last_speed_increase, -10);
        assert_eq!(state.events(), &[GameEvent::SessionStarted]);
    }

    #[test]
    fn test_end_session_beats_highscore() {
        let mut store = MemoryHighscoreStore::with_highscore(5);
        let mut state = GameState::new(Settings::default(), 1);
        state.start_session(&store);
        state.score = 8;
        state.drain_events();

        state.end_session(&mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.highscore, 8);
        assert_eq!(store.highscore, Some(8));
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Died { score: 8 },
                GameEvent::NewHighscore { highscore: 8 },
                GameEvent::SessionEnded {
                    score: 8,
                    highscore: 8
                },
            ]
        );
    }

    #[test]
    fn test_end_session_keeps_better_highscore() {
        let mut store = MemoryHighscoreStore::with_highscore(20);
        let mut state = GameState::new(Settings::default(), 1);
        state.start_session(&store);
        state.score = 20;

        state.end_session(&mut store);
        assert_eq!(state.highscore, 20);
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn test_pause_resume_menu() {
        let store = MemoryHighscoreStore::new();
        let mut state = GameState::new(Settings::default(), 1);

        // Pausing from the menu does nothing
        state.pause();
        assert_eq!(state.phase, GamePhase::MainMenu);

        state.start_session(&store);
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.resume();
        assert_eq!(state.phase, GamePhase::Playing);

        state.pause();
        state.return_to_menu();
        assert_eq!(state.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_same_seed_same_respawns() {
        let store = MemoryHighscoreStore::new();
        let mut a = GameState::new(Settings::default(), 42);
        let mut b = GameState::new(Settings::default(), 42);
        a.start_session(&store);
        b.start_session(&store);
        a.obstacles.positions = vec![-19.0; 3];
        b.obstacles.positions = vec![-19.0; 3];
        a.obstacles.move_obstacles(true);
        b.obstacles.move_obstacles(true);
        assert_eq!(a.obstacles.positions, b.obstacles.positions);
    }
}
