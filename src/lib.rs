//! Dino Runner - A single-screen side-scrolling arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, session state)
//! - `assets`: Sprite probing with placeholder fallback
//! - `audio`: Event-to-sound mapping
//! - `highscores`: Highscore store
//! - `persistence`: JSON file helpers
//! - `platform`: Frame pacing
//! - `settings`: Data-driven game tuning

pub mod assets;
pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::{FileHighscoreStore, HighscoreStore, MemoryHighscoreStore};
pub use settings::Settings;

/// Game configuration defaults
pub mod consts {
    /// Target frame rate (one simulation tick per frame)
    pub const FPS: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Distance from the bottom of the screen to the floor line
    pub const FLOOR_OFFSET: f32 = 100.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const GRAVITY: f32 = 1.0;
    /// Upward velocity applied on jump
    pub const JUMP_IMPULSE: f32 = 18.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const OBSTACLE_COUNT: usize = 3;
    /// Spacing between the initial obstacle seeds
    pub const OBSTACLE_SEED_SPACING: f32 = 150.0;

    /// Difficulty: speed added per score band
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const SCORE_BAND: u64 = 10;
    /// Checkpoint a fresh session starts from
    pub const INITIAL_CHECKPOINT: i64 = -10;

    /// Animation timer advance per tick
    pub const ANIMATION_SPEED: f32 = 0.2;
    /// Sprite sheet frame edge (pixels)
    pub const SPRITE_FRAME_SIZE: u32 = 32;
}
