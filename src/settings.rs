//! Game settings and tuning
//!
//! Loaded from a JSON file next to the binary. Every field has a default so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence;

/// Audio levels handed to the sound layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Music volume in menus and during play (0.0 - 1.0)
    pub music_volume: f32,
    /// Music volume while the pause overlay is up
    pub paused_volume: f32,
    /// Jump effect volume
    pub jump_volume: f32,
    /// Silence everything but stop commands
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            paused_volume: 0.1,
            jump_volume: 0.2,
            muted: false,
        }
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Floor line sits this far above the bottom edge
    pub floor_offset: f32,
    /// Target frames (and simulation ticks) per second
    pub fps: u32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub animation_speed: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_count: usize,

    // === Difficulty ===
    /// Speed added each time the score crosses a band
    pub speed_increment: f32,
    pub score_band: u64,

    // === Run ===
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    pub assets_dir: PathBuf,
    pub highscore_path: PathBuf,
    /// Headless demo stops after this many frames
    pub demo_frame_limit: u64,

    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            floor_offset: FLOOR_OFFSET,
            fps: FPS,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            animation_speed: ANIMATION_SPEED,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_count: OBSTACLE_COUNT,

            speed_increment: SPEED_INCREMENT,
            score_band: SCORE_BAND,

            seed: None,
            assets_dir: PathBuf::from("assets"),
            highscore_path: PathBuf::from("highscore.json"),
            demo_frame_limit: u64::from(FPS) * 120,

            audio: AudioSettings::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "dino_runner.json";

    /// Y coordinate of the floor line
    pub fn floor_top(&self) -> f32 {
        self.screen_height - self.floor_offset
    }

    /// Right-most x from which the player may still step right
    pub fn max_player_x(&self) -> f32 {
        self.screen_width - self.player_size * 2.0
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match persistence::read_json::<Settings>(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    pub fn save(&self, path: &Path) -> Result<(), persistence::PersistError> {
        persistence::write_json(path, self)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        let settings = Settings::default();
        assert_eq!(settings.floor_top(), 500.0);
        assert_eq!(settings.max_player_x(), 760.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"obstacle_speed": 3.5, "audio": {"jump_volume": 1.0}}"#)
                .unwrap();
        assert_eq!(settings.obstacle_speed, 3.5);
        assert_eq!(settings.audio.jump_volume, 1.0);
        assert_eq!(settings.audio.music_volume, 0.5);
        assert_eq!(settings.player_size, PLAYER_SIZE);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_muted_flag() {
        assert!(!Settings::default().audio.muted);
        let settings: Settings = serde_json::from_str(r#"{"audio": {"muted": true}}"#).unwrap();
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.paused_volume, 0.1);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("dino_runner_missing_settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "dino_runner_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            seed: Some(7),
            obstacle_count: 5,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
