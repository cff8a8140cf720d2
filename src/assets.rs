//! Sprite assets with placeholder fallback
//!
//! The simulation never touches pixels. It only needs to know how many frames
//! each animation has, or that no art exists and a flat colour stands in.
//! Sheets are inspected by their dimensions so missing or unreadable files
//! degrade to placeholders instead of failing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::SPRITE_FRAME_SIZE;

/// Plain RGB colour used for placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const BLUE: Color = Color(0, 0, 255);
}

/// Where an animation's frames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameSource {
    /// A sprite sheet sliced into `frame_count` frames
    Loaded { frame_count: usize },
    /// No art available; draw a solid square
    Placeholder(Color),
}

impl FrameSource {
    /// Number of frames the animation cycles through.
    ///
    /// A placeholder is a single frame.
    pub fn frame_count(&self) -> usize {
        match self {
            FrameSource::Loaded { frame_count } => *frame_count,
            FrameSource::Placeholder(_) => 1,
        }
    }
}

/// The frame a renderer should draw this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteFrame {
    Sheet { index: usize, flipped: bool },
    Solid { color: Color, flipped: bool },
}

/// Player animation sources, one per movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSprites {
    pub idle: FrameSource,
    pub walk: FrameSource,
    pub jump: FrameSource,
}

impl Default for PlayerSprites {
    fn default() -> Self {
        Self::placeholders()
    }
}

impl PlayerSprites {
    /// Colour-coded squares used when no sheets are present
    pub fn placeholders() -> Self {
        Self {
            idle: FrameSource::Placeholder(Color::GREEN),
            walk: FrameSource::Placeholder(Color::BLUE),
            jump: FrameSource::Placeholder(Color::RED),
        }
    }

    /// Inspect the three player sheets under `dir`
    pub fn load(dir: &Path) -> Self {
        Self {
            idle: inspect_sheet(&dir.join("dino_idle.png"), Color::GREEN),
            walk: inspect_sheet(&dir.join("dino_walk.png"), Color::BLUE),
            jump: inspect_sheet(&dir.join("dino_jump.png"), Color::RED),
        }
    }
}

/// Inspect the obstacle image under `dir`
pub fn load_obstacle_sprite(dir: &Path) -> FrameSource {
    let path = dir.join("meteor_1.png");
    match image::image_dimensions(&path) {
        Ok(_) => {
            log::info!("Obstacle image loaded: {}", path.display());
            FrameSource::Loaded { frame_count: 1 }
        }
        Err(e) => {
            log::warn!(
                "Obstacle image unavailable ({}): {} - using red placeholder",
                path.display(),
                e
            );
            FrameSource::Placeholder(Color::RED)
        }
    }
}

/// Number of whole frames a sheet of the given size holds.
///
/// `None` if the count doesn't fit in a `usize`.
pub fn frames_in_sheet(width: u32, height: u32, frame: u32) -> Option<usize> {
    if frame == 0 {
        return Some(0);
    }
    let columns = u64::from(width / frame);
    let rows = u64::from(height / frame);
    columns
        .checked_mul(rows)
        .and_then(|n| usize::try_from(n).ok())
}

/// Inspect a sprite sheet and fall back to `fallback` if it can't be used
pub fn inspect_sheet(path: &Path, fallback: Color) -> FrameSource {
    match image::image_dimensions(path) {
        Ok((w, h)) => match frames_in_sheet(w, h, SPRITE_FRAME_SIZE) {
            Some(0) => {
                log::warn!(
                    "Sprite sheet {} ({}x{}) holds no {}px frames - using placeholder",
                    path.display(),
                    w,
                    h,
                    SPRITE_FRAME_SIZE
                );
                FrameSource::Placeholder(fallback)
            }
            Some(frame_count) => {
                log::info!("Loaded {} ({} frames)", path.display(), frame_count);
                FrameSource::Loaded { frame_count }
            }
            None => {
                log::warn!(
                    "Sprite sheet {} ({}x{}) is too large - using placeholder",
                    path.display(),
                    w,
                    h
                );
                FrameSource::Placeholder(fallback)
            }
        },
        Err(e) => {
            log::warn!(
                "Sprite sheet unavailable ({}): {} - using placeholder",
                path.display(),
                e
            );
            FrameSource::Placeholder(fallback)
        }
    }
}
