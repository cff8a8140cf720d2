//! The player character: movement, vertical physics and animation state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::assets::{Color, FrameSource, PlayerSprites, SpriteFrame};
use crate::settings::Settings;

/// Movement state, drives animation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Jump,
}

/// Held directional controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Per-state frame cursor and timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Animation {
    /// Accumulates `speed` each tick, frame advances when it reaches 1
    pub timer: f32,
    pub speed: f32,
    pub idle_frame: usize,
    pub walk_frame: usize,
    pub jump_frame: usize,
}

impl Animation {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }

    fn frame_mut(&mut self, state: AnimState) -> &mut usize {
        match state {
            AnimState::Idle => &mut self.idle_frame,
            AnimState::Walk => &mut self.walk_frame,
            AnimState::Jump => &mut self.jump_frame,
        }
    }

    pub fn frame(&self, state: AnimState) -> usize {
        match state {
            AnimState::Idle => self.idle_frame,
            AnimState::Walk => self.walk_frame,
            AnimState::Jump => self.jump_frame,
        }
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in screen space (y grows downward)
    pub pos: Vec2,
    /// `x` is the horizontal delta of the last move, `y` is vertical
    /// velocity with positive meaning upward
    pub vel: Vec2,
    /// Side length of the square bounding box
    pub size: f32,
    /// Horizontal step per tick
    pub speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub on_ground: bool,
    pub state: AnimState,
    pub facing_right: bool,
    pub animation: Animation,
}

impl Player {
    /// Spawn a grounded player at `x`, standing on `floor_top`
    pub fn new(x: f32, floor_top: f32, settings: &Settings) -> Self {
        let size = settings.player_size;
        Self {
            pos: Vec2::new(x, floor_top - size),
            vel: Vec2::ZERO,
            size,
            speed: settings.player_speed,
            gravity: settings.gravity,
            jump_impulse: settings.jump_impulse,
            on_ground: true,
            state: AnimState::Idle,
            facing_right: true,
            animation: Animation::new(settings.animation_speed),
        }
    }

    /// Apply one tick of input and physics.
    ///
    /// Returns true if a jump started this tick.
    pub fn apply_movement(&mut self, controls: Controls, floor_top: f32, max_x: f32) -> bool {
        let jumped = self.apply_input(controls, max_x);
        self.integrate(floor_top);
        jumped
    }

    /// Resolve controls into horizontal delta, jump impulse and state
    pub fn apply_input(&mut self, controls: Controls, max_x: f32) -> bool {
        if controls.left && self.pos.x > 0.0 {
            self.vel.x = -self.speed;
            self.state = AnimState::Walk;
        } else if controls.right && self.pos.x <= max_x {
            self.vel.x = self.speed;
            self.state = AnimState::Walk;
        } else {
            self.vel.x = 0.0;
            if self.on_ground {
                self.state = AnimState::Idle;
            }
        }

        if controls.jump && self.on_ground {
            self.vel.y = self.jump_impulse;
            self.on_ground = false;
            self.state = AnimState::Jump;
            return true;
        }
        false
    }

    /// Single explicit Euler step, then clamp to the floor
    pub fn integrate(&mut self, floor_top: f32) {
        self.pos.x += self.vel.x;
        self.pos.y -= self.vel.y;
        self.vel.y -= self.gravity;

        let ground_y = floor_top - self.size;
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vel.y = 0.0;
            self.on_ground = true;
        }
    }

    /// Bounding box for collision queries
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    /// Advance the animation timer and, when it rolls over, the frame of the
    /// active state
    pub fn update_animation(&mut self, sprites: &PlayerSprites) {
        if self.vel.x > 0.0 {
            self.facing_right = true;
        } else if self.vel.x < 0.0 {
            self.facing_right = false;
        }

        self.animation.timer += self.animation.speed;
        if self.animation.timer >= 1.0 {
            self.animation.timer = 0.0;
            let count = source_for(sprites, self.state).frame_count();
            if count > 0 {
                let frame = self.animation.frame_mut(self.state);
                *frame = (*frame + 1) % count;
            }
        }
    }

    /// Frame to draw for the current state and facing
    pub fn current_frame(&self, sprites: &PlayerSprites) -> SpriteFrame {
        let flipped = !self.facing_right;
        match source_for(sprites, self.state) {
            FrameSource::Loaded { frame_count } if frame_count > 0 => SpriteFrame::Sheet {
                index: self.animation.frame(self.state) % frame_count,
                flipped,
            },
            FrameSource::Loaded { .. } => SpriteFrame::Solid {
                color: Color::WHITE,
                flipped,
            },
            FrameSource::Placeholder(color) => SpriteFrame::Solid { color, flipped },
        }
    }
}

fn source_for(sprites: &PlayerSprites, state: AnimState) -> FrameSource {
    match state {
        AnimState::Idle => sprites.idle,
        AnimState::Walk => sprites.walk,
        AnimState::Jump => sprites.jump,
    }
}
