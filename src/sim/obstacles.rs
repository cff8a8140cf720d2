//! Obstacle field: a fixed set of floor-level obstacles scrolling left
//!
//! Obstacles only differ by their x position. Size, speed and the floor line
//! they sit on are shared by the whole field.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;

/// Fixed-count collection of obstacles sharing size and speed
#[derive(Debug, Clone)]
pub struct ObstacleField {
    /// Left edge of each obstacle, in spawn order
    pub positions: Vec<f32>,
    /// Side length of every obstacle
    pub size: f32,
    /// Leftward step per tick, raised by the difficulty controller
    pub speed: f32,
    pub screen_width: f32,
    pub floor_top: f32,
    rng: Pcg32,
}

impl ObstacleField {
    /// Create a field with `count` obstacles seeded 150px apart starting at
    /// `screen_width - 150`
    pub fn new(
        count: usize,
        screen_width: f32,
        floor_top: f32,
        size: f32,
        speed: f32,
        seed: u64,
    ) -> Self {
        let positions = (0..count)
            .map(|i| screen_width - crate::consts::OBSTACLE_SEED_SPACING * (1.0 - i as f32))
            .collect();
        Self::with_positions(positions, screen_width, floor_top, size, speed, seed)
    }

    /// Create a field with explicit starting positions
    pub fn with_positions(
        positions: Vec<f32>,
        screen_width: f32,
        floor_top: f32,
        size: f32,
        speed: f32,
        seed: u64,
    ) -> Self {
        Self {
            positions,
            size,
            speed,
            screen_width,
            floor_top,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Respawn window `[width + size, width + 3 * size]`
    pub fn respawn_range(&self) -> (f32, f32) {
        (
            self.screen_width + self.size,
            self.screen_width + self.size * 3.0,
        )
    }

    /// Scroll every obstacle left by the field speed.
    ///
    /// Each obstacle that passes `-size` respawns off-screen right and scores
    /// one point. Returns the points scored this tick.
    pub fn move_obstacles(&mut self, active: bool) -> u32 {
        if !active {
            return 0;
        }

        let (lo, hi) = self.respawn_range();
        // Respawn draws whole pixels, inclusive on both ends
        let (lo, hi) = (lo.ceil() as i64, hi.floor() as i64);

        let mut points = 0;
        for x in &mut self.positions {
            *x -= self.speed;
            if *x < -self.size {
                *x = self.rng.random_range(lo..=hi.max(lo)) as f32;
                points += 1;
            }
        }
        points
    }

    /// Collision box of the obstacle at `x`, resting on the floor
    pub fn obstacle_rect(&self, x: f32) -> Rect {
        Rect::new(x, self.floor_top - self.size, self.size, self.size)
    }

    /// True if `target` overlaps any obstacle
    pub fn check_collision(&self, target: &Rect) -> bool {
        self.positions
            .iter()
            .any(|&x| self.obstacle_rect(x).intersects(target))
    }

    /// Obstacle boxes in field order, for rendering
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.positions.iter().map(|&x| self.obstacle_rect(x))
    }
}
