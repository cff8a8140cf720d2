//! Score-driven difficulty
//!
//! Obstacle speed rises by a fixed increment each time the score reaches a
//! new band above the last checkpoint. The check runs once per tick and the
//! checkpoint jumps to the current score, so crossing several bands in a
//! single tick still counts as one increase.

use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleField;
use crate::consts::INITIAL_CHECKPOINT;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Score at which speed was last raised
    pub last_speed_increase: i64,
    pub increment: f32,
    pub band: u64,
}

impl Difficulty {
    pub fn new(increment: f32, band: u64) -> Self {
        Self {
            last_speed_increase: INITIAL_CHECKPOINT,
            increment,
            band,
        }
    }

    /// Raise the field speed if `score` has reached the next band.
    ///
    /// Returns true when an increase was applied.
    pub fn update(&mut self, score: u64, field: &mut ObstacleField) -> bool {
        let score = score as i64;
        if score >= self.last_speed_increase + self.band as i64 {
            field.speed += self.increment;
            self.last_speed_increase = score;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ObstacleField {
        ObstacleField::new(3, 800.0, 500.0, 20.0, 2.0, 1)
    }

    #[test]
    fn test_first_increase_at_zero() {
        let mut d = Difficulty::new(0.5, 10);
        let mut f = field();
        assert!(d.update(0, &mut f));
        assert_eq!(f.speed, 2.5);
        assert_eq!(d.last_speed_increase, 0);

        for score in 0..10 {
            assert!(!d.update(score, &mut f));
        }
        assert_eq!(f.speed, 2.5);

        assert!(d.update(10, &mut f));
        assert_eq!(f.speed, 3.0);
        assert_eq!(d.last_speed_increase, 10);
    }

    #[test]
    fn test_large_jump_is_single_increase() {
        let mut d = Difficulty::new(0.5, 10);
        let mut f = field();
        d.update(0, &mut f);

        // Two bands crossed in one tick
        assert!(d.update(23, &mut f));
        assert_eq!(f.speed, 3.0);
        assert_eq!(d.last_speed_increase, 23);

        // Next band is measured from 23, not 30
        assert!(!d.update(32, &mut f));
        assert!(d.update(33, &mut f));
        assert_eq!(f.speed, 3.5);
    }
}
