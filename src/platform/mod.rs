//! Platform layer
//!
//! Frame pacing for the native loop. The simulation never reads the clock;
//! the limiter only decides when the next tick may run.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps out the remainder of each frame to hold a fixed rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
    frames: u64,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: frame_duration(fps),
            last: Instant::now(),
            frames: 0,
        }
    }

    /// Target duration of one frame
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame-boundary hook: wait until the current frame's slot is used up.
    ///
    /// Returns how long the frame's work took. A frame that overran doesn't
    /// sleep and doesn't try to catch up.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.frame.checked_sub(elapsed) {
            thread::sleep(remaining);
        } else {
            log::trace!("frame {} overran by {:?}", self.frames, elapsed - self.frame);
        }
        self.last = Instant::now();
        self.frames += 1;
        elapsed
    }
}

fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let limiter = FrameLimiter::new(60);
        let micros = limiter.frame_duration().as_micros();
        assert!((16_666..=16_667).contains(&micros));
        // Zero fps is treated as 1
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_holds_frame_rate() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        for _ in 0..3 {
            limiter.wait();
        }
        assert_eq!(limiter.frames(), 3);
        assert!(start.elapsed() >= Duration::from_millis(14));
    }
}
