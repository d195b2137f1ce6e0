//! Variable-timestep frame clock.
//!
//! Measures wall-clock time between frames and clamps it so a stall (window
//! drag, breakpoint, slow disk) turns into a short slowdown instead of one huge
//! physics step.

use std::time::Instant;
use tracing::warn;

/// Wall-clock delta source for the frame loop.
#[derive(Debug)]
pub struct FrameClock {
    previous_time: Instant,
    max_dt: f32,
    total_time: f64,
    frame_count: u64,
    clamped_count: u64,
}

impl FrameClock {
    /// Starts measuring from now. Frame times above `max_dt` seconds are clamped.
    pub fn new(max_dt: f32) -> Self {
        Self {
            previous_time: Instant::now(),
            max_dt,
            total_time: 0.0,
            frame_count: 0,
            clamped_count: 0,
        }
    }

    /// Measures the time since the previous tick and returns the clamped delta.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f32();
        self.previous_time = now;
        self.advance(frame_time)
    }

    /// Records a frame of `frame_time` seconds without reading the clock.
    pub fn advance(&mut self, frame_time: f32) -> f32 {
        let dt = if !frame_time.is_finite() || frame_time < 0.0 {
            0.0
        } else if frame_time > self.max_dt {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                self.max_dt * 1000.0
            );
            self.clamped_count += 1;
            self.max_dt
        } else {
            frame_time
        };

        self.total_time += f64::from(dt);
        self.frame_count += 1;
        dt
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of frames whose time was clamped.
    pub fn clamped_count(&self) -> u64 {
        self.clamped_count
    }

    /// Simulated seconds, i.e. the sum of returned deltas.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_frame_passes_through() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(1.0 / 60.0), 1.0 / 60.0);
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.clamped_count(), 0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(2.0), 0.1);
        assert_eq!(clock.clamped_count(), 1);
        assert!((clock.total_time() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bad_frame_time_is_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(-0.5), 0.0);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.frame_count(), 2);
        assert_eq!(clock.total_time(), 0.0);
    }

    #[test]
    fn test_tick_measures_wall_clock() {
        let mut clock = FrameClock::new(0.1);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let dt = clock.tick();
        assert!(dt > 0.0 && dt <= 0.1);
        assert_eq!(clock.frame_count(), 1);
    }
}
