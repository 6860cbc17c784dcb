//! Time management utilities

use std::time::Instant;

/// Length of a time interval, in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestep(f32);

impl Timestep {
    /// Interval of `seconds` seconds
    pub const fn new(seconds: f32) -> Self {
        Self(seconds)
    }

    /// Interval in seconds
    pub const fn seconds(self) -> f32 {
        self.0
    }

    /// Interval in milliseconds
    pub fn milliseconds(self) -> f32 {
        self.0 * 1000.0
    }
}

impl From<f32> for Timestep {
    fn from(seconds: f32) -> Self {
        Self(seconds)
    }
}

impl From<Timestep> for f32 {
    fn from(step: Timestep) -> Self {
        step.0
    }
}

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: Timestep,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: Timestep::default(),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance to the next frame and return the time since the previous one
    pub fn tick(&mut self) -> Timestep {
        let now = Instant::now();
        self.delta_time = Timestep::new(now.duration_since(self.last_frame).as_secs_f32());
        self.total_time += self.delta_time.seconds();
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Time between the last two ticks
    pub fn delta_time(&self) -> Timestep {
        self.delta_time
    }

    /// Total time accumulated over all ticks, in seconds
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn test_timestep_units() {
        let step = Timestep::new(0.016);
        assert_relative_eq!(step.seconds(), 0.016);
        assert_relative_eq!(step.milliseconds(), 16.0, epsilon = 1e-4);

        let raw: f32 = Timestep::from(0.5).into();
        assert_relative_eq!(raw, 0.5);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        assert_eq!(timer.frame_count(), 0);
        assert_relative_eq!(timer.average_fps(), 0.0);

        std::thread::sleep(Duration::from_millis(2));
        let step = timer.tick();
        timer.tick();

        assert_eq!(timer.frame_count(), 2);
        assert!(step.seconds() > 0.0);
        assert!(timer.total_time() >= step.seconds());
    }
}
