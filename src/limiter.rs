//! Frame-rate gate for live conversion loops.

use std::time::{Duration, Instant};

/// Skips conversions that arrive sooner than `1000 / fps` ms after the
/// previously accepted one.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    last: Option<Instant>,
    skipped: u64,
}

impl FrameLimiter {
    /// Create a limiter for `fps` frames per second. `0` disables limiting.
    pub fn new(fps: u32) -> Self {
        let interval = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        Self {
            interval,
            last: None,
            skipped: 0,
        }
    }

    /// Minimum spacing between accepted frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame arriving at `now` should be converted.
    ///
    /// Records `now` as the last conversion when it returns true. The first
    /// frame is always accepted.
    pub fn should_convert(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last = Some(now);
        } else {
            self.skipped += 1;
        }
        due
    }

    /// Frames rejected so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_accepted() {
        let mut limiter = FrameLimiter::new(10);
        assert!(limiter.should_convert(Instant::now()));
    }

    #[test]
    fn test_frames_inside_interval_skipped() {
        let mut limiter = FrameLimiter::new(10);
        let start = Instant::now();
        assert!(limiter.should_convert(start));
        assert!(!limiter.should_convert(start + Duration::from_millis(50)));
        assert!(limiter.should_convert(start + Duration::from_millis(100)));
        assert_eq!(limiter.skipped(), 1);
    }

    #[test]
    fn test_zero_fps_disables_limit() {
        let mut limiter = FrameLimiter::new(0);
        let now = Instant::now();
        assert!(limiter.should_convert(now));
        assert!(limiter.should_convert(now));
        assert_eq!(limiter.interval(), Duration::ZERO);
    }
}
