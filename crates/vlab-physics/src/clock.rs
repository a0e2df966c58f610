//! Animation clock: elapsed time for the per-frame evaluation.

use vlab_math::wrap_time;

/// How a model consumes elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Evaluate at `elapsed mod period`.
    Periodic(f64),
    /// Evaluate at `elapsed` (wave phase keeps growing).
    Monotonic,
    /// No animation; always evaluated at `t = 0`.
    Static,
}

impl ClockMode {
    /// Evaluation time for the given elapsed time.
    pub fn sample_time(self, elapsed: f64) -> f64 {
        match self {
            ClockMode::Periodic(period) => wrap_time(elapsed, period),
            ClockMode::Monotonic => elapsed,
            ClockMode::Static => 0.0,
        }
    }

    pub fn is_animated(self) -> bool {
        !matches!(self, ClockMode::Static)
    }
}

/// Accumulates frame deltas into elapsed seconds.
///
/// Fed either with deltas directly (`advance`) or with monotonically
/// increasing frame timestamps (`tick_at`, in seconds).
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    elapsed: f64,
    last_stamp: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Negative or non-finite deltas count as zero.
    ///
    /// Returns the new elapsed time.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += dt;
        self.elapsed
    }

    /// Advance to frame timestamp `now` (seconds). The first call only
    /// records the timestamp.
    pub fn tick_at(&mut self, now: f64) -> f64 {
        let dt = match self.last_stamp {
            Some(prev) => now - prev,
            None => 0.0,
        };
        if now.is_finite() {
            self.last_stamp = Some(now);
        }
        self.advance(dt)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Back to zero, forgetting the last timestamp.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = AnimationClock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert_relative_eq!(clock.elapsed(), 0.032);
    }

    #[test]
    fn test_bad_deltas_ignored() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        clock.advance(-0.5);
        clock.advance(f64::NAN);
        clock.advance(f64::INFINITY);
        assert_relative_eq!(clock.elapsed(), 1.0);
        assert_eq!(clock.advance(-2.0), 1.0);
    }

    #[test]
    fn test_tick_at_timestamps() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.tick_at(100.0), 0.0);
        clock.tick_at(100.5);
        clock.tick_at(101.25);
        assert_relative_eq!(clock.elapsed(), 1.25);
    }

    #[test]
    fn test_sample_time_modes() {
        assert_relative_eq!(ClockMode::Periodic(2.0).sample_time(5.0), 1.0);
        assert_eq!(ClockMode::Monotonic.sample_time(5.0), 5.0);
        assert_eq!(ClockMode::Static.sample_time(5.0), 0.0);
        assert!(!ClockMode::Static.is_animated());
    }

    #[test]
    fn test_reset() {
        let mut clock = AnimationClock::new();
        clock.tick_at(1.0);
        clock.tick_at(2.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.tick_at(50.0), 0.0);
    }
}
