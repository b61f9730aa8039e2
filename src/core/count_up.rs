//! Eased count-up animation
//!
//! Produces the number shown while a result "rolls in". The value is purely
//! visual; the calculated months stay authoritative.

use std::time::{Duration, Instant};

/// Animation length used by the result card.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1400);

/// Roughly one display frame at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Quartic ease-out: fast start, slow finish. `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Count-up state owned by whatever is displaying it.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    started: Instant,
}

impl CountUp {
    /// Start counting towards `target` at `now`.
    #[must_use]
    pub const fn new(target: u64, duration: Duration, now: Instant) -> Self {
        Self {
            target,
            duration,
            started: now,
        }
    }

    /// Start counting towards `target` with [`DEFAULT_DURATION`].
    #[must_use]
    pub fn start(target: u64) -> Self {
        Self::new(target, DEFAULT_DURATION, Instant::now())
    }

    /// Final value.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Point the animation at a new target. A different target restarts from zero;
    /// the same target leaves the animation running.
    pub fn retarget(&mut self, target: u64, now: Instant) {
        if target != self.target {
            self.target = target;
            self.started = now;
        }
    }

    /// Fraction of the animation elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Displayed value after `elapsed`: `round(target * ease(t))`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn value_after(&self, elapsed: Duration) -> u64 {
        let t = self.progress(elapsed);
        if t >= 1.0 {
            return self.target;
        }
        let value = (self.target as f64 * ease_out_quart(t)).round() as u64;
        value.min(self.target)
    }

    /// Displayed value at wall-clock `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> u64 {
        self.value_after(now.saturating_duration_since(self.started))
    }

    /// Whether the animation has reached its target at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Progress bar fill for a displayed value, as a percentage capped at 100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_of_target(&self, value: u64) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (value as f64 / self.target as f64 * 100.0).min(100.0)
    }
}
