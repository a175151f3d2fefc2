// Color tween
// Fire-and-forget interpolation toward a target color, sampled at render time

use std::time::{Duration, Instant};

use crate::theme::Rgb;

/// Default duration for theme transition tweens.
pub const THEME_TWEEN: Duration = Duration::from_millis(200);

/// Interpolates a color property from a start value to a target over a
/// duration. Sampling is pull-based; nothing observes completion, and there
/// is no cancellation beyond superseding the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Rgb,
    to: Rgb,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    /// A settled tween holding a single value.
    pub fn settled(value: Rgb) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Replace the in-flight transition with one toward `to` (latest-wins).
    /// The new transition starts from whatever value is currently showing.
    pub fn retarget(&mut self, to: Rgb, now: Instant, duration: Duration) {
        self.from = self.sample(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
    }

    /// Snap to a value with no transition.
    pub fn set(&mut self, value: Rgb) {
        self.from = value;
        self.to = value;
        self.duration = Duration::ZERO;
    }

    /// The value the property shows at `now`.
    pub fn sample(&self, now: Instant) -> Rgb {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, t)
    }

    /// The value the transition is heading toward.
    pub fn target(&self) -> Rgb {
        self.to
    }
}
