//! Timed rotation of the wheel between two resolved angles.

use std::time::{Duration, Instant};

/// Quartic ease-out: fast start, long slow settle.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// A rotation in progress from `from` to `to` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl SpinAnimation {
    /// Start animating at `started`.
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(self.started).as_secs_f64() / total).clamp(0.0, 1.0)
    }

    /// The displayed angle at `now`.
    pub fn angle_at(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_out(self.progress(now))
    }

    /// Whether the animation has reached its target.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.9);
        assert_eq!(ease_out(2.0), 1.0);
    }

    #[test]
    fn angle_reaches_target() {
        let t0 = Instant::now();
        let anim = SpinAnimation::new(10.0, 3610.0, t0, Duration::from_secs(6));
        assert_eq!(anim.angle_at(t0), 10.0);
        assert_eq!(anim.angle_at(t0 + Duration::from_secs(6)), 3610.0);
        assert_eq!(anim.angle_at(t0 + Duration::from_secs(60)), 3610.0);
        assert!(anim.is_finished(t0 + Duration::from_secs(6)));
        assert!(!anim.is_finished(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn angle_is_monotonic() {
        let t0 = Instant::now();
        let anim = SpinAnimation::new(0.0, 3000.0, t0, Duration::from_millis(600));
        let mut last = 0.0;
        for ms in (0..=600).step_by(20) {
            let a = anim.angle_at(t0 + Duration::from_millis(ms));
            assert!(a >= last);
            last = a;
        }
    }
}
