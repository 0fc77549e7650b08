//! Timed color interpolation.
//!
//! A [`ColorTransition`] records a from/to color pair, a duration, and the
//! instant it started. It is sampled rather than ticked: the host (or the
//! layer holding it) asks for the color at a given instant and gets the
//! eased interpolation between the endpoints.

use std::time::{Duration, Instant};

use gild_core::Color;

use super::easing::{Easing, ease};

/// A running interpolation between two colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    duration: Duration,
    easing: Easing,
    start: Instant,
}

impl ColorTransition {
    /// Start a transition now.
    pub fn new(from: Color, to: Color, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            start: Instant::now(),
        }
    }

    /// The color the transition started from.
    pub fn from(&self) -> Color {
        self.from
    }

    /// The color the transition ends at.
    pub fn to(&self) -> Color {
        self.to
    }

    /// The configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The instant the transition started.
    pub fn started_at(&self) -> Instant {
        self.start
    }

    /// Raw progress at `now`, clamped to 0.0-1.0.
    ///
    /// A zero duration is complete immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Check if the transition has run to completion at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Sample the eased color at `now`.
    pub fn sample(&self, now: Instant) -> Color {
        let t = ease(self.easing, self.progress(now));
        self.from.lerp(self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::BLACK;
    const WHITE: Color = Color::WHITE;

    #[test]
    fn test_endpoints() {
        let t = ColorTransition::new(BLACK, WHITE, Duration::from_secs(1), Easing::Linear);
        let start = t.started_at();

        assert_eq!(t.sample(start), BLACK);
        assert_eq!(t.sample(start + Duration::from_secs(2)), WHITE);
        assert!(t.is_finished(start + Duration::from_secs(1)));
        assert!(!t.is_finished(start));
    }

    #[test]
    fn test_linear_midpoint() {
        let t = ColorTransition::new(BLACK, WHITE, Duration::from_secs(2), Easing::Linear);
        let mid = t.sample(t.started_at() + Duration::from_secs(1));

        assert!((mid.r - 0.5).abs() < 0.001);
        assert!((mid.g - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let t = ColorTransition::new(BLACK, WHITE, Duration::ZERO, Easing::EaseInOut);

        assert!(t.is_finished(t.started_at()));
        assert_eq!(t.sample(t.started_at()), WHITE);
    }

    #[test]
    fn test_clock_before_start_clamps_to_from() {
        let t = ColorTransition::new(BLACK, WHITE, Duration::from_secs(1), Easing::Linear);
        let before = t.started_at() - Duration::from_secs(1);

        assert_eq!(t.sample(before), BLACK);
    }
}
