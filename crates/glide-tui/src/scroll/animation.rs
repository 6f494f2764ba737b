//! A single in-flight scroll animation
//!
//! Combines easing and timing into an interpolator driven by elapsed time.
//! The animation never reads a clock; callers feed it frame deltas.

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_usize, progress};
use super::viewport::Offset;

#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    /// Offset when the animation started
    from: Offset,
    /// Offset the animation converges toward
    to: Offset,
    /// Time accumulated so far
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
}

impl ScrollAnimation {
    pub fn new(from: Offset, to: Offset, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        is_complete(self.elapsed, self.duration)
    }

    /// Advance by `dt` and return the interpolated offset
    pub fn advance(&mut self, dt: Duration) -> Offset {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.position()
    }

    /// Interpolated offset at the current elapsed time
    pub fn position(&self) -> Offset {
        if self.is_complete() {
            return self.to;
        }
        let t = self.easing.apply(progress(self.elapsed, self.duration));
        Offset::new(
            lerp_usize(self.from.x, self.to.x, t),
            lerp_usize(self.from.y, self.to.y, t),
        )
    }

    /// Restart from `from` toward `to` with the full duration
    ///
    /// Used when the valid range changes mid-flight: keeping the old start
    /// and elapsed time would interpolate along a different path and can
    /// move the offset away from the target.
    pub fn rebase(&mut self, from: Offset, to: Offset) {
        self.from = from;
        self.to = to;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation(from_y: usize, to_y: usize) -> ScrollAnimation {
        ScrollAnimation::new(
            Offset::new(0, from_y),
            Offset::new(0, to_y),
            Duration::from_millis(100),
            EasingType::Cubic,
        )
    }

    #[test]
    fn test_starts_at_from() {
        let anim = animation(0, 40);
        assert_eq!(anim.position(), Offset::new(0, 0));
        assert!(!anim.is_complete());
    }

    #[test]
    fn test_eased_midpoint() {
        let mut anim = animation(0, 40);
        // Cubic ease-out at t=0.5 is 0.875
        assert_eq!(anim.advance(Duration::from_millis(50)), Offset::new(0, 35));
    }

    #[test]
    fn test_ends_exactly_at_target() {
        let mut anim = animation(10, 3);
        anim.advance(Duration::from_millis(60));
        let end = anim.advance(Duration::from_millis(60));
        assert_eq!(end, Offset::new(0, 3));
        assert!(anim.is_complete());
    }

    #[test]
    fn test_rebase_restarts_from_new_start() {
        let mut anim = animation(0, 30);
        anim.advance(Duration::from_millis(30));
        anim.rebase(Offset::new(0, 15), Offset::new(0, 25));
        assert!(!anim.is_complete());
        assert_eq!(anim.position(), Offset::new(0, 15));

        let next = anim.advance(Duration::from_millis(1));
        assert!(next.y >= 15 && next.y <= 25, "next = {:?}", next);
        assert_eq!(anim.advance(Duration::from_millis(100)), Offset::new(0, 25));
    }
}
