// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Animated offset transitions

use crate::geom::Vec2;
use std::time::{Duration, Instant};

/// An eased transition from one offset to another
///
/// A surface holds at most one animation; starting another replaces it (see
/// [`Self::retarget`] to continue smoothly from the current position).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetAnimation {
    from: Vec2,
    to: Vec2,
    start: Instant,
    duration: Duration,
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

impl OffsetAnimation {
    /// Construct
    ///
    /// A zero `duration` yields an animation which is done immediately.
    pub fn new(from: Vec2, to: Vec2, start: Instant, duration: Duration) -> Self {
        OffsetAnimation {
            from,
            to,
            start,
            duration,
        }
    }

    /// Target offset
    #[inline]
    pub fn target(&self) -> Vec2 {
        self.to
    }

    /// True once `now` is past the end of the transition
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Offset at time `now`
    pub fn sample(&self, now: Instant) -> Vec2 {
        if self.is_done(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Restart from the current position towards `to`
    pub fn retarget(&mut self, now: Instant, to: Vec2, duration: Duration) {
        let from = self.sample(now);
        *self = OffsetAnimation::new(from, to, now, duration);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eases_between_endpoints() {
        let t0 = Instant::now();
        let d = Duration::from_millis(200);
        let a = OffsetAnimation::new(Vec2(0.0, 150.0), Vec2(0.0, 50.0), t0, d);
        assert_eq!(a.sample(t0), Vec2(0.0, 150.0));
        assert_eq!(a.sample(t0 + Duration::from_millis(100)), Vec2(0.0, 100.0));
        assert!(!a.is_done(t0 + Duration::from_millis(199)));
        assert_eq!(a.sample(t0 + d), Vec2(0.0, 50.0));
        assert!(a.is_done(t0 + d));
    }

    #[test]
    fn retarget_continues_from_current() {
        let t0 = Instant::now();
        let d = Duration::from_millis(200);
        let mut a = OffsetAnimation::new(Vec2::ZERO, Vec2(0.0, 100.0), t0, d);
        let mid = t0 + Duration::from_millis(100);
        a.retarget(mid, Vec2::ZERO, d);
        assert_eq!(a.sample(mid), Vec2(0.0, 50.0));
        assert_eq!(a.target(), Vec2::ZERO);
    }

    #[test]
    fn zero_duration_is_immediate() {
        let t0 = Instant::now();
        let a = OffsetAnimation::new(Vec2::ZERO, Vec2(0.0, 10.0), t0, Duration::ZERO);
        assert!(a.is_done(t0));
        assert_eq!(a.sample(t0), Vec2(0.0, 10.0));
    }
}
