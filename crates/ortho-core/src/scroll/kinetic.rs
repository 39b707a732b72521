// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Kinetic scrolling model

use crate::geom::Vec2;
use std::time::Instant;

/// Kinetic scrolling model
///
/// Velocity decays each second by a multiplicative factor `mul` (dominant at
/// high speed) and by a subtractive amount `sub` (dominant at low speed).
/// Motion stops once speed drops below one unit per second.
///
/// Time is supplied by the caller so that stepping is deterministic.
#[derive(Clone, Debug, Default)]
pub struct Kinetic {
    t_step: Option<Instant>,
    vel: Vec2,
}

impl Kinetic {
    /// Start (or accelerate) motion with velocity `vel`
    ///
    /// Returns true when motion is in progress and [`Self::step`] should be
    /// called on subsequent frames.
    pub fn start(&mut self, vel: Vec2, now: Instant) -> bool {
        self.vel += vel;
        if !self.vel.is_finite() || self.vel.max_abs_comp() < 1.0 {
            self.stop();
            false
        } else {
            self.t_step = Some(now);
            true
        }
    }

    /// Advance to `now`, returning the distance travelled
    ///
    /// `decay` is `(mul, sub)`; see type documentation.
    pub fn step(&mut self, now: Instant, decay: (f32, f32)) -> Option<Vec2> {
        let last = self.t_step?;
        let dur = now.saturating_duration_since(last).as_secs_f32();
        self.t_step = Some(now);
        if dur <= 0.0 {
            return None;
        }

        let (decay_mul, decay_sub) = decay;
        let v = self.vel * decay_mul.powf(dur);
        self.vel = v - v.abs().min(Vec2::splat(decay_sub * dur)) * v.sign();

        if self.vel.max_abs_comp() < 1.0 {
            self.stop();
            return None;
        }

        Some(self.vel * dur)
    }

    /// Stop immediately
    #[inline]
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.t_step = None;
    }

    /// Current velocity
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// True while kinetic scrolling
    #[inline]
    pub fn is_scrolling(&self) -> bool {
        self.vel != Vec2::ZERO
    }
}
