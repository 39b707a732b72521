// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Vertical coupling policies
//!
//! A policy decides, for each offset change of the active inner surface,
//! which corrective writes the coordinator should make. Policies are pure:
//! [`CouplingPolicy::evaluate`] maps a [`Sample`] to a [`Decision`] and the
//! coordinator applies it.
//!
//! The header is *collapsed* when the outer offset has reached the header
//! height. Gesture ownership follows from the state alone (see [`owner_for`]).

use crate::config::PagingConfig;
use impl_tools::impl_default;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Vertical coupling policy
#[impl_default(CouplingPolicy::EagerSteal)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CouplingPolicy {
    /// Convert every inner delta into outer movement until collapsed
    ///
    /// While the header is not collapsed the inner surface is held at its
    /// top and its movement is applied to the outer surface instead. Once
    /// collapsed, the inner surface scrolls freely; pulling down at its top
    /// re-reveals the header.
    EagerSteal,
    /// Let the outer surface scroll natively; hand over momentum at the top
    ///
    /// When the inner surface is flung back to its top, the remaining
    /// momentum is converted into an animated outer movement.
    BoundaryMomentum,
}

/// Which surface may begin a new drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureOwner {
    /// The outer (header) surface
    Outer,
    /// The active inner (list) surface
    Inner,
}

/// Input to [`CouplingPolicy::evaluate`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub header_height: f32,
    pub pin_header_height: f32,
    /// Outer offset at the time of the inner change
    pub outer: f32,
    pub inner_old: f32,
    pub inner_new: f32,
    /// Last recorded inner velocity (units per second)
    pub velocity: f32,
}

impl Sample {
    /// Inner delta (`new - old`)
    #[inline]
    pub fn delta(&self) -> f32 {
        self.inner_new - self.inner_old
    }

    /// True when the header is fully collapsed
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        is_collapsed(self.header_height, self.outer)
    }
}

/// A write to the outer surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OuterWrite {
    /// Set the offset immediately
    Set(f32),
    /// Animate to the offset
    Animate(f32),
}

impl OuterWrite {
    /// Target offset
    pub fn target(self) -> f32 {
        match self {
            OuterWrite::Set(y) | OuterWrite::Animate(y) => y,
        }
    }
}

/// Output of [`CouplingPolicy::evaluate`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    /// New offset for the inner surface, if it must be written
    pub inner: Option<f32>,
    /// Write to the outer surface, if any
    pub outer: Option<OuterWrite>,
    /// The recorded velocity was used and must be reset
    pub consume_velocity: bool,
}

impl Decision {
    /// True if nothing needs doing
    pub fn is_empty(&self) -> bool {
        self.inner.is_none() && self.outer.is_none() && !self.consume_velocity
    }
}

/// True when `outer` has reached `header_height`
#[inline]
pub fn is_collapsed(header_height: f32, outer: f32) -> bool {
    outer >= header_height
}

/// Gesture ownership for the given state
///
/// The inner surface owns new drags only while the header is collapsed and
/// the inner surface is scrolled into its content.
pub fn owner_for(header_height: f32, outer: f32, inner: f32) -> GestureOwner {
    if is_collapsed(header_height, outer) && inner > 0.0 {
        GestureOwner::Inner
    } else {
        GestureOwner::Outer
    }
}

/// Distance travelled by uniformly decelerated motion: `v² / 2a`
///
/// Returns zero when `deceleration` is not positive or either input is not
/// finite.
pub fn momentum_distance(velocity: f32, deceleration: f32) -> f32 {
    if !(deceleration > 0.0) || !velocity.is_finite() || !deceleration.is_finite() {
        return 0.0;
    }
    velocity * velocity / (2.0 * deceleration)
}

/// Outer target offset after handing over `velocity`
pub fn momentum_target(outer: f32, velocity: f32, deceleration: f32) -> f32 {
    (outer - momentum_distance(velocity, deceleration)).max(0.0)
}

impl CouplingPolicy {
    /// Decide how to respond to an inner offset change
    pub fn evaluate(self, sample: &Sample, config: &PagingConfig) -> Decision {
        match self {
            CouplingPolicy::EagerSteal => eager_steal(sample),
            CouplingPolicy::BoundaryMomentum => boundary_momentum(sample, config),
        }
    }
}

fn eager_steal(s: &Sample) -> Decision {
    let mut decision = Decision::default();
    let h = s.header_height;
    let delta = s.delta();

    if !s.is_collapsed() {
        if delta != 0.0 {
            let outer = (s.outer + delta).max(0.0).min(h);
            // Positive movement the outer could not absorb stays with the
            // inner surface; the inner surface otherwise rests at its top.
            let remainder = delta - (outer - s.outer);
            let inner = remainder.max(0.0);

            if inner != s.inner_new {
                decision.inner = Some(inner);
            }
            if outer != s.outer {
                decision.outer = Some(OuterWrite::Set(outer));
            }
        }
    } else if s.inner_new > 0.0 {
        if s.outer != h {
            decision.outer = Some(OuterWrite::Set(h));
        }
    } else if delta < 0.0 {
        // Only the part of the pull past the inner top moves the header.
        let pull = s.inner_new - s.inner_old.min(0.0);
        if pull < 0.0 {
            decision.outer = Some(OuterWrite::Set((s.outer + pull).max(0.0)));
        }
        if s.inner_new != 0.0 {
            decision.inner = Some(0.0);
        }
    }

    decision
}

fn boundary_momentum(s: &Sample, config: &PagingConfig) -> Decision {
    let mut decision = Decision::default();

    if !s.is_collapsed() {
        if s.inner_new > 0.0 {
            decision.inner = Some(0.0);
        }
    } else if s.inner_old > 0.0 && s.inner_new <= 0.0 {
        if s.velocity.abs() > config.momentum_threshold {
            let target = momentum_target(s.outer, s.velocity, config.deceleration);
            log::debug!(
                "momentum hand-over: velocity={}, distance={}, target={target}",
                s.velocity,
                momentum_distance(s.velocity, config.deceleration),
            );
            decision.outer = Some(OuterWrite::Animate(target));
            decision.consume_velocity = true;
        }
    }

    decision
}

/// Rolling inner velocity estimate
///
/// The velocity is updated only while the sampled offset is positive, so
/// the value read at the moment of a boundary crossing is the last velocity
/// measured while scrolling content.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    velocity: f32,
    last_offset: f32,
    last_time: Option<Instant>,
}

impl VelocityTracker {
    /// Record the inner offset at time `now`
    ///
    /// Samples with a non-positive time delta do not update the velocity.
    pub fn sample(&mut self, offset: f32, now: Instant) {
        if let Some(last) = self.last_time {
            let dt = now.saturating_duration_since(last).as_secs_f32();
            if dt > 0.0 && offset > 0.0 {
                let v = (offset - self.last_offset) / dt;
                if v.is_finite() {
                    self.velocity = v;
                }
            }
        }
        self.last_offset = offset;
        self.last_time = Some(now);
    }

    /// Last recorded velocity
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Take the recorded velocity, leaving zero
    pub fn take(&mut self) -> f32 {
        std::mem::take(&mut self.velocity)
    }

    /// Note that the offset was set to `offset` at `now` without user motion
    ///
    /// The recorded velocity is kept.
    pub fn rebase(&mut self, offset: f32, now: Instant) {
        self.last_offset = offset;
        self.last_time = Some(now);
    }

    /// Forget all history
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    fn sample(outer: f32, inner_old: f32, inner_new: f32) -> Sample {
        Sample {
            header_height: 200.0,
            pin_header_height: 44.0,
            outer,
            inner_old,
            inner_new,
            velocity: 0.0,
        }
    }

    #[test]
    fn steal_hands_remainder_to_inner() {
        let config = PagingConfig::default();
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(0.0, 0.0, 250.0), &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(200.0)));
        assert_eq!(d.inner, Some(50.0));
    }

    #[test]
    fn steal_within_header() {
        let config = PagingConfig::default();
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(100.0, 0.0, 30.0), &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(130.0)));
        assert_eq!(d.inner, Some(0.0));

        // pulling down while expanded: the negative remainder is dropped
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(10.0, 0.0, -30.0), &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(0.0)));
        assert_eq!(d.inner, Some(0.0));
    }

    #[test]
    fn pull_at_inner_top_reveals_header() {
        let config = PagingConfig::default();
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(200.0, 0.0, -30.0), &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(170.0)));
        assert_eq!(d.inner, Some(0.0));
        assert_eq!(owner_for(200.0, 170.0, 0.0), GestureOwner::Outer);
    }

    #[test]
    fn collapsed_inner_scrolls_freely() {
        let config = PagingConfig::default();
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(200.0, 40.0, 60.0), &config);
        assert!(d.is_empty());
        assert_eq!(owner_for(200.0, 200.0, 60.0), GestureOwner::Inner);

        // below the header height the delta is still stolen
        let d = CouplingPolicy::EagerSteal.evaluate(&sample(195.0, 40.0, 60.0), &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(200.0)));
        assert_eq!(d.inner, Some(15.0));

        // drift of the outer surface is corrected
        let s = Sample {
            header_height: 200.0,
            ..sample(200.5, 40.0, 60.0)
        };
        let d = CouplingPolicy::EagerSteal.evaluate(&s, &config);
        assert_eq!(d.outer, Some(OuterWrite::Set(200.0)));
    }

    #[test]
    fn momentum_formula() {
        assert_eq!(momentum_distance(500.0, 2500.0), 50.0);
        assert_eq!(momentum_target(150.0, 500.0, 2500.0), 100.0);
        assert_eq!(momentum_target(150.0, -500.0, 2500.0), 100.0);
        assert_eq!(momentum_target(30.0, 500.0, 2500.0), 0.0);
        assert_eq!(momentum_distance(500.0, 0.0), 0.0);

        let v = 500_000f32.sqrt();
        assert!((momentum_distance(v, 2500.0) - 100.0).abs() < 1e-3);
        assert!((momentum_target(150.0, v, 2500.0) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn momentum_hand_over_at_boundary() {
        let config = PagingConfig::with_policy(CouplingPolicy::BoundaryMomentum);
        let s = Sample {
            velocity: -500.0,
            ..sample(200.0, 12.0, 0.0)
        };
        let d = config.policy.evaluate(&s, &config);
        assert_eq!(d.outer, Some(OuterWrite::Animate(150.0)));
        assert!(d.consume_velocity);
        assert_eq!(d.inner, None);

        // repeated evaluation gives the same answer
        assert_eq!(config.policy.evaluate(&s, &config), d);
    }

    #[test]
    fn slow_boundary_crossing_only_releases_outer() {
        let config = PagingConfig::with_policy(CouplingPolicy::BoundaryMomentum);
        let s = Sample {
            velocity: 40.0,
            ..sample(200.0, 2.0, 0.0)
        };
        assert!(config.policy.evaluate(&s, &config).is_empty());
        assert_eq!(owner_for(200.0, 200.0, 0.0), GestureOwner::Outer);
    }

    #[test]
    fn boundary_momentum_pins_inner_while_expanded() {
        let config = PagingConfig::with_policy(CouplingPolicy::BoundaryMomentum);
        let d = config.policy.evaluate(&sample(80.0, 0.0, 15.0), &config);
        assert_eq!(d.inner, Some(0.0));
        assert_eq!(d.outer, None);
    }

    #[test]
    fn tracker_ignores_boundary_samples() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut tracker = VelocityTracker::default();
        tracker.sample(100.0, t0);
        assert_eq!(tracker.velocity(), 0.0);
        tracker.sample(90.0, t0 + ms(10));
        assert!((tracker.velocity() + 1000.0).abs() < 0.5);
        // zero time delta: skipped
        tracker.sample(50.0, t0 + ms(10));
        assert!((tracker.velocity() + 1000.0).abs() < 0.5);
        // at the boundary: not recorded
        tracker.sample(0.0, t0 + ms(20));
        assert!((tracker.velocity() + 1000.0).abs() < 0.5);

        assert!(tracker.take() < -999.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn tracker_rebase_keeps_velocity() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut tracker = VelocityTracker::default();
        tracker.sample(20.0, t0);
        tracker.sample(25.0, t0 + ms(10));
        assert!((tracker.velocity() - 500.0).abs() < 0.5);

        tracker.rebase(0.0, t0 + ms(10));
        assert!((tracker.velocity() - 500.0).abs() < 0.5);
        tracker.sample(10.0, t0 + ms(110));
        assert!((tracker.velocity() - 100.0).abs() < 0.5);
    }
}
