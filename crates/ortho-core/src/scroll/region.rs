// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Headless scroll region

use super::{Kinetic, OffsetAnimation, OffsetSender, Samples, ScrollSurface};
use crate::config::PagingConfig;
use crate::geom::Vec2;
use std::time::{Duration, Instant};

/// A headless [`ScrollSurface`]
///
/// This tracks offset, sizes and gesture state, and implements kinetic
/// scrolling and animated transitions when driven by [`Self::tick`]. User
/// drags are fed via [`Self::begin_drag`], [`Self::drag_by`] and
/// [`Self::end_drag`].
///
/// Every change of offset is reported to the attached observer.
///
/// An offset below zero written via [`ScrollSurface::set_offset`] becomes a
/// resting position: scrolling may return to it until the next explicit
/// write.
#[derive(Debug)]
pub struct ScrollRegion {
    viewport: Vec2,
    content: Vec2,
    offset: Vec2,
    floor: Vec2,
    overscroll: f32,
    dragging: bool,
    drag_enabled: bool,
    kinetic: Kinetic,
    decay: (f32, f32),
    samples: Samples,
    sample_period: Duration,
    animation: Option<OffsetAnimation>,
    observer: Option<OffsetSender>,
}

impl ScrollRegion {
    /// Construct with default physics
    pub fn new(viewport: Vec2, content: Vec2) -> Self {
        Self::with_config(viewport, content, &PagingConfig::default())
    }

    /// Construct with physics taken from `config`
    pub fn with_config(viewport: Vec2, content: Vec2, config: &PagingConfig) -> Self {
        ScrollRegion {
            viewport,
            content,
            offset: Vec2::ZERO,
            floor: Vec2::ZERO,
            overscroll: config.overscroll.max(0.0),
            dragging: false,
            drag_enabled: true,
            kinetic: Kinetic::default(),
            decay: config.kinetic_decay(),
            samples: Samples::default(),
            sample_period: config.kinetic_timeout(),
            animation: None,
            observer: None,
        }
    }

    /// Apply physics settings from `config`
    pub fn apply_config(&mut self, config: &PagingConfig) {
        self.overscroll = config.overscroll.max(0.0);
        self.decay = config.kinetic_decay();
        self.sample_period = config.kinetic_timeout();
    }

    fn move_to(&mut self, offset: Vec2) {
        let old = self.offset;
        self.offset = offset;
        if let Some(ref tx) = self.observer {
            tx.send(old, offset);
        }
    }

    // Bounds for movement, extended to include the resting and current offsets
    fn bounds(&self, extra: f32) -> (Vec2, Vec2) {
        let lo = Vec2::splat(-extra).min(self.floor).min(self.offset);
        let hi = (self.max_offset() + Vec2::splat(extra)).max(self.offset);
        (lo, hi)
    }

    fn scroll_within(&mut self, delta: Vec2, extra: f32) -> Vec2 {
        let (lo, hi) = self.bounds(extra);
        let target = self.offset + delta;
        let offset = target.clamp(lo, hi);
        if offset != self.offset {
            self.move_to(offset);
        }
        target - offset
    }

    /// Begin a user drag
    ///
    /// Returns false (and does nothing) if dragging is currently disabled.
    /// Otherwise stops any kinetic motion or animation.
    pub fn begin_drag(&mut self, now: Instant) -> bool {
        let _ = now;
        if !self.drag_enabled {
            return false;
        }
        self.kinetic.stop();
        self.animation = None;
        self.samples.clear();
        self.dragging = true;
        true
    }

    /// Move by a user drag delta, returning the unused part
    ///
    /// The region may be dragged up to the configured overscroll distance
    /// past its bounds. Does nothing unless a drag is in progress.
    pub fn drag_by(&mut self, delta: Vec2, now: Instant) -> Vec2 {
        if !self.dragging {
            return delta;
        }
        let residual = self.scroll_within(delta, self.overscroll);
        self.samples.push_delta(now, delta - residual);
        residual
    }

    /// End a user drag, starting kinetic motion from the recent velocity
    pub fn end_drag(&mut self, now: Instant) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        let vel = self.samples.velocity(now, self.sample_period);
        self.samples.clear();

        let max = self.max_offset();
        if self.overscroll > 0.0 && !(Vec2::ZERO.le(self.offset) && self.offset.le(max)) {
            let target = self.offset.clamp(Vec2::ZERO, max);
            self.animate_offset(target, Duration::from_millis(200), now);
        } else {
            self.fling(vel, now);
        }
    }

    /// True if the offset is at (or beyond) the top of the content
    #[inline]
    pub fn is_at_top(&self) -> bool {
        self.offset.1 <= 0.0
    }

    /// Current kinetic velocity
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.kinetic.velocity()
    }
}

impl ScrollSurface for ScrollRegion {
    #[inline]
    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.floor = offset.min(Vec2::ZERO);
        if offset != self.offset {
            self.move_to(offset);
        }
    }

    fn scroll_by(&mut self, delta: Vec2) -> Vec2 {
        self.scroll_within(delta, 0.0)
    }

    #[inline]
    fn content_size(&self) -> Vec2 {
        self.content
    }

    fn set_content_size(&mut self, size: Vec2) {
        self.content = size.max(Vec2::ZERO);
    }

    #[inline]
    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = size.max(Vec2::ZERO);
    }

    #[inline]
    fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    fn is_decelerating(&self) -> bool {
        self.kinetic.is_scrolling()
    }

    #[inline]
    fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[inline]
    fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    fn animate_offset(&mut self, target: Vec2, duration: Duration, now: Instant) {
        self.kinetic.stop();
        let anim = OffsetAnimation::new(self.offset, target, now, duration);
        if anim.is_done(now) {
            self.animation = None;
            self.set_offset(target);
        } else {
            self.animation = Some(anim);
        }
    }

    fn cancel_animation(&mut self) {
        self.animation = None;
    }

    fn fling(&mut self, velocity: Vec2, now: Instant) {
        if self.kinetic.start(velocity, now) {
            self.animation = None;
        }
    }

    fn tick(&mut self, now: Instant) -> bool {
        if let Some(anim) = self.animation {
            self.set_offset(anim.sample(now));
            if anim.is_done(now) {
                self.animation = None;
            }
            return self.animation.is_some();
        }

        if let Some(delta) = self.kinetic.step(now, self.decay) {
            let residual = self.scroll_within(delta, 0.0);
            if residual != Vec2::ZERO {
                // hit a bound
                self.kinetic.stop();
            }
        }
        self.kinetic.is_scrolling()
    }

    fn attach_observer(&mut self, sender: OffsetSender) {
        self.observer = Some(sender);
    }

    fn detach_observer(&mut self) -> bool {
        self.observer.take().is_some()
    }

    #[inline]
    fn has_observer(&self) -> bool {
        self.observer.is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scroll::{OffsetChannel, SurfaceId};

    fn region() -> ScrollRegion {
        ScrollRegion::new(Vec2(320.0, 500.0), Vec2(320.0, 1500.0))
    }

    #[test]
    fn scroll_by_returns_residual() {
        let mut r = region();
        assert_eq!(r.max_offset(), Vec2(0.0, 1000.0));
        assert_eq!(r.scroll_by(Vec2(0.0, 300.0)), Vec2::ZERO);
        assert_eq!(r.scroll_by(Vec2(0.0, 800.0)), Vec2(0.0, 100.0));
        assert_eq!(r.offset(), Vec2(0.0, 1000.0));
        assert_eq!(r.scroll_by(Vec2(0.0, -1200.0)), Vec2(0.0, -200.0));
        assert_eq!(r.offset(), Vec2::ZERO);
    }

    #[test]
    fn scroll_by_from_outside_range() {
        let mut r = region();
        r.set_offset(Vec2(0.0, -44.0));
        assert_eq!(r.scroll_by(Vec2(0.0, 10.0)), Vec2::ZERO);
        assert_eq!(r.offset(), Vec2(0.0, -34.0));
        assert_eq!(r.scroll_by(Vec2(0.0, -20.0)), Vec2(0.0, -10.0));
        assert_eq!(r.offset(), Vec2(0.0, -44.0));

        // an explicit write at or above zero clears the resting position
        r.set_offset(Vec2(0.0, 30.0));
        assert_eq!(r.scroll_by(Vec2(0.0, -50.0)), Vec2(0.0, -20.0));
        assert_eq!(r.offset(), Vec2::ZERO);
    }

    #[test]
    fn every_change_is_reported() {
        let channel = OffsetChannel::new();
        let mut r = region();
        r.attach_observer(channel.sender(SurfaceId::Page(1)));
        r.set_offset(Vec2(0.0, 10.0));
        r.set_offset(Vec2(0.0, 10.0));
        let _ = r.scroll_by(Vec2(0.0, 5.0));
        assert_eq!(channel.pending(), 2);
        assert!(r.detach_observer());
        assert_eq!(channel.attached(), 0);
        r.set_offset(Vec2::ZERO);
        assert_eq!(channel.pending(), 2);
    }

    #[test]
    fn disabled_drag_does_not_begin() {
        let t0 = Instant::now();
        let mut r = region();
        r.set_drag_enabled(false);
        assert!(!r.begin_drag(t0));
        assert_eq!(r.drag_by(Vec2(0.0, 10.0), t0), Vec2(0.0, 10.0));
        assert_eq!(r.offset(), Vec2::ZERO);
    }

    #[test]
    fn fling_stops_at_bound() {
        let t0 = Instant::now();
        let mut r = region();
        r.set_offset(Vec2(0.0, 100.0));
        r.fling(Vec2(0.0, -3000.0), t0);
        assert!(r.is_decelerating());

        let mut t = t0;
        for _ in 0..200 {
            t += Duration::from_millis(16);
            if !r.tick(t) {
                break;
            }
        }
        assert!(!r.is_decelerating());
        assert_eq!(r.offset(), Vec2::ZERO);
    }

    #[test]
    fn drag_then_release_flings() {
        let t0 = Instant::now();
        let mut r = region();
        assert!(r.begin_drag(t0));
        assert!(r.is_dragging());
        for i in 1..=5 {
            let _ = r.drag_by(Vec2(0.0, 10.0), t0 + Duration::from_millis(10 * i));
        }
        assert_eq!(r.offset(), Vec2(0.0, 50.0));
        r.end_drag(t0 + Duration::from_millis(50));
        assert!(!r.is_dragging());
        assert!(r.is_decelerating());
        assert!(r.velocity().1 > 0.0);
    }

    #[test]
    fn animation_runs_to_target() {
        let t0 = Instant::now();
        let mut r = region();
        r.set_offset(Vec2(0.0, 150.0));
        r.animate_offset(Vec2(0.0, 50.0), Duration::from_millis(300), t0);
        assert!(r.is_animating());
        assert!(r.tick(t0 + Duration::from_millis(150)));
        assert_eq!(r.offset(), Vec2(0.0, 100.0));
        assert!(!r.tick(t0 + Duration::from_millis(300)));
        assert_eq!(r.offset(), Vec2(0.0, 50.0));
        assert!(!r.is_animating());
    }
}
