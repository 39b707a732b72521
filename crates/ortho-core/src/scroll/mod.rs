// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scroll surfaces
//!
//! [`ScrollSurface`] is the interface the coordinator uses to read and write
//! scroll state. A toolkit integration implements it over its native scroll
//! views; [`ScrollRegion`] is a headless implementation with simple physics.

mod animation;
mod kinetic;
mod observer;
mod region;
mod velocity;

pub use animation::OffsetAnimation;
pub use kinetic::Kinetic;
pub use observer::{OffsetChanged, OffsetChannel, OffsetSender, SurfaceId, WriteGuard};
pub use region::ScrollRegion;
pub use velocity::Samples;

use crate::geom::Vec2;
use std::time::{Duration, Instant};

/// A rectangular scrollable viewport
///
/// Offsets are measured in content units; `(0, 0)` shows the top-left of the
/// content. Offsets outside `[0, max_offset()]` are allowed when written
/// explicitly (e.g. a negative resting offset which reveals space above the
/// content).
///
/// Implementations must report each change of offset to the attached
/// [`OffsetSender`] (if any), including changes caused by
/// [`Self::set_offset`]. Suppression of notifications caused by the
/// coordinator's own writes is handled by the channel.
pub trait ScrollSurface {
    /// Current offset
    fn offset(&self) -> Vec2;

    /// Set the offset
    ///
    /// The value is not clamped. Kinetic motion (if any) continues.
    fn set_offset(&mut self, offset: Vec2);

    /// Scroll by `delta`, returning the part which could not be used
    ///
    /// The new offset is clamped to the scrollable range, extended to include
    /// the current offset if that is already outside the range.
    fn scroll_by(&mut self, delta: Vec2) -> Vec2;

    /// Size of scrollable content
    fn content_size(&self) -> Vec2;

    /// Set the size of scrollable content
    fn set_content_size(&mut self, size: Vec2);

    /// Size of the visible viewport
    fn viewport_size(&self) -> Vec2;

    /// Set the size of the visible viewport
    fn set_viewport_size(&mut self, size: Vec2);

    /// Maximum offset
    #[inline]
    fn max_offset(&self) -> Vec2 {
        (self.content_size() - self.viewport_size()).max(Vec2::ZERO)
    }

    /// True while under direct manipulation by the user
    fn is_dragging(&self) -> bool;

    /// True while moving under kinetic (momentum) scrolling
    fn is_decelerating(&self) -> bool;

    /// True while an animated offset transition is in progress
    fn is_animating(&self) -> bool;

    /// Whether a new drag gesture may begin on this surface
    fn is_drag_enabled(&self) -> bool;

    /// Permit or forbid new drag gestures
    ///
    /// A drag already in progress is not affected.
    fn set_drag_enabled(&mut self, enabled: bool);

    /// Start an animated transition to `target`
    ///
    /// Replaces any animation in progress and stops kinetic motion.
    fn animate_offset(&mut self, target: Vec2, duration: Duration, now: Instant);

    /// Cancel any animation in progress, leaving the offset where it is
    fn cancel_animation(&mut self);

    /// Start kinetic motion with the given velocity (units per second)
    ///
    /// The default implementation does nothing; surfaces whose physics are
    /// driven by the toolkit need not implement this.
    fn fling(&mut self, velocity: Vec2, now: Instant) {
        let _ = (velocity, now);
    }

    /// Advance physics and animations to `now`
    ///
    /// Returns true while further ticks are required.
    fn tick(&mut self, now: Instant) -> bool {
        let _ = now;
        false
    }

    /// Attach an observer, replacing any existing one
    fn attach_observer(&mut self, sender: OffsetSender);

    /// Detach the observer, returning true if one was attached
    fn detach_observer(&mut self) -> bool;

    /// True if an observer is attached
    fn has_observer(&self) -> bool;
}
