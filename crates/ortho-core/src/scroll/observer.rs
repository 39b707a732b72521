// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Offset observation
//!
//! Surfaces report offset changes by pushing [`OffsetChanged`] records into
//! an [`OffsetChannel`] owned by the coordinator. The coordinator drains the
//! channel on its own schedule (see [`crate::PagingCoordinator::pump`]), so a
//! write performed while handling one notification can never re-enter the
//! handler.
//!
//! Writes performed by the coordinator itself are hidden from the channel by
//! holding a [`WriteGuard`] (see [`OffsetChannel::suppress`]). The guard is
//! coarse: *every* notification sent while it is alive is dropped, including
//! any caused by unrelated writes.

use crate::geom::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Identifies the surface a notification came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    /// The outer (vertical, header) surface
    Outer,
    /// The inner surface of the page at this index
    Page(usize),
}

/// A change of scroll offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetChanged {
    pub source: SurfaceId,
    pub old: Vec2,
    pub new: Vec2,
}

impl OffsetChanged {
    /// Vertical delta (`new - old`)
    #[inline]
    pub fn delta_y(&self) -> f32 {
        self.new.1 - self.old.1
    }
}

#[derive(Debug, Default)]
struct Shared {
    queue: RefCell<VecDeque<OffsetChanged>>,
    suppressed: Cell<bool>,
    attached: Cell<usize>,
}

/// Receiving end of offset notifications
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Debug, Default)]
pub struct OffsetChannel(Rc<Shared>);

impl OffsetChannel {
    /// Construct an empty channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender for `source`
    ///
    /// The sender counts as attached until dropped.
    pub fn sender(&self, source: SurfaceId) -> OffsetSender {
        self.0.attached.set(self.0.attached.get() + 1);
        OffsetSender {
            shared: self.0.clone(),
            source,
        }
    }

    /// Number of live senders
    #[inline]
    pub fn attached(&self) -> usize {
        self.0.attached.get()
    }

    /// Take the oldest pending notification
    pub fn pop(&self) -> Option<OffsetChanged> {
        self.0.queue.borrow_mut().pop_front()
    }

    /// Number of pending notifications
    pub fn pending(&self) -> usize {
        self.0.queue.borrow().len()
    }

    /// Discard all pending notifications
    pub fn clear(&self) {
        self.0.queue.borrow_mut().clear();
    }

    /// Drop all notifications until the returned guard is dropped
    ///
    /// Guards nest: dropping an inner guard restores the state observed when
    /// it was created.
    pub fn suppress(&self) -> WriteGuard {
        let prev = self.0.suppressed.replace(true);
        WriteGuard {
            shared: self.0.clone(),
            prev,
        }
    }

    /// True while a [`WriteGuard`] is alive
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.0.suppressed.get()
    }
}

/// Sending end of offset notifications, owned by exactly one surface
///
/// This type is deliberately not `Clone`: one sender corresponds to one
/// attachment. Dropping it detaches.
pub struct OffsetSender {
    shared: Rc<Shared>,
    source: SurfaceId,
}

impl OffsetSender {
    /// The surface this sender reports for
    #[inline]
    pub fn source(&self) -> SurfaceId {
        self.source
    }

    /// Report a change from `old` to `new`
    ///
    /// Does nothing when `old == new` or while suppressed.
    pub fn send(&self, old: Vec2, new: Vec2) {
        if old == new || self.shared.suppressed.get() {
            return;
        }
        self.shared.queue.borrow_mut().push_back(OffsetChanged {
            source: self.source,
            old,
            new,
        });
    }
}

impl Drop for OffsetSender {
    fn drop(&mut self) {
        let n = self.shared.attached.get();
        self.shared.attached.set(n.saturating_sub(1));
    }
}

impl fmt::Debug for OffsetSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetSender")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Guard returned by [`OffsetChannel::suppress`]
#[must_use = "notifications are only suppressed while the guard is alive"]
pub struct WriteGuard {
    shared: Rc<Shared>,
    prev: bool,
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        self.shared.suppressed.set(self.prev);
    }
}

impl fmt::Debug for WriteGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteGuard").field("prev", &self.prev).finish()
    }
}
