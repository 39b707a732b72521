// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Page units

use crate::scroll::ScrollSurface;
use std::fmt;

/// Opaque handle to a mountable view
///
/// The coordinator never inspects views; it only passes handles back to the
/// toolkit integration (e.g. to report where the header composite is
/// attached). The toolkit decides what the number means.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewHandle(u64);

impl ViewHandle {
    /// A handle referring to nothing
    pub const NONE: ViewHandle = ViewHandle(0);

    /// Construct from a toolkit-defined identifier
    #[inline]
    pub const fn new(id: u64) -> Self {
        ViewHandle(id)
    }

    /// Get the toolkit-defined identifier
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// True if this is [`Self::NONE`]
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "ViewHandle(NONE)")
        } else {
            write!(f, "ViewHandle(#{})", self.0)
        }
    }
}

/// The content of one page
///
/// A unit exposes its own scrollable region and a mountable view. Units are
/// created lazily by [`crate::PagingHost::make_unit`] the first time their
/// page comes into range and live until the next
/// [`crate::PagingCoordinator::reload`].
///
/// The lifecycle methods [`Self::appear`] and [`Self::disappear`] are called
/// only on settled changes of the active page, never per scroll sample.
pub trait ListUnit {
    /// The view to mount in the page slot
    fn view(&self) -> ViewHandle;

    /// The unit's vertical scroll surface
    fn scroll_surface(&self) -> &dyn ScrollSurface;

    /// The unit's vertical scroll surface (mutable)
    fn scroll_surface_mut(&mut self) -> &mut dyn ScrollSurface;

    /// The page became active
    fn appear(&mut self) {}

    /// The page stopped being active
    fn disappear(&mut self) {}
}

impl fmt::Debug for dyn ListUnit + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListUnit")
            .field("view", &self.view())
            .field("offset", &self.scroll_surface().offset())
            .finish()
    }
}
