// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Action enum

bitflags! {
    /// Action required after processing
    ///
    /// This type is returned by [`crate::PagingCoordinator`] methods and
    /// describes what the toolkit integration should update.
    ///
    /// Two `Action` values may be combined via bit-or (`a | b`).
    ///
    /// Callers which do not render (e.g. tests) may ignore these values.
    #[must_use]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Action: u32 {
        /// Some surface offset changed; redraw is required
        const REDRAW = 1 << 0;
        /// The outer (header) surface moved
        ///
        /// Implies redraw.
        const REGION_MOVED = 1 << 4;
        /// Layout was recomputed (header heights or viewport changed)
        const SET_RECT = 1 << 8;
        /// The header composite changed parent
        const HEADER_MOVED = 1 << 9;
        /// Gesture ownership switched between outer and inner surfaces
        const OWNER_CHANGED = 1 << 10;
        /// Configuration changed
        const CONFIG = 1 << 11;
        /// The active page changed
        const PAGE_CHANGED = 1 << 12;
        /// All lazily created state was discarded
        const RELOAD = 1 << 16;
    }
}
