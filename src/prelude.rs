// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Ortho prelude
//!
//! This module allows convenient importation of common unabiguous items:
//! ```
//! use ortho::prelude::*;
//! ```
//!
//! This prelude may be more useful when implementing a toolkit integration
//! (surfaces, units and hosts) than when using the ready-made widgets.

#[doc(no_inline)]
pub use ortho_core::cast::{Cast, CastFloat, Conv};
#[doc(no_inline)]
pub use ortho_core::config::PagingConfig;
#[doc(no_inline)]
pub use ortho_core::geom::{Rect, Vec2};
#[doc(no_inline)]
pub use ortho_core::policy::{CouplingPolicy, GestureOwner};
#[doc(no_inline)]
pub use ortho_core::scroll::{OffsetSender, ScrollRegion, ScrollSurface};
#[doc(no_inline)]
pub use ortho_core::{Action, HeaderParent, ListUnit, PagingCoordinator, PagingHost, ViewHandle};
