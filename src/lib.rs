// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Ortho: nested scrolling for paged views under a collapsing header
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`ortho_core`] is the core of the library: the coordinator, scroll
//!     surfaces, coupling policies and configuration
//! -   [`ortho_widgets`] provides ready-made page units and hosts
//!
//! All items from [`ortho_core`] are directly re-exported from this crate
//! (e.g. [`ortho::geom::Vec2`](crate::geom::Vec2)); the widget crate is
//! re-exported as a sub-module (e.g.
//! [`ortho::widgets::ListPage`](crate::widgets::ListPage)).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is re-export as `ortho::cast`.
//!
//! ## Usage
//!
//! ```
//! use ortho::config::PagingConfig;
//! use ortho::geom::Vec2;
//! use ortho::scroll::ScrollRegion;
//! use ortho::widgets::PageHost;
//! use ortho::PagingCoordinator;
//! use std::time::Instant;
//!
//! let outer = ScrollRegion::new(Vec2(390.0, 800.0), Vec2::ZERO);
//! let mut c = PagingCoordinator::new(PageHost::demo(), outer, PagingConfig::default());
//! let now = Instant::now();
//! let _ = c.mount(now);
//! let _ = c.drag_by(250.0, now);
//! assert_eq!(c.outer_offset(), 200.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

// public implementations:
pub mod prelude;

pub use ortho_core::*;

pub extern crate ortho_widgets as widgets;
