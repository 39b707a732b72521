// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Ortho core
//!
//! Coordination of one vertically scrolling *outer* surface (a collapsing
//! header plus a pinned sub-header) with a set of horizontally paged *inner*
//! surfaces (lists). The central type is [`PagingCoordinator`]; everything it
//! talks to is abstracted behind [`scroll::ScrollSurface`], [`ListUnit`] and
//! [`PagingHost`].
//!
//! Nothing here renders. A toolkit integration supplies surfaces and forwards
//! their offset changes; [`scroll::ScrollRegion`] is a headless reference
//! surface used by demos and tests.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate bitflags;

pub extern crate easy_cast as cast;

mod action;
mod coordinator;
mod unit;

pub mod config;
pub mod geom;
pub mod layout;
pub mod monitor;
pub mod policy;
pub mod scroll;

pub use action::Action;
pub use coordinator::{HeaderParent, PagingCoordinator, PagingHost};
pub use unit::{ListUnit, ViewHandle};
