// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Ready-made page units and hosts
//!
//! These are headless: each page is a [`ListPage`] over a
//! [`ortho::scroll::ScrollRegion`], hence usable in tests and scripted demos
//! without a toolkit.
//!
//! ## Pages
//!
//! -   [`PageKind`]: kinds of demo page (overview, details, analytics)
//! -   [`ListPage`]: a [`ortho::ListUnit`] of fixed-height rows
//! -   [`LifecycleLog`], [`Lifecycle`]: a shared record of appear/disappear
//!
//! ## Hosts
//!
//! -   [`PageHost`]: a [`ortho::PagingHost`] over a list of [`PageKind`]s

mod host;
mod list_page;
mod page;

pub use host::PageHost;
pub use list_page::{Lifecycle, LifecycleLog, ListPage};
pub use page::PageKind;
