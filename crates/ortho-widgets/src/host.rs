// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A host over a list of demo pages

use crate::{Lifecycle, LifecycleLog, ListPage, PageKind};
use ortho::geom::Vec2;
use ortho::{ListUnit, PagingHost, ViewHandle};

const HEADER_VIEW: ViewHandle = ViewHandle::new(1 << 32);
const PIN_HEADER_VIEW: ViewHandle = ViewHandle::new((1 << 32) + 1);

/// A [`PagingHost`] over a list of [`PageKind`]s
///
/// Each page is a [`ListPage`]. Calls made by the coordinator are recorded
/// for inspection.
#[derive(Debug)]
pub struct PageHost {
    pages: Vec<PageKind>,
    header_height: f32,
    pin_header_height: f32,
    log: LifecycleLog,
    made: Vec<usize>,
    page_changes: Vec<usize>,
    last_outer_offset: Option<f32>,
    outer_scrolls: usize,
}

impl PageHost {
    /// Construct over `pages`
    pub fn new(pages: impl IntoIterator<Item = PageKind>) -> Self {
        PageHost {
            pages: pages.into_iter().collect(),
            header_height: 200.0,
            pin_header_height: 44.0,
            log: Default::default(),
            made: vec![],
            page_changes: vec![],
            last_outer_offset: None,
            outer_scrolls: 0,
        }
    }

    /// Construct with one page of each kind
    pub fn demo() -> Self {
        Self::new(PageKind::ALL)
    }

    /// Set header heights
    pub fn with_heights(mut self, header: f32, pin_header: f32) -> Self {
        self.header_height = header;
        self.pin_header_height = pin_header;
        self
    }

    /// Replace the list of pages
    ///
    /// Takes effect on the next [`ortho::PagingCoordinator::reload`].
    pub fn set_pages(&mut self, pages: impl IntoIterator<Item = PageKind>) {
        self.pages = pages.into_iter().collect();
    }

    /// Page kinds
    #[inline]
    pub fn pages(&self) -> &[PageKind] {
        &self.pages
    }

    /// The shared lifecycle record of all pages
    #[inline]
    pub fn lifecycle_log(&self) -> &LifecycleLog {
        &self.log
    }

    /// Lifecycle events of page `index`
    pub fn lifecycle(&self, index: usize) -> Vec<Lifecycle> {
        self.log
            .borrow()
            .iter()
            .filter(|event| match event {
                Lifecycle::Appear(i) | Lifecycle::Disappear(i) => *i == index,
            })
            .copied()
            .collect()
    }

    /// Indices passed to [`PagingHost::make_unit`], in order
    #[inline]
    pub fn made(&self) -> &[usize] {
        &self.made
    }

    /// Indices passed to [`PagingHost::on_page_changed`], in order
    #[inline]
    pub fn page_changes(&self) -> &[usize] {
        &self.page_changes
    }

    /// The last vertical offset passed to [`PagingHost::on_outer_scroll`]
    #[inline]
    pub fn last_outer_offset(&self) -> Option<f32> {
        self.last_outer_offset
    }

    /// Number of calls to [`PagingHost::on_outer_scroll`]
    #[inline]
    pub fn outer_scrolls(&self) -> usize {
        self.outer_scrolls
    }
}

impl PagingHost for PageHost {
    fn header_height(&self) -> f32 {
        self.header_height
    }

    fn pin_header_height(&self) -> f32 {
        self.pin_header_height
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn make_unit(&mut self, index: usize) -> Box<dyn ListUnit> {
        self.made.push(index);
        let kind = self.pages.get(index).copied().unwrap_or(PageKind::Overview);
        Box::new(ListPage::new(index, kind).with_log(self.log.clone()))
    }

    fn header_view(&self) -> ViewHandle {
        HEADER_VIEW
    }

    fn pin_header_view(&self) -> ViewHandle {
        PIN_HEADER_VIEW
    }

    fn on_page_changed(&mut self, index: usize) {
        log::info!("page: {}", index);
        self.page_changes.push(index);
    }

    fn on_outer_scroll(&mut self, offset: Vec2) {
        self.last_outer_offset = Some(offset.1);
        self.outer_scrolls += 1;
    }
}
