// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Header and page geometry
//!
//! Outer content is laid out top to bottom as the header, the pinned
//! sub-header and the paged region. The paged region fills the viewport
//! below the pinned sub-header, hence the outer surface can scroll by
//! exactly the header height.
//!
//! Rects are in outer content coordinates unless noted otherwise.

use crate::cast::Cast;
use crate::geom::{Rect, Vec2};

/// Computed geometry
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PagingLayout {
    viewport: Vec2,
    pub header: Rect,
    pub pin_header: Rect,
    /// The horizontally paged region (one viewport-width page is visible)
    pub pages: Rect,
    pub page_count: usize,
}

impl PagingLayout {
    /// Compute from viewport size, heights and number of pages
    ///
    /// Negative or non-finite heights are treated as zero.
    pub fn compute(viewport: Vec2, header_height: f32, pin_height: f32, page_count: usize) -> Self {
        let sanitize = |h: f32| if h.is_finite() { h.max(0.0) } else { 0.0 };
        let viewport = Vec2(sanitize(viewport.0), sanitize(viewport.1));
        let header_height = sanitize(header_height);
        let pin_height = sanitize(pin_height);
        let w = viewport.0;

        let header = Rect::new(Vec2::ZERO, Vec2(w, header_height));
        let pin_header = Rect::new(Vec2(0.0, header_height), Vec2(w, pin_height));
        let pages_y = header_height + pin_height;
        let pages_h = (viewport.1 - pin_height).max(0.0);
        let pages_w = if page_count == 0 { 0.0 } else { w };
        let pages = Rect::new(Vec2(0.0, pages_y), Vec2(pages_w, pages_h));

        PagingLayout {
            viewport,
            header,
            pin_header,
            pages,
            page_count,
        }
    }

    /// Viewport size
    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Width of one page
    #[inline]
    pub fn page_width(&self) -> f32 {
        self.viewport.0
    }

    /// Total width of horizontal content
    pub fn horizontal_content_width(&self) -> f32 {
        let n: f32 = self.page_count.cast();
        self.page_width() * n
    }

    /// Rect of page `index` within the horizontally scrolled content
    pub fn page_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.page_count {
            return None;
        }
        let i: f32 = index.cast();
        let pos = Vec2(self.page_width() * i, 0.0);
        Some(Rect::new(pos, Vec2(self.page_width(), self.pages.size.1)))
    }

    /// Size of outer content
    ///
    /// The maximum outer offset is the header height.
    pub fn outer_content(&self) -> Vec2 {
        Vec2(self.viewport.0, self.header.size.1 + self.viewport.1)
    }

    /// Minimum content height of a list
    ///
    /// Lists shorter than this are padded so that the header can always be
    /// collapsed by scrolling the list.
    #[inline]
    pub fn min_list_content_height(&self) -> f32 {
        self.pages.size.1
    }

    /// The pinned sub-header rect in viewport coordinates for `outer_offset`
    ///
    /// This follows the content until it reaches the top of the viewport,
    /// then sticks there.
    pub fn pinned_header_at(&self, outer_offset: f32) -> Rect {
        let y = (self.pin_header.pos.1 - outer_offset).max(0.0);
        Rect::new(Vec2(0.0, y), self.pin_header.size)
    }

    /// The visible part of the header in viewport coordinates
    pub fn header_at(&self, outer_offset: f32) -> Rect {
        let h = self.header.size.1;
        let visible = (h - outer_offset.max(0.0)).max(0.0);
        Rect::new(Vec2(0.0, 0.0), Vec2(self.viewport.0, visible))
    }

    /// True if there are no pages
    ///
    /// The outer surface is then a single scrollable area holding the header
    /// and the pinned sub-header.
    #[inline]
    pub fn is_single_area(&self) -> bool {
        self.page_count == 0
    }
}
