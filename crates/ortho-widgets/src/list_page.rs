// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A list of fixed-height rows

use crate::PageKind;
use ortho::cast::CastFloat;
use ortho::geom::Vec2;
use ortho::scroll::{ScrollRegion, ScrollSurface};
use ortho::{ListUnit, ViewHandle};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// A lifecycle event of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Appear(usize),
    Disappear(usize),
}

/// A shared record of lifecycle events
///
/// Pages are owned by the coordinator; clone the log before handing a page
/// over to keep access to the record.
pub type LifecycleLog = Rc<RefCell<Vec<Lifecycle>>>;

/// A page showing a list of fixed-height rows
#[derive(Debug)]
pub struct ListPage {
    index: usize,
    kind: PageKind,
    view: ViewHandle,
    region: ScrollRegion,
    visible: bool,
    log: Option<LifecycleLog>,
}

impl ListPage {
    /// Construct page `index` of the given `kind`
    ///
    /// The viewport is initially empty; the coordinator sizes it when the
    /// page is installed.
    pub fn new(index: usize, kind: PageKind) -> Self {
        let content = Vec2(0.0, kind.content_height());
        ListPage {
            index,
            kind,
            view: ViewHandle::new(index as u64 + 1),
            region: ScrollRegion::new(Vec2::ZERO, content),
            visible: false,
            log: None,
        }
    }

    /// Record lifecycle events to `log`
    pub fn with_log(mut self, log: LifecycleLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Use a specific view handle
    pub fn with_view(mut self, view: ViewHandle) -> Self {
        self.view = view;
        self
    }

    /// Page index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page kind
    #[inline]
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// True between `appear` and `disappear`
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Access the scroll region
    #[inline]
    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    /// Access the scroll region (mutable)
    #[inline]
    pub fn region_mut(&mut self) -> &mut ScrollRegion {
        &mut self.region
    }

    /// Indices of rows intersecting the viewport
    pub fn visible_rows(&self) -> Range<usize> {
        let h = self.kind.row_height();
        let rows = self.kind.rows();
        let view_h = self.region.viewport_size().1;
        if !(h > 0.0) || !(view_h > 0.0) {
            return 0..0;
        }
        let top = self.region.offset().1.max(0.0);
        let bottom = self.region.offset().1 + view_h;
        if !(bottom > 0.0) {
            return 0..0;
        }
        let first: usize = (top / h).floor().try_cast_nearest().unwrap_or(rows);
        let end: usize = (bottom / h).ceil().try_cast_nearest().unwrap_or(rows);
        first.min(rows)..end.min(rows)
    }

    fn record(&self, event: Lifecycle) {
        log::debug!("ListPage[{}] ({}): {event:?}", self.index, self.kind);
        if let Some(log) = self.log.as_ref() {
            log.borrow_mut().push(event);
        }
    }
}

impl ListUnit for ListPage {
    fn view(&self) -> ViewHandle {
        self.view
    }

    fn scroll_surface(&self) -> &dyn ScrollSurface {
        &self.region
    }

    fn scroll_surface_mut(&mut self) -> &mut dyn ScrollSurface {
        &mut self.region
    }

    fn appear(&mut self) {
        self.visible = true;
        self.record(Lifecycle::Appear(self.index));
    }

    fn disappear(&mut self) {
        self.visible = false;
        self.record(Lifecycle::Disappear(self.index));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_in_view() {
        let mut page = ListPage::new(0, PageKind::Overview);
        assert_eq!(page.visible_rows(), 0..0);

        page.region_mut().set_viewport_size(Vec2(390.0, 440.0));
        assert_eq!(page.visible_rows(), 0..10);

        page.region_mut().set_offset(Vec2(0.0, 66.0));
        assert_eq!(page.visible_rows(), 1..12);

        // Space above the list is not a row
        page.region_mut().set_offset(Vec2(0.0, -44.0));
        assert_eq!(page.visible_rows(), 0..9);

        page.region_mut().set_offset(Vec2(0.0, 1320.0));
        assert_eq!(page.visible_rows(), 30..30);
    }

    #[test]
    fn lifecycle_is_recorded() {
        let log = LifecycleLog::default();
        let mut page = ListPage::new(2, PageKind::Analytics).with_log(log.clone());
        assert!(!page.is_visible());
        page.appear();
        assert!(page.is_visible());
        page.disappear();
        assert!(!page.is_visible());
        assert_eq!(*log.borrow(), [Lifecycle::Appear(2), Lifecycle::Disappear(2)]);
        assert_eq!(page.view(), ViewHandle::new(3));
    }
}
