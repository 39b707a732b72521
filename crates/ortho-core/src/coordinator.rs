// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The paging coordinator

use crate::Action;
use crate::cast::{Cast, CastFloat};
use crate::config::PagingConfig;
use crate::geom::Vec2;
use crate::layout::PagingLayout;
use crate::monitor::FrameMonitor;
use crate::policy::{self, CouplingPolicy, GestureOwner, OuterWrite, Sample, VelocityTracker};
use crate::scroll::{OffsetAnimation, OffsetChannel, ScrollRegion, ScrollSurface, SurfaceId};
use crate::unit::{ListUnit, ViewHandle};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::time::Instant;

/// Data source and delegate of a [`PagingCoordinator`]
///
/// Heights, page count and views are read on construction and on each
/// [`PagingCoordinator::reload`].
pub trait PagingHost {
    /// Height of the collapsing header (`>= 0`)
    fn header_height(&self) -> f32;

    /// Height of the pinned sub-header (`>= 0`)
    fn pin_header_height(&self) -> f32;

    /// Number of pages
    fn page_count(&self) -> usize;

    /// Construct the unit for page `index`
    ///
    /// Called at most once per index between reloads.
    fn make_unit(&mut self, index: usize) -> Box<dyn ListUnit>;

    /// The header view
    fn header_view(&self) -> ViewHandle {
        ViewHandle::NONE
    }

    /// The pinned sub-header view
    fn pin_header_view(&self) -> ViewHandle {
        ViewHandle::NONE
    }

    /// The active page changed
    fn on_page_changed(&mut self, index: usize) {
        let _ = index;
    }

    /// The outer surface moved
    fn on_outer_scroll(&mut self, offset: Vec2) {
        let _ = offset;
    }
}

/// Where the header composite (header plus pinned sub-header) is attached
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderParent {
    /// The coordinator's own top-level surface
    #[default]
    Coordinator,
    /// The header slot of the list on this page
    Page(usize),
}

/// Coordinator of an outer header surface and horizontally paged lists
///
/// The coordinator owns an outer [`ScrollSurface`] of type `O` and the
/// lazily created [`ListUnit`]s of each page. Surfaces report offset changes
/// through an [`OffsetChannel`]; call [`Self::pump`] (or one of the driving
/// methods, which pump internally) to process them. Writes made by the
/// coordinator itself are not reported back.
///
/// All methods returning [`Action`] describe what changed; the values may be
/// ignored by callers which do not render.
pub struct PagingCoordinator<H: PagingHost, O: ScrollSurface = ScrollRegion> {
    host: H,
    outer: O,
    config: PagingConfig,
    header_height: f32,
    pin_header_height: f32,
    page_count: usize,
    header_view: ViewHandle,
    pin_header_view: ViewHandle,
    units: FxHashMap<usize, Box<dyn ListUnit>>,
    observed: FxHashSet<usize>,
    current: usize,
    owner: GestureOwner,
    collapsed: bool,
    tracker: VelocityTracker,
    channel: OffsetChannel,
    header_parent: HeaderParent,
    in_flight: bool,
    horizontal_offset: f32,
    paging: Option<OffsetAnimation>,
    layout: PagingLayout,
    monitor: Option<FrameMonitor>,
}

fn sanitize_height(what: &str, h: f32) -> f32 {
    if h.is_finite() && h >= 0.0 {
        h
    } else {
        log::warn!("PagingCoordinator: invalid {what} height {h}; using 0");
        0.0
    }
}

impl<H: PagingHost, O: ScrollSurface> PagingCoordinator<H, O> {
    /// Construct
    ///
    /// The initial viewport is taken from `outer`. An invalid `config` is
    /// replaced by the default configuration.
    pub fn new(host: H, mut outer: O, config: PagingConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("PagingCoordinator: {err}; using default configuration");
                PagingConfig::with_policy(config.policy)
            }
        };

        let channel = OffsetChannel::new();
        outer.attach_observer(channel.sender(SurfaceId::Outer));
        let viewport = outer.viewport_size();

        let mut coordinator = PagingCoordinator {
            host,
            outer,
            config,
            header_height: 0.0,
            pin_header_height: 0.0,
            page_count: 0,
            header_view: ViewHandle::NONE,
            pin_header_view: ViewHandle::NONE,
            units: Default::default(),
            observed: Default::default(),
            current: 0,
            owner: GestureOwner::Outer,
            collapsed: false,
            tracker: VelocityTracker::default(),
            channel,
            header_parent: HeaderParent::Coordinator,
            in_flight: false,
            horizontal_offset: 0.0,
            paging: None,
            layout: PagingLayout::compute(viewport, 0.0, 0.0, 0),
            monitor: None,
        };
        let _ = coordinator.reload();
        coordinator
    }

    /// Attach a frame monitor
    ///
    /// The monitor is started by [`Self::mount`] and stopped by
    /// [`Self::unmount`].
    pub fn with_monitor(mut self, monitor: FrameMonitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Discard all lazily created state and re-read the host
    ///
    /// Every unit's observer is detached before the unit is dropped. The
    /// outer offset returns to zero and page 0 becomes current.
    pub fn reload(&mut self) -> Action {
        self.detach_units();
        self.units.clear();
        self.observed.clear();
        self.channel.clear();

        self.header_height = sanitize_height("header", self.host.header_height());
        self.pin_header_height = sanitize_height("pinned header", self.host.pin_header_height());
        self.page_count = self.host.page_count();
        self.header_view = self.host.header_view();
        self.pin_header_view = self.host.pin_header_view();
        log::debug!(
            "PagingCoordinator::reload: pages={}, header={}, pin={}",
            self.page_count,
            self.header_height,
            self.pin_header_height
        );

        self.current = 0;
        self.tracker.reset();
        self.header_parent = HeaderParent::Coordinator;
        self.in_flight = false;
        self.horizontal_offset = 0.0;
        self.paging = None;
        self.layout = PagingLayout::compute(
            self.layout.viewport(),
            self.header_height,
            self.pin_header_height,
            self.page_count,
        );

        {
            let _guard = self.channel.suppress();
            self.outer.cancel_animation();
            self.outer.set_viewport_size(self.layout.viewport());
            self.outer.set_content_size(self.layout.outer_content());
            self.outer.set_offset(Vec2::ZERO);
        }
        self.collapsed = policy::is_collapsed(self.header_height, 0.0);
        self.owner = GestureOwner::Inner; // force refresh
        let _ = self.refresh_ownership();

        Action::RELOAD | Action::SET_RECT
    }

    /// Set the viewport size and recompute layout
    ///
    /// A transition started by [`Self::select_page`] completes immediately.
    pub fn set_viewport(&mut self, size: Vec2) -> Action {
        let pending = self.paging.take().map(|anim| self.nearest_page(anim.target().0));
        self.layout = PagingLayout::compute(
            size,
            self.header_height,
            self.pin_header_height,
            self.page_count,
        );
        let page_size = Vec2(self.layout.page_width(), self.layout.pages.size.1);
        let min_h = self.layout.min_list_content_height();
        let max_outer = self.header_height;
        let current: f32 = pending.unwrap_or(self.current).cast();
        self.horizontal_offset = current * self.layout.page_width();

        let guard = self.channel.suppress();
        self.outer.set_viewport_size(self.layout.viewport());
        self.outer.set_content_size(self.layout.outer_content());
        let offset = self.outer.offset();
        if offset.1 > max_outer {
            self.outer.set_offset(offset.with_y(max_outer));
        }
        for unit in self.units.values_mut() {
            let surface = unit.scroll_surface_mut();
            surface.set_viewport_size(page_size);
            let content = surface.content_size();
            if content.1 < min_h {
                surface.set_content_size(content.with_y(min_h));
            }
        }
        drop(guard);

        match pending {
            Some(index) => {
                let _ = self.ensure_unit(index);
                self.on_horizontal_index_settled(index) | Action::SET_RECT
            }
            None => Action::SET_RECT,
        }
    }

    /// Start the frame monitor (if any) and show the current page
    pub fn mount(&mut self, now: Instant) -> Action {
        if let Some(monitor) = self.monitor.as_mut() {
            monitor.start(now);
        }
        let current = self.current;
        if self.ensure_unit(current).is_some() {
            self.refresh_ownership() | Action::REDRAW
        } else {
            Action::empty()
        }
    }

    /// Stop the frame monitor (if any)
    pub fn unmount(&mut self) {
        if let Some(monitor) = self.monitor.as_mut() {
            monitor.stop();
        }
    }

    /// Get the unit for `index`, creating it if necessary
    ///
    /// Returns `None` if `index` is out of range. A new unit is given the
    /// resting offset of the current state, its content is padded to fill
    /// the page and one observer is attached.
    pub fn ensure_unit(&mut self, index: usize) -> Option<&mut (dyn ListUnit + 'static)> {
        if index >= self.page_count {
            return None;
        }
        if !self.units.contains_key(&index) {
            self.instantiate(index);
        }
        self.units.get_mut(&index).map(|unit| unit.as_mut())
    }

    fn instantiate(&mut self, index: usize) {
        log::debug!("PagingCoordinator: creating unit for page {index}");
        let mut unit = self.host.make_unit(index);
        let rest = self.resting_offset();
        let page_size = Vec2(self.layout.page_width(), self.layout.pages.size.1);
        let min_h = self.layout.min_list_content_height();

        {
            let _guard = self.channel.suppress();
            let surface = unit.scroll_surface_mut();
            surface.set_viewport_size(page_size);
            let content = surface.content_size();
            if content.1 < min_h {
                surface.set_content_size(content.with_y(min_h));
            }
            surface.set_offset(Vec2::vertical(rest));
            surface.set_drag_enabled(false);
        }

        if self.observed.insert(index) {
            let sender = self.channel.sender(SurfaceId::Page(index));
            unit.scroll_surface_mut().attach_observer(sender);
        }
        self.units.insert(index, unit);
        let _ = self.refresh_ownership();
    }

    // Offset given to a newly created unit
    fn resting_offset(&self) -> f32 {
        if self.is_inert() {
            0.0
        } else if self.collapsed {
            -self.pin_header_height
        } else {
            self.active_offset().unwrap_or(0.0).min(0.0)
        }
    }

    /// True if coupling does nothing (no header or no pages)
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.header_height <= 0.0 || self.page_count == 0
    }

    fn active_offset(&self) -> Option<f32> {
        let unit = self.units.get(&self.current)?;
        Some(unit.scroll_surface().offset().1)
    }

    /// Process all pending offset notifications
    ///
    /// All notifications are processed with the same timestamp `now`.
    pub fn pump(&mut self, now: Instant) -> Action {
        let mut action = Action::empty();
        while let Some(msg) = self.channel.pop() {
            action |= match msg.source {
                SurfaceId::Outer => self.outer_offset_changed(msg.old, msg.new),
                SurfaceId::Page(index) => self.inner_offset_changed(index, msg.old, msg.new, now),
            };
        }
        action
    }

    /// Handle an offset change of the outer surface
    pub fn outer_offset_changed(&mut self, old: Vec2, new: Vec2) -> Action {
        let _ = old;
        self.host.on_outer_scroll(new);
        Action::REGION_MOVED | self.sync_inactive() | self.refresh_ownership()
    }

    /// Handle an offset change of the inner surface of page `index`
    ///
    /// Only the current page is considered; other pages are synchronised
    /// passively.
    pub fn inner_offset_changed(
        &mut self,
        index: usize,
        old: Vec2,
        new: Vec2,
        now: Instant,
    ) -> Action {
        if index != self.current {
            return Action::empty();
        }
        let Some(actual) = self.active_offset() else {
            return Action::empty();
        };
        self.tracker.sample(actual, now);

        if self.is_inert() {
            return self.refresh_ownership();
        }
        if self.in_flight {
            log::trace!("inner_offset_changed: horizontal paging in flight; ignored");
            return self.refresh_ownership();
        }
        let policy = self.config.policy;
        if policy == CouplingPolicy::EagerSteal
            && (self.outer.is_dragging() || self.outer.is_decelerating())
        {
            log::trace!("inner_offset_changed: outer surface in motion; ignored");
            return self.refresh_ownership();
        }

        let sample = Sample {
            header_height: self.header_height,
            pin_header_height: self.pin_header_height,
            outer: self.outer.offset().1,
            inner_old: old.1,
            inner_new: new.1,
            velocity: self.tracker.velocity(),
        };
        let decision = policy.evaluate(&sample, &self.config);

        let mut action = Action::empty();
        if let Some(y) = decision.inner {
            log::trace!("page {index}: inner offset {} -> {y}", new.1);
            let _guard = self.channel.suppress();
            if let Some(unit) = self.units.get_mut(&index) {
                let surface = unit.scroll_surface_mut();
                let offset = surface.offset();
                surface.set_offset(offset.with_y(y));
                self.tracker.rebase(y, now);
                action |= Action::REDRAW;
            }
        }
        if let Some(write) = decision.outer {
            let written = self.write_outer(write, now);
            if decision.consume_velocity {
                if written.is_empty() {
                    log::trace!("inner_offset_changed: momentum hand-over dropped");
                } else {
                    let _ = self.tracker.take();
                }
            }
            action |= written;
        }

        action | self.sync_inactive() | self.refresh_ownership()
    }

    fn write_outer(&mut self, write: OuterWrite, now: Instant) -> Action {
        if self.outer.is_dragging() {
            log::trace!("write_outer: outer surface is being dragged; skipped");
            return Action::empty();
        }
        let y = write.target().max(0.0).min(self.header_height);
        let offset = self.outer.offset().with_y(y);
        match write {
            OuterWrite::Set(_) => {
                log::trace!("write_outer: outer offset -> {y}");
                let _guard = self.channel.suppress();
                self.outer.cancel_animation();
                self.outer.set_offset(offset);
            }
            OuterWrite::Animate(_) => {
                let _guard = self.channel.suppress();
                self.outer.cancel_animation();
                self.outer
                    .animate_offset(offset, self.config.momentum_animation(), now);
            }
        }
        self.host.on_outer_scroll(self.outer.offset());
        Action::REGION_MOVED
    }

    // Synchronise inactive units with the active one
    fn sync_inactive(&mut self) -> Action {
        let collapsed = policy::is_collapsed(self.header_height, self.outer.offset().1);
        let flipped = collapsed != self.collapsed;
        self.collapsed = collapsed;
        if self.is_inert() {
            return Action::empty();
        }

        let mut action = Action::empty();
        if !self.in_flight {
            action |= self.update_header_parent();
        }

        let target = if !collapsed {
            match self.active_offset() {
                Some(y) => y,
                None => return action,
            }
        } else if flipped {
            -self.pin_header_height
        } else {
            return action;
        };

        let current = self.current;
        let _guard = self.channel.suppress();
        for (index, unit) in self.units.iter_mut() {
            if *index == current {
                continue;
            }
            let surface = unit.scroll_surface_mut();
            let offset = surface.offset();
            if offset.1 != target {
                log::trace!("sync_inactive: page {index} -> {target}");
                surface.set_offset(offset.with_y(target));
                action |= Action::REDRAW;
            }
        }
        action
    }

    // Enable dragging on exactly one of the outer and active surfaces
    fn refresh_ownership(&mut self) -> Action {
        let outer = self.outer.offset().1;
        let owner = match self.active_offset() {
            Some(inner) => policy::owner_for(self.header_height, outer, inner),
            None => GestureOwner::Outer,
        };

        self.outer.set_drag_enabled(owner == GestureOwner::Outer);
        let current = self.current;
        for (index, unit) in self.units.iter_mut() {
            let enabled = *index == current && owner == GestureOwner::Inner;
            unit.scroll_surface_mut().set_drag_enabled(enabled);
        }

        if owner != self.owner {
            log::trace!("refresh_ownership: {:?} -> {owner:?}", self.owner);
            self.owner = owner;
            Action::OWNER_CHANGED
        } else {
            Action::empty()
        }
    }

    /// The horizontal paging surface moved to `offset_x`
    ///
    /// Creates the units of all (partially) visible pages. While not
    /// `settled`, the header composite is attached to the coordinator and
    /// vertical coupling is suspended; once `settled` the nearest page
    /// becomes current (see [`Self::on_horizontal_index_settled`]).
    ///
    /// This cancels any transition started by [`Self::select_page`].
    pub fn horizontal_scrolled(&mut self, offset_x: f32, settled: bool, now: Instant) -> Action {
        self.paging = None;
        self.scroll_horizontal(offset_x, settled, now)
    }

    fn scroll_horizontal(&mut self, offset_x: f32, settled: bool, now: Instant) -> Action {
        let width = self.layout.page_width();
        if self.page_count == 0 || !(width > 0.0) || !offset_x.is_finite() {
            return Action::empty();
        }
        self.horizontal_offset = offset_x;
        let last = (self.page_count - 1) as f32;
        let pos = (offset_x / width).max(0.0).min(last);
        let lo: usize = pos.floor().try_cast_nearest().unwrap_or(self.current);
        let hi: usize = pos.ceil().try_cast_nearest().unwrap_or(self.current);
        let _ = self.ensure_unit(lo);
        let _ = self.ensure_unit(hi);

        let mut action = Action::empty();
        if settled {
            if let Some(monitor) = self.monitor.as_mut() {
                if let Some(d) = monitor.end_page_switch(now) {
                    log::debug!("PagingCoordinator: page switch took {d:?}");
                }
            }
            let index: usize = pos.try_cast_nearest().unwrap_or(self.current);
            action |= self.on_horizontal_index_settled(index);
        } else {
            if !self.in_flight {
                self.in_flight = true;
                if let Some(monitor) = self.monitor.as_mut() {
                    monitor.begin_page_switch(now);
                }
            }
            if self.header_parent != HeaderParent::Coordinator {
                self.header_parent = HeaderParent::Coordinator;
                action |= Action::HEADER_MOVED;
            }
        }
        action
    }

    /// Switch to page `index` with an animated horizontal transition
    ///
    /// The transition is advanced by [`Self::tick`]; read
    /// [`Self::horizontal_offset`] after each tick to position the pages.
    /// Once it completes, `index` becomes current exactly as if the user had
    /// paged there. With a zero page width or zero
    /// [`PagingConfig::page_animation`] the switch happens immediately.
    /// Out-of-range indices are ignored.
    pub fn select_page(&mut self, index: usize, now: Instant) -> Action {
        if index >= self.page_count {
            log::debug!("select_page: index {index} out of range; ignored");
            return Action::empty();
        }
        let i: f32 = index.cast();
        let target = i * self.layout.page_width();
        let duration = self.config.page_animation();
        log::debug!("PagingCoordinator::select_page: {} -> {index}", self.current);

        if !(self.layout.page_width() > 0.0)
            || duration.is_zero()
            || target == self.horizontal_offset
        {
            self.paging = None;
            let _ = self.ensure_unit(index);
            self.horizontal_offset = target;
            return self.on_horizontal_index_settled(index) | Action::REDRAW;
        }

        let from = Vec2(self.horizontal_offset, 0.0);
        self.paging = Some(OffsetAnimation::new(from, Vec2(target, 0.0), now, duration));
        self.scroll_horizontal(from.0, false, now) | Action::REDRAW
    }

    /// Current horizontal offset of the paged region
    #[inline]
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    fn nearest_page(&self, offset_x: f32) -> usize {
        let width = self.layout.page_width();
        if self.page_count == 0 || !(width > 0.0) {
            return self.current;
        }
        let last: f32 = (self.page_count - 1).cast();
        let pos = (offset_x / width).max(0.0).min(last);
        pos.try_cast_nearest().unwrap_or(self.current)
    }

    /// Horizontal paging settled on page `index`
    ///
    /// If the page changed, `disappear` is sent to the old unit and `appear`
    /// to the new one (each only if created) and the host is notified.
    /// Out-of-range indices are ignored.
    pub fn on_horizontal_index_settled(&mut self, index: usize) -> Action {
        self.in_flight = false;
        if index >= self.page_count {
            log::debug!("on_horizontal_index_settled: index {index} out of range; ignored");
            return Action::empty();
        }

        let mut action = Action::empty();
        if index != self.current {
            let old = self.current;
            if let Some(unit) = self.units.get_mut(&old) {
                unit.disappear();
            }
            if let Some(unit) = self.units.get_mut(&index) {
                unit.appear();
            }
            self.current = index;
            self.tracker.reset();
            log::debug!("PagingCoordinator: page {old} -> {index}");
            self.host.on_page_changed(index);
            action |= Action::PAGE_CHANGED | self.refresh_ownership();
        }

        action | self.update_header_parent()
    }

    // The header composite rides with the active list only while that list
    // rests at or below the pinned offset
    fn update_header_parent(&mut self) -> Action {
        let parent = match self.active_offset() {
            Some(y) if !self.is_inert() && y <= -self.pin_header_height => {
                HeaderParent::Page(self.current)
            }
            _ => HeaderParent::Coordinator,
        };
        if parent != self.header_parent {
            log::trace!("header composite: {:?} -> {parent:?}", self.header_parent);
            self.header_parent = parent;
            Action::HEADER_MOVED
        } else {
            Action::empty()
        }
    }

    /// Route a vertical drag delta
    ///
    /// The delta goes to the surface owning the gesture; whatever it cannot
    /// use is passed on to the other surface.
    pub fn drag_by(&mut self, dy: f32, now: Instant) -> Action {
        let delta = Vec2::vertical(dy);
        let current = self.current;
        if !self.units.contains_key(&current) {
            let _ = self.outer.scroll_by(delta);
            return self.pump(now);
        }

        let mut action;
        match self.owner {
            GestureOwner::Outer => {
                let residual = self.outer.scroll_by(delta);
                action = self.pump(now);
                if residual != Vec2::ZERO {
                    if let Some(unit) = self.units.get_mut(&current) {
                        let _ = unit.scroll_surface_mut().scroll_by(residual);
                    }
                    action |= self.pump(now);
                }
            }
            GestureOwner::Inner => {
                let mut residual = delta;
                if let Some(unit) = self.units.get_mut(&current) {
                    residual = unit.scroll_surface_mut().scroll_by(delta);
                }
                action = self.pump(now);
                if residual != Vec2::ZERO {
                    let _ = self.outer.scroll_by(residual);
                    action |= self.pump(now);
                }
            }
        }
        action
    }

    /// Release a drag with vertical `velocity`, flinging the owning surface
    pub fn release(&mut self, velocity: f32, now: Instant) -> Action {
        let velocity = Vec2::vertical(velocity);
        match self.owner {
            GestureOwner::Outer => self.outer.fling(velocity, now),
            GestureOwner::Inner => {
                if let Some(unit) = self.units.get_mut(&self.current) {
                    unit.scroll_surface_mut().fling(velocity, now);
                }
            }
        }
        Action::REDRAW
    }

    /// Advance physics and animations of all surfaces, then pump
    pub fn tick(&mut self, now: Instant) -> Action {
        let mut busy = self.outer.tick(now);
        for unit in self.units.values_mut() {
            busy |= unit.scroll_surface_mut().tick(now);
        }
        if let Some(monitor) = self.monitor.as_mut() {
            monitor.frame(now);
        }
        let mut action = self.pump(now);
        if let Some(anim) = self.paging {
            let done = anim.is_done(now);
            if done {
                self.paging = None;
            }
            action |= self.scroll_horizontal(anim.sample(now).0, done, now);
            busy = true;
        }
        if busy { action | Action::REDRAW } else { action }
    }

    /// True while any surface is in kinetic or animated motion
    pub fn needs_frame(&self) -> bool {
        self.paging.is_some()
            || self.outer.is_decelerating()
            || self.outer.is_animating()
            || self.units.values().any(|unit| {
                let surface = unit.scroll_surface();
                surface.is_decelerating() || surface.is_animating()
            })
    }

    fn detach_units(&mut self) {
        for unit in self.units.values_mut() {
            unit.scroll_surface_mut().detach_observer();
        }
    }

    /// Access the host
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Access the host (mutable)
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Access the outer surface
    #[inline]
    pub fn outer(&self) -> &O {
        &self.outer
    }

    /// Access the outer surface (mutable)
    ///
    /// Offset changes made through this reference are reported like user
    /// movement.
    #[inline]
    pub fn outer_mut(&mut self) -> &mut O {
        &mut self.outer
    }

    /// Vertical offset of the outer surface
    #[inline]
    pub fn outer_offset(&self) -> f32 {
        self.outer.offset().1
    }

    /// Access configuration
    #[inline]
    pub fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Replace the configuration
    ///
    /// Invalid configurations are rejected (logged and ignored).
    pub fn set_config(&mut self, config: PagingConfig) -> Action {
        match config.validate() {
            Ok(()) => {
                self.config = config;
                Action::CONFIG
            }
            Err(err) => {
                log::warn!("PagingCoordinator::set_config: {err}");
                Action::empty()
            }
        }
    }

    #[inline]
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    #[inline]
    pub fn pin_header_height(&self) -> f32 {
        self.pin_header_height
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    pub fn header_view(&self) -> ViewHandle {
        self.header_view
    }

    #[inline]
    pub fn pin_header_view(&self) -> ViewHandle {
        self.pin_header_view
    }

    /// Index of the active page
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Which surface may begin a new drag
    #[inline]
    pub fn owner(&self) -> GestureOwner {
        self.owner
    }

    /// Where the header composite is attached
    #[inline]
    pub fn header_parent(&self) -> HeaderParent {
        self.header_parent
    }

    /// Current layout
    #[inline]
    pub fn layout(&self) -> &PagingLayout {
        &self.layout
    }

    /// True if an observer was attached for page `index`
    #[inline]
    pub fn is_observed(&self, index: usize) -> bool {
        self.observed.contains(&index)
    }

    /// Number of live observers (including the outer surface's)
    #[inline]
    pub fn attached_observers(&self) -> usize {
        self.channel.attached()
    }

    /// Number of created units
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Get the unit for `index`, if created
    pub fn unit(&self, index: usize) -> Option<&(dyn ListUnit + 'static)> {
        self.units.get(&index).map(|unit| unit.as_ref())
    }

    /// Get the unit for `index` (mutable), if created
    ///
    /// Offset changes made through this reference are reported like user
    /// movement.
    pub fn unit_mut(&mut self, index: usize) -> Option<&mut (dyn ListUnit + 'static)> {
        self.units.get_mut(&index).map(|unit| unit.as_mut())
    }

    /// True while the coordinator is writing an offset
    #[inline]
    pub fn is_programmatic_write(&self) -> bool {
        self.channel.is_suppressed()
    }

    /// Access the frame monitor
    #[inline]
    pub fn monitor(&self) -> Option<&FrameMonitor> {
        self.monitor.as_ref()
    }
}

impl<H: PagingHost, O: ScrollSurface> Drop for PagingCoordinator<H, O> {
    fn drop(&mut self) {
        self.detach_units();
        self.outer.detach_observer();
    }
}

impl<H: PagingHost, O: ScrollSurface> fmt::Debug for PagingCoordinator<H, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagingCoordinator")
            .field("policy", &self.config.policy)
            .field("header_height", &self.header_height)
            .field("pin_header_height", &self.pin_header_height)
            .field("page_count", &self.page_count)
            .field("outer_offset", &self.outer.offset())
            .field("current", &self.current)
            .field("owner", &self.owner)
            .field("header_parent", &self.header_parent)
            .field("horizontal_offset", &self.horizontal_offset)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}
