// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A scripted walk through the demo pages
//!
//! Run with `RUST_LOG=debug` to see coordinator decisions. An optional
//! argument names a config file (any supported format) selecting the
//! coupling policy and physics.

use ortho::config::{Format, PagingConfig};
use ortho::geom::Vec2;
use ortho::monitor::FrameMonitor;
use ortho::scroll::{ScrollRegion, ScrollSurface};
use ortho::widgets::PageHost;
use ortho::{Action, PagingCoordinator};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_micros(16_667);

type Coordinator = PagingCoordinator<PageHost>;

fn print_state(what: &str, c: &Coordinator) {
    let inner = c
        .unit(c.current_index())
        .map(|unit| unit.scroll_surface().offset().1)
        .unwrap_or(0.0);
    println!(
        "{what:<24} page={} outer={:>6.1} inner={:>7.1} owner={:?} header={:?}",
        c.current_index(),
        c.outer_offset(),
        inner,
        c.owner(),
        c.header_parent(),
    );
}

// Advance frames until motion stops
fn settle(c: &mut Coordinator, now: &mut Instant) {
    for _ in 0..600 {
        *now += FRAME;
        let action = c.tick(*now);
        if action.contains(Action::OWNER_CHANGED) {
            log::debug!("owner changed: {:?}", c.owner());
        }
        if !c.needs_frame() {
            break;
        }
    }
}

// Drag by `total` over `frames` frames, then release with the drag speed
fn swipe(c: &mut Coordinator, now: &mut Instant, total: f32, frames: u32) {
    let step = total / frames as f32;
    for _ in 0..frames {
        *now += FRAME;
        let _ = c.drag_by(step, *now);
    }
    let _ = c.release(step / FRAME.as_secs_f32(), *now);
    settle(c, now);
}

// Page horizontally from the current page to `index`
fn page_to(c: &mut Coordinator, now: &mut Instant, index: usize) {
    let width = c.layout().page_width();
    let from = c.current_index() as f32 * width;
    let to = index as f32 * width;
    for i in 1..=18 {
        *now += FRAME;
        let x = from + (to - from) * i as f32 / 18.0;
        let _ = c.horizontal_scrolled(x, i == 18, *now);
    }
}

fn main() {
    env_logger::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match PagingConfig::read_path(&path, Format::None) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to read {}: {err}", path.display());
                PagingConfig::default()
            }
        },
        None => PagingConfig::default(),
    };
    println!("policy: {:?}", config.policy);

    let outer = ScrollRegion::with_config(Vec2(390.0, 844.0), Vec2::ZERO, &config);
    let mut c = PagingCoordinator::new(PageHost::demo(), outer, config)
        .with_monitor(FrameMonitor::new());

    let mut now = Instant::now();
    let _ = c.mount(now);
    print_state("mounted", &c);

    swipe(&mut c, &mut now, 320.0, 20);
    print_state("swiped up", &c);

    page_to(&mut c, &mut now, 1);
    print_state("paged to 1", &c);

    let _ = c.select_page(0, now);
    settle(&mut c, &mut now);
    print_state("selected page 0", &c);

    swipe(&mut c, &mut now, -600.0, 12);
    print_state("flung down", &c);

    for _ in 0..70 {
        now += FRAME;
        let _ = c.tick(now);
    }
    c.unmount();

    let host = c.host();
    println!("units made: {:?}", host.made());
    println!("page changes: {:?}", host.page_changes());
    for index in 0..host.pages().len() {
        println!("lifecycle[{index}]: {:?}", host.lifecycle(index));
    }
    if let Some(monitor) = c.monitor() {
        println!("{}", monitor.report());
    }
}
