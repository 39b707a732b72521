//! End-to-end scenarios over the ready-made widgets

use ortho::config::PagingConfig;
use ortho::geom::Vec2;
use ortho::policy::{CouplingPolicy, GestureOwner};
use ortho::scroll::{ScrollRegion, ScrollSurface};
use ortho::widgets::{Lifecycle, PageHost, PageKind};
use ortho::{Action, HeaderParent, PagingCoordinator};
use std::time::{Duration, Instant};

type Coordinator = PagingCoordinator<PageHost>;

fn coordinator(policy: CouplingPolicy) -> Coordinator {
    let outer = ScrollRegion::new(Vec2(390.0, 800.0), Vec2::ZERO);
    PagingCoordinator::new(PageHost::demo(), outer, PagingConfig::with_policy(policy))
}

fn inner(c: &Coordinator, index: usize) -> f32 {
    c.unit(index).unwrap().scroll_surface().offset().1
}

fn run_frames(c: &mut Coordinator, t0: Instant, frames: u64) -> Instant {
    let mut now = t0;
    for i in 1..=frames {
        now = t0 + Duration::from_millis(16 * i);
        let _ = c.tick(now);
        if !c.needs_frame() {
            break;
        }
    }
    now
}

#[test]
fn drag_collapses_header_then_scrolls_list() {
    let now = Instant::now();
    let mut c = coordinator(CouplingPolicy::EagerSteal);
    let _ = c.mount(now);
    assert_eq!(c.owner(), GestureOwner::Outer);

    let action = c.drag_by(120.0, now);
    assert!(action.contains(Action::REGION_MOVED));
    assert_eq!(c.outer_offset(), 120.0);
    assert_eq!(inner(&c, 0), 0.0);

    let _ = c.drag_by(130.0, now);
    assert_eq!(c.outer_offset(), 200.0);
    assert_eq!(inner(&c, 0), 50.0);
    assert_eq!(c.owner(), GestureOwner::Inner);
    assert!(!c.outer().is_drag_enabled());
    assert_eq!(c.host().last_outer_offset(), Some(200.0));

    let _ = c.drag_by(-80.0, now);
    assert_eq!(c.outer_offset(), 170.0);
    assert_eq!(inner(&c, 0), 0.0);
    assert_eq!(c.owner(), GestureOwner::Outer);
}

#[test]
fn switching_pages_while_collapsed() {
    let now = Instant::now();
    let mut c = coordinator(CouplingPolicy::EagerSteal);
    let _ = c.mount(now);
    let _ = c.drag_by(400.0, now);
    assert_eq!(c.outer_offset(), 200.0);
    assert_eq!(inner(&c, 0), 200.0);

    let action = c.horizontal_scrolled(150.0, false, now);
    assert!(!action.contains(Action::PAGE_CHANGED));
    assert_eq!(c.header_parent(), HeaderParent::Coordinator);
    assert_eq!(inner(&c, 1), -44.0);

    let action = c.horizontal_scrolled(390.0, true, now);
    assert!(action.contains(Action::PAGE_CHANGED | Action::HEADER_MOVED));
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.header_parent(), HeaderParent::Page(1));
    assert_eq!(c.host().page_changes(), [1]);
    assert_eq!(c.host().lifecycle(0), [Lifecycle::Disappear(0)]);
    assert_eq!(c.host().lifecycle(1), [Lifecycle::Appear(1)]);

    // The list on page 0 keeps its position
    assert_eq!(inner(&c, 0), 200.0);
    assert_eq!(c.outer_offset(), 200.0);

    // Pulling down on the new page reveals the header
    let _ = c.drag_by(-100.0, now);
    assert_eq!(c.outer_offset(), 100.0);
}

#[test]
fn fling_to_top_hands_momentum_to_header() {
    let t0 = Instant::now();
    let mut c = coordinator(CouplingPolicy::BoundaryMomentum);
    let _ = c.mount(t0);
    let _ = c.drag_by(300.0, t0);
    assert_eq!(c.outer_offset(), 200.0);
    assert_eq!(inner(&c, 0), 100.0);
    assert_eq!(c.owner(), GestureOwner::Inner);

    let _ = c.release(-2000.0, t0);
    assert!(c.needs_frame());
    let _ = run_frames(&mut c, t0, 100);

    assert!(!c.needs_frame());
    assert_eq!(inner(&c, 0), 0.0);
    assert_eq!(c.outer_offset(), 0.0);
    assert_eq!(c.owner(), GestureOwner::Outer);
}

#[test]
fn selecting_a_page_from_a_tab_strip() {
    let t0 = Instant::now();
    let mut c = coordinator(CouplingPolicy::EagerSteal);
    let _ = c.mount(t0);
    let _ = c.drag_by(400.0, t0);

    let _ = c.select_page(2, t0);
    assert_eq!(c.header_parent(), HeaderParent::Coordinator);
    let _ = run_frames(&mut c, t0, 100);

    assert_eq!(c.current_index(), 2);
    assert_eq!(c.horizontal_offset(), 780.0);
    assert_eq!(c.header_parent(), HeaderParent::Page(2));
    assert_eq!(inner(&c, 2), -44.0);
    assert_eq!(c.host().page_changes(), [2]);
    assert_eq!(c.host().lifecycle(2), [Lifecycle::Appear(2)]);
}

#[test]
fn reload_rereads_the_host() {
    let now = Instant::now();
    let mut c = coordinator(CouplingPolicy::EagerSteal);
    let _ = c.mount(now);
    let _ = c.horizontal_scrolled(780.0, true, now);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.unit_count(), 2);

    c.host_mut().set_pages([PageKind::Details]);
    let action = c.reload();
    assert!(action.contains(Action::RELOAD));
    assert_eq!(c.page_count(), 1);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.unit_count(), 0);
    assert_eq!(c.attached_observers(), 1);

    // Settling on a page which no longer exists is ignored
    let action = c.on_horizontal_index_settled(2);
    assert_eq!(action, Action::empty());
    assert_eq!(c.current_index(), 0);

    let _ = c.mount(now);
    assert_eq!(c.host().made(), [0, 2, 0]);
}

#[test]
fn header_only_without_pages() {
    let now = Instant::now();
    let outer = ScrollRegion::new(Vec2(390.0, 800.0), Vec2::ZERO);
    let host = PageHost::new(Vec::<PageKind>::new());
    let mut c = PagingCoordinator::new(host, outer, PagingConfig::default());
    assert!(c.is_inert());
    assert!(c.layout().is_single_area());
    assert_eq!(c.mount(now), Action::empty());

    let _ = c.drag_by(500.0, now);
    assert_eq!(c.outer_offset(), 200.0);
    assert!(c.host().made().is_empty());
}

#[cfg(feature = "toml")]
#[test]
fn policy_from_config_file() {
    use ortho::config::Format;

    let path = std::env::temp_dir().join(format!("ortho-scenario-{}.toml", std::process::id()));
    std::fs::write(&path, "policy = \"BoundaryMomentum\"\nmomentum_threshold = 80.0\n").unwrap();
    let config = PagingConfig::read_path(&path, Format::None).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(config.policy, CouplingPolicy::BoundaryMomentum);
    assert_eq!(config.momentum_threshold, 80.0);

    let outer = ScrollRegion::new(Vec2(390.0, 800.0), Vec2::ZERO);
    let c = PagingCoordinator::new(PageHost::demo(), outer, config);
    assert_eq!(c.config().policy, CouplingPolicy::BoundaryMomentum);
}
