//! Tests for size observer binding, fallback and subscription lifecycle.
//!
//! These tests verify that:
//! - Unmounted or zero-sized containers report the fallback width
//! - Observers move to the measured width once the container mounts
//! - Unsubscribing is idempotent and stops delivery immediately
//! - Dropping an observer releases its host listener

use std::cell::RefCell;
use std::rc::Rc;

use dash_shell_test::prelude::*;

#[test]
fn test_fallback_then_measured_width_without_resubscribing() {
    let harness = ShellHarness::new(1280);
    let content = harness.create_container();
    let observer = harness.container_observer(content);
    let tracker = WidthTracker::new();
    let _sub = tracker.track(&observer);

    // Before mount: viewport minus the default 80px sidebar allowance.
    assert_eq!(observer.current_width(), Width(1200));

    harness.mount(content, 1010);
    assert_eq!(observer.current_width(), Width(1010));
    assert_eq!(tracker.widths(), vec![1010]);

    harness.resize(content, 990);
    assert_eq!(tracker.widths(), vec![1010, 990]);
}

#[test]
fn test_unmount_returns_to_fallback() {
    let harness = ShellHarness::new(1440);
    let content = harness.create_container();
    harness.mount(content, 1100);
    let observer = harness.container_observer(content);
    let tracker = WidthTracker::new();
    let _sub = tracker.track(&observer);

    harness.unmount(content);

    assert_eq!(observer.current_width(), Width(1360));
    assert_eq!(tracker.widths(), vec![1360]);
}

#[test]
fn test_configured_sidebar_allowance() {
    let harness = ShellHarness::new(1024);
    let content = harness.create_container();
    let observer = SizeObserver::new(
        harness.host().clone(),
        MeasurementSource::Container(content),
        ObserverConfig {
            sidebar_allowance: 200,
        },
    );
    assert_eq!(observer.current_width(), Width(824));
}

#[test]
fn test_unsubscribe_twice_is_a_no_op() {
    let harness = ShellHarness::new(800);
    let observer = harness.viewport_observer();
    let tracker = WidthTracker::new();
    let sub = tracker.track(&observer);
    let other = WidthTracker::new();
    let _other_sub = other.track(&observer);

    harness.set_viewport_width(820);
    sub.unsubscribe();
    sub.unsubscribe();
    assert!(sub.is_released());
    harness.set_viewport_width(840);

    assert_eq!(tracker.widths(), vec![820]);
    assert_eq!(other.widths(), vec![820, 840]);
    assert_eq!(observer.subscriber_count(), 1);
}

#[test]
fn test_unsubscribe_from_another_callback_stops_delivery() {
    let harness = ShellHarness::new(800);
    let observer = harness.viewport_observer();
    let late = WidthTracker::new();
    let late_sub: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    // Registered first, so it runs before `late` in each pass.
    let _first = observer.subscribe({
        let late_sub = late_sub.clone();
        move |width| {
            if width.get() >= 900
                && let Some(sub) = late_sub.borrow().as_ref()
            {
                sub.unsubscribe();
            }
        }
    });
    *late_sub.borrow_mut() = Some(late.track(&observer));

    harness.drag_viewport([850, 900, 950]);

    assert_eq!(late.widths(), vec![850]);
}

#[test]
fn test_scoped_subscription_released_on_drop() {
    let harness = ShellHarness::new(800);
    let observer = harness.viewport_observer();
    let tracker = WidthTracker::new();
    {
        let _sub = tracker.track(&observer).scoped();
        harness.set_viewport_width(810);
    }
    harness.set_viewport_width(820);

    assert_eq!(tracker.widths(), vec![810]);
    assert_eq!(observer.subscriber_count(), 0);
}

#[test]
fn test_every_drag_step_is_delivered() {
    let harness = ShellHarness::new(1000);
    let observer = harness.viewport_observer();
    let tracker = WidthTracker::new();
    let _sub = tracker.track(&observer);

    harness.drag_viewport(1001..=1200);

    assert_eq!(tracker.count(), 200);
    assert_eq!(tracker.last(), Some(Width(1200)));

    tracker.reset();
    harness.drag_viewport([1100, 1000]);
    assert_eq!(tracker.widths(), vec![1100, 1000]);
}

#[test]
fn test_remounting_views_leaks_no_listeners() {
    let harness = ShellHarness::new(1280);
    let content = harness.create_container();

    for width in [900, 1000, 1100] {
        let viewport = harness.viewport_observer();
        let container = harness.container_observer(content);
        harness.mount(content, width);
        assert_eq!(harness.active_listeners(), 2);
        assert_eq!(container.current_width(), Width(width));
        drop(viewport);
        drop(container);
        harness.unmount(content);
    }

    assert_eq!(harness.active_listeners(), 0);
}

#[test]
fn test_rebind_after_first_render() {
    let harness = ShellHarness::new(1280);
    // First render: the content container does not exist yet.
    let observer = harness.viewport_observer();
    let tracker = WidthTracker::new();
    let _sub = tracker.track(&observer);

    let content = harness.create_container();
    harness.mount(content, 1040);
    observer.rebind(MeasurementSource::Container(content));
    harness.resize(content, 1020);

    assert_eq!(observer.source(), MeasurementSource::Container(content));
    assert_eq!(tracker.widths(), vec![1040, 1020]);
    assert_eq!(harness.active_listeners(), 1);
}

#[test]
fn test_disposed_observer_ignores_new_subscriptions() {
    let harness = ShellHarness::new(1280);
    let observer = harness.viewport_observer();
    observer.dispose();

    let tracker = WidthTracker::new();
    let sub = tracker.track(&observer);
    harness.set_viewport_width(1300);

    assert!(observer.is_disposed());
    assert!(!observer.is_bound());
    assert_eq!(tracker.count(), 0);
    sub.unsubscribe();
}
