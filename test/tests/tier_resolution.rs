//! Tests for classifying observed widths into tiers and records.

use dash_shell_test::prelude::*;

#[test]
fn test_desktop_viewport_sequence() {
    let harness = ShellHarness::new(800);
    let observer = harness.viewport_observer();
    let thresholds = Desktop::thresholds();

    let mut tiers = Vec::new();
    for width in [1200, 1300, 1700, 1900, 2000] {
        harness.set_viewport_width(width);
        tiers.push(classify(observer.current_width(), &thresholds));
    }

    assert_eq!(
        tiers,
        vec![
            DesktopTier::Small,
            DesktopTier::Medium,
            DesktopTier::Large,
            DesktopTier::Large,
            DesktopTier::XLarge,
        ]
    );
}

#[test]
fn test_resolver_reports_transitions_only() {
    let harness = ShellHarness::new(1200);
    let resolver = harness.viewport_resolver::<Desktop>();
    let tracker = TierTracker::new();
    let _sub = tracker.track(&resolver);

    harness.drag_viewport([1300, 1700, 1900, 2000]);

    assert_eq!(
        tracker.tiers(),
        vec![DesktopTier::Medium, DesktopTier::Large, DesktopTier::XLarge]
    );
    assert_eq!(resolver.config(), &Desktop::metrics(DesktopTier::XLarge));
    assert_eq!(tracker.notification_count(), 3);

    tracker.reset();
    harness.set_viewport_width(1250);
    assert_eq!(tracker.tiers(), vec![DesktopTier::Small]);
    assert_eq!(tracker.notification_count(), 1);
}

#[test]
fn test_layout_that_resizes_its_container_settles_listeners() {
    let harness = ShellHarness::new(1440);
    let content = harness.create_container();
    harness.mount(content, 1200);
    let resolver = harness.container_resolver::<Desktop>(content);

    // Collapsing the sidebar for the medium layout widens the content.
    let layout = harness.clone();
    let _layout = resolver.on_tier_change(move |tier, _| {
        if tier == DesktopTier::Medium {
            layout.resize(content, 1700);
        }
    });
    let tracker = TierTracker::new();
    let _sub = tracker.track(&resolver);

    harness.resize(content, 1300);

    assert_eq!(resolver.tier(), DesktopTier::Large);
    assert_eq!(tracker.tiers(), vec![DesktopTier::Large]);
    assert_eq!(tracker.notification_count(), 1);
}

#[test]
fn test_mobile_boundary_is_half_open() {
    let harness = ShellHarness::new(374);
    let resolver = harness.viewport_resolver::<Mobile>();
    assert_eq!(resolver.tier(), MobileTier::Small);

    harness.set_viewport_width(375);
    assert_eq!(resolver.tier(), MobileTier::Medium);

    harness.set_viewport_width(374);
    assert_eq!(resolver.tier(), MobileTier::Small);
}

#[test]
fn test_container_resolver_uses_fallback_before_mount() {
    let harness = ShellHarness::new(1700);
    let content = harness.create_container();
    let resolver = harness.container_resolver::<Desktop>(content);

    // 1700 - 80 = 1620
    assert_eq!(resolver.width(), Width(1620));
    assert_eq!(resolver.tier(), DesktopTier::Large);

    let tracker = TierTracker::new();
    let _sub = tracker.track(&resolver);
    harness.mount(content, 1460);

    assert_eq!(resolver.tier(), DesktopTier::Medium);
    assert_eq!(tracker.tiers(), vec![DesktopTier::Medium]);
}

#[test]
fn test_resolver_refresh_picks_up_new_fallback() {
    let harness = ShellHarness::new(1700);
    let content = harness.create_container();
    let resolver = harness.container_resolver::<Desktop>(content);

    // Container listeners do not hear viewport resizes.
    harness.set_viewport_width(1300);
    assert_eq!(resolver.tier(), DesktopTier::Large);

    resolver.refresh();
    assert_eq!(resolver.width(), Width(1220));
    assert_eq!(resolver.tier(), DesktopTier::Small);
}

#[test]
fn test_every_reachable_tier_has_metrics() {
    fn sweep<P: DevicePreset>() {
        let set = P::tier_set();
        for width in 0..=4000u32 {
            let tier = set.classify(width);
            assert!(
                set.registry().try_config_for(tier).is_ok(),
                "{} {tier} at {width}px",
                P::CLASS
            );
        }
    }

    sweep::<Mobile>();
    sweep::<TabletPortrait>();
    sweep::<TabletHorizontal>();
    sweep::<Desktop>();
}

#[test]
fn test_classification_is_monotonic_for_presets() {
    fn check<P: DevicePreset>() {
        let thresholds = P::thresholds();
        let mut previous = thresholds.classify(0u32);
        for width in 1..=4000u32 {
            let tier = thresholds.classify(width);
            assert!(previous <= tier, "{} regressed at {width}px", P::CLASS);
            previous = tier;
        }
    }

    check::<Mobile>();
    check::<TabletPortrait>();
    check::<TabletHorizontal>();
    check::<Desktop>();
}

#[test]
fn test_device_class_picks_page_variant() {
    let harness = ShellHarness::new(390);
    let observer = harness.viewport_observer();
    assert_eq!(
        DeviceClass::for_viewport(observer.current_width()),
        DeviceClass::Mobile
    );

    harness.set_viewport_width(1024);
    assert_eq!(
        DeviceClass::for_viewport(observer.current_width()),
        DeviceClass::TabletHorizontal
    );
}

#[test]
fn test_tablet_tiers() {
    let portrait = TabletPortrait::tier_set();
    assert_eq!(portrait.classify(599u32), TabletPortraitTier::Small);
    assert_eq!(portrait.classify(600u32), TabletPortraitTier::Medium);
    assert_eq!(portrait.classify(768u32), TabletPortraitTier::Large);

    let horizontal = TabletHorizontal::tier_set();
    assert_eq!(horizontal.classify(1023u32), TabletHorizontalTier::Small);
    assert_eq!(horizontal.classify(1024u32), TabletHorizontalTier::Medium);
    assert_eq!(horizontal.classify(1180u32), TabletHorizontalTier::Large);
    assert_eq!(
        horizontal.resolve(1180u32).1.sidebar_width,
        TabletHorizontal::metrics(TabletHorizontalTier::Large).sidebar_width
    );
}
