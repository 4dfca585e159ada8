//! Tests for resolvers built from configured threshold tables.

use dash_shell::config::ShellConfig;
use dash_shell_test::prelude::*;

const PAGE_CONFIG: &str = r#"{
    "sidebar_allowance": 240,
    "thresholds": {
        "desktop": {
            "tiers": [
                { "below": 1200, "tier": "small" },
                { "below": 1500, "tier": "medium" },
                { "below": 1800, "tier": "large" }
            ],
            "otherwise": "xlarge"
        }
    }
}"#;

#[test]
fn test_configured_resolver_uses_override_and_allowance() {
    let config = ShellConfig::from_json(PAGE_CONFIG).unwrap();
    let harness = ShellHarness::new(1800);
    let content = harness.create_container();

    let observer = SizeObserver::new(
        harness.host().clone(),
        MeasurementSource::Container(content),
        config.observer_config(),
    );
    let resolver = TierResolver::new(observer, config.tier_set::<Desktop>().unwrap());

    // 1800 - 240 = 1560, which the override puts in `large`.
    assert_eq!(resolver.width(), Width(1560));
    assert_eq!(resolver.tier(), DesktopTier::Large);

    harness.mount(content, 1499);
    assert_eq!(resolver.tier(), DesktopTier::Medium);
}

#[test]
fn test_unconfigured_classes_keep_presets() {
    let config = ShellConfig::from_json(PAGE_CONFIG).unwrap();
    let set = config.tier_set::<Mobile>().unwrap();
    assert_eq!(set.thresholds(), &Mobile::thresholds());
}

#[test]
fn test_override_with_skipped_tier() {
    let config = ShellConfig::from_json(
        r#"{ "thresholds": { "tablet_portrait": {
            "tiers": [{ "below": 700, "tier": "small" }],
            "otherwise": "large"
        } } }"#,
    )
    .unwrap();
    let set = config.tier_set::<TabletPortrait>().unwrap();

    assert_eq!(set.classify(699u32), TabletPortraitTier::Small);
    assert_eq!(set.classify(700u32), TabletPortraitTier::Large);
    assert!(
        !set.thresholds()
            .reachable()
            .contains(TabletPortraitTier::Medium)
    );
}
