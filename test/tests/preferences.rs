//! The preference calls are placeholders until a backend exists.

use dash_shell::prefs::{UserPreferences, fetch_user_preferences, save_user_preferences};
use dash_shell_test::prelude::*;
use futures::executor::block_on;

#[test]
fn test_preferences_are_never_stored() {
    let preferences = UserPreferences {
        device_class: Some(DeviceClass::TabletPortrait),
        ..UserPreferences::default()
    };

    block_on(async {
        assert!(!save_user_preferences(&preferences).await);
        assert_eq!(fetch_user_preferences().await, None);
    });
}

#[test]
fn test_resolution_does_not_wait_on_preferences() {
    let harness = ShellHarness::new(1440);
    let resolver = harness.viewport_resolver::<Desktop>();
    assert_eq!(block_on(fetch_user_preferences()), None);
    assert_eq!(resolver.tier(), DesktopTier::Medium);
}
