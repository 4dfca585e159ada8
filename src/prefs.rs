//! User preference storage.
//!
//! There is no backend yet. Both calls complete immediately: fetching yields
//! nothing and saving reports that nothing was stored. Tier resolution never
//! depends on them.
use crate::presets::DeviceClass;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    /// Forces a page variant instead of picking one from the viewport.
    pub device_class: Option<DeviceClass>,
    pub sidebar_collapsed: bool,
    pub theme: Option<String>,
}

pub async fn fetch_user_preferences() -> Option<UserPreferences> {
    tracing::trace!("no preference backend, nothing fetched");
    None
}

pub async fn save_user_preferences(preferences: &UserPreferences) -> bool {
    tracing::trace!(?preferences, "no preference backend, nothing saved");
    false
}
