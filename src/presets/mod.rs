//! Built-in tier-sets for the dashboard's device classes.
//!
//! Each device class has its own tier enum, a threshold table and a
//! [`LayoutMetrics`] record per tier. Page variants resolve their metrics
//! through [`DevicePreset::tier_set`], or through
//! [`ShellConfig::tier_set`](crate::config::ShellConfig::tier_set) when the
//! thresholds are overridden by configuration.
mod desktop;
mod mobile;
mod tablet;

pub use desktop::{Desktop, DesktopTier};
pub use mobile::{Mobile, MobileTier};
pub use tablet::{TabletHorizontal, TabletHorizontalTier, TabletPortrait, TabletPortraitTier};

use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::registry::{TierConfigRegistry, TierSet};
use crate::responsive::{Thresholds, Tier};
use crate::unit::Width;

/// Spacing and sizing parameters a page layout reads for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    pub padding: u32,
    pub gap: u32,
    pub header_height: u32,
    /// Zero when the navigation collapses into a drawer.
    pub sidebar_width: u32,
    pub font_size: f32,
    pub title_font_size: f32,
    pub panel_height: u32,
    pub popover_width: u32,
}

/// The device classes the dashboard ships page variants for, narrowest first.
///
/// Device classes are themselves a tier-set over the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(VariantArray, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceClass {
    Mobile,
    TabletPortrait,
    TabletHorizontal,
    Desktop,
}

impl Tier for DeviceClass {}

impl DeviceClass {
    pub fn thresholds() -> Thresholds<DeviceClass> {
        Thresholds::new(
            [
                (600u32, DeviceClass::Mobile),
                (900, DeviceClass::TabletPortrait),
                (1200, DeviceClass::TabletHorizontal),
            ],
            DeviceClass::Desktop,
        )
        .expect("device class thresholds are sorted")
    }

    /// Picks the page variant for a viewport width.
    pub fn for_viewport(width: impl Into<Width>) -> DeviceClass {
        Self::thresholds().classify(width)
    }
}

/// A device class with its built-in tier table and metrics.
pub trait DevicePreset {
    type Tier: Tier;

    const CLASS: DeviceClass;

    fn thresholds() -> Thresholds<Self::Tier>;

    fn metrics(tier: Self::Tier) -> LayoutMetrics;

    fn registry() -> TierConfigRegistry<Self::Tier, LayoutMetrics> {
        TierConfigRegistry::from_fn(Self::metrics)
    }

    fn tier_set() -> TierSet<Self::Tier, LayoutMetrics> {
        TierSet::new(Self::thresholds(), Self::registry())
    }
}
