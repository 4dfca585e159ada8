use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::{DeviceClass, DevicePreset, LayoutMetrics};
use crate::responsive::{Thresholds, Tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(VariantArray, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TabletPortraitTier {
    Small,
    Medium,
    Large,
}

impl Tier for TabletPortraitTier {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(VariantArray, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TabletHorizontalTier {
    Small,
    Medium,
    Large,
}

impl Tier for TabletHorizontalTier {}

const PORTRAIT_METRICS: [LayoutMetrics; 3] = [
    LayoutMetrics {
        padding: 16,
        gap: 12,
        header_height: 64,
        sidebar_width: 0,
        font_size: 14.0,
        title_font_size: 20.0,
        panel_height: 200,
        popover_width: 320,
    },
    LayoutMetrics {
        padding: 20,
        gap: 16,
        header_height: 64,
        sidebar_width: 72,
        font_size: 14.0,
        title_font_size: 22.0,
        panel_height: 220,
        popover_width: 360,
    },
    LayoutMetrics {
        padding: 24,
        gap: 16,
        header_height: 64,
        sidebar_width: 72,
        font_size: 15.0,
        title_font_size: 24.0,
        panel_height: 240,
        popover_width: 380,
    },
];

const HORIZONTAL_METRICS: [LayoutMetrics; 3] = [
    LayoutMetrics {
        padding: 20,
        gap: 16,
        header_height: 64,
        sidebar_width: 72,
        font_size: 14.0,
        title_font_size: 22.0,
        panel_height: 220,
        popover_width: 360,
    },
    LayoutMetrics {
        padding: 24,
        gap: 16,
        header_height: 64,
        sidebar_width: 80,
        font_size: 15.0,
        title_font_size: 24.0,
        panel_height: 240,
        popover_width: 380,
    },
    LayoutMetrics {
        padding: 24,
        gap: 20,
        header_height: 72,
        sidebar_width: 200,
        font_size: 15.0,
        title_font_size: 24.0,
        panel_height: 260,
        popover_width: 400,
    },
];

/// Tablets held upright. The sidebar collapses to an icon rail past the
/// smallest tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabletPortrait;

impl DevicePreset for TabletPortrait {
    type Tier = TabletPortraitTier;

    const CLASS: DeviceClass = DeviceClass::TabletPortrait;

    fn thresholds() -> Thresholds<TabletPortraitTier> {
        Thresholds::new(
            [
                (600u32, TabletPortraitTier::Small),
                (768, TabletPortraitTier::Medium),
            ],
            TabletPortraitTier::Large,
        )
        .expect("tablet portrait thresholds are sorted")
    }

    fn metrics(tier: TabletPortraitTier) -> LayoutMetrics {
        PORTRAIT_METRICS[tier.index()]
    }
}

/// Tablets in landscape.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabletHorizontal;

impl DevicePreset for TabletHorizontal {
    type Tier = TabletHorizontalTier;

    const CLASS: DeviceClass = DeviceClass::TabletHorizontal;

    fn thresholds() -> Thresholds<TabletHorizontalTier> {
        Thresholds::new(
            [
                (1024u32, TabletHorizontalTier::Small),
                (1180, TabletHorizontalTier::Medium),
            ],
            TabletHorizontalTier::Large,
        )
        .expect("tablet horizontal thresholds are sorted")
    }

    fn metrics(tier: TabletHorizontalTier) -> LayoutMetrics {
        HORIZONTAL_METRICS[tier.index()]
    }
}
