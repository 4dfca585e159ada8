use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::{DeviceClass, DevicePreset, LayoutMetrics};
use crate::responsive::{Thresholds, Tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(VariantArray, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MobileTier {
    Small,
    Medium,
    Large,
}

impl Tier for MobileTier {}

const METRICS: [LayoutMetrics; 3] = [
    LayoutMetrics {
        padding: 12,
        gap: 8,
        header_height: 56,
        sidebar_width: 0,
        font_size: 13.0,
        title_font_size: 18.0,
        panel_height: 160,
        popover_width: 280,
    },
    LayoutMetrics {
        padding: 16,
        gap: 12,
        header_height: 56,
        sidebar_width: 0,
        font_size: 14.0,
        title_font_size: 20.0,
        panel_height: 180,
        popover_width: 320,
    },
    LayoutMetrics {
        padding: 20,
        gap: 16,
        header_height: 64,
        sidebar_width: 0,
        font_size: 15.0,
        title_font_size: 22.0,
        panel_height: 200,
        popover_width: 360,
    },
];

/// Phones: a single column with the navigation in a drawer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mobile;

impl DevicePreset for Mobile {
    type Tier = MobileTier;

    const CLASS: DeviceClass = DeviceClass::Mobile;

    fn thresholds() -> Thresholds<MobileTier> {
        Thresholds::new(
            [(375u32, MobileTier::Small), (480, MobileTier::Medium)],
            MobileTier::Large,
        )
        .expect("mobile thresholds are sorted")
    }

    fn metrics(tier: MobileTier) -> LayoutMetrics {
        METRICS[tier.index()]
    }
}
