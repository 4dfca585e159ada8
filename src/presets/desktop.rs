use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use super::{DeviceClass, DevicePreset, LayoutMetrics};
use crate::responsive::{Thresholds, Tier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(VariantArray, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DesktopTier {
    Small,
    Medium,
    Large,
    XLarge,
}

impl Tier for DesktopTier {}

const METRICS: [LayoutMetrics; 4] = [
    LayoutMetrics {
        padding: 24,
        gap: 16,
        header_height: 64,
        sidebar_width: 80,
        font_size: 14.0,
        title_font_size: 24.0,
        panel_height: 240,
        popover_width: 380,
    },
    LayoutMetrics {
        padding: 28,
        gap: 20,
        header_height: 72,
        sidebar_width: 220,
        font_size: 15.0,
        title_font_size: 26.0,
        panel_height: 280,
        popover_width: 400,
    },
    LayoutMetrics {
        padding: 32,
        gap: 24,
        header_height: 72,
        sidebar_width: 240,
        font_size: 16.0,
        title_font_size: 28.0,
        panel_height: 320,
        popover_width: 420,
    },
    LayoutMetrics {
        padding: 40,
        gap: 28,
        header_height: 80,
        sidebar_width: 260,
        font_size: 16.0,
        title_font_size: 32.0,
        panel_height: 360,
        popover_width: 440,
    },
];

/// Desktop browsers and windows. Tiers follow the content container rather
/// than the window, so a wide sidebar pushes the page down a tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl DevicePreset for Desktop {
    type Tier = DesktopTier;

    const CLASS: DeviceClass = DeviceClass::Desktop;

    fn thresholds() -> Thresholds<DesktopTier> {
        Thresholds::new(
            [
                (1280u32, DesktopTier::Small),
                (1600, DesktopTier::Medium),
                (1920, DesktopTier::Large),
            ],
            DesktopTier::XLarge,
        )
        .expect("desktop thresholds are sorted")
    }

    fn metrics(tier: DesktopTier) -> LayoutMetrics {
        METRICS[tier.index()]
    }
}
