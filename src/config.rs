//! Threshold overrides loaded from configuration.
//!
//! Pages that need different breakpoints than the built-in presets supply a
//! table per device class instead of redefining the tier logic:
//!
//! ```json
//! {
//!   "sidebar_allowance": 96,
//!   "thresholds": {
//!     "mobile": {
//!       "tiers": [{ "below": 360, "tier": "small" }, { "below": 520, "tier": "medium" }],
//!       "otherwise": "large"
//!     }
//!   }
//! }
//! ```
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TierError;
use crate::observer::ObserverConfig;
use crate::presets::{DeviceClass, DevicePreset, LayoutMetrics};
use crate::registry::TierSet;
use crate::responsive::{Thresholds, Tier};
use crate::unit::Width;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdEntry {
    /// Exclusive upper bound in pixels.
    pub below: u32,
    pub tier: String,
}

/// A threshold table as written in configuration, with tiers by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdTable {
    #[serde(default)]
    pub tiers: Vec<ThresholdEntry>,
    pub otherwise: String,
}

impl ThresholdTable {
    /// # Errors
    ///
    /// Fails on tier names the tier-set does not declare and on tables that
    /// [`Thresholds::new`] rejects.
    pub fn to_thresholds<T: Tier>(&self) -> Result<Thresholds<T>, TierError> {
        let bounds = self
            .tiers
            .iter()
            .map(|entry| Ok((Width(entry.below), T::parse_name(&entry.tier)?)))
            .collect::<Result<Vec<_>, TierError>>()?;
        Thresholds::new(bounds, T::parse_name(&self.otherwise)?)
    }
}

impl<T: Tier> From<&Thresholds<T>> for ThresholdTable {
    fn from(thresholds: &Thresholds<T>) -> Self {
        Self {
            tiers: thresholds
                .bounds()
                .iter()
                .map(|(bound, tier)| ThresholdEntry {
                    below: bound.get(),
                    tier: tier.name().to_string(),
                })
                .collect(),
            otherwise: thresholds.catch_all().name().to_string(),
        }
    }
}

/// Shell-wide responsive settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub sidebar_allowance: Option<u32>,
    pub thresholds: FxHashMap<DeviceClass, ThresholdTable>,
}

impl ShellConfig {
    /// # Errors
    ///
    /// Returns [`TierError::Config`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, TierError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`TierError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TierError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn observer_config(&self) -> ObserverConfig {
        ObserverConfig {
            sidebar_allowance: self
                .sidebar_allowance
                .unwrap_or(ObserverConfig::DEFAULT_SIDEBAR_ALLOWANCE),
        }
    }

    /// The overriding thresholds for `class`, if configured.
    ///
    /// # Errors
    ///
    /// Fails if the configured table does not fit the tier-set `T`.
    pub fn thresholds_for<T: Tier>(
        &self,
        class: DeviceClass,
    ) -> Result<Option<Thresholds<T>>, TierError> {
        self.thresholds
            .get(&class)
            .map(ThresholdTable::to_thresholds::<T>)
            .transpose()
    }

    /// The preset's tier-set, with its thresholds replaced when configuration
    /// overrides them.
    ///
    /// # Errors
    ///
    /// Fails if the override does not fit the preset's tier-set.
    pub fn tier_set<P: DevicePreset>(&self) -> Result<TierSet<P::Tier, LayoutMetrics>, TierError> {
        let set = P::tier_set();
        match self.thresholds_for::<P::Tier>(P::CLASS)? {
            Some(thresholds) => {
                tracing::warn!(
                    class = %P::CLASS,
                    preset = ?set.thresholds(),
                    configured = ?thresholds,
                    "configured thresholds replace the preset table"
                );
                set.with_thresholds(thresholds)
            }
            None => Ok(set),
        }
    }
}
