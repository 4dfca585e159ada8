//! Per-tier configuration records.
//!
//! A [`TierConfigRegistry`] holds one record per tier of a tier-set. Records
//! are plain structs, so every tier shares the same set of parameters and only
//! the values vary. [`TierSet`] pairs a registry with the [`Thresholds`] that
//! select from it.
use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::error::TierError;
use crate::responsive::{Thresholds, Tier, TierMask};
use crate::unit::Width;

/// Read-only lookup from tier to configuration record.
#[derive(Clone)]
pub struct TierConfigRegistry<T, R> {
    records: SmallVec<[Option<R>; 4]>,
    ty: PhantomData<T>,
}

impl<T: Tier, R> TierConfigRegistry<T, R> {
    pub fn builder() -> RegistryBuilder<T, R> {
        RegistryBuilder::new()
    }

    /// Builds a complete registry by calling `f` once per tier.
    pub fn from_fn(mut f: impl FnMut(T) -> R) -> Self {
        Self {
            records: T::VARIANTS.iter().map(|tier| Some(f(*tier))).collect(),
            ty: PhantomData,
        }
    }

    /// The record for `tier`.
    ///
    /// # Panics
    ///
    /// Panics with [`TierError::MissingTierConfig`] if `tier` has no record.
    /// That means the tier-set and its registry are out of sync, which is a
    /// bug in the code declaring them.
    pub fn config_for(&self, tier: T) -> &R {
        match self.try_config_for(tier) {
            Ok(record) => record,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Errors
    ///
    /// Returns [`TierError::MissingTierConfig`] if `tier` has no record.
    pub fn try_config_for(&self, tier: T) -> Result<&R, TierError> {
        self.records
            .get(tier.index())
            .and_then(Option::as_ref)
            .ok_or(TierError::MissingTierConfig { tier: tier.name() })
    }

    pub fn contains(&self, tier: T) -> bool {
        self.try_config_for(tier).is_ok()
    }

    /// Tiers that have a record.
    pub fn covered(&self) -> TierMask<T> {
        T::VARIANTS
            .iter()
            .copied()
            .filter(|tier| self.contains(*tier))
            .fold(TierMask::empty(), |mask, tier| mask | tier)
    }

    pub fn is_complete(&self) -> bool {
        self.covered() == TierMask::all()
    }

    /// Records in tier order, skipping tiers without one.
    pub fn iter(&self) -> impl Iterator<Item = (T, &R)> + '_ {
        T::VARIANTS
            .iter()
            .zip(&self.records)
            .filter_map(|(tier, record)| record.as_ref().map(|record| (*tier, record)))
    }
}

impl<T: Tier, R: fmt::Debug> fmt::Debug for TierConfigRegistry<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(tier, record)| (tier.name(), record)))
            .finish()
    }
}

/// Collects records for a [`TierConfigRegistry`].
pub struct RegistryBuilder<T, R> {
    records: SmallVec<[Option<R>; 4]>,
    ty: PhantomData<T>,
}

impl<T: Tier, R> RegistryBuilder<T, R> {
    fn new() -> Self {
        Self {
            records: T::VARIANTS.iter().map(|_| None).collect(),
            ty: PhantomData,
        }
    }

    /// Sets the record for `tier`, replacing any earlier one.
    pub fn with(mut self, tier: T, record: R) -> Self {
        self.records[tier.index()] = Some(record);
        self
    }

    /// Sets the same record for every tier in `mask`.
    pub fn with_mask(mut self, mask: impl Into<TierMask<T>>, record: R) -> Self
    where
        R: Clone,
    {
        for tier in mask.into().iter() {
            self.records[tier.index()] = Some(record.clone());
        }
        self
    }

    /// # Errors
    ///
    /// Returns [`TierError::MissingTierConfig`] naming the smallest tier that
    /// has no record.
    pub fn build(self) -> Result<TierConfigRegistry<T, R>, TierError> {
        if let Some(index) = self.records.iter().position(Option::is_none) {
            return Err(TierError::MissingTierConfig {
                tier: T::VARIANTS[index].name(),
            });
        }
        Ok(self.build_partial())
    }

    /// Builds without checking that every tier has a record. Use this for
    /// registries paired with thresholds that never reach some tiers;
    /// [`TierSet::try_new`] still checks the reachable ones.
    pub fn build_partial(self) -> TierConfigRegistry<T, R> {
        TierConfigRegistry {
            records: self.records,
            ty: PhantomData,
        }
    }
}

/// Thresholds and the registry they select from, for one device class.
///
/// ```rust
/// use dash_shell::presets::MobileTier;
/// use dash_shell::registry::{TierConfigRegistry, TierSet};
/// use dash_shell::responsive::Thresholds;
///
/// let set = TierSet::new(
///     Thresholds::new([(375u32, MobileTier::Small), (480, MobileTier::Medium)], MobileTier::Large)
///         .unwrap(),
///     TierConfigRegistry::from_fn(|tier| match tier {
///         MobileTier::Small => 8u32,
///         MobileTier::Medium => 12,
///         MobileTier::Large => 16,
///     }),
/// );
///
/// assert_eq!(set.resolve(400u32), (MobileTier::Medium, &12));
/// ```
#[derive(Clone)]
pub struct TierSet<T, R> {
    thresholds: Thresholds<T>,
    registry: TierConfigRegistry<T, R>,
}

impl<T: Tier, R> TierSet<T, R> {
    /// # Panics
    ///
    /// Panics if a tier the thresholds can produce has no record.
    pub fn new(thresholds: Thresholds<T>, registry: TierConfigRegistry<T, R>) -> Self {
        match Self::try_new(thresholds, registry) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Errors
    ///
    /// Returns [`TierError::MissingTierConfig`] for the first reachable tier
    /// without a record.
    pub fn try_new(
        thresholds: Thresholds<T>,
        registry: TierConfigRegistry<T, R>,
    ) -> Result<Self, TierError> {
        if let Some(tier) = thresholds.tiers().find(|tier| !registry.contains(*tier)) {
            return Err(TierError::MissingTierConfig { tier: tier.name() });
        }
        Ok(Self {
            thresholds,
            registry,
        })
    }

    pub fn thresholds(&self) -> &Thresholds<T> {
        &self.thresholds
    }

    pub fn registry(&self) -> &TierConfigRegistry<T, R> {
        &self.registry
    }

    /// Swaps in another threshold table, keeping the records.
    ///
    /// # Errors
    ///
    /// Fails if the new table reaches a tier without a record.
    pub fn with_thresholds(self, thresholds: Thresholds<T>) -> Result<Self, TierError> {
        Self::try_new(thresholds, self.registry)
    }

    pub fn classify(&self, width: impl Into<Width>) -> T {
        self.thresholds.classify(width)
    }

    pub fn config_for(&self, tier: T) -> &R {
        self.registry.config_for(tier)
    }

    /// Classifies `width` and looks up its record.
    pub fn resolve(&self, width: impl Into<Width>) -> (T, &R) {
        let tier = self.classify(width);
        (tier, self.registry.config_for(tier))
    }
}

impl<T: Tier, R: fmt::Debug> fmt::Debug for TierSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TierSet")
            .field("thresholds", &self.thresholds)
            .field("registry", &self.registry)
            .finish()
    }
}
