//! Width tiers and the classifier that maps widths onto them.
//!
//! A tier-set is a plain Rust enum implementing [`Tier`]. Its variants are
//! declared smallest first, and a [`Thresholds`] table splits the width axis
//! into contiguous half-open intervals, one per tier:
//!
//! ```rust
//! use dash_shell::presets::MobileTier;
//! use dash_shell::responsive::{Thresholds, classify};
//!
//! let thresholds = Thresholds::new(
//!     [(375u32, MobileTier::Small), (480, MobileTier::Medium)],
//!     MobileTier::Large,
//! )
//! .unwrap();
//!
//! assert_eq!(classify(374u32, &thresholds), MobileTier::Small);
//! assert_eq!(classify(375u32, &thresholds), MobileTier::Medium);
//! assert_eq!(classify(2000u32, &thresholds), MobileTier::Large);
//! ```
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{BitOr, Bound, RangeBounds};
use std::str::FromStr;

use bitflags::bitflags;
use smallvec::SmallVec;
use strum::VariantArray;

use crate::error::TierError;
use crate::unit::Width;

/// The largest number of tiers a single tier-set may declare.
pub const MAX_TIERS: usize = 8;

/// One named width bucket of a tier-set.
///
/// Implementors are field-less enums whose declaration order is the tier
/// order. The strum derives provide the variant list and the names:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// #[derive(strum_macros::VariantArray, strum_macros::Display,
///          strum_macros::EnumString, strum_macros::IntoStaticStr)]
/// #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
/// pub enum PanelTier { Compact, Wide }
///
/// impl Tier for PanelTier {}
/// ```
pub trait Tier:
    Copy
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + VariantArray
    + FromStr
    + Into<&'static str>
    + 'static
{
    /// Position of this tier in the tier-set, smallest first.
    fn index(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|tier| *tier == self)
            .expect("tier to be listed in its own variant array")
    }

    fn name(self) -> &'static str {
        self.into()
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }

    /// Parses a tier name, ignoring ASCII case.
    fn parse_name(name: &str) -> Result<Self, TierError> {
        Self::from_str(name.trim()).map_err(|_| TierError::UnknownTier(name.to_string()))
    }

    fn smallest() -> Self {
        Self::VARIANTS[0]
    }

    fn largest() -> Self {
        Self::VARIANTS[Self::VARIANTS.len() - 1]
    }
}

bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[must_use]
    pub struct TierBits: u8 {
        const T0 = 1;
        const T1 = 1 << 1;
        const T2 = 1 << 2;
        const T3 = 1 << 3;
        const T4 = 1 << 4;
        const T5 = 1 << 5;
        const T6 = 1 << 6;
        const T7 = 1 << 7;
    }
}

impl TierBits {
    fn of(index: usize) -> Self {
        assert!(index < MAX_TIERS, "tier-sets support at most {MAX_TIERS} tiers");
        TierBits::from_bits_retain(1 << index)
    }

    fn span(start: usize, end: usize) -> Self {
        (start..=end).fold(TierBits::empty(), |bits, index| bits | TierBits::of(index))
    }
}

/// A set of tiers out of one tier-set.
///
/// Masks are built from single tiers, unions (`|`), negation and ranges:
///
/// ```rust
/// use dash_shell::presets::DesktopTier;
/// use dash_shell::responsive::{TierMask, range};
///
/// let wide = range(DesktopTier::Large..);
/// assert!(wide.contains(DesktopTier::XLarge));
/// assert!(!wide.contains(DesktopTier::Medium));
/// assert_eq!(TierMask::not(wide), range(..DesktopTier::Large));
/// ```
#[must_use]
pub struct TierMask<T> {
    bits: TierBits,
    ty: PhantomData<T>,
}

impl<T> Copy for TierMask<T> {}

impl<T> Clone for TierMask<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for TierMask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for TierMask<T> {}

impl<T: Tier> fmt::Debug for TierMask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Tier> TierMask<T> {
    const fn from_bits(bits: TierBits) -> Self {
        Self {
            bits,
            ty: PhantomData,
        }
    }

    pub const fn empty() -> Self {
        Self::from_bits(TierBits::empty())
    }

    pub fn all() -> Self {
        Self::from_bits(TierBits::span(0, T::VARIANTS.len() - 1))
    }

    pub fn single(tier: T) -> Self {
        Self::from_bits(TierBits::of(tier.index()))
    }

    /// Every tier of the set that is not in `mask`.
    pub fn not(mask: Self) -> Self {
        Self::from_bits(Self::all().bits.difference(mask.bits))
    }

    pub fn contains(&self, tier: T) -> bool {
        self.bits.contains(TierBits::of(tier.index()))
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The tiers in the mask, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::VARIANTS
            .iter()
            .copied()
            .filter(|tier| self.contains(*tier))
    }
}

impl<T: Tier> From<T> for TierMask<T> {
    fn from(tier: T) -> Self {
        TierMask::single(tier)
    }
}

impl<T: Tier> BitOr for TierMask<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl<T: Tier> BitOr<T> for TierMask<T> {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self::Output {
        self | TierMask::single(rhs)
    }
}

/// Builds a mask covering every tier inside `range`.
pub fn range<T: Tier, R: RangeBounds<T>>(range: R) -> TierMask<T> {
    let start = match range.start_bound() {
        Bound::Included(tier) => tier.index(),
        Bound::Excluded(tier) => tier.index() + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(tier) => Some(tier.index()),
        Bound::Excluded(tier) => tier.index().checked_sub(1),
        Bound::Unbounded => Some(T::VARIANTS.len() - 1),
    };

    match end {
        Some(end) if start <= end => TierMask::from_bits(TierBits::span(start, end)),
        _ => TierMask::empty(),
    }
}

/// Ordered upper bounds splitting the width axis into tiers.
///
/// Each entry `(bound, tier)` selects `tier` for widths below `bound` that no
/// earlier entry claimed. Widths at or past the last bound select the
/// catch-all tier.
#[derive(Clone, PartialEq, Eq)]
pub struct Thresholds<T> {
    bounds: SmallVec<[(Width, T); 4]>,
    otherwise: T,
}

impl<T: Tier> fmt::Debug for Thresholds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (bound, tier) in &self.bounds {
            list.entry(&format_args!("<{} {}", bound.get(), tier));
        }
        list.entry(&format_args!("else {}", self.otherwise));
        list.finish()
    }
}

impl<T: Tier> Thresholds<T> {
    /// Validates and builds a threshold table.
    ///
    /// # Errors
    ///
    /// Fails when the bounds do not strictly increase, when the tiers
    /// (catch-all included) are not in ascending tier order, when the first
    /// bound is zero, or when `T` declares more than [`MAX_TIERS`] tiers.
    pub fn new<W: Into<Width>>(
        bounds: impl IntoIterator<Item = (W, T)>,
        otherwise: T,
    ) -> Result<Self, TierError> {
        if T::VARIANTS.len() > MAX_TIERS {
            return Err(TierError::TooManyTiers {
                count: T::VARIANTS.len(),
            });
        }

        let bounds: SmallVec<[(Width, T); 4]> = bounds
            .into_iter()
            .map(|(bound, tier)| (bound.into(), tier))
            .collect();

        if let Some((first, tier)) = bounds.first()
            && first.is_zero()
        {
            return Err(TierError::UnreachableTier { tier: tier.name() });
        }

        for pair in bounds.windows(2) {
            let (previous, previous_tier) = pair[0];
            let (next, next_tier) = pair[1];
            if next <= previous {
                return Err(TierError::UnsortedThresholds { previous, next });
            }
            if next_tier <= previous_tier {
                return Err(TierError::UnorderedTiers {
                    previous: previous_tier.name(),
                    next: next_tier.name(),
                });
            }
        }

        if let Some((_, last)) = bounds.last()
            && otherwise <= *last
        {
            return Err(TierError::UnorderedTiers {
                previous: last.name(),
                next: otherwise.name(),
            });
        }

        Ok(Self { bounds, otherwise })
    }

    /// A table with no bounds: every width selects `tier`.
    pub fn single(tier: T) -> Self {
        Self {
            bounds: SmallVec::new(),
            otherwise: tier,
        }
    }

    pub fn bounds(&self) -> &[(Width, T)] {
        &self.bounds
    }

    pub fn catch_all(&self) -> T {
        self.otherwise
    }

    /// Every tier the table can produce, smallest first.
    pub fn tiers(&self) -> impl Iterator<Item = T> + '_ {
        self.bounds
            .iter()
            .map(|(_, tier)| *tier)
            .chain(std::iter::once(self.otherwise))
    }

    pub fn reachable(&self) -> TierMask<T> {
        self.tiers().fold(TierMask::empty(), |mask, tier| mask | tier)
    }

    /// The half-open width interval `[start, end)` selecting `tier`. An end of
    /// `None` means the interval is unbounded. Returns `None` for tiers the
    /// table never produces.
    pub fn interval(&self, tier: T) -> Option<(Width, Option<Width>)> {
        let mut start = Width::ZERO;
        for (bound, candidate) in &self.bounds {
            if *candidate == tier {
                return Some((start, Some(*bound)));
            }
            start = *bound;
        }
        (tier == self.otherwise).then_some((start, None))
    }

    pub fn classify(&self, width: impl Into<Width>) -> T {
        let width = width.into();
        self.bounds
            .iter()
            .find(|(bound, _)| width < *bound)
            .map_or(self.otherwise, |(_, tier)| *tier)
    }
}

/// Maps `width` to its tier. Total, monotonic and free of side effects, so it
/// is cheap enough to call on every resize notification.
pub fn classify<T: Tier>(width: impl Into<Width>, thresholds: &Thresholds<T>) -> T {
    thresholds.classify(width)
}
