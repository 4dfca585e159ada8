use std::fmt;

/// A rendering width in whole pixels.
///
/// Widths are never negative. Windowing layers usually report logical sizes as
/// `f64`; use [`Width::from_logical`] to bring those into pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Width(pub u32);

impl Width {
    pub const ZERO: Width = Width(0);

    /// Truncates toward zero. Negative and NaN sizes become zero, and
    /// sizes past `u32::MAX` saturate.
    pub fn from_logical(value: f64) -> Self {
        // `as` already saturates and maps NaN to 0.
        Width(value.max(0.0) as u32)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_sub(self, rhs: u32) -> Self {
        Width(self.0.saturating_sub(rhs))
    }
}

impl From<u32> for Width {
    fn from(value: u32) -> Self {
        Width(value)
    }
}

impl From<u16> for Width {
    fn from(value: u16) -> Self {
        Width(value as u32)
    }
}

/// Negative values clamp to zero.
impl From<i32> for Width {
    fn from(value: i32) -> Self {
        Width(value.max(0) as u32)
    }
}

impl From<f64> for Width {
    fn from(value: f64) -> Self {
        Width::from_logical(value)
    }
}

impl From<f32> for Width {
    fn from(value: f32) -> Self {
        Width::from_logical(value as f64)
    }
}

impl From<Width> for u32 {
    fn from(value: Width) -> Self {
        value.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
