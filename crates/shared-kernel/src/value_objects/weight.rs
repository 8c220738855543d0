// crates/shared-kernel/src/value_objects/weight.rs
use std::fmt;

/// Sign-encoded data length of an AI.
///
/// Positive: fixed length. Negative: variable length, the magnitude being the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(i32);

impl Weight {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Build from the summed minimum and maximum component lengths.
    ///
    /// `None` when `max` does not fit the signed encoding.
    #[inline]
    pub fn from_bounds(min: u32, max: u32) -> Option<Self> {
        let magnitude = i32::try_from(max).ok()?;
        Some(if min == max { Self(magnitude) } else { Self(-magnitude) })
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_fixed(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn max_len(self) -> u32 {
        self.0.unsigned_abs()
    }
}

impl From<Weight> for i32 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
