// crates/shared-kernel/src/value_objects/key_range.rs
use std::fmt;

/// Inclusive integer range `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyRange {
    lo: u32,
    hi: u32,
}

impl KeyRange {
    /// Returns `None` when `lo > hi`.
    #[inline]
    pub const fn new(lo: u32, hi: u32) -> Option<Self> {
        if lo > hi { None } else { Some(Self { lo, hi }) }
    }

    /// Const constructor for literal tables; inverted bounds fail const evaluation.
    pub const fn span(lo: u32, hi: u32) -> Self {
        assert!(lo <= hi, "KeyRange::span: lo > hi");
        Self { lo, hi }
    }

    #[inline]
    pub const fn single(key: u32) -> Self {
        Self { lo: key, hi: key }
    }

    #[inline]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    #[inline]
    pub const fn hi(self) -> u32 {
        self.hi
    }

    /// Number of keys covered.
    #[inline]
    pub const fn len(self) -> u64 {
        (self.hi - self.lo) as u64 + 1
    }

    #[inline]
    pub const fn is_singleton(self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub const fn contains(self, key: u32) -> bool {
        self.lo <= key && key <= self.hi
    }

    /// True when the two ranges touch or overlap, i.e. could be merged into one.
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let (first, second) = if self.lo <= other.lo { (self, other) } else { (other, self) };
        first.hi as u64 + 1 >= second.lo as u64
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_singleton() {
            write!(f, "0x{:X}", self.lo)
        } else {
            write!(f, "0x{:X}..0x{:X}", self.lo, self.hi)
        }
    }
}
