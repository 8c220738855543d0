// crates/core/src/compact/mod.rs
//! Table compaction: bit-packed dense arrays and maximal-range lists.

pub mod dense;
pub mod ranges;

use std::collections::BTreeSet;

use zx_tablegen_shared_kernel::KeyRange;

pub use dense::{DenseEntry, DenseTable, encode_dense};
pub use ranges::{RangeSet, coalesce};

/// Decides which keys the dense encoder leaves out of its table.
pub trait SkipPolicy {
    fn skips(&self, key: u32) -> bool;

    /// Skipped keys reported here must not be members.
    fn is_unassigned(&self, _key: u32) -> bool {
        false
    }
}

/// Encode every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSkip;

impl SkipPolicy for NoSkip {
    fn skips(&self, _key: u32) -> bool {
        false
    }
}

impl<F> SkipPolicy for F
where
    F: Fn(u32) -> bool,
{
    fn skips(&self, key: u32) -> bool {
        self(key)
    }
}

/// What a skipped block is known to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every key is a member; the lookup answers `true` for the block.
    Graphical,
    /// No key is a member.
    NonGraphical,
    /// No key is assigned at all; a member here is a hard error.
    Unassigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRange {
    pub keys: KeyRange,
    pub coverage: Coverage,
    pub note: &'static str,
}

impl SkipRange {
    pub const fn new(lo: u32, hi: u32, coverage: Coverage, note: &'static str) -> Self {
        Self { keys: KeyRange::span(lo, hi), coverage, note }
    }

    /// Describes how `members` disagrees with the recorded coverage, if it does.
    #[must_use]
    pub fn audit(&self, members: &BTreeSet<u32>) -> Option<String> {
        let inside = members.range(self.keys.lo()..=self.keys.hi()).count() as u64;
        match self.coverage {
            Coverage::Graphical if inside != self.keys.len() => Some(format!(
                "{} ({}) expected all graphical, found {} of {}",
                self.note,
                self.keys,
                inside,
                self.keys.len()
            )),
            Coverage::NonGraphical | Coverage::Unassigned if inside != 0 => Some(format!(
                "{} ({}) expected no graphical codepoints, found {}",
                self.note, self.keys, inside
            )),
            _ => None,
        }
    }
}

impl SkipPolicy for [SkipRange] {
    fn skips(&self, key: u32) -> bool {
        self.iter().any(|skip| skip.keys.contains(key))
    }

    fn is_unassigned(&self, key: u32) -> bool {
        self.iter()
            .any(|skip| skip.coverage == Coverage::Unassigned && skip.keys.contains(key))
    }
}
