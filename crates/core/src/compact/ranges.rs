// crates/core/src/compact/ranges.rs
use std::collections::BTreeSet;

use zx_tablegen_shared_kernel::{KeyRange, Result, TableGenError};

/// Maximal runs of consecutive members inside one key window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    window: KeyRange,
    ranges: Vec<KeyRange>,
}

impl RangeSet {
    #[must_use]
    pub fn window(&self) -> KeyRange {
        self.window
    }

    /// Absolute ranges, ascending and pairwise non-adjacent.
    #[must_use]
    pub fn ranges(&self) -> &[KeyRange] {
        &self.ranges
    }

    /// Number of keys covered by all ranges.
    #[must_use]
    pub fn covered(&self) -> u64 {
        self.ranges.iter().map(|range| range.len()).sum()
    }

    #[must_use]
    pub fn contains(&self, key: u32) -> bool {
        let idx = self.ranges.partition_point(|range| range.hi() < key);
        self.ranges.get(idx).is_some_and(|range| range.contains(key))
    }
}

/// Coalesce `offsets` (relative to `window.lo()`) into maximal ranges.
///
/// # Errors
///
/// Returns `ConsistencyViolation` if an offset falls outside the window or
/// the ranges do not cover exactly the input keys.
pub fn coalesce(offsets: &BTreeSet<u32>, window: KeyRange) -> Result<RangeSet> {
    let mut ranges: Vec<KeyRange> = Vec::new();
    let mut current: Option<(u32, u32)> = None;

    for &offset in offsets {
        let key = window
            .lo()
            .checked_add(offset)
            .filter(|key| window.contains(*key))
            .ok_or_else(|| {
                TableGenError::consistency(
                    "range-window",
                    format!("offset {offset:#X} lies outside {window}"),
                )
            })?;
        current = match current {
            Some((lo, hi)) if hi + 1 == key => Some((lo, key)),
            Some((lo, hi)) => {
                ranges.extend(KeyRange::new(lo, hi));
                Some((key, key))
            }
            None => Some((key, key)),
        };
    }
    if let Some((lo, hi)) = current {
        ranges.extend(KeyRange::new(lo, hi));
    }

    let set = RangeSet { window, ranges };
    let total = set.covered();
    if total != offsets.len() as u64 {
        return Err(TableGenError::consistency(
            "range-coverage",
            format!("{total} keys in {} ranges, expected {}", set.ranges.len(), offsets.len()),
        ));
    }
    log::debug!("ranges: {} runs cover {total} keys in {window}", set.ranges.len());
    Ok(set)
}
