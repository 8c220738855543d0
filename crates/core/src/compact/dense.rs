// crates/core/src/compact/dense.rs
use std::collections::BTreeSet;

use zx_tablegen_shared_kernel::{Result, TableGenError};

use super::SkipPolicy;

/// Keys packed into one table byte.
pub const BLOCK: u32 = 8;

/// One byte of a dense table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseEntry {
    /// Bit `b` set iff key `start + b` is a member. Always zero when `skipped`.
    pub bits: u8,
    pub start: u32,
    /// Exclusive.
    pub end: u32,
    /// Zero placeholder for a skip run that reaches past the largest member.
    pub skipped: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseTable {
    entries: Vec<DenseEntry>,
}

impl DenseTable {
    #[must_use]
    pub fn entries(&self) -> &[DenseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exclusive end of the covered key window.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.entries.last().map_or(0, |entry| entry.end)
    }

    /// Decode one key. `None` for skipped keys and keys past the window.
    #[must_use]
    pub fn contains(&self, key: u32) -> Option<bool> {
        let idx = self.entries.partition_point(|entry| entry.end <= key);
        let entry = self.entries.get(idx)?;
        if entry.skipped || key < entry.start {
            return None;
        }
        Some(entry.bits >> (key - entry.start) & 1 == 1)
    }

    /// Every member recorded in the table, ascending.
    pub fn members(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.skipped)
            .flat_map(|entry| {
                (entry.start..entry.end).filter(move |key| entry.bits >> (key - entry.start) & 1 == 1)
            })
    }
}

/// Bit-pack `members` into one byte per 8 consecutive keys, from key 0 up to
/// the largest member.
///
/// Runs of keys the policy skips add no entry, so the entries after a run sit
/// directly behind the block before it. A run that reaches past the largest
/// member ends the table with one zero entry. A run must start and end on an
/// 8-key boundary; it may only end off-boundary when it reaches past the
/// largest member.
///
/// # Errors
///
/// Returns `ConsistencyViolation` when a skip run is misaligned or a key the
/// policy marks unassigned is a member.
pub fn encode_dense<P>(members: &BTreeSet<u32>, policy: &P) -> Result<DenseTable>
where
    P: SkipPolicy + ?Sized,
{
    let Some(&last) = members.last() else {
        return Ok(DenseTable::default());
    };
    let end = last.checked_add(1).ok_or_else(|| {
        TableGenError::consistency("dense-window", "key window must end below u32::MAX")
    })?;

    let mut entries = Vec::with_capacity((end / BLOCK + 1) as usize);
    let mut key = 0;
    while key < end {
        if policy.skips(key) {
            let start = key;
            if start % BLOCK != 0 {
                return Err(misaligned(start, "starts"));
            }
            while key < end && policy.skips(key) {
                if policy.is_unassigned(key) && members.contains(&key) {
                    return Err(TableGenError::consistency(
                        "unassigned",
                        format!("U+{key:04X} is skipped as unassigned but is graphical"),
                    ));
                }
                key += 1;
            }
            if key < end {
                if key % BLOCK != 0 {
                    return Err(misaligned(key, "ends"));
                }
                continue;
            }
            entries.push(DenseEntry { bits: 0, start, end: key, skipped: true });
            continue;
        }

        let start = key;
        let stop = start.saturating_add(BLOCK).min(end);
        let mut bits = 0u8;
        for k in start..stop {
            if policy.skips(k) {
                return Err(misaligned(k, "starts"));
            }
            if members.contains(&k) {
                bits |= 1 << (k - start);
            }
        }
        entries.push(DenseEntry { bits, start, end: stop, skipped: false });
        key = stop;
    }

    log::debug!("dense: {} entries for keys 0..{end:#X}", entries.len());
    Ok(DenseTable { entries })
}

fn misaligned(key: u32, edge: &str) -> TableGenError {
    TableGenError::consistency(
        "skip-alignment",
        format!("skip run {edge} at {key:04X}, off an 8-key boundary"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::{Coverage, NoSkip, SkipRange};

    fn set(keys: &[u32]) -> BTreeSet<u32> {
        keys.iter().copied().collect()
    }

    #[test]
    fn packs_bits_low_first() {
        let table = encode_dense(&set(&[0, 3, 7, 9]), &NoSkip).unwrap();
        let bits: Vec<u8> = table.entries().iter().map(|e| e.bits).collect();
        assert_eq!(bits, vec![0b1000_1001, 0b0000_0010]);
        assert_eq!(table.end(), 10);
    }

    #[test]
    fn entry_count_without_skips() {
        let table = encode_dense(&set(&[16]), &NoSkip).unwrap();
        assert_eq!(table.len(), 3);
        let table = encode_dense(&set(&[15]), &NoSkip).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_set_is_empty_table() {
        let table = encode_dense(&BTreeSet::new(), &NoSkip).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.contains(0), None);
    }

    #[test]
    fn interior_skip_run_adds_no_entry() {
        let policy = |key: u32| (16..48).contains(&key);
        let table = encode_dense(&set(&[1, 17, 50]), &policy).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.entries().iter().all(|entry| !entry.skipped));
        let after = table.entries()[2];
        assert_eq!((after.bits, after.start, after.end), (0x04, 48, 51));
        assert_eq!(table.contains(16), None);
        assert_eq!(table.contains(17), None);
        assert_eq!(table.contains(50), Some(true));
        assert_eq!(table.contains(49), Some(false));
        assert_eq!(table.members().collect::<Vec<_>>(), vec![1, 50]);
    }

    #[test]
    fn block_before_skip_run_is_kept() {
        let skips = [SkipRange::new(0x10, 0x1F, Coverage::Unassigned, "hole")];
        let table = encode_dense(&set(&[0, 0x21]), &skips[..]).unwrap();
        let bits: Vec<u8> = table.entries().iter().map(|e| e.bits).collect();
        assert_eq!(bits, vec![0x01, 0x00, 0x02]);
        assert_eq!(table.end(), 0x22);
    }

    #[test]
    fn skip_run_may_overrun_last_key() {
        let policy = |key: u32| key >= 8;
        let table = encode_dense(&set(&[2, 11]), &policy).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.entries()[1].skipped);
        assert_eq!(table.end(), 12);
    }

    #[test]
    fn misaligned_start_is_rejected() {
        let policy = |key: u32| (12..24).contains(&key);
        let err = encode_dense(&set(&[30]), &policy).unwrap_err();
        assert!(err.to_string().contains("skip-alignment"));
    }

    #[test]
    fn misaligned_end_is_rejected() {
        let policy = |key: u32| (8..20).contains(&key);
        let err = encode_dense(&set(&[30]), &policy).unwrap_err();
        assert!(err.to_string().contains("ends at 0014"));
    }

    #[test]
    fn unassigned_member_is_rejected() {
        let skips = [SkipRange::new(8, 15, Coverage::Unassigned, "hole")];
        let err = encode_dense(&set(&[9, 20]), &skips[..]).unwrap_err();
        assert!(err.to_string().contains("U+0009"));

        let ok = encode_dense(&set(&[7, 20]), &skips[..]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.entries()[1].start, 16);
    }
}
