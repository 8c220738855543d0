// crates/core/src/ucd/graph.rs
use std::collections::BTreeSet;

use zx_tablegen_shared_kernel::KeyRange;

use super::parser::UcdSpan;
use crate::data::unicode::PLANE_COUNT;

const PLANE_BITS: u32 = 16;
const PLANE_MASK: u32 = 0xFFFF;

/// Graphical codepoints split per plane, stored as plane-relative offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSets {
    planes: Vec<BTreeSet<u32>>,
}

impl Default for PlaneSets {
    fn default() -> Self {
        Self { planes: vec![BTreeSet::new(); PLANE_COUNT] }
    }
}

impl PlaneSets {
    /// Collect graphical codepoints: every span whose category is drawn, plus
    /// the listed exceptions among the non-drawn categories.
    #[must_use]
    pub fn from_spans(spans: &[UcdSpan], visible_exceptions: &[KeyRange]) -> Self {
        let mut sets = Self::default();
        for span in spans {
            if span.category.is_graphical() {
                span.codepoints().for_each(|cp| sets.insert(cp));
            } else {
                span.codepoints()
                    .filter(|cp| visible_exceptions.iter().any(|range| range.contains(*cp)))
                    .for_each(|cp| sets.insert(cp));
            }
        }
        sets
    }

    /// Codepoints above the last plane are ignored.
    pub fn insert(&mut self, codepoint: u32) {
        if let Some(plane) = self.planes.get_mut((codepoint >> PLANE_BITS) as usize) {
            plane.insert(codepoint & PLANE_MASK);
        }
    }

    #[must_use]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.planes
            .get((codepoint >> PLANE_BITS) as usize)
            .is_some_and(|plane| plane.contains(&(codepoint & PLANE_MASK)))
    }

    /// Offsets of one plane. Panics if `plane >= 17`.
    #[must_use]
    pub fn plane(&self, plane: usize) -> &BTreeSet<u32> {
        &self.planes[plane]
    }

    /// Absolute codepoint window of a plane.
    #[must_use]
    pub fn window(plane: usize) -> KeyRange {
        let base = (plane as u32) << PLANE_BITS;
        KeyRange::span(base, base + PLANE_MASK)
    }

    pub fn counts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.planes.iter().map(BTreeSet::len).enumerate()
    }
}
