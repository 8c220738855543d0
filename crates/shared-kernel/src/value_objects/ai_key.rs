// crates/shared-kernel/src/value_objects/ai_key.rs
use std::fmt;

use super::KeyRange;

/// GS1 Application Identifier key: a single AI or an inclusive AI range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiKey {
    Single(u32),
    Range(KeyRange),
}

impl AiKey {
    #[inline]
    pub const fn start(self) -> u32 {
        match self {
            Self::Single(ai) => ai,
            Self::Range(range) => range.lo(),
        }
    }

    #[inline]
    pub const fn end(self) -> u32 {
        match self {
            Self::Single(ai) => ai,
            Self::Range(range) => range.hi(),
        }
    }

    #[inline]
    pub const fn is_range(self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Every AI covered by the key, ascending.
    pub fn keys(self) -> impl Iterator<Item = u32> {
        self.start()..=self.end()
    }
}

impl From<u32> for AiKey {
    fn from(ai: u32) -> Self {
        Self::Single(ai)
    }
}

impl From<KeyRange> for AiKey {
    fn from(range: KeyRange) -> Self {
        if range.is_singleton() {
            Self::Single(range.lo())
        } else {
            Self::Range(range)
        }
    }
}

impl fmt::Display for AiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(ai) => write!(f, "{ai:02}"),
            Self::Range(range) => write!(f, "{:02}-{:02}", range.lo(), range.hi()),
        }
    }
}
