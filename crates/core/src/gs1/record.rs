// crates/core/src/gs1/record.rs
use zx_tablegen_shared_kernel::{AiKey, Weight};

/// One parsed dictionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRecord {
    pub key: AiKey,
    pub weight: Weight,
    /// Already emitted by the irregular 3-digit+digit pass.
    pub consumed: bool,
}

impl AiRecord {
    #[must_use]
    pub const fn new(key: AiKey, weight: Weight) -> Self {
        Self { key, weight, consumed: false }
    }
}

/// Parsed dictionary: records sorted by start AI, plus the release tag
/// found in its header comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub release: Option<String>,
    pub records: Vec<AiRecord>,
}
