// crates/core/src/data/gs1.rs
use zx_tablegen_shared_kernel::KeyRange;

/// Upstream repository of the GS1 Barcode Syntax Dictionary.
pub const SYNTAX_DICTIONARY_REPO: &str = "https://github.com/gs1/gs1-syntax-dictionary";

/// Raw URL of `gs1-syntax-dictionary.txt` at a release tag.
#[must_use]
pub fn syntax_dictionary_url(tag: &str) -> String {
    format!("https://raw.githubusercontent.com/gs1/gs1-syntax-dictionary/{tag}/gs1-syntax-dictionary.txt")
}

/// Shape an AI must have in the dictionary to match an irregular window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    Single,
    Range,
}

/// 4-digit AIs whose data length is looked up by their 3-digit prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularWindow {
    pub keys: KeyRange,
    pub shape: KeyShape,
}

impl IrregularWindow {
    #[inline]
    pub const fn contains(&self, ai: u32) -> bool {
        self.keys.contains(ai)
    }
}

/// AIs `3[1234569]nn`, `703n` and `723n`, matching `AiInfo::aiSize()`.
pub const IRREGULAR_AI_WINDOWS: &[IrregularWindow] = &[
    IrregularWindow { keys: KeyRange::span(3100, 3699), shape: KeyShape::Range },
    IrregularWindow { keys: KeyRange::span(3900, 3999), shape: KeyShape::Range },
    IrregularWindow { keys: KeyRange::span(7030, 7039), shape: KeyShape::Single },
    IrregularWindow { keys: KeyRange::span(7230, 7239), shape: KeyShape::Single },
];

/// Window holding `ai`, if any.
#[must_use]
pub fn irregular_window(ai: u32) -> Option<&'static IrregularWindow> {
    IRREGULAR_AI_WINDOWS.iter().find(|window| window.contains(ai))
}
