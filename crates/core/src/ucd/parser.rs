// crates/core/src/ucd/parser.rs
//! `UnicodeData.txt` parser.
//!
//! Only the codepoint, the name (to pair up `<..., First>`/`<..., Last>`
//! ranges) and the major class of the general category are read.

use std::sync::OnceLock;

use regex::Regex;
use zx_tablegen_shared_kernel::{Result, TableGenError};

pub const MAX_CODEPOINT: u32 = 0x10FFFF;

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9A-F]+);([^;]*);([CLMNPSZ])").unwrap())
}

/// Major class of a general category (its first letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Other,
    Letter,
    Mark,
    Number,
    Punctuation,
    Symbol,
    Separator,
}

impl GeneralCategory {
    #[must_use]
    pub const fn from_major(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Other),
            'L' => Some(Self::Letter),
            'M' => Some(Self::Mark),
            'N' => Some(Self::Number),
            'P' => Some(Self::Punctuation),
            'S' => Some(Self::Symbol),
            'Z' => Some(Self::Separator),
            _ => None,
        }
    }

    /// Control/format/unassigned (`C*`) and separators (`Z*`) are not drawn.
    #[must_use]
    pub const fn is_graphical(self) -> bool {
        !matches!(self, Self::Other | Self::Separator)
    }
}

/// One codepoint, or a First/Last pair folded into a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UcdSpan {
    pub first: u32,
    pub last: u32,
    pub category: GeneralCategory,
}

impl UcdSpan {
    pub fn codepoints(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

struct PendingFirst {
    codepoint: u32,
    category: GeneralCategory,
    line_no: usize,
    line: String,
}

/// Parse every line of `UnicodeData.txt`.
///
/// # Errors
///
/// Returns `UnparseableLine` for a line that does not match, a codepoint
/// above U+10FFFF, or a `First` line not followed by its `Last` line.
pub fn parse_unicode_data<'a, I>(lines: I) -> Result<Vec<UcdSpan>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut spans = Vec::new();
    let mut pending: Option<PendingFirst> = None;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        let caps = line_re()
            .captures(line)
            .ok_or_else(|| TableGenError::unparseable(line_no, line, "line does not match UnicodeData grammar"))?;

        let codepoint = u32::from_str_radix(&caps[1], 16)
            .ok()
            .filter(|cp| *cp <= MAX_CODEPOINT)
            .ok_or_else(|| TableGenError::unparseable(line_no, line, "codepoint above U+10FFFF"))?;
        let name = &caps[2];
        let category = caps[3]
            .chars()
            .next()
            .and_then(GeneralCategory::from_major)
            .ok_or_else(|| TableGenError::unparseable(line_no, line, "unknown general category"))?;

        if let Some(first) = pending.take() {
            if !name.ends_with(", Last>") {
                return Err(TableGenError::unparseable(line_no, line, "First with no following Last"));
            }
            if category != first.category {
                return Err(TableGenError::unparseable(line_no, line, "Last category different than First"));
            }
            if codepoint < first.codepoint {
                return Err(TableGenError::unparseable(line_no, line, "Last precedes First"));
            }
            spans.push(UcdSpan { first: first.codepoint, last: codepoint, category });
        } else if name.ends_with(", First>") {
            pending = Some(PendingFirst { codepoint, category, line_no, line: line.to_string() });
        } else {
            spans.push(UcdSpan { first: codepoint, last: codepoint, category });
        }
    }

    if let Some(first) = pending {
        return Err(TableGenError::unparseable(first.line_no, &first.line, "First with no following Last"));
    }
    log::debug!("ucd: parsed {} spans", spans.len());
    Ok(spans)
}
