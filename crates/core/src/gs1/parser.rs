// crates/core/src/gs1/parser.rs
//! GS1 Barcode Syntax Dictionary の行パーサ
//!
//! A data line looks like
//!
//! ```text
//! 3100-3105  *  N6,decimal  req=01,02            # NET WEIGHT (kg)
//! ```
//!
//! i.e. an AI or AI range, the flag column, the component specification and
//! an optional title. Only the length specifier of each component matters
//! here; everything after its first comma is ignored.

use std::sync::OnceLock;

use regex::Regex;
use zx_tablegen_shared_kernel::{AiKey, KeyRange, Result, TableGenError, Weight};

use super::record::{AiRecord, Dictionary};

fn line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+(?:-[0-9]+)?) +(?:\* +)?([NXYZ][0-9.][ NXYZ0-9.,a-z=|\[\]]*)(?:# (.+))?$").unwrap()
    })
}

fn release_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^# Release: ([0-9]{4}-[0-9]{2}-[0-9]{2})$").unwrap())
}

/// Attributes that carry no length information.
fn attribute_res() -> &'static [Regex; 3] {
    static RE: OnceLock<[Regex; 3]> = OnceLock::new();
    RE.get_or_init(|| {
        [
            Regex::new(r" +req=[0-9,n]*").unwrap(),
            Regex::new(r" +ex=[0-9,n]*").unwrap(),
            Regex::new(r" +dlpkey[=0-9,|]*").unwrap(),
        ]
    })
}

fn mandatory_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([NXYZ])([0-9]+)?(?:\.\.([0-9][0-9|]*))?$").unwrap())
}

fn optional_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([NXYZ])([0-9]+)?(?:\.\.([0-9][0-9|]*))?\]$").unwrap())
}

/// Summed minimum and maximum data length of a component specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: u32,
    pub max: u32,
}

impl LengthBounds {
    /// `None` when the maximum is too large for the signed encoding.
    #[must_use]
    pub fn weight(self) -> Option<Weight> {
        Weight::from_bounds(self.min, self.max)
    }
}

/// Parse every line of a dictionary file.
///
/// Stops at the first line that does not match the grammar; no partial
/// result is returned.
///
/// # Errors
///
/// Returns `UnparseableLine` with the 1-based line number.
pub fn parse_dictionary<'a, I>(lines: I) -> Result<Dictionary>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dictionary = Dictionary::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if dictionary.release.is_none()
                && let Some(caps) = release_re().captures(line)
            {
                dictionary.release = Some(caps[1].to_string());
            }
            continue;
        }
        dictionary.records.push(parse_line(line_no, line)?);
    }

    dictionary.records.sort_by_key(|record| record.key.start());
    log::debug!(
        "gs1: parsed {} records (release {})",
        dictionary.records.len(),
        dictionary.release.as_deref().unwrap_or("unknown")
    );
    Ok(dictionary)
}

/// Parse one data line into a record.
///
/// # Errors
///
/// Returns `UnparseableLine` when the line or one of its length specifiers
/// does not match.
pub fn parse_line(line_no: usize, line: &str) -> Result<AiRecord> {
    let caps = line_re()
        .captures(line)
        .ok_or_else(|| TableGenError::unparseable(line_no, line, "line does not match dictionary grammar"))?;

    let key = parse_ai(&caps[1]).map_err(|reason| TableGenError::unparseable(line_no, line, reason))?;
    let bounds =
        parse_length_spec(&caps[2]).map_err(|reason| TableGenError::unparseable(line_no, line, reason))?;
    let weight = bounds
        .weight()
        .ok_or_else(|| TableGenError::unparseable(line_no, line, "data length does not fit an i32"))?;

    Ok(AiRecord::new(key, weight))
}

fn parse_ai(text: &str) -> std::result::Result<AiKey, String> {
    let number = |s: &str| s.parse::<u32>().map_err(|e| format!("invalid AI '{s}': {e}"));
    match text.split_once('-') {
        Some((lo, hi)) => {
            let (lo, hi) = (number(lo)?, number(hi)?);
            KeyRange::new(lo, hi)
                .map(AiKey::from)
                .ok_or_else(|| format!("inverted AI range {text}"))
        }
        None => number(text).map(AiKey::Single),
    }
}

/// Sum the length contributions of every component in `spec`.
///
/// # Errors
///
/// Returns the reason when a component's length specifier has an unknown shape.
pub fn parse_length_spec(spec: &str) -> std::result::Result<LengthBounds, String> {
    let mut spec = spec.trim().to_string();
    for re in attribute_res() {
        spec = re.replace_all(&spec, "").into_owned();
    }

    let mut bounds = LengthBounds::default();
    for component in spec.split_whitespace() {
        let validator = component.split(',').next().unwrap_or(component);
        let (min, max) = component_bounds(validator)?;
        let overflow = || format!("data length of '{spec}' overflows");
        bounds.min = bounds.min.checked_add(min).ok_or_else(overflow)?;
        bounds.max = bounds.max.checked_add(max).ok_or_else(overflow)?;
    }
    if bounds.max == 0 {
        return Err(format!("no length specifier in '{spec}'"));
    }
    Ok(bounds)
}

fn component_bounds(validator: &str) -> std::result::Result<(u32, u32), String> {
    let (caps, optional) = if let Some(caps) = mandatory_re().captures(validator) {
        (caps, false)
    } else if let Some(caps) = optional_re().captures(validator) {
        (caps, true)
    } else {
        return Err(format!("could not parse validator '{validator}'"));
    };

    let fixed = caps.get(2).map(|m| leading_number(m.as_str())).transpose()?;
    let upper = caps.get(3).map(|m| leading_number(m.as_str())).transpose()?;

    match (fixed, upper, optional) {
        (Some(n), None, false) => Ok((n, n)),
        (Some(n), None, true) => Ok((0, n)),
        (lower, Some(m), optional) => {
            let min = lower.unwrap_or(if optional { 0 } else { 1 });
            if min > m {
                return Err(format!("minimum exceeds maximum in '{validator}'"));
            }
            Ok((min, m))
        }
        (None, None, _) => Err(format!("missing length in '{validator}'")),
    }
}

fn leading_number(text: &str) -> std::result::Result<u32, String> {
    let digits = text.split('|').next().unwrap_or(text);
    digits.parse::<u32>().map_err(|e| format!("invalid length '{text}': {e}"))
}
