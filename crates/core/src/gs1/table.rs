// crates/core/src/gs1/table.rs
//! `aiInfos[]` emitter.

use std::ops::Range;

use zx_tablegen_shared_kernel::Weight;

use super::record::AiRecord;
use crate::data::gs1::{KeyShape, SYNTAX_DICTIONARY_REPO, irregular_window};
use crate::emit::Listing;

/// A regular section of the table, keyed by AI magnitude.
struct Section {
    title: &'static str,
    keys: Range<u32>,
    /// Width of the blank-line separated groups.
    bucket: u32,
}

const TWO_DIGIT: Section = Section { title: "TWO_DIGIT_DATA_LENGTH", keys: 0..100, bucket: 10 };
const THREE_DIGIT: Section = Section { title: "THREE_DIGIT_DATA_LENGTH", keys: 100..1000, bucket: 100 };
const FOUR_DIGIT: Section = Section { title: "FOUR_DIGIT_DATA_LENGTH", keys: 1000..10000, bucket: 1000 };
const THREE_DIGIT_PLUS_DIGIT: &str = "THREE_DIGIT_PLUS_DIGIT_DATA_LENGTH";

/// Render `aiInfos[]` from records sorted by start AI.
///
/// Records handled by the irregular 3-digit+digit pass are marked
/// `consumed` and left out of the 4-digit section.
pub fn render_ai_table(records: &mut [AiRecord], release: Option<&str>, indent: &str) -> String {
    let mut out = Listing::new();
    out.push(format!(
        "// {SYNTAX_DICTIONARY_REPO} {}",
        release.unwrap_or("WARNING: tag not set!")
    ));
    out.push("static const AiInfo aiInfos[] = {");

    let wrote = emit_section(&mut out, records, &TWO_DIGIT, indent, false);
    let wrote = emit_section(&mut out, records, &THREE_DIGIT, indent, wrote);

    if wrote {
        out.blank();
    }
    out.push(format!("//{THREE_DIGIT_PLUS_DIGIT}"));
    emit_irregular(&mut out, records, indent);

    // The 4-digit header is always set off from the irregular pass.
    emit_section(&mut out, records, &FOUR_DIGIT, indent, true);
    out.push("};");
    out.render()
}

fn entry(indent: &str, ai: impl std::fmt::Display, weight: Weight) -> String {
    format!("{indent}{{ \"{ai}\", {weight} }},")
}

/// Returns whether any entry was written.
fn emit_section(
    out: &mut Listing,
    records: &[AiRecord],
    section: &Section,
    indent: &str,
    after_entries: bool,
) -> bool {
    if after_entries {
        out.blank();
    }
    out.push(format!("//{}", section.title));

    let mut boundary = 0;
    let mut wrote = false;
    for record in records {
        if record.consumed || !section.keys.contains(&record.key.start()) {
            continue;
        }
        let end = record.key.end();
        if end >= boundary {
            if wrote {
                out.blank();
            }
            boundary = (end / section.bucket + 1) * section.bucket;
        }
        for ai in record.key.keys() {
            out.push(entry(indent, format_args!("{ai:02}"), record.weight));
        }
        wrote = true;
    }
    wrote
}

/// AIs looked up by their 3-digit prefix: one entry per prefix.
fn emit_irregular(out: &mut Listing, records: &mut [AiRecord], indent: &str) {
    let mut last: Option<(u32, Weight)> = None;

    for record in records.iter_mut() {
        let start = record.key.start();
        let Some(window) = irregular_window(start) else {
            continue;
        };
        let expected_range = window.shape == KeyShape::Range;
        if record.key.is_range() != expected_range {
            log::warn!(
                "AI {} sits in irregular window {} with an unexpected shape; revalidate the irregular AI list",
                record.key,
                window.keys
            );
            continue;
        }

        let prefix = start / 10;
        match last {
            Some((seen, weight)) if seen == prefix => {
                if weight != record.weight {
                    log::warn!(
                        "AI {} length {} differs from prefix {prefix} length {weight}; revalidate the irregular AI list",
                        record.key,
                        record.weight
                    );
                }
            }
            _ => {
                out.push(entry(indent, prefix, record.weight));
                last = Some((prefix, record.weight));
            }
        }
        record.consumed = true;
    }
}
