// crates/core/src/ucd/mod.rs
//! Unicode Character Database → `zx_iswgraph()` tables.
//!
//! 描画されるコードポイント (カテゴリ C / Z 以外と例外) を平面ごとに集め、
//! 平面 0 と 1 はビット表、平面 2・3・E は範囲条件として出力する。

pub mod graph;
pub mod iswgraph;
pub mod parser;

use zx_tablegen_shared_kernel::Result;

use crate::data::unicode::{PLANE_LAYOUT, UNICODE_VERSION, VISIBLE_EXCEPTIONS};

pub use graph::PlaneSets;
pub use iswgraph::{check_layout, render_iswgraph};
pub use parser::{GeneralCategory, UcdSpan, parse_unicode_data};

/// Parse `UnicodeData.txt` and render the `zx_iswgraph()` tables.
///
/// # Errors
///
/// Returns `UnparseableLine` for malformed input, or `ConsistencyViolation`
/// when the data no longer fits the plane layout and skip ranges.
pub fn generate_iswgraph<'a, I>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let spans = parse_unicode_data(lines)?;
    let planes = PlaneSets::from_spans(&spans, VISIBLE_EXCEPTIONS);
    render_iswgraph(&planes, &PLANE_LAYOUT, UNICODE_VERSION)
}
