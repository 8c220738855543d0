// crates/core/src/emit/dense.rs
use super::Listing;
use crate::compact::DenseTable;

const ENTRIES_PER_LINE: usize = 8;

/// Emit `static const unsigned char <symbol>[N] = { ... };`.
///
/// Each line carries 8 entries followed by the hex key just past its last
/// entry, e.g. `/*0040*/`.
pub fn emit_dense_table(out: &mut Listing, symbol: &str, heading: Option<&str>, table: &DenseTable) {
    if let Some(heading) = heading {
        out.push(format!("\t/* {heading} */"));
    }
    out.push(format!("\tstatic const unsigned char {symbol}[{}] = {{", table.len()));
    for chunk in table.entries().chunks(ENTRIES_PER_LINE) {
        let bytes: Vec<String> = chunk.iter().map(|entry| format!("0x{:02X},", entry.bits)).collect();
        let end = chunk.last().map_or(0, |entry| entry.end);
        out.push(format!("\t\t{} /*{end:04X}*/", bytes.join(" ")));
    }
    out.push("\t};");
}
