// crates/core/src/emit/ranges.rs
use super::Listing;
use crate::compact::RangeSet;

const WRAP_AT: usize = 100;
const BODY_INDENT: &str = "\t\t";
const CONTINUATION_INDENT: &str = "\t\t\t\t";

/// Emit `if (u <= <window end>) { return <range tests>; }`.
pub fn emit_range_conditional(out: &mut Listing, set: &RangeSet) {
    out.push(format!("\tif (u <= 0x{:X}) {{", set.window().hi()));

    let mut line = String::from(BODY_INDENT);
    if set.ranges().is_empty() {
        line.push_str("return false");
    }
    for (i, range) in set.ranges().iter().enumerate() {
        if line.len() > WRAP_AT {
            out.push(std::mem::replace(&mut line, String::from(CONTINUATION_INDENT)));
        }
        let joiner = if i == 0 {
            "return "
        } else if line == CONTINUATION_INDENT {
            "|| "
        } else {
            " || "
        };
        line.push_str(joiner);
        if range.is_singleton() {
            line.push_str(&format!("u == 0x{:X}", range.lo()));
        } else {
            line.push_str(&format!("(u >= 0x{:X} && u <= 0x{:X})", range.lo(), range.hi()));
        }
    }
    line.push(';');
    out.push(line);
    out.push("\t}");
}
