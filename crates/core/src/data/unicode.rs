// crates/core/src/data/unicode.rs
use zx_tablegen_shared_kernel::KeyRange;

use crate::compact::{Coverage, SkipRange};

/// Unicode version the tables below were checked against.
pub const UNICODE_VERSION: &str = "15.0.0";

pub const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/15.0.0/ucd/UnicodeData.txt";

/// Codepoints of category C or Z that are nevertheless rendered visibly.
pub const VISIBLE_EXCEPTIONS: &[KeyRange] = &[
    KeyRange::span(0x0600, 0x0605),  // ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
    KeyRange::span(0x08E2, 0x08E2),  // ARABIC DISPUTED END OF AYAH
    KeyRange::span(0x110BD, 0x110BD), // KAITHI NUMBER SIGN
    KeyRange::span(0x110CD, 0x110CD), // KAITHI NUMBER SIGN ABOVE
];

/// BMP blocks left out of `zx_graph_bmp`, answered by range checks instead.
pub const BMP_SKIPS: &[SkipRange] = &[
    SkipRange::new(0x3400, 0x4DBF, Coverage::Graphical, "CJK Ideograph Extension A"),
    SkipRange::new(0x4E00, 0x9FFF, Coverage::Graphical, "CJK Ideograph (URO)"),
    // 0xD7A0..0xD7A3 stay in the table
    SkipRange::new(0xAC00, 0xD79F, Coverage::Graphical, "Hangul Syllable"),
    SkipRange::new(0xD800, 0xDFFF, Coverage::NonGraphical, "Surrogates"),
    SkipRange::new(0xE000, 0xF8FF, Coverage::NonGraphical, "Private Use Area"),
];

/// Plane 1 offsets left out of `zx_graph_1`.
pub const PLANE1_SKIPS: &[SkipRange] = &[
    SkipRange::new(0x25C0, 0x2F7F, Coverage::Unassigned, "Unassigned 0x125C0..0x12F7F"),
    SkipRange::new(0x3480, 0x43FF, Coverage::Unassigned, "Unassigned 0x13480..0x143FF"),
    SkipRange::new(0x4700, 0x67FF, Coverage::Unassigned, "Unassigned 0x14700..0x167FF"),
    SkipRange::new(0x7000, 0x87F7, Coverage::Graphical, "Tangut Ideograph"),
    // 0x18D08 stays in the table
    SkipRange::new(0x8D00, 0x8D07, Coverage::Graphical, "Tangut Ideograph Supplement"),
    SkipRange::new(0x8E00, 0xAEFF, Coverage::Unassigned, "Unassigned 0x18E00..0x1AEFF"),
    SkipRange::new(0xB300, 0xBBFF, Coverage::Unassigned, "Unassigned 0x1B300..0x1BBFF"),
    SkipRange::new(0xBD00, 0xCEFF, Coverage::Unassigned, "Unassigned 0x1BD00..0x1CEFF"),
];

/// How the members of one plane are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneEncoding {
    /// Bitmap table `zx_graph_<name>`.
    Dense {
        name: &'static str,
        skips: &'static [SkipRange],
    },
    /// `if (u <= ...)` range conditional.
    Sparse,
    /// No graphical codepoints expected.
    Empty,
}

pub const PLANE_COUNT: usize = 17;

pub const PLANE_LAYOUT: [PlaneEncoding; PLANE_COUNT] = [
    PlaneEncoding::Dense { name: "bmp", skips: BMP_SKIPS },
    PlaneEncoding::Dense { name: "1", skips: PLANE1_SKIPS },
    PlaneEncoding::Sparse,
    PlaneEncoding::Sparse,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
    PlaneEncoding::Sparse,
    PlaneEncoding::Empty,
    PlaneEncoding::Empty,
];
