// crates/core/src/gs1/mod.rs
//! GS1 syntax dictionary → `aiInfos[]`.

pub mod parser;
pub mod record;
pub mod table;

use zx_tablegen_shared_kernel::Result;

pub use parser::{LengthBounds, parse_dictionary, parse_length_spec, parse_line};
pub use record::{AiRecord, Dictionary};
pub use table::render_ai_table;

/// Parse a whole dictionary and render the table.
///
/// `release` names the dictionary release when the caller resolved it; when
/// `None` the `# Release:` header of the file is used.
///
/// # Errors
///
/// Returns `UnparseableLine` for the first line that does not parse.
pub fn generate_ai_infos<'a, I>(lines: I, release: Option<&str>, indent: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let Dictionary { release: found, mut records } = parse_dictionary(lines)?;
    let release = release.or(found.as_deref());
    if release.is_none() {
        log::warn!("dictionary release tag not found; output header will say so");
    }
    Ok(render_ai_table(&mut records, release, indent))
}
