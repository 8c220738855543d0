// src/parsers.rs

/// Parse the indent placed before each `aiInfos[]` entry.
///
/// A literal `\t` is turned into a tab so the shell does not need `$'\t'`.
///
/// # Errors
/// Returns an error if the indent contains a line break.
pub fn parse_indent(s: &str) -> Result<String, String> {
    let indent = s.replace(r"\t", "\t");
    if indent.contains(['\n', '\r']) {
        return Err(format!("Indent must not contain a line break: {s:?}"));
    }
    Ok(indent)
}
