// crates/core/src/emit/mod.rs
//! Source-literal text for copy/paste into C++ files.

pub mod dense;
pub mod ranges;

pub use dense::emit_dense_table;
pub use ranges::emit_range_conditional;

/// Output lines accumulated before anything reaches stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    lines: Vec<String>,
}

impl Listing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-terminated text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
