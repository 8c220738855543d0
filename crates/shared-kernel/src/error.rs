// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is fatal: a generator run stops at the first error and
/// produces no table output.
#[derive(Debug, Error)]
pub enum TableGenError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TableGenError>,
    },

    #[error("Could not read source '{location}': {reason}")]
    SourceUnavailable {
        location: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Could not parse line {line_no} ({reason}): {line:?}")]
    UnparseableLine {
        line_no: usize,
        line: String,
        reason: String,
    },

    #[error("Consistency check '{check}' failed: {details}")]
    ConsistencyViolation { check: String, details: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableGenError>;

impl TableGenError {
    pub fn source_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.into(),
            source: None,
        }
    }

    pub fn unparseable(line_no: usize, line: &str, reason: impl Into<String>) -> Self {
        Self::UnparseableLine {
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub fn consistency(check: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConsistencyViolation {
            check: check.into(),
            details: details.into(),
        }
    }

    /// Line number of the offending input line, looking through context wrappers.
    #[must_use]
    pub fn line_no(&self) -> Option<usize> {
        match self {
            Self::UnparseableLine { line_no, .. } => Some(*line_no),
            Self::Context { source, .. } => source.line_no(),
            _ => None,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TableGenError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TableGenError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TableGenError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
