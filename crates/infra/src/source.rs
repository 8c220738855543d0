// crates/infra/src/source.rs
use std::{
    convert::Infallible,
    fmt,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use zx_tablegen_shared_kernel::{Result, TableGenError};

/// Location argument meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Where a generator reads its upstream text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
    Stdin,
}

impl Source {
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if location == STDIN_MARKER {
            Self::Stdin
        } else if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Whole text of a source, labelled with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub location: String,
    pub text: String,
}

impl SourceText {
    /// Lines without their terminators; CRLF input reads the same as LF.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Read a source to the end.
///
/// # Errors
///
/// Returns `SourceUnavailable` when the file, stream or URL cannot be read,
/// including HTTP responses outside 2xx.
pub fn load_source(source: &Source) -> Result<SourceText> {
    let location = source.to_string();
    let text = match source {
        Source::Path(path) => read_path(path)?,
        Source::Stdin => read_stdin()?,
        Source::Url(url) => fetch_url(url)?,
    };
    let loaded = SourceText { location, text };
    log::info!("loaded {} ({} lines)", loaded.location, loaded.lines().count());
    Ok(loaded)
}

fn unavailable<E>(location: impl Into<String>, reason: &str, err: E) -> TableGenError
where
    E: std::error::Error + Send + Sync + 'static,
{
    TableGenError::SourceUnavailable {
        location: location.into(),
        reason: format!("{reason}: {err}"),
        source: Some(Box::new(err)),
    }
}

fn read_path(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| unavailable(path.display().to_string(), "read failed", e))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut text)
        .map_err(|e| unavailable("<stdin>", "read failed", e))?;
    Ok(text)
}

fn fetch_url(url: &str) -> Result<String> {
    log::debug!("GET {url}");
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| unavailable(url, "HTTP client setup failed", e))?;
    client
        .get(url)
        .send()
        .map_err(|e| unavailable(url, "request failed", e))?
        .error_for_status()
        .map_err(|e| unavailable(url, "bad HTTP status", e))?
        .text()
        .map_err(|e| unavailable(url, "response body unreadable", e))
}
