// src/app.rs
use std::io::Write;

use log::LevelFilter;
use zx_tablegen_core::data::gs1::{SYNTAX_DICTIONARY_REPO, syntax_dictionary_url};
use zx_tablegen_core::{generate_ai_infos, generate_iswgraph};
use zx_tablegen_infra::{Source, latest_release_tag, load_source};
use zx_tablegen_shared_kernel::{ErrorContext, Result};

use crate::config::{AiInfosConfig, IswgraphConfig, RunConfig};

/// Map `-v` occurrences to a level; `RUST_LOG` still wins when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Render the requested table completely, then write it to stdout.
///
/// # Errors
/// Returns the generator error untouched, or the stdout write failure.
pub fn run(config: &RunConfig) -> anyhow::Result<()> {
    let table = render(config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(table.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Build the table text without touching stdout.
///
/// # Errors
/// Returns `SourceUnavailable`, `UnparseableLine` or `ConsistencyViolation`.
pub fn render(config: &RunConfig) -> Result<String> {
    match config {
        RunConfig::AiInfos(config) => render_ai_infos(config),
        RunConfig::Iswgraph(config) => render_iswgraph(config),
    }
}

fn render_ai_infos(config: &AiInfosConfig) -> Result<String> {
    let (source, release) = match &config.source {
        Some(source) => (source.clone(), None),
        None => {
            let tag = latest_release_tag(SYNTAX_DICTIONARY_REPO)?;
            (Source::Url(syntax_dictionary_url(&tag)), Some(tag))
        }
    };
    let text = load_source(&source)?;
    generate_ai_infos(text.lines(), release.as_deref(), &config.indent)
        .with_context(|| format!("reading {}", text.location))
}

fn render_iswgraph(config: &IswgraphConfig) -> Result<String> {
    let text = load_source(&config.source)?;
    generate_iswgraph(text.lines()).with_context(|| format!("reading {}", text.location))
}
