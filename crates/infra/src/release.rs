// crates/infra/src/release.rs
//! Latest GS1 syntax dictionary release, read from the repository's tags.

use std::{process::Command, sync::OnceLock};

use regex::Regex;
use zx_tablegen_shared_kernel::{Result, TableGenError};

const TAG_LEN: usize = 10;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Pick the release tag from `git ls-remote --tags --sort=v:refname` output:
/// the last ten characters of the last line, which must read `YYYY-MM-DD`.
#[must_use]
pub fn parse_release_tag(ls_remote: &str) -> Option<String> {
    let last = ls_remote.lines().map(str::trim_end).filter(|line| !line.is_empty()).last()?;
    let tag = last.get(last.len().checked_sub(TAG_LEN)?..)?;
    tag_re().is_match(tag).then(|| tag.to_string())
}

/// Ask `git` for the newest release tag of `repo`.
///
/// # Errors
///
/// Returns `SourceUnavailable` when `git` cannot run, exits non-zero, or
/// lists no date-shaped tag.
pub fn latest_release_tag(repo: &str) -> Result<String> {
    log::debug!("git ls-remote --tags --sort=v:refname {repo}");
    let output = Command::new("git")
        .args(["ls-remote", "--tags", "--sort=v:refname", repo])
        .output()
        .map_err(|e| TableGenError::SourceUnavailable {
            location: repo.to_string(),
            reason: format!("could not run git: {e}"),
            source: Some(Box::new(e)),
        })?;
    if !output.status.success() {
        return Err(TableGenError::source_unavailable(
            repo,
            format!(
                "git ls-remote exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        ));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    let tag = parse_release_tag(&listing)
        .ok_or_else(|| TableGenError::source_unavailable(repo, "no YYYY-MM-DD release tag found"))?;
    log::info!("latest release tag {tag}");
    Ok(tag)
}
