// crates/core/src/data/mod.rs
//! Hand-maintained literal data tied to a specific standard release.
//!
//! Nothing here is derived from the parsed input. When the upstream
//! standard moves to a new version these tables need to be re-checked by
//! hand; the generators log a revalidation warning when the parsed data no
//! longer lines up with them.

pub mod gs1;
pub mod unicode;
