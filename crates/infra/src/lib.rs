// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod release;
pub mod source;

pub use release::{latest_release_tag, parse_release_tag};
pub use source::{Source, SourceText, load_source};
