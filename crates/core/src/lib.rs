// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod compact;
pub mod data;
pub mod emit;
pub mod gs1;
pub mod ucd;

pub use gs1::generate_ai_infos;
pub use ucd::generate_iswgraph;
