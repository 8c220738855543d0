// src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// windows-sys: reqwest(0.48) vs clap(0.61)
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod parsers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
