// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, Result, TableGenError};

pub mod error;
pub mod value_objects;

pub use value_objects::{AiKey, KeyRange, Weight};
