// crates/shared-kernel/src/value_objects/mod.rs
pub mod ai_key;
pub mod key_range;
pub mod weight;

pub use ai_key::AiKey;
pub use key_range::KeyRange;
pub use weight::Weight;
