//! Ordering key derivation and the chronological sort

pub mod keys;
pub mod sorter;

pub use keys::derive_key;
pub use sorter::{assign_order, chronological_cmp};
