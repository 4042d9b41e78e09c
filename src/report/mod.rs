//! Derivation proof-tree reconstruction

mod core;

pub use self::core::reconstruct;
