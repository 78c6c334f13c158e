//! Core data models for `Snipkeep`

mod snippet;

pub use snippet::Snippet;
