//! Cross-layer verification flows.

pub mod fixtures;
