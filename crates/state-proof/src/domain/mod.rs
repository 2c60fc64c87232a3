//! # Domain Layer
//!
//! Pure decoding and verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod config;
pub mod constants;
pub mod crypto;
pub mod cursor;
pub mod entities;
pub mod errors;
pub mod quorum;
pub mod signature_file;
