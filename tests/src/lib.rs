//! # State Proof Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (decoding, quorum)
//! └── src/integration/  # End-to-end verification through the JSON archive
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p state-proof-tests
//!
//! # Log output from the verifier
//! RUST_LOG=state_proof=debug cargo test -p state-proof-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p state-proof-tests
//! ```

pub mod integration;
