//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `actions.rs` - Lift, place, chain capture and promotion
//! - `notation.rs` - Exchange notation and FEN working together
//! - `proptest.rs` - Property-based tests
