//! # Shared Test Infrastructure
//!
//! Fixtures and mocks used across the unit test tree.

/// Generator fixtures and corpus line parsers.
pub mod fixtures;
