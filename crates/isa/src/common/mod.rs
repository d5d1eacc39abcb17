//! Common utilities and types used throughout the encoder and generator.
//!
//! This module provides building blocks shared by every other module. It includes:
//! 1. **Constants:** Word, register, immediate and corpus layout constants.
//! 2. **Error Handling:** The crate error type and result alias.
//! 3. **Register Allocation:** The cycling register cursor used by the generator.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types.
pub mod error;

/// Register cursor implementation.
pub mod reg;

pub use error::{Error, Result};
pub use reg::RegisterCursor;
