//! Nyuzi Load/Store Instruction Set.
//!
//! Scalar, block vector and gather/scatter accesses encoded in the memory
//! formats (M with a lane mask, MM without). The load/store direction lives in
//! its own bit, so loads and stores of the same width share an operation code.
//!
//! # Structure
//!
//! - `opcodes`: Memory operation codes (bits 25-28).

/// Memory operation codes.
pub mod opcodes;
