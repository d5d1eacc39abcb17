//! Nyuzi instruction encoder and llvm-mc test corpus generator.
//!
//! This crate packs Nyuzi scalar/vector instructions into 32-bit words and
//! generates matched (assembly text, encoding) pairs that cross-check an
//! assembler and a disassembler against each other:
//! 1. **ISA:** Word formats, the field packer, the format selector and the opcode catalog.
//! 2. **Generation:** Register cursor, immediate sources and the class-by-class case generator.
//! 3. **Emission:** Sinks that receive the paired corpus lines, including the corpus file writer.
//! 4. **Configuration:** Output names, header text and seeding, loadable from JSON.
//!
//! # Examples
//!
//! ```
//! use nyuzi_mc_core::emit::MemorySink;
//! use nyuzi_mc_core::generator::{CaseGenerator, SeededImmediates};
//!
//! let mut sink = MemorySink::new();
//! let stats = CaseGenerator::new(SeededImmediates::new(1)).run(&mut sink).unwrap();
//! assert_eq!(stats.total(), sink.len());
//! let last = sink.assembly.last().unwrap();
//! assert!(last.starts_with("syscall "));
//! assert!(last.ends_with(" # CHECK: 0x00,0x00,0xf0,0xc3"));
//! ```

/// Common types and constants (error type, register cursor, layout constants).
pub mod common;
/// Generation pass configuration (defaults, JSON loading).
pub mod config;
/// Emission sinks (corpus file writer, in-memory sink).
pub mod emit;
/// Test case generation (cursor-driven sweeps, immediate sources, records).
pub mod generator;
/// Instruction set (formats, packer, selector, opcode catalog).
pub mod isa;
/// Per-class generation statistics.
pub mod stats;

/// Root configuration type; use `GeneratorConfig::default()` or load from JSON.
pub use crate::config::GeneratorConfig;
/// Crate error and result types.
pub use crate::common::{Error, Result};
/// Case generator; construct with an immediate source and call `run` or `generate`.
pub use crate::generator::{CaseGenerator, TestRecord, write_corpora};
