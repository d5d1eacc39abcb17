//! Test case generation.
//!
//! This module turns the opcode catalog into paired assembler/disassembler
//! test records. It provides:
//! 1. **Immediate Sources:** Seeded and table-driven value suppliers.
//! 2. **Records:** The (assembly text, instruction word) pair and its corpus line formats.
//! 3. **Case Generator:** The class-by-class enumeration and the full generation pass.

use std::path::Path;

use tracing::info;

use crate::common::Result;
use crate::config::GeneratorConfig;
use crate::emit::CorpusWriter;
use crate::stats::GenerationStats;

/// Class-by-class test case enumeration.
pub mod cases;

/// Immediate value sources.
pub mod imm;

/// Test records and corpus line formatting.
pub mod record;

pub use cases::CaseGenerator;
pub use imm::{FixedImmediates, ImmediateSource, SeededImmediates};
pub use record::TestRecord;

/// Generates every record described by `config` and writes both corpora into `dir`.
///
/// Existing corpus files are overwritten. A failed pass may leave partial
/// files behind; rerun it from scratch.
///
/// # Errors
///
/// Returns an error if either corpus cannot be created, written or flushed.
pub fn write_corpora(config: &GeneratorConfig, dir: &Path) -> Result<GenerationStats> {
    info!(
        assembler = %dir.join(&config.assembler_corpus).display(),
        disassembler = %dir.join(&config.disassembler_corpus).display(),
        seed = config.seed,
        "writing encoding corpora"
    );

    let mut writer = CorpusWriter::create(config, dir)?;
    let mut generator =
        CaseGenerator::new(config.immediate_source()).with_check_column(config.check_column);
    let stats = generator.run(&mut writer)?;
    let _ = writer.finish()?;
    Ok(stats)
}
