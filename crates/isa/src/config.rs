//! Configuration for a generation pass.
//!
//! This module defines the settings that parameterize corpus generation. It provides:
//! 1. **Defaults:** Output file names, header text, seed and layout constants.
//! 2. **Structure:** A flat, fully defaulted `GeneratorConfig`.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! An empty JSON object (or `GeneratorConfig::default()`) reproduces the
//! standard corpora: `assembler-tests.s` and `disassembler-tests.s` in the
//! working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::constants::CHECK_COLUMN;
use crate::common::{Error, Result};
use crate::generator::imm::{FixedImmediates, ImmediateSource, SeededImmediates};

/// Default configuration constants.
mod defaults {
    /// File name of the assembler corpus.
    pub const ASSEMBLER_CORPUS: &str = "assembler-tests.s";

    /// File name of the disassembler corpus.
    pub const DISASSEMBLER_CORPUS: &str = "disassembler-tests.s";

    /// Program named in the generated-file disclaimer.
    pub const PROGRAM: &str = "make_tests";

    /// Target architecture passed to llvm-mc in the RUN lines.
    pub const ARCH: &str = "nyuzi";

    /// Seed of the immediate generator.
    pub const SEED: u64 = 0x4E59_555A_4931_3031;
}

/// Settings of one generation pass.
///
/// # Examples
///
/// ```
/// use nyuzi_mc_core::config::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{ "seed": 7, "program": "gen" }"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.program_name(), "gen");
/// assert_eq!(config.arch, "nyuzi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Assembler corpus file name, relative to the output directory.
    #[serde(default = "GeneratorConfig::default_assembler_corpus")]
    pub assembler_corpus: PathBuf,

    /// Disassembler corpus file name, relative to the output directory.
    #[serde(default = "GeneratorConfig::default_disassembler_corpus")]
    pub disassembler_corpus: PathBuf,

    /// Program named in the generated-file disclaimer; unset means `make_tests`.
    #[serde(default)]
    pub program: Option<String>,

    /// Target architecture named in the RUN lines.
    #[serde(default = "GeneratorConfig::default_arch")]
    pub arch: String,

    /// Seed of the immediate generator.
    #[serde(default = "GeneratorConfig::default_seed")]
    pub seed: u64,

    /// Explicit immediate table; when set it replaces the seeded generator.
    #[serde(default)]
    pub immediates: Option<Vec<i32>>,

    /// Column the assembler corpus pads instruction text to.
    #[serde(default = "GeneratorConfig::default_check_column")]
    pub check_column: usize,
}

impl GeneratorConfig {
    fn default_assembler_corpus() -> PathBuf {
        PathBuf::from(defaults::ASSEMBLER_CORPUS)
    }

    fn default_disassembler_corpus() -> PathBuf {
        PathBuf::from(defaults::DISASSEMBLER_CORPUS)
    }

    fn default_arch() -> String {
        defaults::ARCH.to_owned()
    }

    const fn default_seed() -> u64 {
        defaults::SEED
    }

    const fn default_check_column() -> usize {
        CHECK_COLUMN
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`] if the file cannot be read and
    /// [`Error::Config`] if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Program named in the generated-file disclaimer.
    pub fn program_name(&self) -> &str {
        self.program.as_deref().unwrap_or(defaults::PROGRAM)
    }

    /// Builds the immediate source this configuration selects.
    pub fn immediate_source(&self) -> Box<dyn ImmediateSource> {
        match &self.immediates {
            Some(values) => Box::new(FixedImmediates::new(values.clone())),
            None => Box::new(SeededImmediates::new(self.seed)),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assembler_corpus: Self::default_assembler_corpus(),
            disassembler_corpus: Self::default_disassembler_corpus(),
            program: None,
            arch: Self::default_arch(),
            seed: Self::default_seed(),
            immediates: None,
            check_column: Self::default_check_column(),
        }
    }
}
