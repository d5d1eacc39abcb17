//! Corpus file writer.
//!
//! Writes the assembler corpus (instruction text checked against its
//! encoding) and the disassembler corpus (encoding checked against its text)
//! side by side. Each corpus opens with a generated-file disclaimer and an
//! llvm-mc RUN line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::common::{Error, Result};
use crate::config::GeneratorConfig;
use crate::emit::EmissionSink;

/// Header lines of the assembler corpus.
pub fn assembler_header(program: &str, arch: &str) -> [String; 2] {
    [
        format!("# This file auto-generated by {program}. Do not edit."),
        format!("# RUN: llvm-mc -arch={arch} -show-encoding %s | FileCheck %s"),
    ]
}

/// Header lines of the disassembler corpus.
pub fn disassembler_header(program: &str, arch: &str) -> [String; 2] {
    [
        format!("# This file auto-generated by {program}. Do not edit."),
        format!("# RUN: llvm-mc -arch={arch} -disassemble %s | FileCheck %s"),
    ]
}

/// Writes both corpora to a pair of byte sinks.
#[derive(Debug)]
pub struct CorpusWriter<A: Write, D: Write> {
    assembly: A,
    disassembly: D,
    lines: usize,
}

impl<A: Write, D: Write> CorpusWriter<A, D> {
    /// Wraps two writers and writes both headers.
    ///
    /// # Errors
    ///
    /// Returns an error if either header cannot be written.
    pub fn new(mut assembly: A, mut disassembly: D, program: &str, arch: &str) -> Result<Self> {
        for line in assembler_header(program, arch) {
            writeln!(assembly, "{line}")?;
        }
        for line in disassembler_header(program, arch) {
            writeln!(disassembly, "{line}")?;
        }
        Ok(Self {
            assembly,
            disassembly,
            lines: 0,
        })
    }

    /// Number of test line pairs written, headers excluded.
    pub const fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flushes both writers and returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if either flush fails.
    pub fn finish(mut self) -> Result<(A, D)> {
        self.assembly.flush()?;
        self.disassembly.flush()?;
        debug!(lines = self.lines, "corpora flushed");
        Ok((self.assembly, self.disassembly))
    }
}

impl CorpusWriter<BufWriter<File>, BufWriter<File>> {
    /// Creates (or truncates) both corpus files named by `config` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Create`] if a file cannot be opened, or a write error
    /// if a header cannot be written.
    pub fn create(config: &GeneratorConfig, dir: &Path) -> Result<Self> {
        let open = |name: &Path| {
            let path = dir.join(name);
            File::create(&path)
                .map(BufWriter::new)
                .map_err(|source| Error::Create { path, source })
        };
        let assembly = open(&config.assembler_corpus)?;
        let disassembly = open(&config.disassembler_corpus)?;
        Self::new(assembly, disassembly, config.program_name(), &config.arch)
    }
}

impl<A: Write, D: Write> EmissionSink for CorpusWriter<A, D> {
    fn emit(&mut self, assembly: &str, disassembly: &str) -> Result<()> {
        writeln!(self.assembly, "{assembly}")?;
        writeln!(self.disassembly, "{disassembly}")?;
        self.lines += 1;
        Ok(())
    }
}
