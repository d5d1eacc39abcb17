//! Test emission.
//!
//! The generator hands every record to an [`EmissionSink`] as a pair of
//! lines, one per corpus. The sink decides where the lines go: into files
//! ([`CorpusWriter`]) or into memory ([`MemorySink`]).

use crate::common::Result;

/// File-backed corpus writer.
pub mod corpus;

pub use corpus::{CorpusWriter, assembler_header, disassembler_header};

/// Receives the corpus lines of each generated test record.
pub trait EmissionSink {
    /// Accepts one assembler corpus line and the matching disassembler corpus line.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines cannot be stored; the generation pass aborts.
    fn emit(&mut self, assembly: &str, disassembly: &str) -> Result<()>;
}

impl<S: EmissionSink + ?Sized> EmissionSink for &mut S {
    fn emit(&mut self, assembly: &str, disassembly: &str) -> Result<()> {
        (**self).emit(assembly, disassembly)
    }
}

/// Collects corpus lines in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    /// Assembler corpus lines, in emission order.
    pub assembly: Vec<String>,
    /// Disassembler corpus lines, in emission order.
    pub disassembly: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub const fn new() -> Self {
        Self {
            assembly: Vec::new(),
            disassembly: Vec::new(),
        }
    }

    /// Number of line pairs collected.
    pub fn len(&self) -> usize {
        self.assembly.len()
    }

    /// Returns true if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.assembly.is_empty()
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, assembly: &str, disassembly: &str) -> Result<()> {
        self.assembly.push(assembly.to_owned());
        self.disassembly.push(disassembly.to_owned());
        Ok(())
    }
}
