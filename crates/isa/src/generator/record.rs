//! Test records and their corpus line formats.

use crate::common::constants::{CHECK_MARKER, INSTRUCTION_BYTES};
use crate::isa::instruction::InstructionWord;

/// One generated test case: assembly text paired with its expected word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRecord {
    text: String,
    word: InstructionWord,
}

impl TestRecord {
    /// Pairs assembly text with its instruction word.
    pub fn new(text: impl Into<String>, word: InstructionWord) -> Self {
        Self {
            text: text.into(),
            word,
        }
    }

    /// Assembly text, e.g. `add_i s1, s2, s3`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected instruction word.
    pub const fn word(&self) -> InstructionWord {
        self.word
    }

    /// Mnemonic (first token of the text).
    pub fn mnemonic(&self) -> &str {
        self.text.split_whitespace().next().unwrap_or_default()
    }

    /// Word bytes in memory order, least significant first.
    pub const fn bytes(&self) -> [u8; INSTRUCTION_BYTES] {
        self.word.to_le_bytes()
    }

    /// Renders the four bytes as `0x%02x` values joined by `sep`.
    pub fn encoding_text(&self, sep: &str) -> String {
        self.bytes()
            .iter()
            .map(|b| format!("{b:#04x}"))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Assembler corpus line: text padded to `column`, then the comma-separated bytes.
    pub fn assembly_line(&self, column: usize) -> String {
        let text = &self.text;
        format!(
            "{text:<column$}{CHECK_MARKER}{}",
            self.encoding_text(",")
        )
    }

    /// Disassembler corpus line: space-separated bytes, then the text.
    pub fn disassembly_line(&self) -> String {
        format!("{}{CHECK_MARKER}{}", self.encoding_text(" "), self.text)
    }
}
