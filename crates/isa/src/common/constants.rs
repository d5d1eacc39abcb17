//! Global Encoding Constants.
//!
//! This module defines constants shared by the packer, the selector and the
//! generator. It includes:
//! 1. **Word Constants:** Instruction width and byte count.
//! 2. **Register Constants:** Register field width and the generator's allocation window.
//! 3. **Immediate Constants:** Truncation widths and the ranges the generator draws from.
//! 4. **Corpus Constants:** Text layout of the generated test files.

/// Width of an instruction word in bits.
pub const INSTRUCTION_BITS: u32 = 32;

/// Size of an instruction word in bytes.
pub const INSTRUCTION_BYTES: usize = 4;

/// Width of every register field in bits.
pub const REG_FIELD_BITS: u32 = 5;

/// Highest register number handed out by the register cursor.
///
/// Registers 28-31 carry ABI meaning (frame pointer, stack pointer, link,
/// program counter) and are kept out of generated operands.
pub const MAX_ALLOCATED_REG: u32 = 27;

/// Number of distinct values the register cursor cycles through.
pub const REG_CURSOR_PERIOD: usize = MAX_ALLOCATED_REG as usize + 1;

/// Width of the signed immediate in the masked immediate (I) format.
pub const IMM9_BITS: u32 = 9;

/// Truncation mask for the masked immediate (I) format.
pub const IMM9_MASK: u32 = (1 << IMM9_BITS) - 1;

/// Width of the immediate in the unmasked immediate (IM) format.
pub const IMM14_BITS: u32 = 14;

/// Truncation mask for the unmasked immediate (IM) format.
pub const IMM14_MASK: u32 = (1 << IMM14_BITS) - 1;

/// Inclusive range of immediates drawn for arithmetic immediate forms.
pub const ARITH_IMM_RANGE: (i32, i32) = (-128, 127);

/// Inclusive range of immediates drawn for compare immediate forms.
pub const COMPARE_IMM_RANGE: (i32, i32) = (0, 255);

/// Inclusive range of the word index scaled into vector memory offsets.
pub const VECTOR_OFFSET_WORDS: (i32, i32) = (0, 128);

/// Byte stride of a vector memory offset.
pub const VECTOR_OFFSET_STRIDE: i32 = 4;

/// Column the assembly corpus pads instruction text to before the check annotation.
pub const CHECK_COLUMN: usize = 32;

/// Annotation separating instruction text from its expected encoding.
pub const CHECK_MARKER: &str = " # CHECK: ";
