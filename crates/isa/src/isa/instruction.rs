//! Instruction field layout and extraction utilities.
//!
//! Provides the shift/mask constants for every field of a Nyuzi instruction
//! word and a trait for reading those fields back out of a packed word.

use crate::common::constants::{IMM9_BITS, IMM9_MASK, IMM14_MASK, REG_FIELD_BITS};

/// A packed 32-bit instruction word.
pub type InstructionWord = u32;

/// Bit mask for any 5-bit register field.
pub const REG_MASK: u32 = (1 << REG_FIELD_BITS) - 1;

/// Bit position of the first source (or pointer) register field (bits 0-4).
pub const SRC1_SHIFT: u32 = 0;
/// Bit position of the destination (or store source) register field (bits 5-9).
pub const DEST_SHIFT: u32 = 5;
/// Bit position of the lane mask register field (bits 10-14).
pub const MASK_SHIFT: u32 = 10;
/// Bit position of the second source register field in R format (bits 15-19).
pub const SRC2_SHIFT: u32 = 15;

/// Bit position of the R-format opcode (bits 20-25).
pub const R_OPCODE_SHIFT: u32 = 20;
/// Bit mask for the 6-bit R-format opcode.
pub const R_OPCODE_MASK: u32 = 0x3F;
/// Bit position of the R-format fmt code (bits 26-28).
pub const R_FMT_SHIFT: u32 = 26;
/// Bit mask for the 3-bit R-format fmt code.
pub const R_FMT_MASK: u32 = 0x7;
/// Fixed tag in bits 29-31 identifying an R-format word.
pub const R_TAG: u32 = 0b110;

/// Bit position of the fmt code in both immediate formats (bits 29-31).
pub const IMM_FMT_SHIFT: u32 = 29;
/// Bit mask for the 3-bit immediate-format fmt code.
pub const IMM_FMT_MASK: u32 = 0x7;
/// Bit position of the immediate-format opcode (bits 24-28).
pub const IMM_OPCODE_SHIFT: u32 = 24;
/// Bit mask for the 5-bit immediate-format opcode.
pub const IMM_OPCODE_MASK: u32 = 0x1F;
/// Bit position of the 9-bit I-format immediate (bits 15-23).
pub const IMM9_SHIFT: u32 = 15;
/// Bit position of the 14-bit IM-format immediate (bits 10-23).
pub const IMM14_SHIFT: u32 = 10;

/// Bit position of the memory-format tag (bits 30-31).
pub const MEM_TAG_SHIFT: u32 = 30;
/// Fixed tag in bits 30-31 identifying a memory-format word.
pub const MEM_TAG: u32 = 0b10;
/// Bit position of the load/store flag (bit 29).
pub const MEM_LOAD_SHIFT: u32 = 29;
/// Bit position of the memory operation (bits 25-28).
pub const MEM_OP_SHIFT: u32 = 25;
/// Bit mask for the 4-bit memory operation.
pub const MEM_OP_MASK: u32 = 0xF;
/// Bit position of the masked memory offset (bits 15-24).
pub const M_OFFSET_SHIFT: u32 = 15;
/// Bit mask for the 10-bit masked memory offset.
pub const M_OFFSET_MASK: u32 = 0x3FF;
/// Bit position of the unmasked memory offset (bits 10-24).
pub const MM_OFFSET_SHIFT: u32 = 10;
/// Bit mask for the 15-bit unmasked memory offset.
pub const MM_OFFSET_MASK: u32 = 0x7FFF;

/// Fixed prefix of every cache-control word (bits 29-31 set).
pub const CACHE_CONTROL_TAG: u32 = 0xE000_0000;

/// Trait for extracting Nyuzi instruction fields from packed words.
///
/// Extraction never validates the format; reading an I-format immediate out of
/// an R-format word returns whatever bits occupy that range.
pub trait InstructionBits {
    /// Extracts the first source register, or the pointer register of a memory word (bits 0-4).
    fn src1(&self) -> u32;

    /// Extracts the destination register, or the value register of a memory word (bits 5-9).
    fn dest(&self) -> u32;

    /// Extracts the lane mask register (bits 10-14).
    fn mask(&self) -> u32;

    /// Extracts the R-format second source register (bits 15-19).
    fn src2(&self) -> u32;

    /// Extracts the R-format opcode (bits 20-25).
    fn r_opcode(&self) -> u32;

    /// Extracts the R-format fmt code (bits 26-28).
    fn r_fmt(&self) -> u32;

    /// Extracts the immediate-format fmt code (bits 29-31).
    fn imm_fmt(&self) -> u32;

    /// Extracts the immediate-format opcode (bits 24-28).
    fn imm_opcode(&self) -> u32;

    /// Extracts the I-format immediate and sign-extends it from 9 bits.
    fn imm9(&self) -> i32;

    /// Extracts the raw 14-bit IM-format immediate.
    fn imm14(&self) -> u32;

    /// Returns true if a memory-format word is a load (bit 29).
    fn is_load(&self) -> bool;

    /// Extracts the memory or cache-control operation (bits 25-28).
    fn mem_op(&self) -> u32;

    /// Extracts the 10-bit masked memory offset (bits 15-24).
    fn m_offset(&self) -> u32;

    /// Extracts the 15-bit unmasked memory offset (bits 10-24).
    fn mm_offset(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn src1(&self) -> u32 {
        (self >> SRC1_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn dest(&self) -> u32 {
        (self >> DEST_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn mask(&self) -> u32 {
        (self >> MASK_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn src2(&self) -> u32 {
        (self >> SRC2_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn r_opcode(&self) -> u32 {
        (self >> R_OPCODE_SHIFT) & R_OPCODE_MASK
    }

    #[inline(always)]
    fn r_fmt(&self) -> u32 {
        (self >> R_FMT_SHIFT) & R_FMT_MASK
    }

    #[inline(always)]
    fn imm_fmt(&self) -> u32 {
        (self >> IMM_FMT_SHIFT) & IMM_FMT_MASK
    }

    #[inline(always)]
    fn imm_opcode(&self) -> u32 {
        (self >> IMM_OPCODE_SHIFT) & IMM_OPCODE_MASK
    }

    /// Shifts the field to the top of the word and arithmetic-shifts it back
    /// down so bit 8 of the field becomes the sign.
    #[inline(always)]
    fn imm9(&self) -> i32 {
        let raw = (self >> IMM9_SHIFT) & IMM9_MASK;
        ((raw << (32 - IMM9_BITS)) as i32) >> (32 - IMM9_BITS)
    }

    #[inline(always)]
    fn imm14(&self) -> u32 {
        (self >> IMM14_SHIFT) & IMM14_MASK
    }

    #[inline(always)]
    fn is_load(&self) -> bool {
        (self >> MEM_LOAD_SHIFT) & 1 == 1
    }

    #[inline(always)]
    fn mem_op(&self) -> u32 {
        (self >> MEM_OP_SHIFT) & MEM_OP_MASK
    }

    #[inline(always)]
    fn m_offset(&self) -> u32 {
        (self >> M_OFFSET_SHIFT) & M_OFFSET_MASK
    }

    #[inline(always)]
    fn mm_offset(&self) -> u32 {
        (self >> MM_OFFSET_SHIFT) & MM_OFFSET_MASK
    }
}
