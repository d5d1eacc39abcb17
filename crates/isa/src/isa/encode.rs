//! Nyuzi Instruction Field Packer.
//!
//! Pure bit-packing primitives, one per instruction format. Callers pass
//! already-resolved field values; each value is truncated to its field width
//! before it is shifted into place, so an out-of-range input never spills
//! into a neighbouring field. Truncation is silent: callers that need exact
//! round-trips must range-check first.
//!
//! | Format | Layout (high to low)                                                   |
//! |--------|------------------------------------------------------------------------|
//! | R      | `110` fmt[28:26] opcode[25:20] src2[19:15] mask[14:10] dest[9:5] src1[4:0] |
//! | I      | fmt[31:29] opcode[28:24] imm9[23:15] mask[14:10] dest[9:5] src1[4:0]   |
//! | IM     | fmt[31:29] opcode[28:24] imm14[23:10] dest[9:5] src1[4:0]              |
//! | M      | `10` load[29] op[28:25] offset[24:15] mask[14:10] srcdest[9:5] ptr[4:0] |
//! | MM     | `10` load[29] op[28:25] offset[24:10] srcdest[9:5] ptr[4:0]            |
//! | C      | `111` op[28:25] reg[4:0]                                               |
//! | C'     | `111` op[28:25] physreg[9:5] reg[4:0]                                  |

use crate::common::constants::{IMM9_MASK, IMM14_MASK};
use crate::isa::instruction::{
    CACHE_CONTROL_TAG, DEST_SHIFT, IMM_FMT_MASK, IMM_FMT_SHIFT, IMM_OPCODE_MASK,
    IMM_OPCODE_SHIFT, IMM9_SHIFT, IMM14_SHIFT, InstructionWord, M_OFFSET_MASK, M_OFFSET_SHIFT,
    MASK_SHIFT, MEM_LOAD_SHIFT, MEM_OP_MASK, MEM_OP_SHIFT, MEM_TAG, MEM_TAG_SHIFT,
    MM_OFFSET_MASK, MM_OFFSET_SHIFT, R_FMT_MASK, R_FMT_SHIFT, R_OPCODE_MASK, R_OPCODE_SHIFT,
    R_TAG, REG_MASK, SRC1_SHIFT, SRC2_SHIFT,
};

/// Bit position of the R-format tag (bits 29-31).
const R_TAG_SHIFT: u32 = 29;

#[inline(always)]
const fn reg(value: u32, shift: u32) -> u32 {
    (value & REG_MASK) << shift
}

/// Packs a register-register (R) instruction.
///
/// `(0b110 << 29) | (fmt << 26) | (opcode << 20) | (src2 << 15) | (mask << 10) | (dest << 5) | src1`
///
/// # Arguments
///
/// * `fmt` - Scalar/vector/mask combination code (3 bits).
/// * `opcode` - Arithmetic opcode (6 bits).
/// * `dest` - Destination register.
/// * `src1` - First source register.
/// * `src2` - Second source register.
/// * `mask` - Lane mask register, 0 for unmasked forms.
#[inline]
pub const fn pack_r(
    fmt: u32,
    opcode: u32,
    dest: u32,
    src1: u32,
    src2: u32,
    mask: u32,
) -> InstructionWord {
    (R_TAG << R_TAG_SHIFT)
        | ((fmt & R_FMT_MASK) << R_FMT_SHIFT)
        | ((opcode & R_OPCODE_MASK) << R_OPCODE_SHIFT)
        | reg(src2, SRC2_SHIFT)
        | reg(mask, MASK_SHIFT)
        | reg(dest, DEST_SHIFT)
        | reg(src1, SRC1_SHIFT)
}

/// Packs a masked immediate (I) instruction.
///
/// The immediate is truncated to 9 bits; negative values keep their
/// two's-complement bit pattern (`-1` packs as `0x1FF`).
#[inline]
pub const fn pack_i(
    fmt: u32,
    opcode: u32,
    dest: u32,
    src1: u32,
    imm9: i32,
    mask: u32,
) -> InstructionWord {
    ((fmt & IMM_FMT_MASK) << IMM_FMT_SHIFT)
        | ((opcode & IMM_OPCODE_MASK) << IMM_OPCODE_SHIFT)
        | (((imm9 as u32) & IMM9_MASK) << IMM9_SHIFT)
        | reg(mask, MASK_SHIFT)
        | reg(dest, DEST_SHIFT)
        | reg(src1, SRC1_SHIFT)
}

/// Packs an unmasked immediate (IM) instruction.
///
/// The immediate is truncated to 14 bits.
#[inline]
pub const fn pack_im(fmt: u32, opcode: u32, dest: u32, src1: u32, imm14: i32) -> InstructionWord {
    ((fmt & IMM_FMT_MASK) << IMM_FMT_SHIFT)
        | ((opcode & IMM_OPCODE_MASK) << IMM_OPCODE_SHIFT)
        | (((imm14 as u32) & IMM14_MASK) << IMM14_SHIFT)
        | reg(dest, DEST_SHIFT)
        | reg(src1, SRC1_SHIFT)
}

/// Packs a masked memory (M) instruction.
///
/// `src_dest` is the loaded register for loads and the stored register for
/// stores; `ptr` holds the base address.
#[inline]
pub const fn pack_m(
    is_load: bool,
    op: u32,
    src_dest: u32,
    ptr: u32,
    offset: u32,
    mask: u32,
) -> InstructionWord {
    (MEM_TAG << MEM_TAG_SHIFT)
        | ((is_load as u32) << MEM_LOAD_SHIFT)
        | ((op & MEM_OP_MASK) << MEM_OP_SHIFT)
        | ((offset & M_OFFSET_MASK) << M_OFFSET_SHIFT)
        | reg(mask, MASK_SHIFT)
        | reg(src_dest, DEST_SHIFT)
        | reg(ptr, SRC1_SHIFT)
}

/// Packs an unmasked memory (MM) instruction.
#[inline]
pub const fn pack_mm(
    is_load: bool,
    op: u32,
    src_dest: u32,
    ptr: u32,
    offset: u32,
) -> InstructionWord {
    (MEM_TAG << MEM_TAG_SHIFT)
        | ((is_load as u32) << MEM_LOAD_SHIFT)
        | ((op & MEM_OP_MASK) << MEM_OP_SHIFT)
        | ((offset & MM_OFFSET_MASK) << MM_OFFSET_SHIFT)
        | reg(src_dest, DEST_SHIFT)
        | reg(ptr, SRC1_SHIFT)
}

/// Packs a single-register cache-control (C) instruction.
#[inline]
pub const fn pack_c(op: u32, reg_num: u32) -> InstructionWord {
    CACHE_CONTROL_TAG | ((op & MEM_OP_MASK) << MEM_OP_SHIFT) | reg(reg_num, SRC1_SHIFT)
}

/// Packs a two-register cache-control (C') instruction.
#[inline]
pub const fn pack_c_prime(op: u32, reg_num: u32, phys_reg: u32) -> InstructionWord {
    CACHE_CONTROL_TAG
        | ((op & MEM_OP_MASK) << MEM_OP_SHIFT)
        | reg(phys_reg, DEST_SHIFT)
        | reg(reg_num, SRC1_SHIFT)
}
