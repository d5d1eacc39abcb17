//! Instruction word formats and their bit-field layouts.
//!
//! Every format partitions the 32-bit word into named fields. Fixed tag bits
//! and reserved (always zero) ranges are listed as fields too, so each layout
//! covers bits 0-31 exactly once.

use std::fmt;

use crate::common::constants::INSTRUCTION_BITS;

/// A contiguous bit range within an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name as used in the encoding tables.
    pub name: &'static str,
    /// Least significant bit of the field.
    pub lsb: u32,
    /// Width of the field in bits.
    pub width: u32,
}

impl Field {
    const fn new(name: &'static str, lsb: u32, width: u32) -> Self {
        Self { name, lsb, width }
    }

    /// Mask of the field's value before shifting (`width` low bits set).
    #[inline]
    pub const fn value_mask(&self) -> u32 {
        ((1u64 << self.width) - 1) as u32
    }

    /// Mask of the field's bits in place within the word.
    #[inline]
    pub const fn word_mask(&self) -> u32 {
        self.value_mask() << self.lsb
    }

    /// Most significant bit of the field.
    #[inline]
    pub const fn msb(&self) -> u32 {
        self.lsb + self.width - 1
    }

    /// Truncates `value` to the field width and shifts it into place.
    #[inline]
    pub const fn place(&self, value: u32) -> u32 {
        (value & self.value_mask()) << self.lsb
    }

    /// Reads the field's raw value out of `word`.
    #[inline]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.lsb) & self.value_mask()
    }
}

/// The closed set of instruction word layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register arithmetic, tagged `110` in bits 29-31.
    R,
    /// Immediate arithmetic with a lane mask and a 9-bit signed immediate.
    I,
    /// Immediate arithmetic without a lane mask and a 14-bit immediate.
    Im,
    /// Memory access with a lane mask and a 10-bit offset.
    M,
    /// Memory access without a lane mask and a 15-bit offset.
    Mm,
    /// Cache control on one register.
    C,
    /// Cache control on a virtual and a physical register (TLB insertion).
    CPrime,
}

const R_FIELDS: [Field; 7] = [
    Field::new("src1", 0, 5),
    Field::new("dest", 5, 5),
    Field::new("mask", 10, 5),
    Field::new("src2", 15, 5),
    Field::new("opcode", 20, 6),
    Field::new("fmt", 26, 3),
    Field::new("tag", 29, 3),
];

const I_FIELDS: [Field; 6] = [
    Field::new("src1", 0, 5),
    Field::new("dest", 5, 5),
    Field::new("mask", 10, 5),
    Field::new("imm", 15, 9),
    Field::new("opcode", 24, 5),
    Field::new("fmt", 29, 3),
];

const IM_FIELDS: [Field; 5] = [
    Field::new("src1", 0, 5),
    Field::new("dest", 5, 5),
    Field::new("imm", 10, 14),
    Field::new("opcode", 24, 5),
    Field::new("fmt", 29, 3),
];

const M_FIELDS: [Field; 7] = [
    Field::new("ptr", 0, 5),
    Field::new("src_dest", 5, 5),
    Field::new("mask", 10, 5),
    Field::new("offset", 15, 10),
    Field::new("op", 25, 4),
    Field::new("load", 29, 1),
    Field::new("tag", 30, 2),
];

const MM_FIELDS: [Field; 6] = [
    Field::new("ptr", 0, 5),
    Field::new("src_dest", 5, 5),
    Field::new("offset", 10, 15),
    Field::new("op", 25, 4),
    Field::new("load", 29, 1),
    Field::new("tag", 30, 2),
];

const C_FIELDS: [Field; 4] = [
    Field::new("reg", 0, 5),
    Field::new("reserved", 5, 20),
    Field::new("op", 25, 4),
    Field::new("tag", 29, 3),
];

const C_PRIME_FIELDS: [Field; 5] = [
    Field::new("reg", 0, 5),
    Field::new("phys_reg", 5, 5),
    Field::new("reserved", 10, 15),
    Field::new("op", 25, 4),
    Field::new("tag", 29, 3),
];

impl Format {
    /// Every format, in table order.
    pub const ALL: [Self; 7] = [
        Self::R,
        Self::I,
        Self::Im,
        Self::M,
        Self::Mm,
        Self::C,
        Self::CPrime,
    ];

    /// Returns the field layout of this format, ordered low bit to high bit.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::R => &R_FIELDS,
            Self::I => &I_FIELDS,
            Self::Im => &IM_FIELDS,
            Self::M => &M_FIELDS,
            Self::Mm => &MM_FIELDS,
            Self::C => &C_FIELDS,
            Self::CPrime => &C_PRIME_FIELDS,
        }
    }

    /// Looks up a field of this format by name.
    pub fn field(self, name: &str) -> Option<Field> {
        self.fields().iter().copied().find(|f| f.name == name)
    }

    /// Returns the union of all field masks; a well-formed layout yields `u32::MAX`.
    pub fn coverage(self) -> u32 {
        self.fields().iter().fold(0, |acc, f| acc | f.word_mask())
    }

    /// Returns true if no two fields share a bit and the fields span the whole word.
    pub fn is_partition(self) -> bool {
        let mut seen = 0u32;
        let mut total = 0u32;
        for field in self.fields() {
            if field.msb() >= INSTRUCTION_BITS || seen & field.word_mask() != 0 {
                return false;
            }
            seen |= field.word_mask();
            total += field.width;
        }
        total == INSTRUCTION_BITS && seen == u32::MAX
    }

    /// Short name used in diagnostics and the encoding tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::Im => "IM",
            Self::M => "M",
            Self::Mm => "MM",
            Self::C => "C",
            Self::CPrime => "C'",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
