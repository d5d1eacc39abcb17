//! Nyuzi Opcode Catalog.
//!
//! Static, read-only tables mapping mnemonics to numeric opcodes, grouped by
//! operation class, together with the operand shapes each class enumerates.
//! Class metadata (and the floating-point flag on each entry) is what keeps
//! the generator from ever asking the selector for an illegal shape.

use std::fmt;

use crate::isa::arith::opcodes as arith;
use crate::isa::control::opcodes as ctl;
use crate::isa::encode::{pack_c, pack_c_prime, pack_i, pack_im, pack_mm, pack_r};
use crate::isa::instruction::{IMM_OPCODE_MASK, InstructionWord};
use crate::isa::memory::opcodes as mem;
use crate::isa::select::{OperandShape, RegKind};
use crate::isa::select::RegKind::{Scalar as S, Vector as V};

/// Operation class; decides which operand shapes an operation is enumerated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpClass {
    /// Two-operand arithmetic and logic.
    Arithmetic,
    /// Single-source operations.
    Unary,
    /// Operations only generated in a few hand-picked forms.
    Miscellaneous,
    /// Comparisons producing a scalar lane mask.
    Compare,
    /// Scalar loads and stores.
    ScalarMemory,
    /// Block and gather/scatter vector loads and stores.
    VectorMemory,
    /// Control register transfers.
    ControlRegister,
    /// Cache maintenance, barriers and TLB management.
    CacheControl,
    /// Traps with fixed encodings.
    Special,
}

impl OpClass {
    /// Every class, in generation order.
    pub const ALL: [Self; 9] = [
        Self::Arithmetic,
        Self::Unary,
        Self::Miscellaneous,
        Self::Compare,
        Self::ScalarMemory,
        Self::VectorMemory,
        Self::ControlRegister,
        Self::CacheControl,
        Self::Special,
    ];

    /// Returns true if the class is encoded in the R, I or IM formats.
    pub const fn uses_arithmetic_formats(self) -> bool {
        matches!(
            self,
            Self::Arithmetic | Self::Unary | Self::Miscellaneous | Self::Compare
        )
    }

    /// Lower-case class name used in logs and statistics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::Unary => "unary",
            Self::Miscellaneous => "miscellaneous",
            Self::Compare => "compare",
            Self::ScalarMemory => "scalar-memory",
            Self::VectorMemory => "vector-memory",
            Self::ControlRegister => "control-register",
            Self::CacheControl => "cache-control",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for OpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One arithmetic-format operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationEntry {
    /// Numeric opcode.
    pub opcode: u32,
    /// Assembly mnemonic, without the `_mask` suffix.
    pub mnemonic: &'static str,
    /// Operation class.
    pub class: OpClass,
    /// Floating-point operations have no immediate forms.
    pub float: bool,
}

impl OperationEntry {
    const fn int(opcode: u32, mnemonic: &'static str, class: OpClass) -> Self {
        Self {
            opcode,
            mnemonic,
            class,
            float: false,
        }
    }

    const fn float(opcode: u32, mnemonic: &'static str, class: OpClass) -> Self {
        Self {
            opcode,
            mnemonic,
            class,
            float: true,
        }
    }

    /// Returns true if the operation has register-immediate forms.
    ///
    /// Floating-point operations never do, and the immediate formats only have
    /// room for 5-bit opcodes.
    pub const fn supports_immediate(&self) -> bool {
        !self.float && self.opcode <= IMM_OPCODE_MASK
    }

    /// Mnemonic with the `_mask` suffix applied when `masked` is set.
    pub fn mnemonic_for(&self, masked: bool) -> String {
        if masked {
            format!("{}_mask", self.mnemonic)
        } else {
            self.mnemonic.to_owned()
        }
    }
}

/// Two-operand arithmetic and logic operations.
pub const BINARY_OPS: [OperationEntry; 14] = [
    OperationEntry::int(arith::OR, "or", OpClass::Arithmetic),
    OperationEntry::int(arith::AND, "and", OpClass::Arithmetic),
    OperationEntry::int(arith::XOR, "xor", OpClass::Arithmetic),
    OperationEntry::int(arith::ADD_I, "add_i", OpClass::Arithmetic),
    OperationEntry::int(arith::SUB_I, "sub_i", OpClass::Arithmetic),
    OperationEntry::int(arith::MULL_I, "mull_i", OpClass::Arithmetic),
    OperationEntry::int(arith::MULH_U, "mulh_u", OpClass::Arithmetic),
    OperationEntry::int(arith::ASHR, "ashr", OpClass::Arithmetic),
    OperationEntry::int(arith::SHR, "shr", OpClass::Arithmetic),
    OperationEntry::int(arith::SHL, "shl", OpClass::Arithmetic),
    OperationEntry::float(arith::ADD_F, "add_f", OpClass::Arithmetic),
    OperationEntry::float(arith::SUB_F, "sub_f", OpClass::Arithmetic),
    OperationEntry::float(arith::MUL_F, "mul_f", OpClass::Arithmetic),
    OperationEntry::int(arith::MULH_I, "mulh_i", OpClass::Arithmetic),
];

/// Single-source operations enumerated in every unary shape.
///
/// `ftoi`, `itof`, `sext_8` and `sext_16` only accept some shapes and are
/// generated from [`MISC_CASES`] instead.
pub const UNARY_OPS: [OperationEntry; 4] = [
    OperationEntry::int(arith::CLZ, "clz", OpClass::Unary),
    OperationEntry::int(arith::CTZ, "ctz", OpClass::Unary),
    OperationEntry::int(arith::MOVE, "move", OpClass::Unary),
    OperationEntry::float(arith::RECIPROCAL, "reciprocal", OpClass::Unary),
];

/// Operations generated only in the hand-picked forms of [`MISC_CASES`].
pub const MISC_OPS: [OperationEntry; 6] = [
    OperationEntry::int(arith::SHUFFLE, "shuffle", OpClass::Miscellaneous),
    OperationEntry::int(arith::GETLANE, "getlane", OpClass::Miscellaneous),
    OperationEntry::int(arith::SEXT_8, "sext_8", OpClass::Miscellaneous),
    OperationEntry::int(arith::SEXT_16, "sext_16", OpClass::Miscellaneous),
    OperationEntry::float(arith::ITOF, "itof", OpClass::Miscellaneous),
    OperationEntry::float(arith::FTOI, "ftoi", OpClass::Miscellaneous),
];

/// Comparisons; the result is always a scalar lane mask.
pub const COMPARE_OPS: [OperationEntry; 14] = [
    OperationEntry::int(arith::CMPEQ_I, "cmpeq_i", OpClass::Compare),
    OperationEntry::int(arith::CMPNE_I, "cmpne_i", OpClass::Compare),
    OperationEntry::int(arith::CMPGT_I, "cmpgt_i", OpClass::Compare),
    OperationEntry::int(arith::CMPGE_I, "cmpge_i", OpClass::Compare),
    OperationEntry::int(arith::CMPLT_I, "cmplt_i", OpClass::Compare),
    OperationEntry::int(arith::CMPLE_I, "cmple_i", OpClass::Compare),
    OperationEntry::int(arith::CMPGT_U, "cmpgt_u", OpClass::Compare),
    OperationEntry::int(arith::CMPGE_U, "cmpge_u", OpClass::Compare),
    OperationEntry::int(arith::CMPLT_U, "cmplt_u", OpClass::Compare),
    OperationEntry::int(arith::CMPLE_U, "cmple_u", OpClass::Compare),
    OperationEntry::float(arith::CMPGT_F, "cmpgt_f", OpClass::Compare),
    OperationEntry::float(arith::CMPGE_F, "cmpge_f", OpClass::Compare),
    OperationEntry::float(arith::CMPLT_F, "cmplt_f", OpClass::Compare),
    OperationEntry::float(arith::CMPLE_F, "cmple_f", OpClass::Compare),
];

/// Register shapes of binary operations, in generation order.
pub const BINARY_REGISTER_SHAPES: [OperandShape; 5] = [
    OperandShape::register(S, S, S, false),
    OperandShape::register(V, V, S, false),
    OperandShape::register(V, V, S, true),
    OperandShape::register(V, V, V, false),
    OperandShape::register(V, V, V, true),
];

/// Immediate shapes of binary operations, in generation order.
pub const BINARY_IMMEDIATE_SHAPES: [OperandShape; 3] = [
    OperandShape::immediate(S, S, false),
    OperandShape::immediate(V, V, false),
    OperandShape::immediate(V, V, true),
];

/// Shapes of unary operations, in generation order.
pub const UNARY_SHAPES: [OperandShape; 5] = [
    OperandShape::unary(S, S, false),
    OperandShape::unary(V, S, false),
    OperandShape::unary(V, S, true),
    OperandShape::unary(V, V, false),
    OperandShape::unary(V, V, true),
];

/// Register shapes of comparisons, in generation order.
pub const COMPARE_REGISTER_SHAPES: [OperandShape; 3] = [
    OperandShape::register(S, S, S, false),
    OperandShape::register(S, V, S, false),
    OperandShape::register(S, V, V, false),
];

/// Immediate shapes of comparisons, in generation order.
pub const COMPARE_IMMEDIATE_SHAPES: [OperandShape; 2] = [
    OperandShape::immediate(S, S, false),
    OperandShape::immediate(S, V, false),
];

/// One scalar load or store width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarMemoryEntry {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Memory operation code.
    pub op: u32,
    /// Load (true) or store (false).
    pub is_load: bool,
}

impl ScalarMemoryEntry {
    const fn new(mnemonic: &'static str, op: u32, is_load: bool) -> Self {
        Self {
            mnemonic,
            op,
            is_load,
        }
    }
}

/// Scalar loads and stores, including the synchronized variants.
pub const SCALAR_MEMORY_OPS: [ScalarMemoryEntry; 10] = [
    ScalarMemoryEntry::new("load_u8", mem::U8, true),
    ScalarMemoryEntry::new("load_s8", mem::S8, true),
    ScalarMemoryEntry::new("load_u16", mem::U16, true),
    ScalarMemoryEntry::new("load_s16", mem::S16, true),
    ScalarMemoryEntry::new("load_32", mem::WORD, true),
    ScalarMemoryEntry::new("load_sync", mem::SYNC, true),
    ScalarMemoryEntry::new("store_8", mem::S8, false),
    ScalarMemoryEntry::new("store_16", mem::S16, false),
    ScalarMemoryEntry::new("store_32", mem::WORD, false),
    ScalarMemoryEntry::new("store_sync", mem::SYNC, false),
];

/// One vector access mode, covering both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorMemoryEntry {
    /// Load mnemonic, without the `_mask` suffix.
    pub load: &'static str,
    /// Store mnemonic, without the `_mask` suffix.
    pub store: &'static str,
    /// Register file holding the address: one scalar base, or one address per lane.
    pub pointer: RegKind,
    /// Operation code of the unmasked form.
    pub op: u32,
    /// Operation code of the masked form.
    pub masked_op: u32,
}

impl VectorMemoryEntry {
    /// Operation code for the masked or unmasked form.
    pub const fn op_for(&self, masked: bool) -> u32 {
        if masked { self.masked_op } else { self.op }
    }
}

/// Block (contiguous) and gather/scatter vector accesses.
pub const VECTOR_MEMORY_OPS: [VectorMemoryEntry; 2] = [
    VectorMemoryEntry {
        load: "load_v",
        store: "store_v",
        pointer: S,
        op: mem::BLOCK,
        masked_op: mem::BLOCK_MASKED,
    },
    VectorMemoryEntry {
        load: "load_gath",
        store: "store_scat",
        pointer: V,
        op: mem::GATHER_SCATTER,
        masked_op: mem::GATHER_SCATTER_MASKED,
    },
];

/// Register operands of a cache-control instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheOperands {
    /// No operand (`membar`, `tlbinvalall`).
    None,
    /// One address register (C format).
    One(u32),
    /// Virtual and physical address registers (C' format).
    Two(u32, u32),
}

/// A cache-control instruction with its fixed operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheControlEntry {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Cache-control operation code.
    pub op: u32,
    /// Register operands.
    pub operands: CacheOperands,
}

impl CacheControlEntry {
    const fn new(mnemonic: &'static str, op: u32, operands: CacheOperands) -> Self {
        Self {
            mnemonic,
            op,
            operands,
        }
    }

    /// Packed instruction word.
    pub const fn word(&self) -> InstructionWord {
        match self.operands {
            CacheOperands::None => pack_c(self.op, 0),
            CacheOperands::One(reg) => pack_c(self.op, reg),
            CacheOperands::Two(reg, phys) => pack_c_prime(self.op, reg, phys),
        }
    }

    /// Assembly text.
    pub fn text(&self) -> String {
        match self.operands {
            CacheOperands::None => self.mnemonic.to_owned(),
            CacheOperands::One(reg) => format!("{} s{reg}", self.mnemonic),
            CacheOperands::Two(reg, phys) => format!("{} s{reg}, s{phys}", self.mnemonic),
        }
    }
}

/// Cache maintenance, barrier and TLB instructions.
pub const CACHE_CONTROL_OPS: [CacheControlEntry; 8] = [
    CacheControlEntry::new("dflush", ctl::DFLUSH, CacheOperands::One(7)),
    CacheControlEntry::new("membar", ctl::MEMBAR, CacheOperands::None),
    CacheControlEntry::new("dinvalidate", ctl::DINVALIDATE, CacheOperands::One(9)),
    CacheControlEntry::new("iinvalidate", ctl::IINVALIDATE, CacheOperands::One(11)),
    CacheControlEntry::new("tlbinval", ctl::TLBINVAL, CacheOperands::One(12)),
    CacheControlEntry::new("tlbinvalall", ctl::TLBINVALALL, CacheOperands::None),
    CacheControlEntry::new("dtlbinsert", ctl::DTLBINSERT, CacheOperands::Two(1, 2)),
    CacheControlEntry::new("itlbinsert", ctl::ITLBINSERT, CacheOperands::Two(3, 4)),
];

/// An instruction generated verbatim with a precomputed encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCase {
    /// Assembly text.
    pub text: &'static str,
    /// Expected instruction word.
    pub word: InstructionWord,
}

impl FixedCase {
    const fn new(text: &'static str, word: InstructionWord) -> Self {
        Self { text, word }
    }
}

/// Hand-picked forms of operations that do not take every shape.
///
/// The immediate `move` forms use the destination number as the source
/// field too; llvm-mc rejects any other source value there.
pub const MISC_CASES: [FixedCase; 15] = [
    FixedCase::new("move s1, 72", pack_im(0, arith::MOVE, 1, 1, 72)),
    FixedCase::new("move v1, 72", pack_im(1, arith::MOVE, 1, 1, 72)),
    FixedCase::new("shuffle v1, v2, v3", pack_r(4, arith::SHUFFLE, 1, 2, 3, 0)),
    FixedCase::new(
        "shuffle_mask v1, s4, v2, v3",
        pack_r(5, arith::SHUFFLE, 1, 2, 3, 4),
    ),
    FixedCase::new("getlane s4, v5, s6", pack_r(1, arith::GETLANE, 4, 5, 6, 0)),
    FixedCase::new("getlane s4, v5, 7", pack_im(1, arith::GETLANE, 4, 5, 7)),
    FixedCase::new("sext_8 s8, s9", pack_r(0, arith::SEXT_8, 8, 0, 9, 0)),
    FixedCase::new("sext_16 s8, s9", pack_r(0, arith::SEXT_16, 8, 0, 9, 0)),
    FixedCase::new("itof s8, s9", pack_r(0, arith::ITOF, 8, 0, 9, 0)),
    FixedCase::new("ftoi s8, s9", pack_r(0, arith::FTOI, 8, 0, 9, 0)),
    FixedCase::new("itof v8, v9", pack_r(4, arith::ITOF, 8, 0, 9, 0)),
    FixedCase::new("ftoi v8, v9", pack_r(4, arith::FTOI, 8, 0, 9, 0)),
    FixedCase::new("itof v8, s9", pack_r(1, arith::ITOF, 8, 0, 9, 0)),
    FixedCase::new("ftoi v8, s9", pack_r(1, arith::FTOI, 8, 0, 9, 0)),
    FixedCase::new("nop", pack_i(0, 0, 0, 0, 0, 0)),
];

/// Control register transfers; the pointer field holds the control register number.
pub const CONTROL_REGISTER_CASES: [FixedCase; 2] = [
    FixedCase::new("getcr s7, 9", pack_mm(true, mem::CONTROL_REG, 7, 9, 0)),
    FixedCase::new("setcr s11, 13", pack_mm(false, mem::CONTROL_REG, 11, 13, 0)),
];

/// Trap instructions with literal encodings.
pub const SPECIAL_CASES: [FixedCase; 2] = [
    FixedCase::new("break", 0xC3E0_0000),
    FixedCase::new("syscall", 0xC3F0_0000),
];

/// Finds an arithmetic-format operation by mnemonic.
pub fn lookup(mnemonic: &str) -> Option<&'static OperationEntry> {
    let tables: [&'static [OperationEntry]; 4] = [&BINARY_OPS, &UNARY_OPS, &MISC_OPS, &COMPARE_OPS];
    tables
        .into_iter()
        .flatten()
        .find(|entry| entry.mnemonic == mnemonic)
}
