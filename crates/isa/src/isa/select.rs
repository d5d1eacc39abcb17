//! Nyuzi Format Selector.
//!
//! Maps an operation and an operand shape onto one instruction format plus
//! the small fmt code that tells the hardware which operands are scalar,
//! which are vector and whether a lane mask applies. The fmt code is a closed
//! enumeration with an explicit table per format, not a composed bitmask:
//! the register and immediate formats number the same combinations
//! differently.
//!
//! Requesting a shape an operation cannot take (an immediate form of a
//! floating-point operation, a masked scalar operation) is a programming
//! error and panics.

use std::fmt;

use crate::isa::catalog::OperationEntry;
use crate::isa::encode::{pack_i, pack_im, pack_m, pack_mm, pack_r};
use crate::isa::format::Format;
use crate::isa::instruction::InstructionWord;

/// Register file an operand is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegKind {
    /// Scalar register (`s0`-`s31`).
    Scalar,
    /// Vector register (`v0`-`v31`).
    Vector,
}

impl RegKind {
    /// Assembly prefix of a register in this file.
    pub const fn prefix(self) -> char {
        match self {
            Self::Scalar => 's',
            Self::Vector => 'v',
        }
    }

    /// Returns true for vector registers.
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Vector)
    }
}

impl fmt::Display for RegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Scalar/vector/mask combination of an arithmetic instruction.
///
/// Variant names describe the destination lanes and the kind of the second
/// operand: `VectorMaskedFromScalar` is a masked vector operation whose second
/// operand is a scalar register or an immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FmtCode {
    /// All operands scalar.
    ScalarUnmasked,
    /// Vector operation, scalar second operand.
    VectorUnmaskedFromScalar,
    /// Masked vector operation, scalar second operand.
    VectorMaskedFromScalar,
    /// Vector operation, vector second operand.
    VectorUnmaskedFromVector,
    /// Masked vector operation, vector second operand.
    VectorMaskedFromVector,
}

impl FmtCode {
    /// Every fmt code in register-format numbering order.
    pub const ALL: [Self; 5] = [
        Self::ScalarUnmasked,
        Self::VectorUnmaskedFromScalar,
        Self::VectorMaskedFromScalar,
        Self::VectorUnmaskedFromVector,
        Self::VectorMaskedFromVector,
    ];

    /// Numeric code in the R format (bits 26-28).
    pub const fn register_code(self) -> u32 {
        match self {
            Self::ScalarUnmasked => 0,
            Self::VectorUnmaskedFromScalar => 1,
            Self::VectorMaskedFromScalar => 2,
            Self::VectorUnmaskedFromVector => 4,
            Self::VectorMaskedFromVector => 5,
        }
    }

    /// Numeric code in the immediate formats (bits 29-31).
    ///
    /// An immediate is a scalar value, so only the `FromScalar` combinations
    /// (and the all-scalar one) have an immediate encoding.
    pub const fn immediate_code(self) -> Option<u32> {
        match self {
            Self::ScalarUnmasked => Some(0),
            Self::VectorUnmaskedFromScalar => Some(1),
            Self::VectorMaskedFromScalar => Some(3),
            Self::VectorUnmaskedFromVector | Self::VectorMaskedFromVector => None,
        }
    }

    /// Returns true if the combination consumes a lane mask register.
    pub const fn is_masked(self) -> bool {
        matches!(
            self,
            Self::VectorMaskedFromScalar | Self::VectorMaskedFromVector
        )
    }
}

/// Kind of the second operand of an arithmetic instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Src2 {
    /// A register operand.
    Register(RegKind),
    /// An immediate operand.
    Immediate,
}

/// Operand shape of an arithmetic instruction.
///
/// `src1` is `None` for unary operations, whose only source travels in the
/// second source field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OperandShape {
    /// Destination register kind.
    pub dest: RegKind,
    /// First source register kind, absent for unary operations.
    pub src1: Option<RegKind>,
    /// Second source operand.
    pub src2: Src2,
    /// Whether a lane mask register is consumed.
    pub masked: bool,
}

impl OperandShape {
    /// Shape of a binary or compare register-register form.
    pub const fn register(dest: RegKind, src1: RegKind, src2: RegKind, masked: bool) -> Self {
        Self {
            dest,
            src1: Some(src1),
            src2: Src2::Register(src2),
            masked,
        }
    }

    /// Shape of a binary or compare register-immediate form.
    pub const fn immediate(dest: RegKind, src1: RegKind, masked: bool) -> Self {
        Self {
            dest,
            src1: Some(src1),
            src2: Src2::Immediate,
            masked,
        }
    }

    /// Shape of a unary form.
    pub const fn unary(dest: RegKind, src: RegKind, masked: bool) -> Self {
        Self {
            dest,
            src1: None,
            src2: Src2::Register(src),
            masked,
        }
    }

    /// Returns true if the second operand is an immediate.
    pub const fn is_immediate(&self) -> bool {
        matches!(self.src2, Src2::Immediate)
    }

    /// Returns true if any operand lives in the vector file.
    pub const fn is_vector(&self) -> bool {
        let src1_vector = match self.src1 {
            Some(kind) => kind.is_vector(),
            None => false,
        };
        let src2_vector = match self.src2 {
            Src2::Register(kind) => kind.is_vector(),
            Src2::Immediate => false,
        };
        self.dest.is_vector() || src1_vector || src2_vector
    }

    /// Classifies the shape into its fmt code, or `None` for a masked scalar shape.
    pub const fn fmt_code(&self) -> Option<FmtCode> {
        let src2_vector = matches!(self.src2, Src2::Register(RegKind::Vector));
        match (self.is_vector(), src2_vector, self.masked) {
            (false, _, false) => Some(FmtCode::ScalarUnmasked),
            (false, _, true) => None,
            (true, false, false) => Some(FmtCode::VectorUnmaskedFromScalar),
            (true, false, true) => Some(FmtCode::VectorMaskedFromScalar),
            (true, true, false) => Some(FmtCode::VectorUnmaskedFromVector),
            (true, true, true) => Some(FmtCode::VectorMaskedFromVector),
        }
    }
}

/// Value of the second operand when packing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand2 {
    /// Register number.
    Reg(u32),
    /// Immediate value, truncated to the chosen format's width.
    Imm(i32),
}

/// Format and fmt code chosen for an arithmetic instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatChoice {
    /// Register-register (R) format.
    Register(FmtCode),
    /// Masked immediate (I) format, 9-bit signed immediate.
    MaskedImmediate(FmtCode),
    /// Unmasked immediate (IM) format, 14-bit immediate.
    Immediate(FmtCode),
}

impl FormatChoice {
    /// Instruction format of the choice.
    pub const fn format(self) -> Format {
        match self {
            Self::Register(_) => Format::R,
            Self::MaskedImmediate(_) => Format::I,
            Self::Immediate(_) => Format::Im,
        }
    }

    /// Scalar/vector/mask combination of the choice.
    pub const fn fmt_code(self) -> FmtCode {
        match self {
            Self::Register(code) | Self::MaskedImmediate(code) | Self::Immediate(code) => code,
        }
    }

    /// Numeric fmt value written into the word for this format.
    ///
    /// # Panics
    ///
    /// Panics if an immediate choice carries a `FromVector` code; [`select`]
    /// never builds one.
    pub fn code(self) -> u32 {
        match self {
            Self::Register(code) => code.register_code(),
            Self::MaskedImmediate(code) | Self::Immediate(code) => match code.immediate_code() {
                Some(value) => value,
                None => panic!("{code:?} has no immediate encoding"),
            },
        }
    }

    /// Packs an instruction word in the chosen format.
    ///
    /// `mask` is ignored by the unmasked formats.
    ///
    /// # Panics
    ///
    /// Panics if `operand2` does not match the format (an immediate for R, a
    /// register for I or IM).
    pub fn pack(
        self,
        opcode: u32,
        dest: u32,
        src1: u32,
        operand2: Operand2,
        mask: u32,
    ) -> InstructionWord {
        let fmt = self.code();
        match (self, operand2) {
            (Self::Register(_), Operand2::Reg(src2)) => pack_r(fmt, opcode, dest, src1, src2, mask),
            (Self::MaskedImmediate(_), Operand2::Imm(imm)) => {
                pack_i(fmt, opcode, dest, src1, imm, mask)
            }
            (Self::Immediate(_), Operand2::Imm(imm)) => pack_im(fmt, opcode, dest, src1, imm),
            (choice, operand) => {
                panic!("operand {operand:?} does not fit the {} format", choice.format())
            }
        }
    }
}

/// Picks the format and fmt code for an arithmetic, unary or compare operation.
///
/// # Panics
///
/// Panics on a contract violation: the operation is not an arithmetic-format
/// class, the shape requests an immediate the operation cannot take
/// (floating-point operations, opcodes above the 5-bit immediate opcode
/// field), an immediate combined with a vector second operand, or a masked
/// all-scalar shape.
pub fn select(op: &OperationEntry, shape: &OperandShape) -> FormatChoice {
    assert!(
        op.class.uses_arithmetic_formats(),
        "{} ({}) is not encoded in an arithmetic format",
        op.mnemonic,
        op.class
    );

    let Some(code) = shape.fmt_code() else {
        panic!("{}: masked scalar shapes have no encoding", op.mnemonic);
    };

    if !shape.is_immediate() {
        return FormatChoice::Register(code);
    }

    assert!(
        op.supports_immediate(),
        "{} has no immediate form",
        op.mnemonic
    );
    assert!(
        code.immediate_code().is_some(),
        "{}: {code:?} has no immediate encoding",
        op.mnemonic
    );

    if shape.masked {
        FormatChoice::MaskedImmediate(code)
    } else {
        FormatChoice::Immediate(code)
    }
}

/// Picks the memory format: M when a lane mask applies, MM otherwise.
pub const fn memory_format(masked: bool) -> Format {
    if masked { Format::M } else { Format::Mm }
}

/// Packs a memory access in the format [`memory_format`] picks.
///
/// `mask` is ignored for unmasked accesses.
pub const fn pack_memory(
    masked: bool,
    is_load: bool,
    op: u32,
    src_dest: u32,
    ptr: u32,
    offset: u32,
    mask: u32,
) -> InstructionWord {
    match memory_format(masked) {
        Format::M => pack_m(is_load, op, src_dest, ptr, offset, mask),
        _ => pack_mm(is_load, op, src_dest, ptr, offset),
    }
}

