//! Nyuzi Arithmetic Opcodes.
//!
//! The R format carries a 6-bit opcode; the immediate formats carry 5 bits,
//! so only opcodes below 0x20 have immediate forms. Floating-point operations
//! all live at 0x20 and above.

/// Bitwise OR.
pub const OR: u32 = 0x00;
/// Bitwise AND.
pub const AND: u32 = 0x01;
/// Bitwise exclusive OR.
pub const XOR: u32 = 0x03;
/// Integer addition.
pub const ADD_I: u32 = 0x05;
/// Integer subtraction.
pub const SUB_I: u32 = 0x06;
/// Integer multiply, low 32 bits of the product.
pub const MULL_I: u32 = 0x07;
/// Unsigned multiply, high 32 bits of the product.
pub const MULH_U: u32 = 0x08;
/// Arithmetic shift right.
pub const ASHR: u32 = 0x09;
/// Logical shift right.
pub const SHR: u32 = 0x0A;
/// Shift left.
pub const SHL: u32 = 0x0B;
/// Count leading zeroes.
pub const CLZ: u32 = 0x0C;
/// Vector lane shuffle.
pub const SHUFFLE: u32 = 0x0D;
/// Count trailing zeroes.
pub const CTZ: u32 = 0x0E;
/// Register or immediate move.
pub const MOVE: u32 = 0x0F;

/// Compare equal.
pub const CMPEQ_I: u32 = 0x10;
/// Compare not equal.
pub const CMPNE_I: u32 = 0x11;
/// Signed greater than.
pub const CMPGT_I: u32 = 0x12;
/// Signed greater than or equal.
pub const CMPGE_I: u32 = 0x13;
/// Signed less than.
pub const CMPLT_I: u32 = 0x14;
/// Signed less than or equal.
pub const CMPLE_I: u32 = 0x15;
/// Unsigned greater than.
pub const CMPGT_U: u32 = 0x16;
/// Unsigned greater than or equal.
pub const CMPGE_U: u32 = 0x17;
/// Unsigned less than.
pub const CMPLT_U: u32 = 0x18;
/// Unsigned less than or equal.
pub const CMPLE_U: u32 = 0x19;

/// Extract one vector lane into a scalar.
pub const GETLANE: u32 = 0x1A;
/// Float to integer conversion.
pub const FTOI: u32 = 0x1B;
/// Reciprocal estimate.
pub const RECIPROCAL: u32 = 0x1C;
/// Sign-extend from 8 bits.
pub const SEXT_8: u32 = 0x1D;
/// Sign-extend from 16 bits.
pub const SEXT_16: u32 = 0x1E;
/// Signed multiply, high 32 bits of the product.
pub const MULH_I: u32 = 0x1F;

/// Floating-point addition.
pub const ADD_F: u32 = 0x20;
/// Floating-point subtraction.
pub const SUB_F: u32 = 0x21;
/// Floating-point multiplication.
pub const MUL_F: u32 = 0x22;
/// Integer to float conversion.
pub const ITOF: u32 = 0x2A;

/// Floating-point greater than.
pub const CMPGT_F: u32 = 0x2C;
/// Floating-point greater than or equal.
pub const CMPGE_F: u32 = 0x2D;
/// Floating-point less than.
pub const CMPLT_F: u32 = 0x2E;
/// Floating-point less than or equal.
pub const CMPLE_F: u32 = 0x2F;

/// Debugger breakpoint trap (R format, fmt 0).
pub const BREAK: u32 = 0x3E;
/// System call trap (R format, fmt 0).
pub const SYSCALL: u32 = 0x3F;
