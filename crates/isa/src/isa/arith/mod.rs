//! Nyuzi Arithmetic Instruction Set.
//!
//! Integer, floating-point, unary and comparison operations encoded in the
//! register (R) and immediate (I, IM) formats.
//!
//! # Structure
//!
//! - `opcodes`: Numeric opcodes shared by the register and immediate forms.

/// Arithmetic, unary and comparison opcodes.
pub mod opcodes;
