//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Nyuzi instruction word formats, the field packer, the format
//! selector and the opcode catalog, organized by instruction group.
//!
//! # Groups
//!
//! * `arith`: Register and immediate arithmetic, unary and comparison opcodes.
//! * `memory`: Scalar, block vector and gather/scatter load/store operations.
//! * `control`: Cache maintenance, barrier and TLB operations.

/// Arithmetic, unary and comparison opcodes.
pub mod arith;

/// Operation tables grouped by class, with the operand shapes each class takes.
pub mod catalog;

/// Cache-control operation codes.
pub mod control;

/// Field packing primitives, one per instruction format.
pub mod encode;

/// Instruction formats and their bit-field layouts.
pub mod format;

/// Field layout constants and bit extraction utilities.
pub mod instruction;

/// Load/store operation codes.
pub mod memory;

/// Operand shape to format and fmt code selection.
pub mod select;
