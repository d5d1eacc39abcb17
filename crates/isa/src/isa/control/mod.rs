//! Nyuzi Cache and TLB Control.
//!
//! Cache maintenance, barriers and TLB management encoded in the
//! cache-control formats (C and C'), all sharing the `0xE0000000` prefix.

/// Cache-control operation codes.
pub mod opcodes;
