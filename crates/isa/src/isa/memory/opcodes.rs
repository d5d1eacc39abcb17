//! Nyuzi Memory Operation Codes.

/// Unsigned byte load.
pub const U8: u32 = 0;
/// Sign-extending byte load, byte store.
pub const S8: u32 = 1;
/// Unsigned half-word load.
pub const U16: u32 = 2;
/// Sign-extending half-word load, half-word store.
pub const S16: u32 = 3;
/// Word access.
pub const WORD: u32 = 4;
/// Synchronized (load-linked / store-conditional) word access.
pub const SYNC: u32 = 5;
/// Control register transfer (`getcr` / `setcr`).
pub const CONTROL_REG: u32 = 6;
/// Contiguous block vector access.
pub const BLOCK: u32 = 7;
/// Contiguous block vector access under a lane mask.
pub const BLOCK_MASKED: u32 = 8;
/// Gather load / scatter store.
pub const GATHER_SCATTER: u32 = 13;
/// Gather load / scatter store under a lane mask.
pub const GATHER_SCATTER_MASKED: u32 = 14;
