//! Nyuzi Cache-Control Operation Codes.

/// Insert a data TLB entry (C' format).
pub const DTLBINSERT: u32 = 0;
/// Invalidate a data cache line.
pub const DINVALIDATE: u32 = 1;
/// Write back a data cache line.
pub const DFLUSH: u32 = 2;
/// Invalidate an instruction cache line.
pub const IINVALIDATE: u32 = 3;
/// Memory barrier.
pub const MEMBAR: u32 = 4;
/// Invalidate the TLB entry for one virtual address.
pub const TLBINVAL: u32 = 5;
/// Invalidate every TLB entry.
pub const TLBINVALALL: u32 = 6;
/// Insert an instruction TLB entry (C' format).
pub const ITLBINSERT: u32 = 7;
