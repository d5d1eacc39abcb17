//! Register Cursor.
//!
//! This module provides the `RegisterCursor`, the generator's source of
//! register numbers. It provides:
//! 1. **Cycling Allocation:** Consecutive allocations return distinct registers until the window wraps.
//! 2. **Bounded Window:** Only registers 0-27 are handed out.
//! 3. **Explicit Reset:** Each class sweep starts from the same position, so output is reproducible.

use crate::common::constants::MAX_ALLOCATED_REG;

/// Cycling register number allocator.
///
/// Each allocation advances the cursor and returns the new position, wrapping
/// from 27 back to 0, so the sequence after a reset is `1, 2, ..., 27, 0, 1, ...`
/// with period 28.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterCursor {
    current: u32,
}

impl RegisterCursor {
    /// Creates a cursor positioned at register 0.
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// Advances the cursor and returns the next register number.
    pub const fn allocate(&mut self) -> u32 {
        self.current = if self.current >= MAX_ALLOCATED_REG {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Allocates `N` registers in order.
    pub fn allocate_n<const N: usize>(&mut self) -> [u32; N] {
        std::array::from_fn(|_| self.allocate())
    }

    /// Moves the cursor back to register 0.
    pub const fn reset(&mut self) {
        self.current = 0;
    }

    /// Returns the most recently allocated register (0 after a reset).
    pub const fn current(&self) -> u32 {
        self.current
    }
}
