//! Immediate value sources.
//!
//! The generator draws every immediate and memory offset from an
//! [`ImmediateSource`], so a corpus is fully determined by the source it was
//! generated with. Two sources are provided: a seeded xorshift generator and
//! an explicit value table.

/// Supplies immediate operand values to the generator.
pub trait ImmediateSource {
    /// Returns a value in the inclusive range `lo..=hi`.
    fn next_in(&mut self, lo: i32, hi: i32) -> i32;
}

impl<T: ImmediateSource + ?Sized> ImmediateSource for Box<T> {
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        (**self).next_in(lo, hi)
    }
}

/// Replacement state for a zero seed; xorshift never leaves the all-zero state.
const ZERO_SEED_STATE: u64 = 123_456_789;

/// Deterministic xorshift64 immediate generator.
///
/// The same seed always yields the same sequence.
#[derive(Clone, Debug)]
pub struct SeededImmediates {
    state: u64,
}

impl SeededImmediates {
    /// Creates a generator from `seed`. A zero seed is replaced by a fixed non-zero state.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl ImmediateSource for SeededImmediates {
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi, "empty immediate range {lo}..={hi}");
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        let offset = self.next_u64() % span;
        (i64::from(lo) + offset as i64) as i32
    }
}

/// Cycles through an explicit table of values.
///
/// Each value is clamped into the requested range; an empty table always
/// yields the low end of the range.
#[derive(Clone, Debug, Default)]
pub struct FixedImmediates {
    values: Vec<i32>,
    position: usize,
}

impl FixedImmediates {
    /// Creates a source that replays `values` in order, wrapping at the end.
    pub const fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl ImmediateSource for FixedImmediates {
    fn next_in(&mut self, lo: i32, hi: i32) -> i32 {
        if self.values.is_empty() {
            return lo;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = self.position.wrapping_add(1);
        value.clamp(lo, hi)
    }
}
