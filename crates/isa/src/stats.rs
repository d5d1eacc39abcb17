//! Generation statistics.
//!
//! Counts the records a pass produced per operation class, for the summary
//! the driver logs after writing the corpora.

use std::collections::BTreeMap;
use std::fmt;

use crate::isa::catalog::OpClass;

/// Record counts of one generation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    per_class: BTreeMap<OpClass, usize>,
}

impl GenerationStats {
    /// Adds `count` records to `class`.
    pub fn record(&mut self, class: OpClass, count: usize) {
        *self.per_class.entry(class).or_insert(0) += count;
    }

    /// Records produced for `class`.
    pub fn count(&self, class: OpClass) -> usize {
        self.per_class.get(&class).copied().unwrap_or(0)
    }

    /// Records produced across all classes.
    pub fn total(&self) -> usize {
        self.per_class.values().sum()
    }

    /// Per-class counts in generation order.
    pub fn per_class(&self) -> impl Iterator<Item = (OpClass, usize)> + '_ {
        self.per_class.iter().map(|(class, count)| (*class, *count))
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GENERATION SUMMARY")?;
        for (class, count) in self.per_class() {
            writeln!(f, "  {:<18} {count:>5}", class.name())?;
        }
        write!(f, "  {:<18} {:>5}", "total", self.total())
    }
}
