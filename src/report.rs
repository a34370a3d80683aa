//! Per-year move counts and their summary lines.

use std::collections::BTreeMap;
use std::fmt;

/// Counts of moved documents per destination year (ascending by year).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationReport {
    counts: BTreeMap<String, usize>,
}

impl DestinationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, year: &str) {
        *self.counts.entry(year.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, year: &str) -> usize {
        self.counts.get(year).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// One `Moved N file(s) to <year>` line per year.
    pub fn lines(&self) -> Vec<String> {
        self.counts
            .iter()
            .map(|(year, &count)| {
                format!(
                    "Moved {count} file{} to {year}",
                    if count > 1 { "s" } else { "" }
                )
            })
            .collect()
    }
}

impl fmt::Display for DestinationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
