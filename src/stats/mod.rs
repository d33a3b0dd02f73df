pub mod bars;
pub mod treemap;

use crate::{IntroResult, IntrospectError};
use indexmap::IndexMap;

pub use bars::{bars, Bar};
pub use treemap::{layout, LayoutNode, Rect, WeightedItem};

/// An insertion-ordered `label -> count` mapping plus its total.
///
/// Rebuilt fresh on every stats render; never persisted. The mapping order
/// is first-encounter order over the record set, which is what breaks
/// weight ties downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub counts: IndexMap<String, u32>,
    pub total: u32,
}

impl Tally {
    pub fn from_counts(counts: IndexMap<String, u32>) -> Self {
        let total = counts.values().sum();
        Self { counts, total }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Group items by a derived label, counting occurrences.
///
/// The total is tracked alongside the mapping; both describe the same pass
/// over the records, so they must agree.
pub fn tally_by<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Tally
where
    F: Fn(&T) -> String,
{
    let mut counts: IndexMap<String, u32> = IndexMap::new();
    let mut total = 0u32;
    for item in items {
        *counts.entry(key(&item)).or_insert(0) += 1;
        total += 1;
    }
    debug_assert_eq!(total, counts.values().sum::<u32>());
    Tally { counts, total }
}

/// Integer percentage `round(100 * count / total)`.
///
/// A zero total is rejected before any division happens; callers are
/// expected to never reach this with an empty record set, and this guard
/// verifies that contract instead of emitting NaN downstream.
pub fn percent_of(count: u32, total: u32) -> IntroResult<u32> {
    if total == 0 {
        return Err(IntrospectError::ZeroTotal);
    }
    Ok(((100.0 * f64::from(count)) / f64::from(total)).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_preserves_encounter_order() {
        let tally = tally_by(["b", "a", "b", "c", "a", "b"], |s| s.to_string());
        let labels: Vec<&String> = tally.counts.keys().collect();
        assert_eq!(labels, ["b", "a", "c"]);
        assert_eq!(tally.counts["b"], 3);
        assert_eq!(tally.total, 6);
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent_of(1, 3).unwrap(), 33);
        assert_eq!(percent_of(2, 3).unwrap(), 67);
        assert_eq!(percent_of(1, 2).unwrap(), 50);
        assert_eq!(percent_of(10, 10).unwrap(), 100);
    }

    #[test]
    fn test_percent_zero_total_rejected() {
        assert!(matches!(
            percent_of(1, 0),
            Err(crate::IntrospectError::ZeroTotal)
        ));
    }
}
