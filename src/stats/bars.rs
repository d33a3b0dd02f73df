//! Bar chart aggregation: a single sort-and-scale pass, no geometry.

use super::{percent_of, Tally};
use crate::{IntroResult, IntrospectError};

/// One bar in draw order. `percentage` is the bar's target width as a
/// percent of the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
    pub percentage: u32,
}

/// Scale a tally into bars, heaviest first.
///
/// Ties sort lexicographically by label so the draw order is
/// deterministic. Percentages are rounded independently, so their sum can
/// drift from 100 by up to `n - 1`; that drift is expected and left
/// uncorrected.
pub fn bars(tally: &Tally) -> IntroResult<Vec<Bar>> {
    if tally.counts.is_empty() {
        return Ok(Vec::new());
    }
    if tally.total == 0 {
        return Err(IntrospectError::ZeroTotal);
    }

    let mut entries: Vec<(&String, u32)> = tally
        .counts
        .iter()
        .map(|(label, &count)| (label, count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    entries
        .into_iter()
        .map(|(label, count)| {
            Ok(Bar {
                label: label.clone(),
                count,
                percentage: percent_of(count, tally.total)?,
            })
        })
        .collect()
}
