//! Treemap layout: recursive proportional-area binary partition.
//!
//! Categories are sorted heaviest-first, then the list is repeatedly cut in
//! two groups of roughly equal weight, each group taking a strip of the
//! current rectangle proportional to its weight share. Every cut runs along
//! the longer side of the rectangle, which keeps leaves closer to square
//! than a fixed-axis split would (no squarification guarantee).

use super::{percent_of, Tally};
use crate::{IntroResult, IntrospectError};
use std::cmp::Ordering;
use tracing::debug;

/// An axis-aligned rectangle in percent units of the containing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// The full 100x100 percent area handed to the root call.
    pub const ROOT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 100.0,
        h: 100.0,
    };

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Vertical cut: left strip of `ratio * w`, right strip the rest.
    fn cut_left(&self, ratio: f64) -> (Rect, Rect) {
        let split_w = self.w * ratio;
        (
            Rect { x: self.x, y: self.y, w: split_w, h: self.h },
            Rect { x: self.x + split_w, y: self.y, w: self.w - split_w, h: self.h },
        )
    }

    /// Horizontal cut: top strip of `ratio * h`, bottom strip the rest.
    fn cut_top(&self, ratio: f64) -> (Rect, Rect) {
        let split_h = self.h * ratio;
        (
            Rect { x: self.x, y: self.y, w: self.w, h: split_h },
            Rect { x: self.x, y: self.y + split_h, w: self.w, h: self.h - split_h },
        )
    }
}

/// A category with the weight driving its area share.
///
/// Weight equals the occurrence count today; it stays a separate field so a
/// non-count weighting can slot in without touching the recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    pub label: String,
    pub count: u32,
    pub weight: f64,
}

/// A leaf of the layout recursion, emitted in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub item: WeightedItem,
    pub rect: Rect,
    /// Position in the weight-sorted order; drives the lightness ramp.
    pub rank: usize,
    pub percentage: u32,
}

/// Lightness bounds of the rank ramp (HSL percent). Rank 0 (heaviest)
/// renders darkest.
pub const LIGHT_MIN: f64 = 15.0;
pub const LIGHT_MAX: f64 = 50.0;

/// Linear lightness for a leaf's rank among `n` categories.
pub fn lightness(rank: usize, n: usize) -> f64 {
    let step = (LIGHT_MAX - LIGHT_MIN) / n.max(1) as f64;
    LIGHT_MIN + rank as f64 * step
}

/// Lay out a tally inside `rect`.
///
/// An empty tally is a no-op, not an error. Weights must be positive; a
/// zero or negative weight is a caller bug and is rejected rather than
/// silently skewing the layout.
pub fn layout(tally: &Tally, rect: Rect) -> IntroResult<Vec<LayoutNode>> {
    if tally.counts.is_empty() {
        return Ok(Vec::new());
    }
    if tally.total == 0 {
        return Err(IntrospectError::ZeroTotal);
    }

    let mut items: Vec<WeightedItem> = tally
        .counts
        .iter()
        .map(|(label, &count)| WeightedItem {
            label: label.clone(),
            count,
            weight: f64::from(count),
        })
        .collect();

    for item in &items {
        if item.weight <= 0.0 {
            return Err(IntrospectError::InvalidWeight {
                label: item.label.clone(),
                weight: item.weight,
            });
        }
    }

    // Single descending sort before recursion; the stable sort keeps
    // insertion order for equal weights.
    items.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));

    debug!("treemap: laying out {} categories", items.len());

    let mut nodes = Vec::with_capacity(items.len());
    partition(&items, rect, 0, tally.total, &mut nodes)?;
    Ok(nodes)
}

/// Recursive binary partition. Each call strictly shrinks the item slice,
/// so the recursion bottoms out after at most `n - 1` cuts.
fn partition(
    items: &[WeightedItem],
    rect: Rect,
    first_rank: usize,
    grand_total: u32,
    out: &mut Vec<LayoutNode>,
) -> IntroResult<()> {
    if items.is_empty() {
        return Ok(());
    }
    if items.len() == 1 {
        out.push(LayoutNode {
            item: items[0].clone(),
            rect,
            rank: first_rank,
            percentage: percent_of(items[0].count, grand_total)?,
        });
        return Ok(());
    }

    let total: f64 = items.iter().map(|i| i.weight).sum();

    // Smallest prefix whose weight reaches half the total.
    let mut acc = 0.0;
    let mut split = items.len();
    for (i, item) in items.iter().enumerate() {
        acc += item.weight;
        if acc >= total / 2.0 {
            split = i + 1;
            break;
        }
    }
    // Both groups must stay non-empty, even when one item alone crosses
    // the halfway mark or rounding pushes the split past the end.
    let split = split.clamp(1, items.len() - 1);

    let (group_a, group_b) = items.split_at(split);
    let ratio_a = group_a.iter().map(|i| i.weight).sum::<f64>() / total;

    // Cut along the longer side; a square counts as the taller branch.
    let (rect_a, rect_b) = if rect.w > rect.h {
        rect.cut_left(ratio_a)
    } else {
        rect.cut_top(ratio_a)
    };

    partition(group_a, rect_a, first_rank, grand_total, out)?;
    partition(group_b, rect_b, first_rank + split, grand_total, out)
}
