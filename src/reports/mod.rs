// ===== introspect/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use introspect::i18n::{tr, Lang};
use introspect::model::{Classification, Thought};
use introspect::stats::treemap::{lightness, LayoutNode, LIGHT_MAX, LIGHT_MIN};
use introspect::stats::Bar;

fn nature_color(classification: Classification) -> Color {
    match classification {
        Classification::Good => Color::Green,
        Classification::Harmful => Color::Red,
        Classification::Unsure => Color::Yellow,
    }
}

pub fn print_list(rows: &[&Thought], lang: Lang, private: bool) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new(tr(lang, "label_created")),
        Cell::new(tr(lang, "subtitle_root_cause")),
        Cell::new(tr(lang, "subtitle_nature")),
        Cell::new(tr(lang, "label_recurrence")),
        Cell::new(tr(lang, "label_content")),
    ]);

    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for thought in rows {
        let content = if private {
            "•••".to_string()
        } else {
            thought.content.clone()
        };
        table.add_row(vec![
            Cell::new(thought.id).add_attribute(Attribute::Bold),
            Cell::new(thought.timestamp.format("%b %d %H:%M")),
            Cell::new(&thought.root_cause),
            Cell::new(thought.classification).fg(nature_color(thought.classification)),
            Cell::new(thought.score),
            Cell::new(content),
        ]);
    }
    println!("{}", table);
}

/// Discrete cell footprint of a leaf inside a `cols` x `rows` grid.
/// Half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl CellRect {
    pub fn cells(&self) -> usize {
        (self.x1 - self.x0) * (self.y1 - self.y0)
    }
}

fn scale(pct: f64, extent: usize) -> usize {
    let cell = (pct / 100.0 * extent as f64).round();
    (cell as usize).min(extent)
}

/// Map percent rects onto grid cells. Each percent edge rounds the same
/// way wherever it appears, so adjacent leaves land on a shared cell edge
/// and the grid tiles exactly like the continuous layout does.
pub fn cell_rects(nodes: &[LayoutNode], cols: usize, rows: usize) -> Vec<CellRect> {
    nodes
        .iter()
        .map(|n| CellRect {
            x0: scale(n.rect.x, cols),
            y0: scale(n.rect.y, rows),
            x1: scale(n.rect.x + n.rect.w, cols),
            y1: scale(n.rect.y + n.rect.h, rows),
        })
        .collect()
}

/// Shade character for a lightness value: heavier categories (darker)
/// get denser block characters.
pub fn shade_char(light: f64) -> char {
    let span = LIGHT_MAX - LIGHT_MIN;
    let norm = ((light - LIGHT_MIN) / span).clamp(0.0, 1.0);
    match norm {
        n if n < 0.25 => '█',
        n if n < 0.50 => '▓',
        n if n < 0.75 => '▒',
        _ => '░',
    }
}

/// Render the treemap as a character grid. Labels are stamped over the
/// shading when their rectangle is wide enough; the legend below the grid
/// carries the rest.
pub fn render_treemap(nodes: &[LayoutNode], cols: usize, rows: usize) -> String {
    let mut grid = vec![vec![' '; cols]; rows];
    let cells = cell_rects(nodes, cols, rows);
    let n = nodes.len();

    for (node, cr) in nodes.iter().zip(&cells) {
        let ch = shade_char(lightness(node.rank, n));
        for row in grid.iter_mut().take(cr.y1).skip(cr.y0) {
            for slot in row.iter_mut().take(cr.x1).skip(cr.x0) {
                *slot = ch;
            }
        }

        if cr.y1 > cr.y0 {
            let text = format!(" {} {}% ", node.item.label, node.percentage);
            let width = cr.x1 - cr.x0;
            let len = text.chars().count();
            if len <= width {
                let row = cr.y0 + (cr.y1 - cr.y0) / 2;
                let start = cr.x0 + (width - len) / 2;
                for (i, c) in text.chars().enumerate() {
                    grid[row][start + i] = c;
                }
            }
        }
    }

    let mut out = String::with_capacity((cols + 1) * rows);
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// One legend line per leaf, in layout order: shade swatch, label and the
/// exact count behind the area.
pub fn treemap_legend(nodes: &[LayoutNode]) -> String {
    let n = nodes.len();
    nodes
        .iter()
        .map(|node| {
            format!(
                "{} {}: {} ({}%)",
                shade_char(lightness(node.rank, n)),
                node.item.label,
                node.item.count,
                node.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Horizontal bars scaled to a fixed track width.
pub fn render_bars(bars: &[Bar], track: usize) -> String {
    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let filled = (bar.percentage as usize * track) / 100;
            let fill: String = "█".repeat(filled);
            format!(
                "{:<label_width$}  {:<track$}  {} ({}%)",
                bar.label, fill, bar.count, bar.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use introspect::stats::treemap::{layout, Rect};
    use introspect::stats::Tally;

    fn tally_of(pairs: &[(&str, u32)]) -> Tally {
        let mut counts = IndexMap::new();
        for (label, count) in pairs {
            counts.insert(label.to_string(), *count);
        }
        Tally::from_counts(counts)
    }

    #[test]
    fn test_cell_rects_tile_the_grid_exactly() {
        let tally = tally_of(&[("Needs", 6), ("Habits", 3), ("Unknown", 1)]);
        let nodes = layout(&tally, Rect::ROOT).unwrap();
        let (cols, rows) = (64, 16);
        let cells = cell_rects(&nodes, cols, rows);

        // Discrete analog of the tiling invariant: every grid cell claimed
        // exactly once.
        let mut owners = vec![0u8; cols * rows];
        for cr in &cells {
            for y in cr.y0..cr.y1 {
                for x in cr.x0..cr.x1 {
                    owners[y * cols + x] += 1;
                }
            }
        }
        assert!(owners.iter().all(|&c| c == 1));
        assert_eq!(cells.iter().map(CellRect::cells).sum::<usize>(), cols * rows);
    }

    #[test]
    fn test_render_has_no_blank_cells() {
        // Labels cannot fit a 10-wide grid, so every cell must be a shade
        // character.
        let tally = tally_of(&[("Alpha", 5), ("Bravo", 3), ("Charlie", 2), ("Delta", 1)]);
        let nodes = layout(&tally, Rect::ROOT).unwrap();
        let rendered = render_treemap(&nodes, 10, 6);
        for line in rendered.lines() {
            assert_eq!(line.chars().count(), 10);
            assert!(!line.contains(' '), "unclaimed cells in {:?}", line);
        }
    }

    #[test]
    fn test_shade_orders_by_rank() {
        // Rank 0 of many must be the densest block.
        assert_eq!(shade_char(lightness(0, 8)), '█');
        assert_eq!(shade_char(lightness(7, 8)), '░');
    }

    #[test]
    fn test_bars_track_scaling() {
        let bars = vec![
            Bar { label: "Good".to_string(), count: 5, percentage: 50 },
            Bar { label: "Harmful".to_string(), count: 3, percentage: 30 },
        ];
        let out = render_bars(&bars, 20);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].matches('█').count(), 10);
        assert_eq!(lines[1].matches('█').count(), 6);
        assert!(lines[0].contains("5 (50%)"));
    }
}
