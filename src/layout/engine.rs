//! Tiered roadmap layout.
//!
//! Positions depend only on the outline's shape (how many sections each
//! chapter has, how many subsections each section has) and the config, so
//! the same input always lands on the same coordinates.
//!
//! Geometry, top to bottom:
//!   root         (center_x, root_y)
//!   chapter k    (center_x, y_k)
//!   sections     rows of `sections_per_row`, each row centred on center_x
//!   subsections  stacked under their section, same column
//!
//! Arithmetic saturates instead of overflowing; `LayoutConfig::validate`
//! keeps real configurations far from the limits.
//!
//! `y_{k+1}` clears chapter k's deepest subsection column:
//!   y_{k+1} = y_k + section_offset + rows·row_height
//!           + max_subsections·subsection_spacing + chapter_gap

use super::types::Point;
use crate::config::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlacement {
    pub position: Point,
    pub subsections: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPlacement {
    pub position: Point,
    pub sections: Vec<SectionPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub root: Point,
    pub chapters: Vec<ChapterPlacement>,
    /// First free y below the last chapter block.
    pub bottom: i64,
}

/// Lay out a roadmap of the given shape.
///
/// `shape[k][i]` is the number of subsections under section `i` of
/// chapter `k`, both already in display order.
pub fn place(shape: &[Vec<usize>], config: &LayoutConfig) -> Placement {
    let mut y = config.first_chapter_y;
    let chapters = shape
        .iter()
        .map(|sections| {
            let chapter = place_chapter(y, sections, config);
            y = y.saturating_add(chapter_height(sections, config));
            chapter
        })
        .collect();

    Placement {
        root: Point::new(config.center_x, config.root_y),
        chapters,
        bottom: y,
    }
}

/// Vertical space from one chapter node to the next.
pub fn chapter_height(sections: &[usize], config: &LayoutConfig) -> i64 {
    let rows = sections.len().div_ceil(per_row(config)) as i64;
    let deepest = sections.iter().copied().max().unwrap_or(0) as i64;
    config
        .section_offset
        .saturating_add(rows.saturating_mul(config.row_height))
        .saturating_add(deepest.saturating_mul(config.subsection_spacing))
        .saturating_add(config.chapter_gap)
}

fn per_row(config: &LayoutConfig) -> usize {
    config.sections_per_row.max(1)
}

fn place_chapter(y: i64, sections: &[usize], config: &LayoutConfig) -> ChapterPlacement {
    let per_row = per_row(config);
    let count = sections.len();
    let first_row_y = y.saturating_add(config.section_offset);

    let sections = sections
        .iter()
        .enumerate()
        .map(|(index, &subsections)| {
            let row = index / per_row;
            let col = index % per_row;
            let in_row = per_row.min(count - row * per_row) as i64;
            let row_width = in_row.saturating_mul(config.column_width);
            let x = config
                .center_x
                .saturating_sub(row_width / 2)
                .saturating_add(config.column_width / 2)
                .saturating_add((col as i64).saturating_mul(config.column_width));
            let section_y =
                first_row_y.saturating_add((row as i64).saturating_mul(config.row_height));
            let first_sub_y = section_y.saturating_add(config.subsection_offset);
            let subsections = (0..subsections)
                .map(|i| {
                    let offset = (i as i64).saturating_mul(config.subsection_spacing);
                    Point::new(x, first_sub_y.saturating_add(offset))
                })
                .collect();
            SectionPlacement {
                position: Point::new(x, section_y),
                subsections,
            }
        })
        .collect();

    ChapterPlacement {
        position: Point::new(config.center_x, y),
        sections,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
