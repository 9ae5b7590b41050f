//! Geometry configuration for the roadmap layout engine.
//!
//! All distances are in presentation pixels. The defaults match the web
//! frontend's node sizes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};

/// Largest accepted magnitude for any position or distance.
pub const MAX_COORDINATE: i64 = 1_000_000;
pub const MAX_SECTIONS_PER_ROW: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Horizontal centre line shared by the root and all chapter nodes.
    pub center_x: i64,
    /// Vertical position of the root node.
    pub root_y: i64,
    /// Vertical position of the first chapter node.
    pub first_chapter_y: i64,
    /// Chapter node to its first row of sections.
    pub section_offset: i64,
    /// Distance between consecutive section rows.
    pub row_height: i64,
    /// Distance between section columns.
    pub column_width: i64,
    pub sections_per_row: usize,
    /// Section node to its first subsection.
    pub subsection_offset: i64,
    /// Distance between stacked subsections.
    pub subsection_spacing: i64,
    /// Extra clearance after a chapter's block.
    pub chapter_gap: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 400,
            root_y: 0,
            first_chapter_y: 120,
            section_offset: 100,
            row_height: 180,
            column_width: 300,
            sections_per_row: 3,
            subsection_offset: 100,
            subsection_spacing: 140,
            chapter_gap: 80,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry that would stack nodes on top of each other, or
    /// values large enough to overflow coordinate arithmetic.
    ///
    /// The last subsection of a chapter sits at
    /// `row_height - subsection_offset + subsection_spacing + chapter_gap`
    /// above the next chapter node, so that sum must stay positive.
    pub fn validate(&self) -> Result<()> {
        if self.sections_per_row == 0 {
            return Err(RoadmapError::InvalidConfig(
                "sectionsPerRow must be at least 1".to_string(),
            ));
        }
        if self.sections_per_row > MAX_SECTIONS_PER_ROW {
            return Err(RoadmapError::InvalidConfig(format!(
                "sectionsPerRow must be at most {MAX_SECTIONS_PER_ROW}, got {}",
                self.sections_per_row
            )));
        }
        let fields = [
            ("centerX", self.center_x),
            ("rootY", self.root_y),
            ("firstChapterY", self.first_chapter_y),
            ("sectionOffset", self.section_offset),
            ("rowHeight", self.row_height),
            ("columnWidth", self.column_width),
            ("subsectionOffset", self.subsection_offset),
            ("subsectionSpacing", self.subsection_spacing),
            ("chapterGap", self.chapter_gap),
        ];
        for (name, value) in fields {
            if value.unsigned_abs() > MAX_COORDINATE.unsigned_abs() {
                return Err(RoadmapError::InvalidConfig(format!(
                    "{name} must be within ±{MAX_COORDINATE}, got {value}"
                )));
            }
        }
        let spacings = [
            ("sectionOffset", self.section_offset),
            ("rowHeight", self.row_height),
            ("columnWidth", self.column_width),
            ("subsectionOffset", self.subsection_offset),
            ("subsectionSpacing", self.subsection_spacing),
        ];
        for (name, value) in spacings {
            if value <= 0 {
                return Err(RoadmapError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.first_chapter_y <= self.root_y {
            return Err(RoadmapError::InvalidConfig(format!(
                "firstChapterY ({}) must be below rootY ({})",
                self.first_chapter_y, self.root_y
            )));
        }
        if self.chapter_gap < 0 {
            return Err(RoadmapError::InvalidConfig(format!(
                "chapterGap must not be negative, got {}",
                self.chapter_gap
            )));
        }
        let clearance =
            self.row_height - self.subsection_offset + self.subsection_spacing + self.chapter_gap;
        if clearance <= 0 {
            return Err(RoadmapError::InvalidConfig(format!(
                "chapter blocks would overlap (clearance {clearance}); \
                 raise chapterGap or rowHeight"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
