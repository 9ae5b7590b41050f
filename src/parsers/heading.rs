//! Topic name classifier.
//!
//! Topic names carry their place in the syllabus as a numbering prefix:
//!
//! ```text
//! Chapter 3: Regression      chapter 3
//! 3.2: Least squares         section 2 of chapter 3
//! 3.2.1: Normal equations    subsection 1 of section 3.2
//! ```
//!
//! `classify` turns that convention into a [`Tier`] once, at the boundary,
//! so nothing downstream re-parses names. It is total: a name that matches
//! nothing (or whose chapter number overflows `u32`) is
//! `Tier::Unclassified`.

use std::sync::OnceLock;

use regex::Regex;

// ─── Tier ────────────────────────────────────────────────────────────────────

/// Section and subsection keys are the dotted number exactly as written
/// ("1.01" and "1.1" are different sections). Only the chapter component is
/// read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tier {
    Chapter { chapter: u32 },
    Section { chapter: u32, key: String },
    Subsection { chapter: u32, key: String },
    Unclassified,
}

impl Tier {
    /// Number of the chapter this tier belongs to.
    pub fn chapter(&self) -> Option<u32> {
        match *self {
            Tier::Chapter { chapter }
            | Tier::Section { chapter, .. }
            | Tier::Subsection { chapter, .. } => Some(chapter),
            Tier::Unclassified => None,
        }
    }

    /// Dotted numeric key: "3", "3.2", "3.2.1".
    pub fn number(&self) -> Option<String> {
        match self {
            Tier::Chapter { chapter } => Some(chapter.to_string()),
            Tier::Section { key, .. } | Tier::Subsection { key, .. } => Some(key.clone()),
            Tier::Unclassified => None,
        }
    }
}

/// Display order of a section key: the key read as a decimal, so "1.10"
/// sorts as 1.1, ahead of "1.2".
pub fn section_order(key: &str) -> f64 {
    key.parse().unwrap_or(f64::INFINITY)
}

/// Display order of a subsection key: its digits read as one number
/// ("1.2.10" → 1210).
pub fn subsection_order(key: &str) -> f64 {
    key.replace('.', "").parse().unwrap_or(f64::INFINITY)
}

/// Section key a subsection key hangs under: "1.2.3" → "1.2".
pub fn parent_key(key: &str) -> &str {
    key.rsplit_once('.').map_or(key, |(parent, _)| parent)
}

// ─── Heading ─────────────────────────────────────────────────────────────────

/// Classification result for one topic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub tier: Tier,
    /// Name with the numbering prefix and its colon removed.
    pub label: String,
    /// True only for the canonical `Chapter N: Title` form. Other
    /// chapter-tier names ("Chapter 3 review") group with the chapter but
    /// never stand in for it.
    pub is_chapter_heading: bool,
}

impl Heading {
    fn new(tier: Tier, label: &str, full: &str) -> Self {
        let label = match label.trim() {
            "" => full,
            trimmed => trimmed,
        };
        Self {
            tier,
            label: label.to_string(),
            is_chapter_heading: false,
        }
    }
}

// ─── Patterns ────────────────────────────────────────────────────────────────

fn chapter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Chapter\s+(\d+)(\s*:)?").expect("chapter pattern is valid"))
}

fn subsection_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^((\d+)\.\d+\.\d+):").expect("subsection pattern is valid")
    })
}

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^((\d+)\.\d+):").expect("section pattern is valid"))
}

fn chapter_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:chapter\s*)?(\d+)$").expect("chapter tag pattern is valid")
    })
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Classify a topic name by its numbering prefix.
pub fn classify(name: &str) -> Heading {
    let name = name.trim();

    if let Some(caps) = chapter_re().captures(name) {
        if let Ok(chapter) = caps[1].parse::<u32>() {
            let rest = &name[caps[0].len()..];
            let mut heading = Heading::new(Tier::Chapter { chapter }, rest, name);
            heading.is_chapter_heading = caps.get(2).is_some();
            return heading;
        }
    }

    if let Some(caps) = subsection_re().captures(name) {
        if let Ok(chapter) = caps[2].parse::<u32>() {
            let tier = Tier::Subsection {
                chapter,
                key: caps[1].to_string(),
            };
            return Heading::new(tier, &name[caps[0].len()..], name);
        }
    }

    if let Some(caps) = section_re().captures(name) {
        if let Ok(chapter) = caps[2].parse::<u32>() {
            let tier = Tier::Section {
                chapter,
                key: caps[1].to_string(),
            };
            return Heading::new(tier, &name[caps[0].len()..], name);
        }
    }

    Heading::new(Tier::Unclassified, name, name)
}

/// Parse an explicit chapter tag: `"3"`, `" 3 "`, `"Chapter 3"`.
pub fn parse_chapter_tag(tag: &str) -> Option<u32> {
    chapter_tag_re()
        .captures(tag.trim())
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_heading.rs"]
mod tests;
