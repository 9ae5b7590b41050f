//! Outline: groups classified topics into the chapter/section/subsection
//! tree the layout engine positions.
//!
//! Structure comes from name numbering alone; declared `children` lists are
//! ignored. Chapters are keyed on their integer number in a `BTreeMap`, so
//! chapter 10 follows chapter 9. Sections sort by their key read as a
//! decimal ("1.10" is 1.1, so it precedes "1.2"), subsections by their
//! digits read as one number; ties keep input order.
//!
//! Duplicates: the first topic for a given chapter number or section /
//! subsection key wins, as does the first topic for a given id.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::parsers::heading::{
    Tier, classify, parent_key, parse_chapter_tag, section_order, subsection_order,
};
use crate::syntax::types::Topic;

/// A positioned topic and its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub topic: &'a Topic,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubsectionOutline<'a> {
    pub chapter: u32,
    /// Dotted key as written, e.g. "3.2.1".
    pub key: String,
    pub entry: Entry<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutline<'a> {
    pub chapter: u32,
    /// Dotted key as written, e.g. "3.2".
    pub key: String,
    pub entry: Entry<'a>,
    pub subsections: Vec<SubsectionOutline<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterOutline<'a> {
    pub chapter: u32,
    pub entry: Entry<'a>,
    pub sections: Vec<SectionOutline<'a>>,
}

/// Sorted chapter tree plus the id → chapter lookup used to resolve
/// relationships.
#[derive(Debug, Clone, Default)]
pub struct Outline<'a> {
    pub chapters: Vec<ChapterOutline<'a>>,
    owners: HashMap<&'a str, u32>,
    /// Topics that ended up without a positioned node.
    pub omitted: usize,
}

// ─── Grouping scratch space ──────────────────────────────────────────────────

struct SectionGroup<'a> {
    key: String,
    heading: Option<Entry<'a>>,
    /// Input position of the heading topic; breaks sort ties.
    seq: usize,
    subsections: Vec<(String, Entry<'a>)>,
}

#[derive(Default)]
struct ChapterGroup<'a> {
    heading: Option<Entry<'a>>,
    /// In order of first appearance.
    sections: Vec<SectionGroup<'a>>,
    by_key: HashMap<String, usize>,
}

impl<'a> ChapterGroup<'a> {
    fn section(&mut self, key: &str) -> &mut SectionGroup<'a> {
        let index = match self.by_key.get(key) {
            Some(&index) => index,
            None => {
                self.sections.push(SectionGroup {
                    key: key.to_string(),
                    heading: None,
                    seq: usize::MAX,
                    subsections: Vec::new(),
                });
                self.by_key.insert(key.to_string(), self.sections.len() - 1);
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }
}

fn entry<'a>(topic: &'a Topic, label: String) -> Entry<'a> {
    Entry { topic, label }
}

/// Claim `slot` for `topic` unless an earlier topic already holds it.
fn claim<'a>(slot: &mut Option<Entry<'a>>, topic: &'a Topic, label: String) -> bool {
    if slot.is_some() {
        debug!(id = %topic.id, name = %topic.name, "duplicate heading number; keeping the first");
        return false;
    }
    *slot = Some(entry(topic, label));
    true
}

fn owner_of(tier: &Tier, topic: &Topic) -> Option<u32> {
    tier.chapter()
        .or_else(|| topic.chapter.as_deref().and_then(parse_chapter_tag))
}

/// Owning chapter of a topic: the number in its name, else its chapter tag.
pub fn chapter_of(topic: &Topic) -> Option<u32> {
    owner_of(&classify(&topic.name).tier, topic)
}

impl<'a> Outline<'a> {
    pub fn from_topics(topics: &'a [Topic]) -> Self {
        let mut groups: BTreeMap<u32, ChapterGroup<'a>> = BTreeMap::new();
        let mut owners: HashMap<&'a str, u32> = HashMap::new();
        for (seq, topic) in topics.iter().enumerate() {
            let heading = classify(&topic.name);
            let owner = owner_of(&heading.tier, topic);
            if let Some(chapter) = owner {
                owners.entry(topic.id.as_str()).or_insert(chapter);
            }

            match heading.tier {
                Tier::Chapter { chapter } => {
                    let group = groups.entry(chapter).or_default();
                    if heading.is_chapter_heading {
                        claim(&mut group.heading, topic, heading.label);
                    } else {
                        debug!(name = %topic.name, "chapter-tier name is not a heading; not positioned");
                    }
                }
                Tier::Section { chapter, key } => {
                    let section = groups.entry(chapter).or_default().section(&key);
                    if claim(&mut section.heading, topic, heading.label) {
                        section.seq = seq;
                    }
                }
                Tier::Subsection { chapter, key } => {
                    let section = groups.entry(chapter).or_default().section(parent_key(&key));
                    if section.subsections.iter().any(|(k, _)| *k == key) {
                        debug!(id = %topic.id, name = %topic.name, "duplicate heading number; keeping the first");
                    } else {
                        section.subsections.push((key, entry(topic, heading.label)));
                    }
                }
                Tier::Unclassified => match owner {
                    Some(chapter) => {
                        groups.entry(chapter).or_default();
                        debug!(id = %topic.id, chapter, "unnumbered topic grouped by tag only");
                    }
                    None => debug!(id = %topic.id, name = %topic.name, "orphan topic omitted"),
                },
            }
        }

        let chapters = collapse(groups);
        let positioned: usize = chapters
            .iter()
            .map(|c| 1 + c.sections.iter().map(|s| 1 + s.subsections.len()).sum::<usize>())
            .sum();
        let omitted = topics.len() - positioned;
        debug!(topics = topics.len(), positioned, omitted, "outline grouped");

        Self {
            chapters,
            owners,
            omitted,
        }
    }

    /// Owning chapter of the first topic with this id.
    pub fn owning_chapter(&self, topic_id: &str) -> Option<u32> {
        self.owners.get(topic_id).copied()
    }

    /// True when the chapter has a positioned node.
    pub fn has_chapter(&self, chapter: u32) -> bool {
        self.chapters
            .binary_search_by_key(&chapter, |c| c.chapter)
            .is_ok()
    }

    /// Subsection counts per section, per chapter: all the layout engine
    /// needs to know about the tree.
    pub fn shape(&self) -> Vec<Vec<usize>> {
        self.chapters
            .iter()
            .map(|c| c.sections.iter().map(|s| s.subsections.len()).collect())
            .collect()
    }
}

/// Drop every group without its own heading, together with its children,
/// and put what is left in display order. Equal keys stay in input order.
fn collapse(groups: BTreeMap<u32, ChapterGroup<'_>>) -> Vec<ChapterOutline<'_>> {
    groups
        .into_iter()
        .filter_map(|(chapter, group)| {
            let Some(entry) = group.heading else {
                debug!(chapter, "chapter has no \"Chapter N: Title\" topic; skipped");
                return None;
            };
            let mut sections: Vec<(usize, SectionOutline<'_>)> = group
                .sections
                .into_iter()
                .filter_map(|sg| {
                    let Some(entry) = sg.heading else {
                        debug!(chapter, section = %sg.key, "section has no heading topic; subsections dropped");
                        return None;
                    };
                    let mut subsections: Vec<SubsectionOutline<'_>> = sg
                        .subsections
                        .into_iter()
                        .map(|(key, entry)| SubsectionOutline {
                            chapter,
                            key,
                            entry,
                        })
                        .collect();
                    subsections.sort_by(|a, b| {
                        subsection_order(&a.key).total_cmp(&subsection_order(&b.key))
                    });
                    Some((sg.seq, SectionOutline {
                        chapter,
                        key: sg.key,
                        entry,
                        subsections,
                    }))
                })
                .collect();
            sections.sort_by(|(a_seq, a), (b_seq, b)| {
                section_order(&a.key)
                    .total_cmp(&section_order(&b.key))
                    .then(a_seq.cmp(b_seq))
            });
            let sections = sections.into_iter().map(|(_, section)| section).collect();
            Some(ChapterOutline {
                chapter,
                entry,
                sections,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_hierarchy.rs"]
mod tests;
