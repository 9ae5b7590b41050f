//! RoadmapGraph builds the roadmap node/edge collection on a petgraph
//! DiGraph.
//!
//! Nodes are added once per id; an edge is only added when both endpoints
//! already exist, so dangling references are dropped instead of producing
//! placeholder nodes. Insertion order is preserved into the final
//! `Roadmap`.
//!
//! Sequence edges join each chapter to the previous chapter that was
//! actually emitted. A chapter skipped for lack of a `Chapter N:` heading
//! leaves no gap in the chain: 1 → 3 when chapter 2 has no heading.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, info};

use super::engine::{self, Placement};
use super::hierarchy::{ChapterOutline, Entry, Outline, SectionOutline, SubsectionOutline, chapter_of};
use super::style::relationship_tooltip;
use super::types::{
    EdgeKind, EdgeStyle, NodeKind, Point, ROOT_ID, Roadmap, RoadmapEdge, RoadmapNode,
};
use crate::config::LayoutConfig;
use crate::syntax::types::{RelatedTopic, Topic};

// ─── Ids ─────────────────────────────────────────────────────────────────────

pub fn chapter_id(chapter: u32) -> String {
    format!("chapter-{chapter}")
}

/// "1.01" → "section-1-01".
pub fn section_id(key: &str) -> String {
    format!("section-{}", key.replace('.', "-"))
}

pub fn subsection_id(key: &str) -> String {
    format!("subsection-{}", key.replace('.', "-"))
}

// ─── RoadmapGraph ────────────────────────────────────────────────────────────

pub struct RoadmapGraph {
    pub digraph: DiGraph<RoadmapNode, RoadmapEdge>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    pub title: String,
}

impl RoadmapGraph {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            digraph: DiGraph::new(),
            node_index: HashMap::new(),
            title: title.into(),
        }
    }

    /// Build the positioned roadmap for a topic collection.
    pub fn build(topics: &[Topic], title: &str, config: &LayoutConfig) -> Self {
        let outline = Outline::from_topics(topics);
        let placement = engine::place(&outline.shape(), config);

        let mut graph = Self::new(title);
        graph.add_hierarchy(&outline, &placement);
        graph.add_relationships(topics, &outline);

        info!(
            chapters = outline.chapters.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            omitted = outline.omitted,
            "built roadmap"
        );
        graph
    }

    /// Add a node; a second node with the same id is ignored.
    pub fn add_node(&mut self, node: RoadmapNode) -> bool {
        if self.node_index.contains_key(&node.id) {
            debug!(id = %node.id, "duplicate node id ignored");
            return false;
        }
        let id = node.id.clone();
        let idx = self.digraph.add_node(node);
        self.node_index.insert(id, idx);
        true
    }

    /// Add an edge between two existing nodes; otherwise drop it.
    pub fn add_edge(&mut self, edge: RoadmapEdge) -> bool {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(&edge.source),
            self.node_index.get(&edge.target),
        ) else {
            debug!(id = %edge.id, source = %edge.source, target = %edge.target, "dangling edge dropped");
            return false;
        };
        self.digraph.add_edge(from, to, edge);
        true
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn node(&self, id: &str) -> Option<&RoadmapNode> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    /// Containment children of `id`, in insertion (display) order.
    pub fn children(&self, id: &str) -> Vec<String> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut targets: Vec<NodeIndex> = self
            .digraph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| e.weight().kind == EdgeKind::Containment)
            .map(|e| e.target())
            .collect();
        targets.sort();
        targets
            .into_iter()
            .map(|t| self.digraph[t].id.clone())
            .collect()
    }

    /// Containment parent of `id`; `None` for the root and unknown ids.
    pub fn parent(&self, id: &str) -> Option<String> {
        let &idx = self.node_index.get(id)?;
        self.digraph
            .edges_directed(idx, Direction::Incoming)
            .find(|e| e.weight().kind == EdgeKind::Containment)
            .map(|e| self.digraph[e.source()].id.clone())
    }

    /// True when containment + sequence edges form no cycle. Relationship
    /// edges may legitimately point both ways and are not considered.
    pub fn is_dag(&self) -> bool {
        let structural = self.digraph.filter_map(
            |_, _| Some(()),
            |_, e| (e.kind != EdgeKind::Relationship).then_some(()),
        );
        !is_cyclic_directed(&structural)
    }

    /// Hand the finished collection over, nodes and edges in insertion order.
    pub fn into_roadmap(self) -> Roadmap {
        let (nodes, edges) = self.digraph.into_nodes_edges();
        Roadmap {
            title: self.title,
            nodes: nodes.into_iter().map(|n| n.weight).collect(),
            edges: edges.into_iter().map(|e| e.weight).collect(),
        }
    }

    // ── Building ──────────────────────────────────────────────────────────

    fn add_hierarchy(&mut self, outline: &Outline<'_>, placement: &Placement) {
        self.add_node(root_node(&self.title, placement.root));

        let mut previous: Option<String> = None;
        for (chapter, slot) in outline.chapters.iter().zip(&placement.chapters) {
            let id = chapter_id(chapter.chapter);
            self.add_node(chapter_node(chapter, slot.position));
            self.add_edge(RoadmapEdge::new(
                format!("{ROOT_ID}-to-{id}"),
                ROOT_ID,
                &id,
                EdgeKind::Containment,
                EdgeStyle::course_link(),
            ));
            if let Some(prev) = previous.replace(id.clone()) {
                self.add_edge(RoadmapEdge::new(
                    format!("{prev}-to-{id}"),
                    &prev,
                    &id,
                    EdgeKind::Sequence,
                    EdgeStyle::sequence(),
                ));
            }

            for (index, (section, section_slot)) in
                chapter.sections.iter().zip(&slot.sections).enumerate()
            {
                let sid = section_id(&section.key);
                let mut node = section_node(section, section_slot.position);
                node.highlighted = index == 0;
                self.add_node(node);
                self.add_edge(RoadmapEdge::new(
                    format!("{id}-to-{sid}"),
                    &id,
                    &sid,
                    EdgeKind::Containment,
                    EdgeStyle::chapter_section(),
                ));

                for (subsection, &position) in
                    section.subsections.iter().zip(&section_slot.subsections)
                {
                    let ssid = subsection_id(&subsection.key);
                    self.add_node(subsection_node(subsection, position));
                    self.add_edge(RoadmapEdge::new(
                        format!("{sid}-to-{ssid}"),
                        &sid,
                        &ssid,
                        EdgeKind::Containment,
                        EdgeStyle::section_subsection(),
                    ));
                }
            }
        }
    }

    fn add_relationships(&mut self, topics: &[Topic], outline: &Outline<'_>) {
        let mut per_pair: HashMap<(u32, u32), usize> = HashMap::new();

        for topic in topics.iter().filter(|t| !t.related_topics.is_empty()) {
            let Some(source) = chapter_of(topic) else {
                debug!(id = %topic.id, "relations on a topic without a chapter dropped");
                continue;
            };
            for relation in &topic.related_topics {
                let Some(target) = outline.owning_chapter(&relation.topic_id) else {
                    debug!(from = %topic.id, to = %relation.topic_id, "unresolved relation dropped");
                    continue;
                };
                if source == target {
                    continue;
                }
                if !(outline.has_chapter(source) && outline.has_chapter(target)) {
                    debug!(source, target, "relation between unpositioned chapters dropped");
                    continue;
                }
                let ordinal = per_pair.entry((source, target)).or_insert(0);
                *ordinal += 1;
                self.add_edge(relationship_edge(source, target, *ordinal, relation));
            }
        }
    }
}

// ─── Node / edge constructors ────────────────────────────────────────────────

fn root_node(title: &str, position: Point) -> RoadmapNode {
    let mut node = RoadmapNode::new(ROOT_ID, NodeKind::Root, title, position);
    node.description = Some(format!("Complete syllabus for {title}"));
    node
}

fn topic_node(id: String, kind: NodeKind, number: String, entry: &Entry<'_>, position: Point) -> RoadmapNode {
    let mut node = RoadmapNode::new(id, kind, entry.label.clone(), position);
    node.description = entry.topic.description.clone();
    node.number = Some(number);
    node.topic_id = Some(entry.topic.id.clone());
    node.completed = entry.topic.completed;
    node
}

fn chapter_node(chapter: &ChapterOutline<'_>, position: Point) -> RoadmapNode {
    topic_node(
        chapter_id(chapter.chapter),
        NodeKind::Chapter,
        chapter.chapter.to_string(),
        &chapter.entry,
        position,
    )
}

fn section_node(section: &SectionOutline<'_>, position: Point) -> RoadmapNode {
    topic_node(
        section_id(&section.key),
        NodeKind::Section,
        section.key.clone(),
        &section.entry,
        position,
    )
}

fn subsection_node(subsection: &SubsectionOutline<'_>, position: Point) -> RoadmapNode {
    topic_node(
        subsection_id(&subsection.key),
        NodeKind::Subsection,
        subsection.key.clone(),
        &subsection.entry,
        position,
    )
}

fn relationship_edge(source: u32, target: u32, ordinal: usize, relation: &RelatedTopic) -> RoadmapEdge {
    let from = chapter_id(source);
    let to = chapter_id(target);
    let mut edge = RoadmapEdge::new(
        format!("{from}-to-{to}-relation-{ordinal}"),
        from,
        to,
        EdgeKind::Relationship,
        EdgeStyle::relationship(relation.strength),
    );
    edge.relationship = Some(relation.relationship.clone());
    edge.strength = Some(relation.strength);
    edge.tooltip = Some(relationship_tooltip(&relation.relationship, relation.strength));
    edge
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
