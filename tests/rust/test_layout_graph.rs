use super::*;

fn t(id: &str, name: &str) -> Topic {
    Topic::new(id, name)
}

fn build(topics: &[Topic]) -> Roadmap {
    RoadmapGraph::build(topics, "Statistics", &LayoutConfig::default()).into_roadmap()
}

fn node_ids(r: &Roadmap) -> Vec<&str> {
    r.nodes.iter().map(|n| n.id.as_str()).collect()
}

fn edge_ids(r: &Roadmap) -> Vec<&str> {
    r.edges.iter().map(|e| e.id.as_str()).collect()
}

fn course() -> Vec<Topic> {
    vec![
        t("c2", "Chapter 2: Inference").with_description("Drawing conclusions"),
        t("s2-1", "2.1: Estimation"),
        t("c1", "Chapter 1: Basics").with_completed(true),
        t("s1-2", "1.2: Spread"),
        t("s1-1", "1.1: Averages"),
        t("s1-1-1", "1.1.1: Mean"),
        t("s1-1-2", "1.1.2: Median"),
    ]
}

// ── Root / empty ──────────────────────────────────────────────────────────

#[test]
fn test_empty_input_root_only() {
    let r = build(&[]);
    assert_eq!(node_ids(&r), vec!["main"]);
    assert!(r.edges.is_empty());
    let root = &r.nodes[0];
    assert_eq!(root.kind, NodeKind::Root);
    assert_eq!(root.label, "Statistics");
    assert_eq!(root.description.as_deref(), Some("Complete syllabus for Statistics"));
    assert_eq!(root.position, Point::new(400, 0));
}

// ── Structure ─────────────────────────────────────────────────────────────

#[test]
fn test_emission_order() {
    let r = build(&course());
    assert_eq!(
        node_ids(&r),
        vec![
            "main",
            "chapter-1",
            "section-1-1",
            "subsection-1-1-1",
            "subsection-1-1-2",
            "section-1-2",
            "chapter-2",
            "section-2-1",
        ]
    );
    assert_eq!(
        edge_ids(&r),
        vec![
            "main-to-chapter-1",
            "chapter-1-to-section-1-1",
            "section-1-1-to-subsection-1-1-1",
            "section-1-1-to-subsection-1-1-2",
            "chapter-1-to-section-1-2",
            "main-to-chapter-2",
            "chapter-1-to-chapter-2",
            "chapter-2-to-section-2-1",
        ]
    );
}

#[test]
fn test_node_fields() {
    let r = build(&course());
    let chapter = r.node("chapter-1").unwrap();
    assert_eq!(chapter.label, "Basics");
    assert_eq!(chapter.number.as_deref(), Some("1"));
    assert_eq!(chapter.topic_id.as_deref(), Some("c1"));
    assert_eq!(chapter.completed, Some(true));
    assert_eq!(
        r.node("chapter-2").unwrap().description.as_deref(),
        Some("Drawing conclusions")
    );
    let sub = r.node("subsection-1-1-2").unwrap();
    assert_eq!(sub.number.as_deref(), Some("1.1.2"));
    assert_eq!(sub.label, "Median");
}

#[test]
fn test_first_section_highlighted() {
    let r = build(&course());
    let highlighted: Vec<&str> = r
        .nodes
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(highlighted, vec!["section-1-1", "section-2-1"]);
}

#[test]
fn test_positions() {
    let r = build(&course());
    let pos = |id: &str| r.node(id).unwrap().position;
    assert_eq!(pos("chapter-1"), Point::new(400, 120));
    assert_eq!(pos("section-1-1"), Point::new(250, 220));
    assert_eq!(pos("section-1-2"), Point::new(550, 220));
    assert_eq!(pos("subsection-1-1-1"), Point::new(250, 320));
    assert_eq!(pos("subsection-1-1-2"), Point::new(250, 460));
    // 120 + 100 + 180 + 2·140 + 80
    assert_eq!(pos("chapter-2"), Point::new(400, 760));
    assert_eq!(pos("section-2-1"), Point::new(400, 860));
}

#[test]
fn test_chapters_sorted_numerically() {
    let topics = vec![
        t("c10", "Chapter 10: Ten"),
        t("c1", "Chapter 1: One"),
        t("c2", "Chapter 2: Two"),
    ];
    let r = build(&topics);
    let chapters: Vec<&str> = r
        .nodes_of_kind(NodeKind::Chapter)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(chapters, vec!["chapter-1", "chapter-2", "chapter-10"]);
    let sequence: Vec<&str> = r
        .edges_of_kind(EdgeKind::Sequence)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(sequence, vec!["chapter-1-to-chapter-2", "chapter-2-to-chapter-10"]);
}

#[test]
fn test_sections_ordered_by_decimal_value() {
    let topics = vec![
        t("c1", "Chapter 1: One"),
        t("s1-2", "1.2: Two"),
        t("s1-9", "1.9: Nine"),
        t("s1-10", "1.10: Ten"),
    ];
    let r = build(&topics);
    let sections: Vec<&str> = r
        .nodes_of_kind(NodeKind::Section)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(sections, vec!["section-1-10", "section-1-2", "section-1-9"]);
    assert!(r.node("section-1-10").unwrap().highlighted);
    assert_eq!(r.node("section-1-10").unwrap().number.as_deref(), Some("1.10"));
}

#[test]
fn test_leading_zero_sections_get_their_own_nodes() {
    let topics = vec![
        t("c1", "Chapter 1: One"),
        t("s1-01", "1.01: Leading zero"),
        t("s1-1", "1.1: Plain"),
    ];
    let r = build(&topics);
    assert_eq!(r.node("section-1-01").unwrap().topic_id.as_deref(), Some("s1-01"));
    assert_eq!(r.node("section-1-1").unwrap().topic_id.as_deref(), Some("s1-1"));
    assert_eq!(r.nodes.len(), 4);
}

#[test]
fn test_sequence_skips_missing_chapters() {
    let topics = vec![
        t("c1", "Chapter 1: One"),
        t("x", "2.1: No chapter two"),
        t("c3", "Chapter 3: Three"),
    ];
    let r = build(&topics);
    assert!(r.node("chapter-2").is_none());
    assert!(r.node("section-2-1").is_none());
    assert!(r.edges.iter().any(|e| e.id == "chapter-1-to-chapter-3"));
}

#[test]
fn test_containment_complete() {
    let r = build(&course());
    for node in r.nodes.iter().filter(|n| n.kind != NodeKind::Root) {
        let parents = r
            .edges_of_kind(EdgeKind::Containment)
            .filter(|e| e.target == node.id)
            .count();
        assert_eq!(parents, 1, "{} should have one parent", node.id);
    }
}

#[test]
fn test_orphans_suppressed() {
    let mut topics = course();
    topics.push(t("notes", "Random notes"));
    let r = build(&topics);
    assert!(r.nodes.iter().all(|n| n.topic_id.as_deref() != Some("notes")));
    assert_eq!(r.nodes.len(), build(&course()).nodes.len());
}

#[test]
fn test_deterministic() {
    let a = build(&course());
    let b = build(&course());
    assert_eq!(a, b);
}

#[test]
fn test_edge_styles_by_kind() {
    let r = build(&course());
    let e = |id: &str| r.edges.iter().find(|e| e.id == id).unwrap();
    assert_eq!(e("main-to-chapter-1").style.color, "#818cf8");
    assert!(e("main-to-chapter-1").style.arrow);
    assert!(e("chapter-1-to-chapter-2").style.animated);
    assert_eq!(e("chapter-1-to-section-1-1").weight, 1.5);
    assert_eq!(e("section-1-1-to-subsection-1-1-1").style.color, "#e2e8f0");
}

// ── Relationships ─────────────────────────────────────────────────────────

#[test]
fn test_relationship_edge() {
    let topics = vec![
        t("a", "Chapter 1: One").with_related(RelatedTopic::new("b", "builds upon", 0.9)),
        t("b", "Chapter 2: Two"),
    ];
    let r = build(&topics);
    let rel: Vec<&RoadmapEdge> = r.edges_of_kind(EdgeKind::Relationship).collect();
    assert_eq!(rel.len(), 1);
    let edge = rel[0];
    assert_eq!(edge.id, "chapter-1-to-chapter-2-relation-1");
    assert_eq!(edge.source, "chapter-1");
    assert_eq!(edge.target, "chapter-2");
    assert_eq!(edge.relationship.as_deref(), Some("builds upon"));
    assert_eq!(edge.strength, Some(0.9));
    assert_eq!(edge.tooltip.as_deref(), Some("builds upon (90% strength)"));
    assert_eq!(edge.style.color, "#ef4444");
    // relationship edges come after all structure
    assert_eq!(r.edges.last().map(|e| e.kind), Some(EdgeKind::Relationship));
}

#[test]
fn test_same_chapter_relation_suppressed() {
    let topics = vec![
        t("a", "Chapter 1: One"),
        t("s", "1.1: Part").with_related(RelatedTopic::new("a", "part of", 0.5)),
    ];
    let r = build(&topics);
    assert_eq!(r.edges_of_kind(EdgeKind::Relationship).count(), 0);
}

#[test]
fn test_dangling_relation_dropped() {
    let topics = vec![
        t("a", "Chapter 1: One").with_related(RelatedTopic::new("ghost", "uses", 0.5)),
        t("b", "Chapter 2: Two"),
        // chapter 3 has no heading, so it is never emitted
        t("c", "3.1: Headless"),
        t("d", "2.1: Two one").with_related(RelatedTopic::new("c", "uses", 0.5)),
    ];
    let r = build(&topics);
    assert_eq!(r.edges_of_kind(EdgeKind::Relationship).count(), 0);
}

#[test]
fn test_duplicate_relations_get_distinct_ids() {
    let topics = vec![
        t("a", "Chapter 1: One")
            .with_related(RelatedTopic::new("b", "uses", 0.2))
            .with_related(RelatedTopic::new("b2", "extends", 0.5)),
        t("b", "Chapter 2: Two"),
        t("b2", "2.1: Two one"),
        t("c", "Chapter 3: Three").with_related(RelatedTopic::new("a", "revisits", 0.4)),
    ];
    let r = build(&topics);
    let ids: Vec<&str> = r
        .edges_of_kind(EdgeKind::Relationship)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "chapter-1-to-chapter-2-relation-1",
            "chapter-1-to-chapter-2-relation-2",
            "chapter-3-to-chapter-1-relation-1",
        ]
    );
}

#[test]
fn test_relation_source_from_chapter_tag() {
    let topics = vec![
        t("a", "Chapter 1: One"),
        t("b", "Chapter 2: Two"),
        t("note", "Side note")
            .with_chapter("2")
            .with_related(RelatedTopic::new("a", "recalls", 0.6)),
    ];
    let r = build(&topics);
    let rel: Vec<&RoadmapEdge> = r.edges_of_kind(EdgeKind::Relationship).collect();
    assert_eq!(rel.len(), 1);
    assert_eq!(rel[0].source, "chapter-2");
    assert_eq!(rel[0].style.color, "#f97316");
}

#[test]
fn test_raw_strength_kept_style_clamped() {
    let topics = vec![
        t("a", "Chapter 1: One").with_related(RelatedTopic::new("b", "uses", 1.5)),
        t("b", "Chapter 2: Two"),
    ];
    let r = build(&topics);
    let edge = r.edges_of_kind(EdgeKind::Relationship).next().unwrap();
    assert_eq!(edge.strength, Some(1.5));
    assert_eq!(edge.style.stroke_width, 4.0);
    assert_eq!(edge.tooltip.as_deref(), Some("uses (100% strength)"));
}

// ── Graph queries ─────────────────────────────────────────────────────────

#[test]
fn test_children_and_parent() {
    let g = RoadmapGraph::build(&course(), "Statistics", &LayoutConfig::default());
    assert_eq!(g.children("main"), vec!["chapter-1", "chapter-2"]);
    assert_eq!(g.children("section-1-1"), vec!["subsection-1-1-1", "subsection-1-1-2"]);
    assert!(g.children("missing").is_empty());
    assert_eq!(g.parent("section-1-2").as_deref(), Some("chapter-1"));
    assert_eq!(g.parent("main"), None);
}

#[test]
fn test_structure_is_acyclic() {
    let topics = vec![
        t("a", "Chapter 1: One").with_related(RelatedTopic::new("b", "uses", 0.5)),
        t("b", "Chapter 2: Two").with_related(RelatedTopic::new("a", "uses", 0.5)),
    ];
    let g = RoadmapGraph::build(&topics, "T", &LayoutConfig::default());
    assert!(g.is_dag());
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn test_add_node_dedupes_and_add_edge_drops_dangling() {
    let mut g = RoadmapGraph::new("T");
    assert!(g.add_node(RoadmapNode::new("a", NodeKind::Chapter, "A", Point::default())));
    assert!(!g.add_node(RoadmapNode::new("a", NodeKind::Chapter, "A2", Point::default())));
    assert_eq!(g.node("a").map(|n| n.label.as_str()), Some("A"));
    let edge = RoadmapEdge::new("a-to-b", "a", "b", EdgeKind::Containment, EdgeStyle::chapter_section());
    assert!(!g.add_edge(edge));
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 0);
}
