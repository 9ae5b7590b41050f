use super::*;
use crate::layout::build_roadmap;
use crate::syntax::{RelatedTopic, Topic};

fn sample() -> Roadmap {
    let topics = vec![
        Topic::new("c1", "Chapter 1: Basics"),
        Topic::new("s1-1", "1.1: Averages").with_completed(true),
        Topic::new("c2", "Chapter 2: Inference")
            .with_related(RelatedTopic::new("c1", "builds upon", 0.8)),
    ];
    build_roadmap(&topics, "Statistics")
}

#[test]
fn test_outline_full() {
    let out = OutlineRenderer.render(&sample()).unwrap();
    let expected = "\
Statistics @ (400, 0)
  1 Basics @ (400, 120)
    1.1 Averages @ (400, 220) * [x]
  2 Inference @ (400, 480)

relationships:
  chapter-2 -> chapter-1: builds upon (80% strength)

progress: 33%
";
    assert_eq!(out, expected);
}

#[test]
fn test_outline_empty_roadmap() {
    let out = OutlineRenderer.render(&build_roadmap(&[], "Empty")).unwrap();
    assert_eq!(out, "Empty @ (400, 0)\n\nprogress: 0%\n");
}

#[test]
fn test_node_line_indent() {
    let node = RoadmapNode::new(
        "subsection-1-2-3",
        crate::layout::types::NodeKind::Subsection,
        "Deep",
        crate::layout::types::Point::new(10, 20),
    );
    assert_eq!(node_line(&node), "      Deep @ (10, 20)");
}
