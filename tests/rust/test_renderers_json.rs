use super::*;
use crate::layout::build_roadmap;
use crate::syntax::Topic;

fn sample() -> Roadmap {
    build_roadmap(
        &[
            Topic::new("c1", "Chapter 1: Basics"),
            Topic::new("s1-1", "1.1: Averages"),
        ],
        "Statistics",
    )
}

#[test]
fn test_json_shape() {
    let out = JsonRenderer::default().render(&sample()).unwrap();
    assert!(out.ends_with('\n'));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["title"], "Statistics");
    assert_eq!(v["nodes"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(v["nodes"][1]["id"], "chapter-1");
    assert_eq!(v["nodes"][2]["topicId"], "s1-1");
    assert_eq!(v["edges"][0]["id"], "main-to-chapter-1");
    assert_eq!(v["edges"][0]["style"]["strokeWidth"], 2.0);
}

#[test]
fn test_json_compact() {
    let out = JsonRenderer { pretty: false }.render(&sample()).unwrap();
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_json_round_trips_roadmap() {
    let roadmap = sample();
    let out = JsonRenderer::default().render(&roadmap).unwrap();
    let back: Roadmap = serde_json::from_str(&out).unwrap();
    assert_eq!(back, roadmap);
}
