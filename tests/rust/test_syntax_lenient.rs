use super::*;

#[derive(Debug, Deserialize)]
struct Fields {
    #[serde(default, deserialize_with = "lenient_f64")]
    number: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    text: String,
    #[serde(default, deserialize_with = "string_list")]
    list: Vec<String>,
    #[serde(default, deserialize_with = "related_topics")]
    related: Vec<RelatedTopic>,
}

fn fields(json: &str) -> Fields {
    serde_json::from_str(json).expect("fields should deserialize")
}

// ── Scalars ───────────────────────────────────────────────────────────────

#[test]
fn test_number_forms() {
    assert_eq!(fields(r#"{"number": 2.5}"#).number, 2.5);
    assert_eq!(fields(r#"{"number": " 0.4 "}"#).number, 0.4);
    assert_eq!(fields(r#"{"number": [1]}"#).number, 0.0);
    assert_eq!(fields(r#"{"number": null}"#).number, 0.0);
    assert_eq!(fields("{}").number, 0.0);
}

#[test]
fn test_text_forms() {
    assert_eq!(fields(r#"{"text": "uses"}"#).text, "uses");
    assert_eq!(fields(r#"{"text": 3}"#).text, "3");
    assert_eq!(fields(r#"{"text": null}"#).text, "");
    assert_eq!(fields(r#"{"text": {"a": 1}}"#).text, "");
}

// ── Lists ─────────────────────────────────────────────────────────────────

#[test]
fn test_string_list_keeps_only_strings() {
    assert_eq!(fields(r#"{"list": ["a", 1, null, "b"]}"#).list, vec!["a", "b"]);
}

#[test]
fn test_string_list_single_string() {
    assert_eq!(fields(r#"{"list": "only"}"#).list, vec!["only"]);
    assert!(fields(r#"{"list": "  "}"#).list.is_empty());
}

#[test]
fn test_string_list_null_or_object_is_empty() {
    assert!(fields(r#"{"list": null}"#).list.is_empty());
    assert!(fields(r#"{"list": {"a": "b"}}"#).list.is_empty());
}

// ── Related topics ────────────────────────────────────────────────────────

#[test]
fn test_related_entry_without_topic_id_dropped_alone() {
    let f = fields(
        r#"{"related": [
            {"relationship": "builds upon", "strength": 0.8},
            {"topicId": "c1", "relationship": "uses", "strength": 0.5},
            {"topicId": "", "strength": 0.1},
            {"topicId": 7},
            "c2",
            {"topicId": "c3"}
        ]}"#,
    );
    assert_eq!(
        f.related,
        vec![
            RelatedTopic::new("c1", "uses", 0.5),
            RelatedTopic::new("c3", "", 0.0),
        ]
    );
}

#[test]
fn test_related_odd_fields_defaulted() {
    let f = fields(r#"{"related": [{"topicId": "c1", "relationship": null, "strength": "high"}]}"#);
    assert_eq!(f.related, vec![RelatedTopic::new("c1", "", 0.0)]);
}

#[test]
fn test_related_not_a_list_is_empty() {
    assert!(fields(r#"{"related": {"topicId": "c1"}}"#).related.is_empty());
    assert!(fields(r#"{"related": "c1"}"#).related.is_empty());
    assert!(fields(r#"{"related": null}"#).related.is_empty());
}
