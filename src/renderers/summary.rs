//! Plain-text rendering of a topic summary, laid out like the summary popup.

use crate::syntax::summary::TopicSummary;

fn bullet_block(heading: &str, items: &[String], out: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    out.push(String::new());
    out.push(format!("{heading}:"));
    out.extend(items.iter().map(|item| format!("  - {item}")));
}

pub fn render_summary(summary: &TopicSummary) -> String {
    let mut lines = vec![summary.name.clone()];
    let mut meta = vec![format!("difficulty: {}", summary.difficulty.as_str())];
    if !summary.estimated_study_time.is_empty() {
        meta.push(format!("study time: {}", summary.estimated_study_time));
    }
    lines.push(meta.join(" | "));
    if !summary.summary.is_empty() {
        lines.push(String::new());
        lines.push(summary.summary.clone());
    }
    bullet_block("Key points", &summary.key_points, &mut lines);
    bullet_block("Learning objectives", &summary.learning_objectives, &mut lines);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_summary.rs"]
mod tests;
