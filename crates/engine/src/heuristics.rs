//! Keyword and tag heuristics
//!
//! Free-text classification over contact notes and tags, driven by the
//! catalog tables. Sets and groups fire independently; several can
//! contribute for the same contact.

use outreach_config::{NotesKeywords, TagGroups};
use outreach_core::Contact;

/// Recommendations from the notes keyword sets. Notes are lowercased once;
/// every set whose keywords appear contributes its pair.
pub fn analyze_notes(keywords: &NotesKeywords, contact: &Contact) -> Vec<String> {
    let mut recommendations = Vec::new();
    let lower = match contact.notes.as_deref() {
        Some(notes) if !notes.is_empty() => notes.to_lowercase(),
        _ => return recommendations,
    };

    for (name, set) in keywords.sets() {
        if set.matches(&lower) {
            tracing::debug!(set = name, "notes keyword set fired");
            recommendations.extend(set.recommendations.iter().cloned());
        }
    }
    recommendations
}

/// Recommendations from the tag groups. Contact tags are lowercased;
/// each group with at least one member tag contributes its single line.
pub fn analyze_tags(groups: &TagGroups, contact: &Contact) -> Vec<String> {
    let mut recommendations = Vec::new();
    if contact.tags.is_empty() {
        return recommendations;
    }
    let lower: Vec<String> = contact.tags.iter().map(|tag| tag.to_lowercase()).collect();

    for (name, group) in groups.groups() {
        if group.matches(&lower) {
            tracing::debug!(group = name, "tag group fired");
            recommendations.push(group.recommendation.clone());
        }
    }
    recommendations
}
