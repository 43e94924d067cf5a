//! Automation trigger evaluation
//!
//! An automation matches a contact when any one of its trigger conditions
//! holds. Conditions are independent predicates over an optional bag: an
//! absent condition does not apply, it never counts as a failure.

use outreach_core::{Automation, Contact, DispositionCategory, TriggerConditions};

type Predicate = fn(&TriggerConditions, &Contact) -> bool;

/// Predicates in evaluation order; the first that holds wins
const PREDICATES: [(&str, Predicate); 8] = [
    ("disposition_id", disposition_id_matches),
    ("disposition_category", disposition_category_matches),
    ("notes_keyword", notes_keyword_matches),
    ("tags", tags_overlap),
    ("sentiment", sentiment_matches),
    ("call_duration_min", call_duration_min_matches),
    ("call_duration_max", call_duration_max_matches),
    ("reply_keyword", reply_keyword_matches),
];

/// Whether any trigger condition of this automation holds for the contact
pub fn matches(automation: &Automation, contact: &Contact) -> bool {
    let conditions = &automation.trigger_conditions;
    for (name, predicate) in PREDICATES {
        if predicate(conditions, contact) {
            tracing::debug!(
                automation = automation.id.as_deref().unwrap_or("?"),
                condition = name,
                "automation matched"
            );
            return true;
        }
    }
    false
}

fn disposition_id_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (&conditions.disposition_id, &contact.disposition_id) {
        (Some(want), Some(have)) => want == have,
        _ => false,
    }
}

fn disposition_category_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match conditions.disposition_category.as_deref() {
        Some(want) => {
            let have = DispositionCategory::for_optional_id(contact.disposition_id.as_deref());
            have.as_str() == want
        }
        None => false,
    }
}

fn notes_keyword_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (conditions.notes_keyword.as_deref(), contact.notes.as_deref()) {
        (Some(keyword), Some(notes)) => notes.to_lowercase().contains(&keyword.to_lowercase()),
        _ => false,
    }
}

/// Overlap on at least one element, after lenient normalization of the
/// condition side. No case folding.
fn tags_overlap(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match &conditions.tags {
        Some(value) => {
            let wanted = value.normalize();
            contact
                .tags
                .iter()
                .any(|tag| wanted.iter().any(|want| want == tag))
        }
        None => false,
    }
}

fn sentiment_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (&conditions.sentiment, &contact.sentiment) {
        (Some(want), Some(have)) => want == have,
        _ => false,
    }
}

fn call_duration_min_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (conditions.call_duration_min, contact.call_duration) {
        (Some(min), Some(duration)) => duration >= min,
        _ => false,
    }
}

fn call_duration_max_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (conditions.call_duration_max, contact.call_duration) {
        (Some(max), Some(duration)) => duration <= max,
        _ => false,
    }
}

fn reply_keyword_matches(conditions: &TriggerConditions, contact: &Contact) -> bool {
    match (
        conditions.reply_keyword.as_deref(),
        contact.last_reply.as_deref(),
    ) {
        (Some(keyword), Some(reply)) => reply.to_lowercase().contains(&keyword.to_lowercase()),
        _ => false,
    }
}
