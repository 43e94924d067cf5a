//! Follow-up recommendation aggregation
//!
//! Accumulates recommendations from disposition rules, notes and tag
//! heuristics, automation matches, and the status fallback, in that fixed
//! order, then deduplicates and caps the list. Always returns at least one
//! entry; the no-action sentinel stands in when nothing matched.

use std::sync::Arc;

use outreach_config::EngineConfig;
use outreach_core::{Automation, Contact};

use crate::conditions;
use crate::heuristics;

/// Derives ranked follow-up recommendations for a contact
pub struct RecommendationEngine {
    config: Arc<EngineConfig>,
}

impl RecommendationEngine {
    /// Engine with the shipped catalogs
    pub fn new() -> Self {
        Self {
            config: Arc::new(EngineConfig::default()),
        }
    }

    /// Engine with explicit catalogs
    pub fn with_config(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Ranked, deduplicated recommendations: between 1 and the configured
    /// cap. Deterministic and pure over its inputs.
    pub fn recommend(&self, contact: &Contact, automations: &[Automation]) -> Vec<String> {
        let mut recommendations = Vec::new();

        // 1. Disposition rules
        if let Some(disposition_id) = contact.disposition_id.as_deref() {
            if self.config.dispositions.get(disposition_id).is_none() {
                tracing::warn!(disposition = disposition_id, "disposition id not in catalog");
            }
            recommendations.extend(
                self.config
                    .disposition_rules
                    .for_disposition(disposition_id)
                    .iter()
                    .cloned(),
            );
        }

        // 2. Notes keyword sets
        recommendations.extend(heuristics::analyze_notes(
            &self.config.notes_keywords,
            contact,
        ));

        // 3. Tag groups
        recommendations.extend(heuristics::analyze_tags(&self.config.tag_groups, contact));

        // 4. Automations, in input order
        for automation in automations {
            if conditions::matches(automation, contact) {
                recommendations.push(automation.recommendation_label());
            }
        }

        // 5. Status fallback
        if contact.is_pending() {
            if contact.has_been_called() {
                recommendations.push("Follow-up required".to_string());
            } else {
                recommendations.push("Initial contact needed".to_string());
            }
        }

        self.finalize(recommendations)
    }

    /// Dedup preserving first occurrence, cap, and substitute the sentinel
    /// when empty
    fn finalize(&self, accumulated: Vec<String>) -> Vec<String> {
        let limits = &self.config.limits;

        let mut unique: Vec<String> = Vec::with_capacity(accumulated.len());
        for recommendation in accumulated {
            if !unique.contains(&recommendation) {
                unique.push(recommendation);
            }
        }
        unique.truncate(limits.max_recommendations);

        if unique.is_empty() {
            unique.push(limits.no_action_label.clone());
        }
        tracing::debug!(count = unique.len(), "recommendations finalized");
        unique
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use outreach_core::TriggerConditions;

    #[test]
    fn test_no_signals_yields_sentinel() {
        let engine = RecommendationEngine::new();
        let result = engine.recommend(&Contact::new(), &[]);
        assert_eq!(result, vec!["No follow-up needed"]);
    }

    #[test]
    fn test_output_always_capped_and_non_empty() {
        let engine = RecommendationEngine::new();
        let contact = Contact::new()
            .disposition("interested")
            .notes("interested, urgent, ready to buy")
            .tags(vec!["enterprise".to_string(), "tech".to_string()]);

        let result = engine.recommend(&contact, &[]);
        assert!((1..=3).contains(&result.len()));
    }

    #[test]
    fn test_disposition_rules_lead_the_list() {
        let engine = RecommendationEngine::new();
        let contact = Contact::new().disposition("interested");

        let result = engine.recommend(&contact, &[]);
        assert_eq!(
            result,
            vec![
                "Send follow-up email with product info",
                "Schedule demo call",
            ]
        );
    }

    #[test]
    fn test_status_fallback_variants() {
        let engine = RecommendationEngine::new();

        let fresh = Contact::new().status("pending");
        assert_eq!(engine.recommend(&fresh, &[]), vec!["Initial contact needed"]);

        let called = Contact::new().status("pending").last_call_at(Utc::now());
        assert_eq!(engine.recommend(&called, &[]), vec!["Follow-up required"]);

        let contacted = Contact::new().status("contacted");
        assert_eq!(engine.recommend(&contacted, &[]), vec!["No follow-up needed"]);
    }

    #[test]
    fn test_matched_automation_contributes_label() {
        let engine = RecommendationEngine::new();
        let contact = Contact::new().disposition("no-answer");
        let automations = vec![
            Automation::new("send_sms")
                .named("Send SMS")
                .delay(2.0, "days")
                .conditions(TriggerConditions::for_disposition("no-answer")),
            Automation::new("send_email")
                .named("Send email")
                .conditions(TriggerConditions::for_disposition("interested")),
        ];

        let result = engine.recommend(&contact, &automations);
        assert_eq!(result, vec!["Send SMS in 2 days"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let engine = RecommendationEngine::new();
        let contact = Contact::new().disposition("callback");
        let automations = vec![Automation::new("schedule_callback")
            .named("Schedule callback as requested")
            .conditions(TriggerConditions::for_disposition("callback"))];

        let result = engine.recommend(&contact, &automations);
        assert_eq!(
            result,
            vec![
                "Schedule callback as requested",
                "Set reminder for callback time",
            ]
        );
    }

    #[test]
    fn test_custom_config_cap_and_sentinel() {
        let mut config = EngineConfig::default();
        config.limits.max_recommendations = 1;
        config.limits.no_action_label = "All quiet".to_string();
        let engine = RecommendationEngine::with_config(Arc::new(config));

        let contact = Contact::new().disposition("interested");
        assert_eq!(
            engine.recommend(&contact, &[]),
            vec!["Send follow-up email with product info"]
        );

        assert_eq!(engine.recommend(&Contact::new(), &[]), vec!["All quiet"]);
    }
}
