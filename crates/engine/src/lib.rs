//! Personalization and follow-up recommendation engine
//!
//! Two cooperating subsystems, both pure functions of their inputs:
//! - Template rendering: substitutes `{{variable}}` / `[variable]`
//!   placeholders from contact and campaign context, plus content-type
//!   detection and script block formatting for the rendered output
//! - Recommendations: combines disposition rules, notes and tag
//!   heuristics, and automation trigger evaluation into a ranked,
//!   deduplicated follow-up list
//!
//! Neither subsystem performs I/O or holds shared mutable state; callers
//! re-invoke after any contact, campaign, or automation change.

pub mod conditions;
pub mod format;
pub mod heuristics;
pub mod recommend;
pub mod template;

pub use conditions::matches;
pub use format::{decorate_html, format_script, ScriptBlock};
pub use recommend::RecommendationEngine;
pub use template::{looks_like_html, render, TemplateRenderer};
