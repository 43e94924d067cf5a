//! Automation rules and their trigger condition bags

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user-configured follow-up rule: trigger conditions plus a recommended
/// action with an optional delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Automation {
    /// Automation ID (if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, preferred over the action type in labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Action type key (e.g. "send_sms", "schedule_call")
    pub action_type: String,

    /// Conditions that make this automation fire
    #[serde(default)]
    pub trigger_conditions: TriggerConditions,

    /// Delay before the action, zero for immediate
    #[serde(default)]
    pub delay_amount: f64,

    /// Unit for the delay (e.g. "hours", "days")
    #[serde(default)]
    pub delay_unit: String,
}

impl Automation {
    /// Create an automation with just an action type
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            action_type: action_type.into(),
            trigger_conditions: TriggerConditions::default(),
            delay_amount: 0.0,
            delay_unit: String::new(),
        }
    }

    /// Set display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the delay
    pub fn delay(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.delay_amount = amount;
        self.delay_unit = unit.into();
        self
    }

    /// Set the trigger conditions
    pub fn conditions(mut self, conditions: TriggerConditions) -> Self {
        self.trigger_conditions = conditions;
        self
    }

    /// Label this automation contributes when it matches. The display name
    /// wins over the action type; the delay suffix appears only for
    /// strictly positive delays.
    pub fn recommendation_label(&self) -> String {
        let base = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.action_type);
        if self.delay_amount > 0.0 {
            format!(
                "{} in {} {}",
                base,
                format_delay(self.delay_amount),
                self.delay_unit
            )
        } else {
            base.to_string()
        }
    }
}

/// Whole-number delays print without a decimal point
fn format_delay(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// The optional predicate bag attached to an automation. Each field is
/// independently absent; an absent field means the predicate does not
/// apply, never that it fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConditions {
    /// Exact match on the contact's disposition id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_id: Option<String>,

    /// Match on the derived disposition category key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_category: Option<String>,

    /// Case-insensitive substring of the contact's notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_keyword: Option<String>,

    /// Overlap with the contact's tags after normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagValue>,

    /// Exact match on the contact's sentiment label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,

    /// Minimum call duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_duration_min: Option<f64>,

    /// Maximum call duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_duration_max: Option<f64>,

    /// Case-insensitive substring of the contact's last reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_keyword: Option<String>,
}

impl TriggerConditions {
    /// Conditions matching a disposition id
    pub fn for_disposition(id: impl Into<String>) -> Self {
        Self {
            disposition_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Conditions matching any of the given tags
    pub fn for_tags(tags: Vec<String>) -> Self {
        Self {
            tags: Some(TagValue::from_tags(tags)),
            ..Self::default()
        }
    }
}

/// Tag condition value as persisted. Stored automations carry tags either
/// as a JSON list or as a single string (itself possibly a serialized list
/// or a comma-separated run); anything else normalizes to no tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// A proper list; elements are stringified individually
    List(Vec<Value>),
    /// A single string, parsed leniently
    Single(String),
    /// Any other shape
    Other(Value),
}

impl TagValue {
    /// Build from an already-clean tag list
    pub fn from_tags(tags: Vec<String>) -> Self {
        TagValue::List(tags.into_iter().map(Value::String).collect())
    }

    /// Normalize to a flat tag set. Lists stringify each element; a single
    /// string is first tried as a JSON array, then split on commas with
    /// empty pieces dropped; other shapes yield no tags.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            TagValue::List(items) => items.iter().map(stringify_tag).collect(),
            TagValue::Single(raw) => parse_tag_string(raw),
            TagValue::Other(_) => Vec::new(),
        }
    }
}

fn stringify_tag(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_tag_string(raw: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return items.iter().map(stringify_tag).collect();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
