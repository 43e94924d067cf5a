//! Call disposition categories

use serde::{Deserialize, Serialize};

/// Coarse valence category for a call disposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispositionCategory {
    /// Contact showed buying interest
    Positive,
    /// Contact asked to be called back
    Callback,
    /// Contact declined
    Negative,
    /// Everything else (no answer, voicemail, wrong number, ...)
    Neutral,
}

impl DispositionCategory {
    /// Category for a disposition id. Pure lookup; unknown ids are neutral.
    pub fn for_id(id: &str) -> Self {
        match id {
            "interested" => DispositionCategory::Positive,
            "callback" => DispositionCategory::Callback,
            "not-interested" => DispositionCategory::Negative,
            _ => DispositionCategory::Neutral,
        }
    }

    /// Category for an optional disposition id. Absent ids are neutral.
    pub fn for_optional_id(id: Option<&str>) -> Self {
        id.map(Self::for_id).unwrap_or(DispositionCategory::Neutral)
    }

    /// Stable lowercase key, matching trigger condition values
    pub fn as_str(&self) -> &'static str {
        match self {
            DispositionCategory::Positive => "positive",
            DispositionCategory::Callback => "callback",
            DispositionCategory::Negative => "negative",
            DispositionCategory::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for DispositionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the fixed disposition catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disposition {
    /// Stable id referenced by contacts and trigger conditions
    pub id: String,
    /// Display name
    pub name: String,
    /// Coarse category
    pub category: DispositionCategory,
    /// Agent-facing description
    #[serde(default)]
    pub description: String,
}
