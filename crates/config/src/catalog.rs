//! Fixed recommendation catalogs
//!
//! The literal tables behind the recommendation engine: per-disposition
//! follow-up rules, the notes keyword sets, the tag groups, and the
//! disposition catalog itself. Defaults carry the shipped tables; every
//! section can be overridden from a config file.

use outreach_core::{Disposition, DispositionCategory};
use serde::{Deserialize, Serialize};

/// Follow-up recommendation literals keyed by disposition id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispositionRules {
    /// Recommendations for the "interested" disposition
    #[serde(default = "default_interested_rules")]
    pub interested: Vec<String>,

    /// Recommendations for the "callback" disposition
    #[serde(default = "default_callback_rules")]
    pub callback: Vec<String>,

    /// Recommendations for the "not-interested" disposition
    #[serde(default = "default_not_interested_rules")]
    pub not_interested: Vec<String>,
}

impl DispositionRules {
    /// Recommendations for a disposition id. Unknown ids contribute nothing.
    pub fn for_disposition(&self, id: &str) -> &[String] {
        match id {
            "interested" => &self.interested,
            "callback" => &self.callback,
            "not-interested" => &self.not_interested,
            _ => &[],
        }
    }
}

fn default_interested_rules() -> Vec<String> {
    vec![
        "Send follow-up email with product info".to_string(),
        "Schedule demo call".to_string(),
    ]
}

fn default_callback_rules() -> Vec<String> {
    vec![
        "Schedule callback as requested".to_string(),
        "Set reminder for callback time".to_string(),
    ]
}

fn default_not_interested_rules() -> Vec<String> {
    vec![
        "Add to nurture campaign".to_string(),
        "Revisit in 90 days".to_string(),
    ]
}

impl Default for DispositionRules {
    fn default() -> Self {
        Self {
            interested: default_interested_rules(),
            callback: default_callback_rules(),
            not_interested: default_not_interested_rules(),
        }
    }
}

/// One notes keyword set: match terms plus the recommendations it contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    /// Lowercase substrings tested against the lowercased notes
    pub keywords: Vec<String>,
    /// Recommendations contributed when any keyword matches
    pub recommendations: Vec<String>,
}

impl KeywordSet {
    /// Whether any keyword appears in the already-lowercased text
    pub fn matches(&self, lower_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lower_text.contains(keyword.as_str()))
    }
}

/// The four notes keyword sets. Sets fire independently; several can match
/// the same notes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesKeywords {
    /// Buying-interest language
    #[serde(default = "default_positive_set")]
    pub positive: KeywordSet,

    /// Rejection or friction language
    #[serde(default = "default_negative_set")]
    pub negative: KeywordSet,

    /// Time-pressure language
    #[serde(default = "default_urgency_set")]
    pub urgency: KeywordSet,

    /// Purchase-decision language
    #[serde(default = "default_decision_set")]
    pub decision: KeywordSet,
}

impl NotesKeywords {
    /// The sets in evaluation order, with their names for logging
    pub fn sets(&self) -> [(&'static str, &KeywordSet); 4] {
        [
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("urgency", &self.urgency),
            ("decision", &self.decision),
        ]
    }
}

fn default_positive_set() -> KeywordSet {
    KeywordSet {
        keywords: vec![
            "interested".to_string(),
            "great".to_string(),
            "good".to_string(),
            "yes".to_string(),
            "positive".to_string(),
        ],
        recommendations: vec![
            "High priority - send proposal".to_string(),
            "Schedule decision-maker call".to_string(),
        ],
    }
}

fn default_negative_set() -> KeywordSet {
    KeywordSet {
        keywords: vec![
            "not interested".to_string(),
            "no".to_string(),
            "busy".to_string(),
            "angry".to_string(),
            "remove".to_string(),
        ],
        recommendations: vec![
            "Address concerns in follow-up email".to_string(),
            "Offer alternative options".to_string(),
        ],
    }
}

fn default_urgency_set() -> KeywordSet {
    KeywordSet {
        keywords: vec![
            "urgent".to_string(),
            "asap".to_string(),
            "soon".to_string(),
            "quickly".to_string(),
            "immediately".to_string(),
        ],
        recommendations: vec![
            "Fast-track this lead".to_string(),
            "Call back within 24 hours".to_string(),
        ],
    }
}

fn default_decision_set() -> KeywordSet {
    KeywordSet {
        keywords: vec![
            "buy".to_string(),
            "purchase".to_string(),
            "decision".to_string(),
            "contract".to_string(),
            "pricing".to_string(),
        ],
        recommendations: vec![
            "Send pricing and contract details".to_string(),
            "Loop in sales manager".to_string(),
        ],
    }
}

impl Default for NotesKeywords {
    fn default() -> Self {
        Self {
            positive: default_positive_set(),
            negative: default_negative_set(),
            urgency: default_urgency_set(),
            decision: default_decision_set(),
        }
    }
}

/// One tag group: member tags plus the single recommendation it contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Lowercase member tags
    pub tags: Vec<String>,
    /// Recommendation contributed when any contact tag is a member
    pub recommendation: String,
}

impl TagGroup {
    /// Whether any of the already-lowercased contact tags is a member
    pub fn matches(&self, lower_tags: &[String]) -> bool {
        lower_tags
            .iter()
            .any(|tag| self.tags.iter().any(|member| member == tag))
    }
}

/// The three tag groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroups {
    /// Account-value tags
    #[serde(default = "default_high_value_group")]
    pub high_value: TagGroup,

    /// Industry vertical tags
    #[serde(default = "default_industry_group")]
    pub industry: TagGroup,

    /// Pipeline stage tags
    #[serde(default = "default_pipeline_group")]
    pub pipeline: TagGroup,
}

impl TagGroups {
    /// The groups in evaluation order, with their names for logging
    pub fn groups(&self) -> [(&'static str, &TagGroup); 3] {
        [
            ("high_value", &self.high_value),
            ("industry", &self.industry),
            ("pipeline", &self.pipeline),
        ]
    }
}

fn default_high_value_group() -> TagGroup {
    TagGroup {
        tags: vec![
            "enterprise".to_string(),
            "vip".to_string(),
            "high-value".to_string(),
            "key-account".to_string(),
            "priority".to_string(),
        ],
        recommendation: "High-value account - immediate follow-up".to_string(),
    }
}

fn default_industry_group() -> TagGroup {
    TagGroup {
        tags: vec![
            "healthcare".to_string(),
            "finance".to_string(),
            "tech".to_string(),
            "retail".to_string(),
            "manufacturing".to_string(),
        ],
        recommendation: "Send industry-specific case study".to_string(),
    }
}

fn default_pipeline_group() -> TagGroup {
    TagGroup {
        tags: vec![
            "prospect".to_string(),
            "qualified".to_string(),
            "negotiation".to_string(),
            "closing".to_string(),
        ],
        recommendation: "Check pipeline stage progress and advance deal".to_string(),
    }
}

impl Default for TagGroups {
    fn default() -> Self {
        Self {
            high_value: default_high_value_group(),
            industry: default_industry_group(),
            pipeline: default_pipeline_group(),
        }
    }
}

/// The fixed disposition catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispositionCatalog {
    #[serde(default = "default_dispositions")]
    pub dispositions: Vec<Disposition>,
}

impl DispositionCatalog {
    /// Look up a disposition by id
    pub fn get(&self, id: &str) -> Option<&Disposition> {
        self.dispositions.iter().find(|d| d.id == id)
    }

    /// Display name for an id, if known
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }
}

fn default_dispositions() -> Vec<Disposition> {
    vec![
        Disposition {
            id: "interested".to_string(),
            name: "Interested".to_string(),
            category: DispositionCategory::Positive,
            description: "Contact showed buying interest".to_string(),
        },
        Disposition {
            id: "callback".to_string(),
            name: "Callback Requested".to_string(),
            category: DispositionCategory::Callback,
            description: "Contact asked to be called back".to_string(),
        },
        Disposition {
            id: "not-interested".to_string(),
            name: "Not Interested".to_string(),
            category: DispositionCategory::Negative,
            description: "Contact declined the offer".to_string(),
        },
        Disposition {
            id: "no-answer".to_string(),
            name: "No Answer".to_string(),
            category: DispositionCategory::Neutral,
            description: "Call was not answered".to_string(),
        },
        Disposition {
            id: "voicemail".to_string(),
            name: "Voicemail".to_string(),
            category: DispositionCategory::Neutral,
            description: "Left a voicemail".to_string(),
        },
        Disposition {
            id: "wrong-number".to_string(),
            name: "Wrong Number".to_string(),
            category: DispositionCategory::Neutral,
            description: "Number does not reach the contact".to_string(),
        },
        Disposition {
            id: "do-not-call".to_string(),
            name: "Do Not Call".to_string(),
            category: DispositionCategory::Neutral,
            description: "Contact asked not to be called again".to_string(),
        },
    ]
}

impl Default for DispositionCatalog {
    fn default() -> Self {
        Self {
            dispositions: default_dispositions(),
        }
    }
}

/// Output limits for the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineLimits {
    /// Cap on the deduplicated recommendation list
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Sentinel returned when nothing matched
    #[serde(default = "default_no_action_label")]
    pub no_action_label: String,
}

fn default_max_recommendations() -> usize {
    3
}

fn default_no_action_label() -> String {
    "No follow-up needed".to_string()
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            no_action_label: default_no_action_label(),
        }
    }
}
