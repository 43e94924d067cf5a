//! Campaign records and their service-area fallbacks

use serde::{Deserialize, Serialize};

/// A calling campaign. Geography fields double as fallback values for
/// contacts that lack their own value for the same semantic field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign ID (if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Campaign display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Assigned agent display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,

    /// Assigned agent id, used when no display name is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    /// Outbound caller id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,

    /// Callback number, falls back to the caller id when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_number: Option<String>,

    /// City override for contacts without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Province override for contacts without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// Primary service area override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area: Option<String>,

    /// Secondary service area override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area2: Option<String>,

    /// Tertiary service area override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area3: Option<String>,
}

impl Campaign {
    /// Create a new empty campaign
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            agent_name: None,
            agent_id: None,
            caller_id: None,
            callback_number: None,
            city: None,
            province: None,
            service_area: None,
            service_area2: None,
            service_area3: None,
        }
    }

    /// Create a campaign with a display name
    pub fn named(name: impl Into<String>) -> Self {
        let mut campaign = Self::new();
        campaign.name = Some(name.into());
        campaign
    }

    /// Set agent display name
    pub fn agent(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Set agent id
    pub fn agent_id(mut self, id: impl Into<String>) -> Self {
        self.agent_id = Some(id.into());
        self
    }

    /// Set outbound caller id
    pub fn caller_id(mut self, number: impl Into<String>) -> Self {
        self.caller_id = Some(number.into());
        self
    }

    /// Set callback number
    pub fn callback_number(mut self, number: impl Into<String>) -> Self {
        self.callback_number = Some(number.into());
        self
    }

    /// Set city override
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_builder() {
        let campaign = Campaign::named("Spring Outreach")
            .agent("Dana")
            .caller_id("+15125550100")
            .city("Austin");

        assert_eq!(campaign.name.as_deref(), Some("Spring Outreach"));
        assert_eq!(campaign.agent_name.as_deref(), Some("Dana"));
        assert_eq!(campaign.city.as_deref(), Some("Austin"));
        assert!(campaign.callback_number.is_none());
    }
}
