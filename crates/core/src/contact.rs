//! Contact records as supplied by the data layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A call recipient. The engine only reads snapshots; edits belong to the
/// owning UI or data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Contact ID (if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Explicit full name, preferred over first/last when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Primary service area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area: Option<String>,

    /// Secondary service area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area2: Option<String>,

    /// Tertiary service area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_area3: Option<String>,

    /// Free-form custom field 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom1: Option<String>,

    /// Free-form custom field 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom2: Option<String>,

    /// Free-form custom field 3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom3: Option<String>,

    /// Free-text agent notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Disposition id from the last call, references the fixed catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_id: Option<String>,

    /// String tags; order irrelevant, duplicates not meaningful
    #[serde(default)]
    pub tags: Vec<String>,

    /// Workflow status (e.g. "pending", "contacted")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Timestamp of the most recent call, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_call_at: Option<DateTime<Utc>>,

    /// Recorded sentiment label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,

    /// Duration of the last call in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_duration: Option<f64>,

    /// Text of the contact's last reply, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reply: Option<String>,
}

impl Contact {
    /// Create a new empty contact
    pub fn new() -> Self {
        Self {
            id: None,
            first_name: None,
            last_name: None,
            name: None,
            email: None,
            phone: None,
            company: None,
            title: None,
            city: None,
            province: None,
            address: None,
            postal_code: None,
            service_area: None,
            service_area2: None,
            service_area3: None,
            custom1: None,
            custom2: None,
            custom3: None,
            notes: None,
            disposition_id: None,
            tags: Vec::new(),
            status: None,
            last_call_at: None,
            sentiment: None,
            call_duration: None,
            last_reply: None,
        }
    }

    /// Create a contact with first and last name
    pub fn with_name(first: impl Into<String>, last: impl Into<String>) -> Self {
        let mut contact = Self::new();
        contact.first_name = Some(first.into());
        contact.last_name = Some(last.into());
        contact
    }

    /// Set email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set phone number
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set company
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set city
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set free-text notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set disposition id
    pub fn disposition(mut self, disposition_id: impl Into<String>) -> Self {
        self.disposition_id = Some(disposition_id.into());
        self
    }

    /// Set tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set workflow status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set sentiment label
    pub fn sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Set last call timestamp
    pub fn last_call_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_call_at = Some(at);
        self
    }

    /// Full display name: the explicit name when non-empty, else first and
    /// last joined and trimmed. Empty when nothing is set.
    pub fn full_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                return name.to_string();
            }
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }

    /// Whether this contact is still awaiting the first outreach attempt
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some("pending")
    }

    /// Whether any call has been logged for this contact
    pub fn has_been_called(&self) -> bool {
        self.last_call_at.is_some()
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}
