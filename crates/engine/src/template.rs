//! Script template rendering
//!
//! Substitutes `{{variable}}` and `[variable]` placeholders from contact
//! and campaign context. Rendering is total: missing records and empty
//! fields never fail, they surface as bracketed `[variableName]` markers.

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use outreach_core::{Campaign, Contact};
use regex::{NoExpand, Regex};

/// Everything a variable resolver can read
struct RenderScope<'a> {
    contact: Option<&'a Contact>,
    campaign: Option<&'a Campaign>,
    now: DateTime<Local>,
}

/// Compiled template variable with its placeholder pattern and resolver
struct CompiledVariable {
    name: &'static str,
    regex: Regex,
    resolve: fn(&RenderScope) -> String,
}

/// Both placeholder forms for one variable, case-insensitive, with
/// optional internal whitespace
fn variable(name: &'static str, resolve: fn(&RenderScope) -> String) -> CompiledVariable {
    let escaped = regex::escape(name);
    let pattern = format!(r"(?i)(\{{\{{\s*{escaped}\s*\}}\}}|\[\s*{escaped}\s*\])");
    CompiledVariable {
        name,
        regex: Regex::new(&pattern).unwrap(),
        resolve,
    }
}

fn contact_field(scope: &RenderScope, get: fn(&Contact) -> Option<&str>) -> String {
    scope
        .contact
        .and_then(get)
        .unwrap_or("")
        .to_string()
}

/// Contact field with a per-campaign fallback. Empty contact values fall
/// through to the campaign override.
fn contact_or_campaign(
    scope: &RenderScope,
    from_contact: fn(&Contact) -> Option<&str>,
    from_campaign: fn(&Campaign) -> Option<&str>,
) -> String {
    scope
        .contact
        .and_then(from_contact)
        .filter(|value| !value.is_empty())
        .or_else(|| scope.campaign.and_then(from_campaign))
        .unwrap_or("")
        .to_string()
}

fn campaign_field(scope: &RenderScope, get: fn(&Campaign) -> Option<&str>) -> String {
    scope
        .campaign
        .and_then(get)
        .unwrap_or("")
        .to_string()
}

/// Campaign field with an in-campaign fallback (e.g. agent name falls back
/// to agent id)
fn campaign_field_or(
    scope: &RenderScope,
    primary: fn(&Campaign) -> Option<&str>,
    fallback: fn(&Campaign) -> Option<&str>,
) -> String {
    scope
        .campaign
        .and_then(primary)
        .filter(|value| !value.is_empty())
        .or_else(|| scope.campaign.and_then(fallback))
        .unwrap_or("")
        .to_string()
}

/// Phase 1: contact variables, each with its fallback chain
static CONTACT_VARIABLES: Lazy<Vec<CompiledVariable>> = Lazy::new(|| {
    let variables = vec![
        variable("firstName", |s| {
            contact_field(s, |c| c.first_name.as_deref())
        }),
        variable("lastName", |s| contact_field(s, |c| c.last_name.as_deref())),
        variable("fullName", |s| {
            s.contact.map(Contact::full_name).unwrap_or_default()
        }),
        variable("email", |s| contact_field(s, |c| c.email.as_deref())),
        variable("phone", |s| contact_field(s, |c| c.phone.as_deref())),
        variable("company", |s| contact_field(s, |c| c.company.as_deref())),
        variable("title", |s| contact_field(s, |c| c.title.as_deref())),
        variable("city", |s| {
            contact_or_campaign(s, |c| c.city.as_deref(), |p| p.city.as_deref())
        }),
        variable("state", |s| {
            contact_or_campaign(s, |c| c.province.as_deref(), |p| p.province.as_deref())
        }),
        variable("province", |s| {
            contact_or_campaign(s, |c| c.province.as_deref(), |p| p.province.as_deref())
        }),
        variable("address", |s| contact_field(s, |c| c.address.as_deref())),
        variable("postalCode", |s| {
            contact_field(s, |c| c.postal_code.as_deref())
        }),
        variable("serviceArea", |s| {
            contact_or_campaign(s, |c| c.service_area.as_deref(), |p| p.service_area.as_deref())
        }),
        variable("serviceArea2", |s| {
            contact_or_campaign(
                s,
                |c| c.service_area2.as_deref(),
                |p| p.service_area2.as_deref(),
            )
        }),
        variable("serviceArea3", |s| {
            contact_or_campaign(
                s,
                |c| c.service_area3.as_deref(),
                |p| p.service_area3.as_deref(),
            )
        }),
        variable("custom1", |s| contact_field(s, |c| c.custom1.as_deref())),
        variable("custom2", |s| contact_field(s, |c| c.custom2.as_deref())),
        variable("custom3", |s| contact_field(s, |c| c.custom3.as_deref())),
        variable("notes", |s| contact_field(s, |c| c.notes.as_deref())),
    ];
    tracing::debug!(count = variables.len(), "compiled contact variables");
    variables
});

/// Phase 2: campaign and render-time variables. Runs after phase 1 and
/// must not share names with it.
static CAMPAIGN_VARIABLES: Lazy<Vec<CompiledVariable>> = Lazy::new(|| {
    let variables = vec![
        variable("campaignName", |s| campaign_field(s, |p| p.name.as_deref())),
        variable("agentName", |s| {
            campaign_field_or(s, |p| p.agent_name.as_deref(), |p| p.agent_id.as_deref())
        }),
        variable("callerId", |s| {
            campaign_field(s, |p| p.caller_id.as_deref())
        }),
        variable("callbackNumber", |s| {
            campaign_field_or(
                s,
                |p| p.callback_number.as_deref(),
                |p| p.caller_id.as_deref(),
            )
        }),
        variable("currentDate", |s| s.now.format("%B %-d, %Y").to_string()),
        variable("currentTime", |s| s.now.format("%-I:%M %p").to_string()),
        variable("currentDay", |s| s.now.format("%A").to_string()),
    ];
    tracing::debug!(count = variables.len(), "compiled campaign variables");
    variables
});

fn substitute(text: &str, variable: &CompiledVariable, scope: &RenderScope) -> String {
    if !variable.regex.is_match(text) {
        return text.to_string();
    }
    let value = (variable.resolve)(scope);
    // Empty resolutions stay visible as a bracketed self-label
    let replacement = if value.is_empty() {
        format!("[{}]", variable.name)
    } else {
        value
    };
    variable
        .regex
        .replace_all(text, NoExpand(&replacement))
        .into_owned()
}

/// Renders script templates against contact and campaign context.
///
/// Stateless apart from an optional pinned timestamp for the date/time
/// variables; without one, rendering uses the wall clock.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    pinned_at: Option<DateTime<Local>>,
}

impl TemplateRenderer {
    /// Renderer using the wall clock
    pub fn new() -> Self {
        Self { pinned_at: None }
    }

    /// Pin the render timestamp, so date/time variables are deterministic
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.pinned_at = Some(timestamp);
        self
    }

    /// Substitute all known placeholders. Unknown variable names are left
    /// as literal text; this never fails.
    pub fn render(
        &self,
        template: &str,
        campaign: Option<&Campaign>,
        contact: Option<&Contact>,
    ) -> String {
        let scope = RenderScope {
            contact,
            campaign,
            now: self.pinned_at.unwrap_or_else(Local::now),
        };

        let mut output = template.to_string();
        for variable in CONTACT_VARIABLES.iter() {
            output = substitute(&output, variable, &scope);
        }
        for variable in CAMPAIGN_VARIABLES.iter() {
            output = substitute(&output, variable, &scope);
        }
        output
    }
}

/// Render with the wall clock
pub fn render(template: &str, campaign: Option<&Campaign>, contact: Option<&Contact>) -> String {
    TemplateRenderer::new().render(template, campaign, contact)
}

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[A-Za-z][^>]*>").unwrap());

/// Whether the text contains at least one HTML tag. Used to pick the
/// rich-HTML rendering strategy over plain-text block formatting.
pub fn looks_like_html(text: &str) -> bool {
    HTML_TAG.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_contact() -> Contact {
        Contact::with_name("Ana", "Silva")
            .email("ana@example.com")
            .phone("+15125550123")
            .company("Silva Roofing")
    }

    fn sample_campaign() -> Campaign {
        Campaign::named("Spring Outreach")
            .agent("Dana")
            .caller_id("+15125550100")
            .city("Austin")
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let text = "Hello there, no placeholders here.";
        assert_eq!(render(text, None, None), text);
    }

    #[test]
    fn test_dual_syntax_equivalence() {
        let contact = sample_contact();
        let curly = render("{{firstName}}", None, Some(&contact));
        let square = render("[firstName]", None, Some(&contact));
        assert_eq!(curly, "Ana");
        assert_eq!(curly, square);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let contact = sample_contact();
        for template in ["{{ FirstName }}", "{{firstName}}", "[ firstname ]"] {
            assert_eq!(render(template, None, Some(&contact)), "Ana");
        }
    }

    #[test]
    fn test_both_forms_replaced_in_same_pass() {
        let contact = sample_contact();
        let out = render("{{firstName}} and [firstName]", None, Some(&contact));
        assert_eq!(out, "Ana and Ana");
    }

    #[test]
    fn test_missing_value_renders_bracketed_label() {
        let contact = Contact::new();
        assert_eq!(render("{{city}}", None, Some(&contact)), "[city]");
        assert_eq!(render("[ CITY ]", None, Some(&contact)), "[city]");
    }

    #[test]
    fn test_city_falls_back_to_campaign() {
        let contact = Contact::new();
        let campaign = sample_campaign();
        assert_eq!(
            render("{{city}}", Some(&campaign), Some(&contact)),
            "Austin"
        );

        let contact = Contact::new().city("Dallas");
        assert_eq!(
            render("{{city}}", Some(&campaign), Some(&contact)),
            "Dallas"
        );
    }

    #[test]
    fn test_empty_contact_city_falls_back() {
        let contact = Contact::new().city("");
        let campaign = sample_campaign();
        assert_eq!(
            render("{{city}}", Some(&campaign), Some(&contact)),
            "Austin"
        );
    }

    #[test]
    fn test_full_name_join() {
        let contact = sample_contact();
        assert_eq!(render("{{fullName}}", None, Some(&contact)), "Ana Silva");

        let mut only_first = Contact::new();
        only_first.first_name = Some("Ana".to_string());
        assert_eq!(render("{{fullName}}", None, Some(&only_first)), "Ana");
    }

    #[test]
    fn test_unknown_variable_left_alone() {
        let contact = sample_contact();
        let out = render("Hi {{unknownVar}}!", None, Some(&contact));
        assert_eq!(out, "Hi {{unknownVar}}!");
    }

    #[test]
    fn test_agent_name_falls_back_to_agent_id() {
        let campaign = Campaign::named("Q3").agent_id("agent-42");
        assert_eq!(
            render("{{agentName}}", Some(&campaign), None),
            "agent-42"
        );

        let campaign = campaign.agent("Dana");
        assert_eq!(render("{{agentName}}", Some(&campaign), None), "Dana");
    }

    #[test]
    fn test_callback_number_falls_back_to_caller_id() {
        let campaign = Campaign::named("Q3").caller_id("+15125550100");
        assert_eq!(
            render("{{callbackNumber}}", Some(&campaign), None),
            "+15125550100"
        );
    }

    #[test]
    fn test_no_records_at_all() {
        let out = render("Hi {{firstName}} from {{campaignName}}", None, None);
        assert_eq!(out, "Hi [firstName] from [campaignName]");
    }

    #[test]
    fn test_pinned_clock_variables() {
        let pinned = Local.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let renderer = TemplateRenderer::new().at(pinned);

        assert_eq!(
            renderer.render("{{currentDate}}", None, None),
            "March 15, 2024"
        );
        assert_eq!(renderer.render("{{currentTime}}", None, None), "2:30 PM");
        assert_eq!(renderer.render("[currentDay]", None, None), "Friday");
    }

    #[test]
    fn test_replacement_value_is_literal() {
        let contact = Contact::new().notes("costs $100, see $1 coupon");
        let out = render("{{notes}}", None, Some(&contact));
        assert_eq!(out, "costs $100, see $1 coupon");
    }

    #[test]
    fn test_state_and_province_share_resolution() {
        let mut contact = Contact::new();
        contact.province = Some("Ontario".to_string());
        assert_eq!(render("{{state}}", None, Some(&contact)), "Ontario");
        assert_eq!(render("{{province}}", None, Some(&contact)), "Ontario");
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<p>Hello</p>"));
        assert!(looks_like_html("before <strong>bold</strong> after"));
        assert!(looks_like_html("<br/>"));
        assert!(!looks_like_html("plain text"));
        assert!(!looks_like_html("a < b and b > c"));
        assert!(!looks_like_html("[firstName] marker"));
    }
}
