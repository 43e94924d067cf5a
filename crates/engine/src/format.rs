//! Script block formatting
//!
//! Classifies rendered plain-text scripts into display blocks, and injects
//! styling hooks into rendered HTML. The presentation layer maps each block
//! kind to its own visual treatment.

use serde::{Deserialize, Serialize};

/// Section labels that make a line a heading on their own
const SCRIPT_SECTION_KEYWORDS: [&str; 9] = [
    "introduction",
    "greeting",
    "opening",
    "pitch",
    "objection",
    "rebuttal",
    "closing",
    "wrap-up",
    "voicemail",
];

/// Lead-ins that mark a line as a quoted rebuttal
const REBUTTAL_INTROS: [&str; 4] = ["if they say", "if customer says", "response:", "rebuttal:"];

/// Longest "Label:" line still treated as a heading
const MAX_HEADING_LEN: usize = 40;

/// One classified line of a plain-text script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptBlock {
    /// Section heading
    Heading(String),
    /// Objection-handling line, displayed quoted
    QuotedRebuttal(String),
    /// Blank separator
    Blank,
    /// Normal paragraph line
    Paragraph(String),
}

/// Classify each line of a plain-text script
pub fn format_script(text: &str) -> Vec<ScriptBlock> {
    text.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> ScriptBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ScriptBlock::Blank;
    }

    let lower = trimmed.to_lowercase();
    if is_heading(trimmed, &lower) {
        return ScriptBlock::Heading(trimmed.to_string());
    }
    if REBUTTAL_INTROS
        .iter()
        .any(|intro| lower.starts_with(intro))
    {
        return ScriptBlock::QuotedRebuttal(trimmed.to_string());
    }
    ScriptBlock::Paragraph(trimmed.to_string())
}

/// Heading when the line is an all-caps label ending in ':', a short
/// "Label:" line, or one of the fixed section keywords on its own.
fn is_heading(trimmed: &str, lower: &str) -> bool {
    if let Some(label) = trimmed.strip_suffix(':') {
        if !label.is_empty() && label == label.to_uppercase() {
            return true;
        }
        if trimmed.len() <= MAX_HEADING_LEN {
            return true;
        }
    }
    SCRIPT_SECTION_KEYWORDS
        .iter()
        .any(|keyword| lower == *keyword || lower == format!("{keyword}:"))
}

/// Inject styling hooks into rendered HTML. Only `<strong>` and
/// `<blockquote>` are touched; all other markup passes through unchanged.
pub fn decorate_html(html: &str) -> String {
    html.replace("<strong>", "<strong class=\"script-emphasis\">")
        .replace("<blockquote>", "<blockquote class=\"script-rebuttal\">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(format_script(""), vec![]);
        assert_eq!(format_script("   "), vec![ScriptBlock::Blank]);
    }

    #[test]
    fn test_all_caps_heading() {
        let blocks = format_script("OPENING PITCH:");
        assert_eq!(
            blocks,
            vec![ScriptBlock::Heading("OPENING PITCH:".to_string())]
        );
    }

    #[test]
    fn test_short_label_heading() {
        let blocks = format_script("Next steps:");
        assert_eq!(blocks, vec![ScriptBlock::Heading("Next steps:".to_string())]);
    }

    #[test]
    fn test_long_label_is_paragraph() {
        let line = "This sentence is much too long to be treated as a heading label:";
        let blocks = format_script(line);
        assert_eq!(blocks, vec![ScriptBlock::Paragraph(line.to_string())]);
    }

    #[test]
    fn test_section_keyword_heading() {
        assert_eq!(
            format_script("Voicemail"),
            vec![ScriptBlock::Heading("Voicemail".to_string())]
        );
        assert_eq!(
            format_script("rebuttal:"),
            vec![ScriptBlock::Heading("rebuttal:".to_string())]
        );
    }

    #[test]
    fn test_rebuttal_intro_line() {
        let line = "If they say it's too expensive, mention the trial.";
        assert_eq!(
            format_script(line),
            vec![ScriptBlock::QuotedRebuttal(line.to_string())]
        );

        let line = "Rebuttal: we include onboarding at no charge.";
        assert_eq!(
            format_script(line),
            vec![ScriptBlock::QuotedRebuttal(line.to_string())]
        );
    }

    #[test]
    fn test_mixed_script() {
        let script = "GREETING:\nHi, this is Dana from Acme.\n\nIf they say no thanks, offer the newsletter.";
        let blocks = format_script(script);
        assert_eq!(
            blocks,
            vec![
                ScriptBlock::Heading("GREETING:".to_string()),
                ScriptBlock::Paragraph("Hi, this is Dana from Acme.".to_string()),
                ScriptBlock::Blank,
                ScriptBlock::QuotedRebuttal(
                    "If they say no thanks, offer the newsletter.".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_decorate_html() {
        let html = "<p>Hi</p><strong>now</strong><blockquote>quote</blockquote>";
        let decorated = decorate_html(html);
        assert_eq!(
            decorated,
            "<p>Hi</p><strong class=\"script-emphasis\">now</strong>\
             <blockquote class=\"script-rebuttal\">quote</blockquote>"
        );
    }

    #[test]
    fn test_decorate_html_leaves_other_markup() {
        let html = "<em>soft</em> and <strong class=\"x\">already classed</strong>";
        assert_eq!(decorate_html(html), html);
    }
}
