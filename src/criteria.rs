//! Acceptance-criteria extraction from story descriptions.

use std::sync::LazyLock;

use regex::Regex;

use crate::adf::{Description, convert_adf_to_text};

/// Section headings, tried in order. The longer phrase comes first so a
/// shorter prefix never claims its section.
static HEADINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)acceptance criteria:?\s*\n",
        r"(?i)ac:?\s*\n",
        r"(?i)acceptance:?\s*\n",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("heading pattern is valid"))
    .collect()
});

/// Gherkin step keywords; a line opening with one continues the section.
///
/// This departs on purpose from a plain upper-case cut, which would stop
/// `Given X\nWhen Y` after its first step.
const STEP_KEYWORDS: &[&str] = &["Given", "When", "Then", "And", "But"];

/// Extract the acceptance criteria from an issue description.
///
/// Returns an empty string for an absent or empty description, the labeled
/// section when one is found, and the whole converted text otherwise.
pub fn extract_acceptance_criteria(description: Option<&Description>) -> String {
    let Some(description) = description else {
        return String::new();
    };
    extract_from_text(&convert_adf_to_text(Some(description)))
}

/// Same as [`extract_acceptance_criteria`] for text that is already plain.
pub fn extract_from_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    for heading in HEADINGS.iter() {
        let Some(found) = heading.find(text) else {
            continue;
        };
        let start = found.end();
        let section = &text[start..section_end(text, start)];
        if !section.is_empty() {
            return section.trim().to_string();
        }
    }

    text.to_string()
}

/// Byte offset where the section starting at `start` stops: the first blank
/// line, the first line opening with an upper-case letter, or end of text.
fn section_end(text: &str, start: usize) -> usize {
    let rest = &text[start..];
    for (offset, _) in rest.match_indices('\n') {
        let next_line = &rest[offset + 1..];
        if next_line.starts_with('\n') || opens_new_section(next_line) {
            return start + offset;
        }
    }
    text.len()
}

// Upper-case first letter ends the section, which can cut a sentence short.
fn opens_new_section(line: &str) -> bool {
    match line.chars().next() {
        Some(c) if c.is_ascii_uppercase() => !is_step_line(line),
        _ => false,
    }
}

fn is_step_line(line: &str) -> bool {
    STEP_KEYWORDS.iter().any(|keyword| {
        line.strip_prefix(keyword)
            .is_some_and(|tail| !tail.starts_with(|c: char| c.is_alphanumeric()))
    })
}
