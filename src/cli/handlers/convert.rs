use std::io::{self, Read};

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use crate::adf::{Description, convert_adf_to_text};
use crate::criteria::extract_acceptance_criteria;

/// Read a description from a file or stdin.
///
/// JSON input is taken as a Jira description field (ADF document or JSON
/// string); anything else is treated as plain text.
fn read_description(input: &str) -> Result<Description> {
    let content = if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read description from {}", input))?
    };

    Ok(serde_json::from_str::<Description>(&content).unwrap_or(Description::Text(content)))
}

pub fn handle_convert(input: String, json: bool) -> Result<()> {
    let description = read_description(&input)?;
    let text = convert_adf_to_text(Some(&description));
    let criteria = extract_acceptance_criteria(Some(&description));

    if json {
        let out = json!({
            "description": text,
            "acceptanceCriteria": criteria,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", "Description".bold());
        println!("{}\n", text);
        println!("{}", "Acceptance Criteria".bold());
        println!("{}", criteria);
    }
    Ok(())
}
