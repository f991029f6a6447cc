//! Import orchestration: validation, advisory warnings and error wording
//!
//! Warnings never block an import. Only the parse failures named in
//! [`crate::errors::CurlkitError`] produce an unsuccessful [`ImportResult`].

use once_cell::sync::Lazy;
use tracing::debug;

use super::parser::parse_curl_command;
use crate::models::{BodyType, Header, ImportResult, ParsedCurlRequest};

const EMPTY_INPUT_ERROR: &str = "Invalid input: cURL command must be a non-empty string";

/// Internal error fragments and the text shown to users instead
static ERROR_MESSAGES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        (
            "Command must start with \"curl\"",
            "Please paste a valid cURL command starting with \"curl\"",
        ),
        ("No URL found", "Could not find a valid URL in the cURL command"),
        ("cURL command is empty", "Please paste a cURL command"),
        ("Invalid JSON format", "The request body contains invalid JSON"),
    ]
});

/// Import a pasted curl command
pub fn handle_curl_import(command: &str) -> ImportResult {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return ImportResult::err(EMPTY_INPUT_ERROR);
    }

    let parsed = match parse_curl_command(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(error = %e, "curl import failed");
            return ImportResult::err(e.to_string());
        }
    };

    let warnings = collect_warnings(&parsed);
    for warning in &warnings {
        debug!(warning = %warning, "Import warning");
    }

    ImportResult::ok(parsed, warnings)
}

/// Advisory checks on an otherwise valid import
pub fn collect_warnings(parsed: &ParsedCurlRequest) -> Vec<String> {
    let mut warnings = Vec::new();

    let duplicates = duplicate_header_keys(&parsed.headers);
    if !duplicates.is_empty() {
        warnings.push(format!("Note: Duplicate headers found: {}", duplicates.join(", ")));
    }

    if parsed.body.body_type == BodyType::Json && !parsed.body.validation.is_valid {
        warnings.push("Note: Request body contains invalid JSON syntax".to_string());
    }

    warnings
}

/// Lowercased header names that occur more than once, each listed once
fn duplicate_header_keys(headers: &[Header]) -> Vec<String> {
    let keys: Vec<String> = headers.iter().map(|h| h.key.to_lowercase()).collect();
    let mut duplicates: Vec<String> = Vec::new();

    for (index, key) in keys.iter().enumerate() {
        let first = keys.iter().position(|k| k == key);
        if first != Some(index) && !duplicates.contains(key) {
            duplicates.push(key.clone());
        }
    }

    duplicates
}

/// Rewrite known internal errors into user-facing wording
pub fn format_import_error(error: &str) -> String {
    ERROR_MESSAGES
        .iter()
        .find(|(pattern, _)| error.contains(pattern))
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// Render warnings as a single banner text
pub fn format_warnings(warnings: &[String]) -> String {
    match warnings {
        [] => String::new(),
        [single] if single.starts_with("Note:") => single.clone(),
        [single] => format!("Note: {}", single),
        many => {
            let lines: Vec<String> = many
                .iter()
                .map(|w| format!("• {}", w.strip_prefix("Note: ").unwrap_or(w)))
                .collect();
            format!("Notes:\n{}", lines.join("\n"))
        }
    }
}
