//! `{{variable}}` substitution for imported requests
//!
//! Imported commands often carry placeholders such as `{{baseUrl}}`. A
//! [`Variables`] set, built from `.env` files or `NAME=VALUE` pairs, fills
//! them in. Unknown placeholders are left untouched so the user can still
//! see and edit them.

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::curl::classify_body;
use crate::errors::{CurlkitError, Result};
use crate::models::{KeyValueItem, ParsedCurlRequest};

static VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("Invalid variable regex"));

/// `{{name}}` after URL parsing has percent-encoded the braces
static ENCODED_VARIABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)%7B%7B(.+?)%7D%7D").expect("Invalid encoded variable regex"));

/// Named values available for substitution
#[derive(Debug, Clone, Default)]
pub struct Variables {
    vars: HashMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a .env file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CurlkitError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse .env content
    pub fn parse(content: &str) -> Result<Self> {
        let mut vars = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match parse_env_line(line) {
                Some((key, value)) => {
                    vars.insert(key, value);
                }
                None => {
                    return Err(CurlkitError::Config(format!(
                        "Invalid .env syntax at line {}: {}",
                        line_num + 1,
                        line
                    )));
                }
            }
        }

        Ok(Self { vars })
    }

    /// Add a `NAME=VALUE` pair as given on the command line
    pub fn insert_pair(&mut self, pair: &str) -> Result<()> {
        let (name, value) = pair
            .split_once('=')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| CurlkitError::Argument(format!("Expected NAME=VALUE, got '{}'", pair)))?;
        self.set(name.trim(), value);
        Ok(())
    }

    /// Merge with another set (other takes precedence)
    pub fn merge(&mut self, other: &Variables) {
        for (key, value) in &other.vars {
            self.vars.insert(key.clone(), value.clone());
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Replace known `{{ name }}` placeholders in a string
    pub fn substitute(&self, text: &str) -> String {
        if self.vars.is_empty() || !has_variables(text) {
            return text.to_string();
        }

        VARIABLE_RE
            .replace_all(text, |caps: &Captures| {
                let name = caps[1].trim();
                match self.vars.get(name) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Replace placeholders in a URL, including percent-encoded ones
    pub fn substitute_url(&self, url: &str) -> String {
        if self.vars.is_empty() {
            return url.to_string();
        }

        let decoded = ENCODED_VARIABLE_RE.replace_all(url, |caps: &Captures| {
            let name = percent_decode_str(&caps[1]).decode_utf8_lossy();
            match self.vars.get(name.trim()) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        });

        self.substitute(&decoded)
    }

    /// Substitute placeholders throughout a parsed request
    ///
    /// The body is classified again from the substituted text so its parsed
    /// and formatted forms stay consistent with the raw payload.
    pub fn apply(&self, request: &ParsedCurlRequest) -> Result<ParsedCurlRequest> {
        if self.vars.is_empty() {
            return Ok(request.clone());
        }

        let substitute_rows = |rows: &[KeyValueItem]| -> Vec<KeyValueItem> {
            rows.iter()
                .map(|row| KeyValueItem {
                    key: self.substitute(&row.key),
                    value: self.substitute(&row.value),
                    ..row.clone()
                })
                .collect()
        };

        let headers = substitute_rows(&request.headers);
        let raw_body = self.substitute(&request.body.content.raw);
        let body = if raw_body == request.body.content.raw {
            request.body.clone()
        } else {
            let content_type = headers
                .iter()
                .rev()
                .find(|h| h.key.eq_ignore_ascii_case("content-type"))
                .map(|h| h.value.as_str());
            classify_body(&raw_body, content_type)?
        };

        debug!(count = self.vars.len(), "Applied variables to request");

        Ok(ParsedCurlRequest {
            method: request.method.clone(),
            url: self.substitute_url(&request.url),
            params: substitute_rows(&request.params),
            headers,
            body,
        })
    }
}

/// Parse a single .env line into key-value pair
fn parse_env_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value_part) = line.split_once('=')?;
    let key = key.trim();

    if key.is_empty() {
        return None;
    }

    let value_part = value_part.trim();

    let value = if value_part.len() >= 2 && value_part.starts_with('"') && value_part.ends_with('"') {
        unescape_double_quoted(&value_part[1..value_part.len() - 1])
    } else if value_part.len() >= 2 && value_part.starts_with('\'') && value_part.ends_with('\'') {
        value_part[1..value_part.len() - 1].to_string()
    } else {
        match value_part.find(" #") {
            Some(pos) => value_part[..pos].trim().to_string(),
            None => value_part.to_string(),
        }
    };

    Some((key.to_string(), value))
}

fn unescape_double_quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Check if a string contains `{{variable}}` placeholders
pub fn has_variables(s: &str) -> bool {
    VARIABLE_RE.is_match(s)
}

/// Names of all placeholders in a string, in order of appearance
pub fn extract_variable_names(s: &str) -> Vec<String> {
    VARIABLE_RE
        .captures_iter(s)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}
