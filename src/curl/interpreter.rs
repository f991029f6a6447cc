//! Token stream interpretation
//!
//! Walks the tokens of a curl command once, consuming recognized flags
//! together with their argument and collecting the URL candidate.

use tracing::{debug, trace};

use super::flags::{classify_flag, implied_header_name, FlagCategory};
use super::tokenizer::unquote;
use crate::errors::{CurlkitError, Result};
use crate::models::{Header, KeyValueItem};

/// Fields gathered from a curl command, before URL and body post-processing
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretedCommand {
    pub method: String,
    pub url: String,
    pub headers: Vec<Header>,
    pub body_content: String,
    /// Value of the last `Content-Type` header seen
    pub content_type: Option<String>,
}

/// Accumulator threaded through the token loop
struct Accumulator {
    method: String,
    url: Option<String>,
    headers: Vec<Header>,
    body: Option<String>,
    content_type: Option<String>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            method: "GET".to_string(),
            url: None,
            headers: Vec::new(),
            body: None,
            content_type: None,
        }
    }

    fn apply(&mut self, flag: &str, category: FlagCategory, value: &str) {
        match category {
            FlagCategory::Method => {
                self.method = value.to_uppercase();
            }
            FlagCategory::Header => {
                if let Some(name) = implied_header_name(flag) {
                    self.headers.push(KeyValueItem::new(name, value));
                } else if let Some((key, value)) = parse_header(value) {
                    if key.eq_ignore_ascii_case("content-type") {
                        self.content_type = Some(value.clone());
                    }
                    self.headers.push(KeyValueItem::new(key, value));
                } else {
                    trace!(header = value, "Dropping header without a colon");
                }
            }
            FlagCategory::Data => {
                match &mut self.body {
                    Some(existing) => {
                        existing.push('&');
                        existing.push_str(value);
                    }
                    None => self.body = Some(value.to_string()),
                }
                if self.method == "GET" {
                    self.method = "POST".to_string();
                }
            }
            FlagCategory::Cookie => {
                self.headers.push(KeyValueItem::new("Cookie", value));
            }
            FlagCategory::Ignore => {}
        }
    }
}

/// Interpret a token list produced by [`super::tokenize`]
pub fn interpret(tokens: &[String]) -> Result<InterpretedCommand> {
    match tokens.first() {
        Some(first) if first.to_lowercase().contains("curl") => {}
        _ => return Err(CurlkitError::NotCurl),
    }

    let mut acc = Accumulator::new();
    let mut i = 1;

    while i < tokens.len() {
        let token = tokens[i].as_str();

        if let Some(category) = classify_flag(token) {
            if category.takes_value() {
                if let Some(next) = tokens.get(i + 1) {
                    acc.apply(token, category, &unquote(next));
                    i += 1;
                }
            }
        } else if token.starts_with('-') {
            trace!(flag = token, "Skipping unrecognized flag");
        } else {
            let candidate = unquote(token);
            if looks_like_url(&candidate) {
                acc.url = Some(candidate.into_owned());
            }
        }

        i += 1;
    }

    let url = acc.url.ok_or(CurlkitError::NoUrl)?;

    debug!(
        method = %acc.method,
        url = %url,
        headers = acc.headers.len(),
        has_body = acc.body.is_some(),
        "Interpreted curl command"
    );

    Ok(InterpretedCommand {
        method: acc.method,
        url,
        headers: acc.headers,
        body_content: acc.body.unwrap_or_default(),
        content_type: acc.content_type,
    })
}

/// Loose URL heuristic: a scheme separator or any dot
fn looks_like_url(s: &str) -> bool {
    s.contains("://") || s.contains('.')
}

/// Split a raw header string on its first colon
pub fn parse_header(header: &str) -> Option<(String, String)> {
    let (name, value) = header.split_once(':')?;
    Some((name.trim().to_string(), value.trim().to_string()))
}
