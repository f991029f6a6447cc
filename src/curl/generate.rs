//! Curl command generation
//!
//! Converts a parsed request back into a curl command for sharing and
//! debugging. Output is quoted so that [`super::parse_curl_command`] reads
//! it back to the same method, URL, headers and body.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{BodyType, ParsedCurlRequest};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CONTINUATION: &str = " \\\n  ";

/// Generate an equivalent curl command from the request
pub fn generate_curl_command(request: &ParsedCurlRequest) -> String {
    let method = request.method.to_uppercase();
    let mut cmd = format!("curl -X {} {}", method, quote(&build_url(request)));

    for header in request.headers.iter().filter(|h| h.is_active()) {
        cmd.push_str(CONTINUATION);
        cmd.push_str("-H ");
        cmd.push_str(&quote(&format!("{}: {}", header.key, header.value)));
    }

    if let Some(payload) = body_payload(request, &method) {
        cmd.push_str(CONTINUATION);
        cmd.push_str("-d ");
        cmd.push_str(&quote(payload));
    }

    cmd
}

/// Base URL plus active query parameters
fn build_url(request: &ParsedCurlRequest) -> String {
    let query: Vec<String> = request
        .params
        .iter()
        .filter(|p| p.is_active())
        .map(|p| format!("{}={}", percent_encode(&p.key), percent_encode(&p.value)))
        .collect();

    if query.is_empty() {
        return request.url.clone();
    }

    let separator = if request.url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", request.url, separator, query.join("&"))
}

/// Body text to send with `-d`
///
/// GET is skipped: a data flag on a GET command imports as POST.
fn body_payload<'a>(request: &'a ParsedCurlRequest, method: &str) -> Option<&'a str> {
    if method == "GET" {
        return None;
    }

    let body = &request.body;
    if body.content.raw.is_empty() {
        return None;
    }

    match body.body_type {
        BodyType::None => None,
        BodyType::Json if body.validation.is_valid && !body.content.formatted.is_empty() => {
            Some(body.content.formatted.as_str())
        }
        BodyType::Json | BodyType::Text => Some(body.content.raw.as_str()),
    }
}

/// Quote a shell argument
///
/// Prefers a quote character the text does not contain. Text with both
/// kinds is single-quoted with each `'` spliced in as `'"'"'`, which the
/// importer joins back together.
fn quote(s: &str) -> String {
    if !s.contains('\'') {
        format!("'{}'", s)
    } else if !s.contains('"') {
        format!("\"{}\"", s)
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}

/// Percent-encode a query component like `encodeURIComponent`
fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Format curl command with syntax highlighting for terminal
pub fn format_curl_pretty(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut quote_char: Option<char> = None;
    let mut at_word_start = true;
    let mut chars = cmd.chars().peekable();

    if let Some(rest) = cmd.strip_prefix("curl") {
        result.push_str("\x1b[1;33mcurl\x1b[0m"); // Bold yellow
        chars = rest.chars().peekable();
        at_word_start = false;
    }

    while let Some(c) = chars.next() {
        match quote_char {
            Some(q) if c == q => {
                quote_char = None;
                result.push(c);
                result.push_str("\x1b[0m");
            }
            Some(_) => result.push(c),
            None if c == '\'' || c == '"' => {
                quote_char = Some(c);
                result.push_str("\x1b[32m"); // Green for strings
                result.push(c);
            }
            None if c == '-' && at_word_start => {
                result.push_str("\x1b[36m"); // Cyan for flags
                result.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '-' {
                        result.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                result.push_str("\x1b[0m");
            }
            None => result.push(c),
        }
        at_word_start = c.is_whitespace();
    }

    if quote_char.is_some() {
        result.push_str("\x1b[0m");
    }

    result
}
