//! curl command → [`ParsedCurlRequest`] pipeline
//!
//! clean → tokenize → interpret → decompose URL → classify body

use tracing::{debug, trace};

use super::body::classify_body;
use super::interpreter::interpret;
use super::tokenizer::{clean_command, tokenize};
use super::url::decompose;
use crate::errors::{CurlkitError, Result};
use crate::models::ParsedCurlRequest;

/// Parse a pasted curl command into an editable request
///
/// Fails only when the input is empty, does not start with `curl`, or has
/// no URL-like argument. Anything unexpected further down is reported as
/// [`CurlkitError::Parse`].
pub fn parse_curl_command(command: &str) -> Result<ParsedCurlRequest> {
    if command.trim().is_empty() {
        return Err(CurlkitError::EmptyCommand);
    }

    let cleaned = clean_command(command);
    let tokens = tokenize(&cleaned);
    trace!(?tokens, "Tokenized curl command");
    debug!(count = tokens.len(), "Tokenized curl command");

    let interpreted = interpret(&tokens)?;
    let url = decompose(&interpreted.url);
    let body = classify_body(&interpreted.body_content, interpreted.content_type.as_deref())
        .map_err(into_parse_error)?;

    Ok(ParsedCurlRequest {
        method: interpreted.method,
        url: url.base_url,
        headers: interpreted.headers,
        params: url.params,
        body,
    })
}

/// Keep named failures, fold everything else into the generic parse error
fn into_parse_error(err: CurlkitError) -> CurlkitError {
    match err {
        CurlkitError::EmptyCommand
        | CurlkitError::NotCurl
        | CurlkitError::NoUrl
        | CurlkitError::Parse(_) => err,
        other => CurlkitError::Parse(other.to_string()),
    }
}
