//! Body type inference and JSON validation

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::errors::Result;
use crate::models::{BodyContent, BodyType, BodyValidation, RequestBody};

/// Build a request body from captured payload text
///
/// The payload is treated as JSON when the declared content type says so or
/// when it is wrapped in `{}` / `[]`. JSON that fails to parse is kept as
/// typed and flagged invalid rather than rejected.
pub fn classify_body(raw: &str, content_type: Option<&str>) -> Result<RequestBody> {
    if raw.trim().is_empty() {
        return Ok(RequestBody::empty());
    }

    if !looks_like_json(raw, content_type) {
        return Ok(RequestBody {
            body_type: BodyType::Text,
            content: BodyContent {
                raw: raw.to_string(),
                parsed: None,
                formatted: raw.to_string(),
            },
            validation: BodyValidation::default(),
        });
    }

    let body = match serde_json::from_str::<JsonValue>(raw) {
        Ok(parsed) => {
            let formatted = serde_json::to_string_pretty(&parsed)?;
            RequestBody {
                body_type: BodyType::Json,
                content: BodyContent {
                    raw: raw.to_string(),
                    parsed: Some(parsed),
                    formatted,
                },
                validation: BodyValidation::default(),
            }
        }
        Err(e) => {
            debug!(error = %e, "Body looks like JSON but does not parse");
            RequestBody {
                body_type: BodyType::Json,
                content: BodyContent {
                    raw: raw.to_string(),
                    parsed: None,
                    formatted: raw.to_string(),
                },
                validation: BodyValidation {
                    is_valid: false,
                    error: Some(format!("Invalid JSON format: {}", e)),
                },
            }
        }
    };

    Ok(body)
}

/// Declared JSON content type, or a payload bracketed like a JSON document
fn looks_like_json(raw: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json")) {
        return true;
    }

    let trimmed = raw.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}
