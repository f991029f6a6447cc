//! Core data types produced by the curl importer
//!
//! These shapes are consumed verbatim by the request editor, so field names
//! on the wire (`id/key/value/description/enabled`, camelCase body fields)
//! must not change.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// KEY-VALUE ROWS
// =============================================================================

/// One editable key-value row (a header or a query parameter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueItem {
    pub id: String,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl KeyValueItem {
    /// Create an enabled row with a fresh unique id and empty description
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            description: String::new(),
            enabled: true,
        }
    }

    /// Rows that take part in generated output (enabled, key and value set)
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Header row
pub type Header = KeyValueItem;

/// Query parameter row
pub type QueryParam = KeyValueItem;

/// Generate a unique row id
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

// =============================================================================
// REQUEST BODY
// =============================================================================

/// Body type inferred from content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    #[default]
    None,
    Json,
    Text,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::None => "none",
            BodyType::Json => "json",
            BodyType::Text => "text",
        }
    }
}

/// Raw, parsed and display forms of a body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyContent {
    pub raw: String,
    pub parsed: Option<JsonValue>,
    pub formatted: String,
}

/// Validation state of a body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyValidation {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl Default for BodyValidation {
    fn default() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }
}

/// Request body as shown in the body editor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub content: BodyContent,
    pub validation: BodyValidation,
}

impl RequestBody {
    /// The empty `none` body
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.body_type == BodyType::None
    }
}

// =============================================================================
// PARSE / IMPORT RESULTS
// =============================================================================

/// A request reconstructed from a curl command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCurlRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<Header>,
    pub params: Vec<QueryParam>,
    pub body: RequestBody,
}

/// Outcome of importing a curl command
///
/// Only constructible through [`ImportResult::ok`] and [`ImportResult::err`],
/// so `data` and `error` are never both set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ParsedCurlRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
}

impl ImportResult {
    /// Successful import; an empty warning list is dropped
    pub fn ok(data: ParsedCurlRequest, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            warnings: if warnings.is_empty() { None } else { Some(warnings) },
        }
    }

    /// Failed import
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            warnings: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&ParsedCurlRequest> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<ParsedCurlRequest> {
        self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warnings(&self) -> Option<&[String]> {
        self.warnings.as_deref()
    }
}
