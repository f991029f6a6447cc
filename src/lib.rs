//! curlkit library interface
//!
//! Imports pasted curl commands into structured, editable HTTP requests and
//! generates curl commands back from them.
//!
//! # Module Organization
//!
//! - [`curl`] - Tokenizer, flag table, interpreter, URL/body handling, importer, generator
//! - [`models`] - Request, body and import result types
//! - [`variables`] - `{{variable}}` substitution and .env loading
//! - [`errors`] - Error types (CurlkitError, Result)
//! - [`config`] - config.toml loading
//! - [`core`] - CLI execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod curl;
pub mod errors;
pub mod models;
pub mod status;
pub mod variables;

pub use curl::{generate_curl_command, handle_curl_import, parse_curl_command};
pub use errors::{CurlkitError, Result};
pub use models::{ImportResult, ParsedCurlRequest};
