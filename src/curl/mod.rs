//! curl command import and generation
//!
//! Turns a pasted curl command into a [`ParsedCurlRequest`] that can be
//! loaded into the request editor, and turns such a request back into a
//! curl command.
//!
//! # Import
//!
//! ```
//! use curlkit::curl::handle_curl_import;
//!
//! let result = handle_curl_import(
//!     r#"curl -X POST "https://api.example.com/users?team=core" -H "Accept: application/json" -d '{"name":"John"}'"#,
//! );
//! assert!(result.success());
//!
//! let request = result.data().unwrap();
//! assert_eq!(request.method, "POST");
//! assert_eq!(request.url, "https://api.example.com/users");
//! assert_eq!(request.params[0].key, "team");
//! ```
//!
//! The importer is deliberately permissive: unknown flags are skipped, a URL
//! that does not parse is kept verbatim, and a body that looks like JSON but
//! does not parse is accepted with a warning.
//!
//! # Generation
//!
//! ```
//! use curlkit::curl::{generate_curl_command, parse_curl_command};
//!
//! let request = parse_curl_command("curl https://example.com/a?b=1").unwrap();
//! assert_eq!(generate_curl_command(&request), "curl -X GET 'https://example.com/a?b=1'");
//! ```

pub mod body;
pub mod flags;
pub mod generate;
pub mod importer;
pub mod interpreter;
pub mod parser;
pub mod tokenizer;
pub mod url;

pub use body::classify_body;
pub use flags::{classify_flag, FlagCategory};
pub use generate::{format_curl_pretty, generate_curl_command};
pub use importer::{collect_warnings, format_import_error, format_warnings, handle_curl_import};
pub use interpreter::{interpret, InterpretedCommand};
pub use parser::parse_curl_command;
pub use tokenizer::{clean_command, tokenize, unquote};
pub use self::url::{decompose, normalize_protocol, DecomposedUrl, ProtocolSuggestion};
