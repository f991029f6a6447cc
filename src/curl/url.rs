//! URL decomposition and protocol normalization

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use ::url::{Position, Url};

use crate::models::{KeyValueItem, QueryParam};

static IPV4_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("Invalid IPv4 regex"));

/// A URL split into its base and query rows
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposedUrl {
    pub base_url: String,
    pub params: Vec<QueryParam>,
}

/// Split a URL into `scheme://host[:port]/path` and its query parameters
///
/// Repeated keys produce repeated rows. A URL that does not parse is
/// returned unchanged with no parameters.
pub fn decompose(raw: &str) -> DecomposedUrl {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            debug!(url = raw, error = %e, "URL did not parse, keeping it verbatim");
            return DecomposedUrl {
                base_url: raw.to_string(),
                params: Vec::new(),
            };
        }
    };

    let base_url = format!(
        "{}://{}",
        url.scheme(),
        &url[Position::BeforeHost..Position::AfterPath]
    );

    let params = url
        .query_pairs()
        .map(|(key, value)| KeyValueItem::new(key, value))
        .collect();

    DecomposedUrl { base_url, params }
}

/// Result of checking whether a URL lacks a scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSuggestion {
    pub needed: bool,
    pub protocol: &'static str,
    pub normalized_url: String,
}

/// Suggest a scheme for a URL typed without one
///
/// Local hosts and IPv4 addresses get `http://`, everything else `https://`.
pub fn normalize_protocol(url: &str) -> ProtocolSuggestion {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return ProtocolSuggestion {
            needed: false,
            protocol: "",
            normalized_url: url.to_string(),
        };
    }

    if trimmed.contains("://") {
        return ProtocolSuggestion {
            needed: false,
            protocol: "",
            normalized_url: trimmed.to_string(),
        };
    }

    let protocol = if trimmed.to_lowercase().starts_with("localhost") || IPV4_PREFIX_RE.is_match(trimmed) {
        "http://"
    } else {
        "https://"
    };

    ProtocolSuggestion {
        needed: true,
        protocol,
        normalized_url: format!("{}{}", protocol, trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &[QueryParam]) -> Vec<(&str, &str)> {
        params.iter().map(|p| (p.key.as_str(), p.value.as_str())).collect()
    }

    #[test]
    fn test_decompose_query() {
        let d = decompose("http://example.com/api?a=1&b=2");
        assert_eq!(d.base_url, "http://example.com/api");
        assert_eq!(pairs(&d.params), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_repeated_keys_are_separate_rows() {
        let d = decompose("https://x.com/s?tag=a&tag=b&q=hello+world&e=%26");
        assert_eq!(
            pairs(&d.params),
            vec![("tag", "a"), ("tag", "b"), ("q", "hello world"), ("e", "&")]
        );
    }

    #[test]
    fn test_strips_fragment_and_userinfo_keeps_port() {
        let d = decompose("https://user:pw@api.example.com:8443/v1/items?x=1#top");
        assert_eq!(d.base_url, "https://api.example.com:8443/v1/items");
        assert_eq!(pairs(&d.params), vec![("x", "1")]);
    }

    #[test]
    fn test_root_path() {
        assert_eq!(decompose("http://example.com").base_url, "http://example.com/");
    }

    #[test]
    fn test_fallback_on_unparseable() {
        let d = decompose("example.com/api?a=1");
        assert_eq!(d.base_url, "example.com/api?a=1");
        assert!(d.params.is_empty());

        let d = decompose("{{baseUrl}}/users");
        assert_eq!(d.base_url, "{{baseUrl}}/users");
    }

    #[test]
    fn test_normalize_protocol() {
        let s = normalize_protocol("api.example.com/users");
        assert!(s.needed);
        assert_eq!(s.normalized_url, "https://api.example.com/users");

        assert_eq!(normalize_protocol("localhost:3000").protocol, "http://");
        assert_eq!(normalize_protocol("192.168.0.10/x").protocol, "http://");

        let s = normalize_protocol("  http://x.com ");
        assert!(!s.needed);
        assert_eq!(s.normalized_url, "http://x.com");

        assert!(!normalize_protocol("").needed);
    }
}
