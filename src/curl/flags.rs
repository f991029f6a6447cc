//! Recognized curl flags and their roles

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// What a recognized flag does to the request being rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    /// Next token is the HTTP method
    Method,
    /// Next token is a header (or a header value for `-A` / `-e`)
    Header,
    /// Next token is body payload
    Data,
    /// Next token is a `Cookie` header value
    Cookie,
    /// Takes no argument, no effect on the request
    Ignore,
}

impl FlagCategory {
    /// Whether the flag consumes the following token
    pub fn takes_value(&self) -> bool {
        !matches!(self, FlagCategory::Ignore)
    }
}

static CURL_FLAGS: Lazy<HashMap<&'static str, FlagCategory>> = Lazy::new(|| {
    use FlagCategory::*;

    HashMap::from([
        ("-X", Method),
        ("--request", Method),
        ("-H", Header),
        ("--header", Header),
        ("-A", Header),
        ("--user-agent", Header),
        ("-e", Header),
        ("--referer", Header),
        ("-d", Data),
        ("--data", Data),
        ("--data-raw", Data),
        ("--data-binary", Data),
        ("--data-urlencode", Data),
        ("-b", Cookie),
        ("--cookie", Cookie),
        ("-L", Ignore),
        ("--location", Ignore),
        ("-s", Ignore),
        ("--silent", Ignore),
        ("-v", Ignore),
        ("--verbose", Ignore),
        ("-k", Ignore),
        ("--insecure", Ignore),
        ("--compressed", Ignore),
        ("-i", Ignore),
        ("--include", Ignore),
    ])
});

/// Look up the category of a flag spelling (exact match)
pub fn classify_flag(flag: &str) -> Option<FlagCategory> {
    CURL_FLAGS.get(flag).copied()
}

/// Header name synthesized by flags whose argument is a bare value
pub fn implied_header_name(flag: &str) -> Option<&'static str> {
    match flag {
        "-A" | "--user-agent" => Some("User-Agent"),
        "-e" | "--referer" => Some("Referer"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_category() {
        for (short, long) in [("-X", "--request"), ("-H", "--header"), ("-d", "--data"), ("-b", "--cookie")] {
            assert_eq!(classify_flag(short), classify_flag(long));
        }
    }

    #[test]
    fn test_data_variants() {
        for flag in ["--data-raw", "--data-binary", "--data-urlencode"] {
            assert_eq!(classify_flag(flag), Some(FlagCategory::Data));
        }
    }

    #[test]
    fn test_ignored_flags_take_no_value() {
        let category = classify_flag("--compressed").unwrap();
        assert_eq!(category, FlagCategory::Ignore);
        assert!(!category.takes_value());
        assert!(classify_flag("-H").unwrap().takes_value());
    }

    #[test]
    fn test_unknown_flags() {
        assert_eq!(classify_flag("--max-time"), None);
        assert_eq!(classify_flag("-sSL"), None);
        assert_eq!(classify_flag("-x"), None);
    }

    #[test]
    fn test_implied_headers() {
        assert_eq!(implied_header_name("-A"), Some("User-Agent"));
        assert_eq!(implied_header_name("--referer"), Some("Referer"));
        assert_eq!(implied_header_name("-H"), None);
    }
}
