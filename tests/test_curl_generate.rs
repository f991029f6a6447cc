//! Integration tests for curl command generation

use curlkit::curl::{generate_curl_command, parse_curl_command};
use curlkit::models::{BodyType, KeyValueItem, ParsedCurlRequest};
use serde_json::json;

fn round_trip(cmd: &str) -> (ParsedCurlRequest, ParsedCurlRequest) {
    let first = parse_curl_command(cmd).unwrap();
    let generated = generate_curl_command(&first);
    let second = parse_curl_command(&generated)
        .unwrap_or_else(|e| panic!("generated command did not parse ({}): {}", e, generated));
    (first, second)
}

fn rows(items: &[KeyValueItem]) -> Vec<(&str, &str)> {
    items.iter().map(|i| (i.key.as_str(), i.value.as_str())).collect()
}

#[test]
fn test_round_trip_get_with_query() {
    let (first, second) = round_trip("curl 'https://api.example.com/search?q=rust%20lang&page=2' -H 'Accept: */*'");
    assert_eq!(second.method, "GET");
    assert_eq!(second.url, first.url);
    assert_eq!(rows(&second.params), rows(&first.params));
    assert_eq!(rows(&second.params), vec![("q", "rust lang"), ("page", "2")]);
    assert_eq!(rows(&second.headers), rows(&first.headers));
}

#[test]
fn test_round_trip_json_body() {
    let (first, second) = round_trip(
        r#"curl -X PUT https://api.example.com/users/7 -H 'Content-Type: application/json' -d '{"name":"Ann Lee","tags":["a","b"]}'"#,
    );
    assert_eq!(second.method, "PUT");
    assert_eq!(rows(&second.headers), rows(&first.headers));
    assert_eq!(second.body.body_type, BodyType::Json);
    assert_eq!(second.body.content.parsed, first.body.content.parsed);
    assert_eq!(
        second.body.content.parsed,
        Some(json!({"name": "Ann Lee", "tags": ["a", "b"]}))
    );
}

#[test]
fn test_round_trip_adds_no_headers() {
    let (first, second) = round_trip(r#"curl https://x.com/items -d '{"a":1}'"#);
    assert_eq!(second.method, "POST");
    assert!(first.headers.is_empty());
    assert!(second.headers.is_empty());
    assert_eq!(second.body.body_type, BodyType::Json);
    assert_eq!(second.body.content.parsed, Some(json!({"a": 1})));
}

#[test]
fn test_round_trip_text_body() {
    let (first, second) = round_trip("curl -X PATCH https://x.com/notes/1 -H 'X-Mode: plain' -d 'say \"hi\"'");
    assert_eq!(second.body.body_type, BodyType::Text);
    assert_eq!(second.body.content.raw, first.body.content.raw);
    assert_eq!(second.body.content.raw, r#"say "hi""#);
    assert_eq!(rows(&second.headers), vec![("X-Mode", "plain")]);
}

#[test]
fn test_round_trip_delete_with_body() {
    let (first, second) = round_trip(r#"curl -X DELETE https://x.com/items/3 -d '{"why":"dup"}'"#);
    assert_eq!(second.method, "DELETE");
    assert_eq!(second.body.content.parsed, first.body.content.parsed);
    assert_eq!(second.body.content.parsed, Some(json!({"why": "dup"})));
}

#[test]
fn test_round_trip_mixed_quotes() {
    let mut request = parse_curl_command("curl -X PUT https://x.com/notes/2").unwrap();
    request.headers.push(KeyValueItem::new("X-Note", r#"it's "x""#));
    request.body = curlkit::curl::classify_body(r#"{"text":"don't"}"#, None).unwrap();

    let cmd = generate_curl_command(&request);
    let back = parse_curl_command(&cmd).unwrap();
    assert_eq!(rows(&back.headers), vec![("X-Note", r#"it's "x""#)]);
    assert_eq!(back.body.content.parsed, Some(json!({"text": "don't"})));
}

#[test]
fn test_get_drops_body() {
    let mut request = parse_curl_command("curl https://x.com/items/3 -d 'ignored'").unwrap();
    request.method = "GET".to_string();
    let cmd = generate_curl_command(&request);
    assert_eq!(cmd, "curl -X GET 'https://x.com/items/3'");
}

#[test]
fn test_generated_layout() {
    let request = parse_curl_command("curl https://x.com/a -H 'A: 1' -H 'B: 2'").unwrap();
    let cmd = generate_curl_command(&request);
    assert_eq!(cmd, "curl -X GET 'https://x.com/a' \\\n  -H 'A: 1' \\\n  -H 'B: 2'");
}

#[test]
fn test_params_are_percent_encoded() {
    let mut request = parse_curl_command("curl https://x.com/find").unwrap();
    request.params.push(KeyValueItem::new("filter", "a&b=c d"));
    let cmd = generate_curl_command(&request);
    assert_eq!(cmd, "curl -X GET 'https://x.com/find?filter=a%26b%3Dc%20d'");

    let back = parse_curl_command(&cmd).unwrap();
    assert_eq!(rows(&back.params), vec![("filter", "a&b=c d")]);
}
