//! Command cleaning and shell-like tokenization
//!
//! Tokens keep their quote characters. Only the values the interpreter
//! captures (URL, header strings, payloads) are passed through [`unquote`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Backslash line continuation, including surrounding indentation
static LINE_CONTINUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\s*\n\s*").expect("Invalid line continuation regex"));

/// Normalize a pasted command before tokenizing
///
/// Collapses `\`-newline continuations into a single space and maps
/// typographic quotes to their ASCII equivalents.
pub fn clean_command(command: &str) -> String {
    let joined = LINE_CONTINUATION_RE.replace_all(command, " ");

    let normalized: String = joined
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
            other => other,
        })
        .collect();

    normalized.trim().to_string()
}

/// Split a cleaned command into arguments, respecting quotes
///
/// No escape processing happens inside quotes, and an unterminated quote
/// simply runs to the end of the input.
pub fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in command.chars() {
        match quote {
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            Some(open) if c == open => {
                quote = None;
                current.push(c);
            }
            None if c.is_whitespace() => push_token(&mut tokens, &mut current),
            _ => current.push(c),
        }
    }

    push_token(&mut tokens, &mut current);
    tokens
}

fn push_token(tokens: &mut Vec<String>, current: &mut String) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}

/// Strip quoting from a captured value
///
/// A value wrapped in one pair of matching quotes loses that pair. A value
/// that starts with a quote and continues with further quoted or bare runs
/// (`'it'"'"'s'`) is joined the way a shell joins adjacent segments.
/// Anything else, including an unterminated quote, is returned unchanged.
pub fn unquote(s: &str) -> Cow<'_, str> {
    let first = match s.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return Cow::Borrowed(s),
    };

    if s.len() >= 2 && s[1..].find(first) == Some(s.len() - 2) {
        return Cow::Borrowed(&s[1..s.len() - 1]);
    }

    match join_segments(s) {
        Some(joined) => Cow::Owned(joined),
        None => Cow::Borrowed(s),
    }
}

/// Concatenate quoted and bare runs, or `None` if a quote is left open
fn join_segments(s: &str) -> Option<String> {
    let mut joined = String::with_capacity(s.len());
    let mut quote: Option<char> = None;

    for c in s.chars() {
        match quote {
            None if c == '"' || c == '\'' => quote = Some(c),
            Some(open) if c == open => quote = None,
            _ => joined.push(c),
        }
    }

    quote.is_none().then_some(joined)
}
