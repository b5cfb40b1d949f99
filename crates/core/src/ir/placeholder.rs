//! Scanner for `{name: type}` placeholders inside resource strings.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// `{` identifier, optional whitespace, `:`, optional whitespace, type word, `}`.
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_$][A-Za-z0-9_$]*)\s*:\s*(\w*)\}")
        .expect("placeholder regex should compile")
});

/// A single placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'a> {
    /// Matched text including the braces
    pub text: &'a str,
    /// Byte range of `text` in the scanned string
    pub range: Range<usize>,
    /// Argument name
    pub name: &'a str,
    /// Declared type token, empty when omitted
    pub type_token: &'a str,
}

/// Lazily scan `input` for placeholders, left to right.
///
/// Text that does not form a complete placeholder (stray braces, missing
/// colon, invalid names) is skipped and stays literal for the caller.
pub fn scan(input: &str) -> impl Iterator<Item = PlaceholderMatch<'_>> {
    PLACEHOLDER_PATTERN.captures_iter(input).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(PlaceholderMatch {
            text: whole.as_str(),
            range: whole.range(),
            name: name.as_str(),
            type_token: caps.get(2).map_or("", |m| m.as_str()),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single() {
        let matches: Vec<_> = scan("Hi {name: string}!").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "{name: string}");
        assert_eq!(matches[0].range, 3..17);
        assert_eq!(matches[0].name, "name");
        assert_eq!(matches[0].type_token, "string");
    }

    #[test]
    fn test_scan_whitespace_variants() {
        let tokens: Vec<_> = scan("{a:number} {b :object} {c  :  boolean}")
            .map(|m| (m.name, m.type_token))
            .collect();
        assert_eq!(
            tokens,
            vec![("a", "number"), ("b", "object"), ("c", "boolean")]
        );
    }

    #[test]
    fn test_scan_empty_type_token() {
        let matches: Vec<_> = scan("{who:}").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "who");
        assert_eq!(matches[0].type_token, "");
    }

    #[test]
    fn test_scan_ignores_malformed() {
        assert_eq!(scan("{name}").count(), 0);
        assert_eq!(scan("{ name: string}").count(), 0);
        assert_eq!(scan("{1st: string}").count(), 0);
        assert_eq!(scan("no braces at all").count(), 0);
        assert_eq!(scan("{name: string").count(), 0);
        assert_eq!(scan("{}").count(), 0);
    }

    #[test]
    fn test_scan_is_restartable() {
        let input = "{a: string} and {b: number}";
        let first: Vec<_> = scan(input).collect();
        let second: Vec<_> = scan(input).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_scan_nested_brace_prefix() {
        // The outer brace is literal, the inner placeholder still matches.
        let matches: Vec<_> = scan("{{x: number}}").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "{x: number}");
        assert_eq!(matches[0].range, 1..12);
    }
}
