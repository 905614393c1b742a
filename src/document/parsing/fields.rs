//! Field value extraction
//!
//! Values are located with `name: <quoted value>` patterns anywhere inside
//! the owning span. Three quoting conventions are tried in a fixed order and
//! the first that matches wins. A miss is never an error: string fields fall
//! back to the empty string, numeric fields to `None`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Quoting conventions, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteStyle {
    Single,
    Double,
    Backtick,
}

impl QuoteStyle {
    pub(crate) const PRIORITY: [QuoteStyle; 3] =
        [QuoteStyle::Single, QuoteStyle::Double, QuoteStyle::Backtick];

    pub(crate) fn delimiter(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
            QuoteStyle::Backtick => '`',
        }
    }
}

/// Compiled patterns for one field name, one per quote style
#[derive(Debug)]
pub(crate) struct FieldMatcher {
    patterns: Vec<(QuoteStyle, Regex)>,
}

impl FieldMatcher {
    pub(crate) fn new(field_name: &str) -> Self {
        let name = regex::escape(field_name);
        let patterns = QuoteStyle::PRIORITY
            .iter()
            .map(|&style| {
                let q = regex::escape(&style.delimiter().to_string());
                // Escaped characters (including an escaped newline) are kept
                // verbatim here and decoded by `unescape`.
                let pattern = format!(r"(?s)\b{name}:\s*{q}((?:[^{q}\\]|\\.)*){q}");
                (style, Regex::new(&pattern).unwrap())
            })
            .collect();

        Self { patterns }
    }

    /// First value found in `span`, trying each quote style in priority order
    pub(crate) fn find(&self, span: &str) -> Option<String> {
        self.patterns.iter().find_map(|(style, re)| {
            re.captures(span)
                .and_then(|caps| caps.get(1))
                .map(|raw| unescape(raw.as_str(), *style))
        })
    }

    /// Same as `find`, degrading a miss to the empty string
    pub(crate) fn extract(&self, span: &str) -> String {
        self.find(span).unwrap_or_default()
    }
}

pub(crate) static TITLE: Lazy<FieldMatcher> = Lazy::new(|| FieldMatcher::new("title"));
pub(crate) static TOTAL_DURATION: Lazy<FieldMatcher> =
    Lazy::new(|| FieldMatcher::new("totalDuration"));
pub(crate) static HEADING: Lazy<FieldMatcher> = Lazy::new(|| FieldMatcher::new("heading"));
pub(crate) static VISUAL: Lazy<FieldMatcher> = Lazy::new(|| FieldMatcher::new("visual"));
pub(crate) static DIALOGUE: Lazy<FieldMatcher> = Lazy::new(|| FieldMatcher::new("dialogue"));

static DURATION_SEC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bduration_sec:\s*([\d.]+)").unwrap());

/// Numeric `duration_sec:` value inside `span`
pub(crate) fn extract_duration_sec(span: &str) -> Option<f64> {
    DURATION_SEC
        .captures(span)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Decode the two recognized escapes: `\n` and an escaped quote.
///
/// `\'` is always decoded, plus the delimiter of the style the value was
/// written in. Any other backslash sequence is left untouched.
pub(crate) fn unescape(raw: &str, style: QuoteStyle) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(q) if q == '\'' || q == style.delimiter() => out.push(q),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_quote_style() {
        assert_eq!(VISUAL.extract("visual: '와이드 샷',"), "와이드 샷");
        assert_eq!(VISUAL.extract(r#"visual: "클로즈업","#), "클로즈업");
        assert_eq!(VISUAL.extract("visual: `패닝`,"), "패닝");
    }

    #[test]
    fn test_single_quote_has_priority() {
        // Double-quoted value appears first but the single-quoted pattern is
        // tried first across the whole span.
        let span = r#"visual: "second", visual: 'first'"#;
        assert_eq!(VISUAL.extract(span), "first");
    }

    #[test]
    fn test_escaped_newline_and_quote() {
        let span = r"dialogue: 'It\'s late.\nGo home.'";
        assert_eq!(DIALOGUE.extract(span), "It's late.\nGo home.");

        let span = r#"dialogue: "He said \"go\"\nthen left""#;
        assert_eq!(DIALOGUE.extract(span), "He said \"go\"\nthen left");

        let span = r"dialogue: `tick \`tock\`\nend`";
        assert_eq!(DIALOGUE.extract(span), "tick `tock`\nend");
    }

    #[test]
    fn test_other_escapes_are_kept() {
        assert_eq!(unescape(r"a\tb", QuoteStyle::Single), r"a\tb");
        assert_eq!(unescape(r"trailing\", QuoteStyle::Single), "trailing\\");
    }

    #[test]
    fn test_template_literal_spans_lines() {
        let span = "visual: `첫 줄\n둘째 줄`";
        assert_eq!(VISUAL.extract(span), "첫 줄\n둘째 줄");
    }

    #[test]
    fn test_miss_is_empty() {
        assert_eq!(VISUAL.extract("dialogue: 'x'"), "");
        assert_eq!(VISUAL.extract("visual: 42"), "");
        assert_eq!(VISUAL.find(""), None);
    }

    #[test]
    fn test_word_boundary() {
        assert_eq!(TITLE.find("subtitle: 'DAY 1-2'"), None);
        assert_eq!(
            TITLE.extract("subtitle: 'DAY 1-2', title: '진주성'"),
            "진주성"
        );
        assert_eq!(HEADING.find("subheading: 'x'"), None);
    }

    #[test]
    fn test_duration_sec() {
        assert_eq!(extract_duration_sec("duration_sec: 24,"), Some(24.0));
        assert_eq!(extract_duration_sec("duration_sec: 2.5"), Some(2.5));
        assert_eq!(extract_duration_sec("duration_sec: '24'"), None);
        assert_eq!(extract_duration_sec("duration_sec: 1.2.3"), None);
    }
}
