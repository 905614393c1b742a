//! Marker scanning and span splitting
//!
//! Scenes and cuts are located by their id markers alone. Each marker owns
//! the text from its own position up to the next marker of the same kind,
//! or to the end of the enclosing text.

use once_cell::sync::Lazy;
use regex::Regex;

static SCENE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bscene_id:\s*['"`](S\d+)['"`]"#).unwrap());

static CUT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bcut_id:\s*['"`](S\d+-C\d+)['"`]"#).unwrap());

/// An id marker together with the text it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MarkedSpan<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

pub(crate) fn scene_spans(text: &str) -> Vec<MarkedSpan<'_>> {
    split_at_markers(text, &SCENE_MARKER)
}

/// Cut spans inside one scene span; never reaches past `scene_text`
pub(crate) fn cut_spans(scene_text: &str) -> Vec<MarkedSpan<'_>> {
    split_at_markers(scene_text, &CUT_MARKER)
}

fn split_at_markers<'a>(text: &'a str, marker: &Regex) -> Vec<MarkedSpan<'a>> {
    let positions: Vec<(usize, &'a str)> = marker
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1)?;
            Some((whole.start(), id.as_str()))
        })
        .collect();

    positions
        .iter()
        .enumerate()
        .map(|(i, &(start, id))| {
            let end = positions
                .get(i + 1)
                .map(|&(next, _)| next)
                .unwrap_or(text.len());
            MarkedSpan {
                id,
                text: &text[start..end],
            }
        })
        .collect()
}
