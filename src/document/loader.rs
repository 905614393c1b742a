//! Conti loading and orchestration
//!
//! This module contains `parse_conti()`, which turns loosely structured
//! source text into a `Document`, and `load_conti()`, which reads the
//! source file first. Parsing never fails: anything that cannot be found
//! degrades to an empty or default value.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use super::io::read_source;
use super::models::*;
use super::parsing::fields::{
    extract_duration_sec, DIALOGUE, HEADING, TITLE, TOTAL_DURATION, VISUAL,
};
use super::parsing::spans::{cut_spans, scene_spans, MarkedSpan};
use crate::error::Result;

/// Read and parse a conti source file
pub fn load_conti(file_path: &Path) -> Result<Document> {
    let content = read_source(file_path)?;
    info!(path = %file_path.display(), bytes = content.len(), "loaded conti source");
    Ok(parse_conti(&content))
}

/// Parse conti source text into a `Document`
///
/// Title and total duration are searched across the whole text. Scenes are
/// split at their `scene_id:` markers and cuts at their `cut_id:` markers
/// inside each scene span, so a cut can never be attributed to a scene
/// other than the one whose span contains it.
pub fn parse_conti(content: &str) -> Document {
    let title = TITLE
        .find(content)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let total_duration = TOTAL_DURATION.extract(content);

    let mut seen = HashSet::new();
    let scenes: Vec<Scene> = scene_spans(content)
        .into_iter()
        .map(|span| {
            if !seen.insert(span.id) {
                warn!(scene_id = span.id, "duplicate scene id in source");
            }
            parse_scene(span)
        })
        .collect();

    info!(
        title = %title,
        scenes = scenes.len(),
        cuts = scenes.iter().map(|s| s.cuts.len()).sum::<usize>(),
        "parsed conti"
    );

    Document {
        title,
        total_duration,
        scenes,
    }
}

fn parse_scene(span: MarkedSpan<'_>) -> Scene {
    let cuts: Vec<Cut> = cut_spans(span.text).into_iter().map(parse_cut).collect();
    let heading = HEADING.extract(span.text);

    debug!(scene_id = span.id, heading = %heading, cuts = cuts.len(), "scene");

    Scene {
        scene_id: span.id.to_string(),
        heading,
        cuts,
    }
}

fn parse_cut(span: MarkedSpan<'_>) -> Cut {
    let cut = Cut {
        cut_id: span.id.to_string(),
        visual: VISUAL.extract(span.text),
        dialogue: DIALOGUE.extract(span.text),
        duration_sec: extract_duration_sec(span.text),
    };

    debug!(
        cut_id = %cut.cut_id,
        has_visual = !cut.visual.is_empty(),
        has_dialogue = cut.has_dialogue(),
        "cut"
    );

    cut
}
