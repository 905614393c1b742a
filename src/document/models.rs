//! Core data structures for conti representation
//!
//! This module defines the public types produced by the extractor and
//! consumed by the renderer: a document owning scenes, each owning cuts.

use serde::{Deserialize, Serialize};

/// Title used when the source carries no `title:` field
pub const DEFAULT_TITLE: &str = "줄콘티";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub total_duration: String,
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: String,
    pub heading: String,
    pub cuts: Vec<Cut>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub cut_id: String,
    pub visual: String,
    pub dialogue: String,
    /// Shot length in seconds, when the source states one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            total_duration: String::new(),
            scenes: Vec::new(),
        }
    }
}

impl Cut {
    pub fn new(
        cut_id: impl Into<String>,
        visual: impl Into<String>,
        dialogue: impl Into<String>,
    ) -> Self {
        Self {
            cut_id: cut_id.into(),
            visual: visual.into(),
            dialogue: dialogue.into(),
            duration_sec: None,
        }
    }

    pub fn has_dialogue(&self) -> bool {
        !self.dialogue.is_empty()
    }
}
