//! Read-only summary operations on parsed documents
//!
//! Counting helpers used by the CLI summary and the render report.

use super::models::*;

impl Document {
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn cut_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.cuts.len()).sum()
    }

    /// Sum of every stated cut duration; cuts without one count as zero
    pub fn total_seconds(&self) -> f64 {
        self.scenes.iter().map(Scene::total_seconds).sum()
    }

    pub fn find_scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.scene_id == scene_id)
    }
}

impl Scene {
    pub fn total_seconds(&self) -> f64 {
        self.cuts.iter().filter_map(|cut| cut.duration_sec).sum()
    }
}

/// One line per scene, as printed after parsing
pub fn scene_summary_lines(document: &Document) -> Vec<String> {
    document
        .scenes
        .iter()
        .map(|scene| {
            let seconds = scene.total_seconds();
            if seconds > 0.0 {
                format!(
                    "{}: {} — {}컷 ({seconds}초)",
                    scene.scene_id,
                    scene.heading,
                    scene.cuts.len()
                )
            } else {
                format!(
                    "{}: {} — {}컷",
                    scene.scene_id,
                    scene.heading,
                    scene.cuts.len()
                )
            }
        })
        .collect()
}
