//! Conti document rendering
//!
//! `build_docx()` lays a parsed `Document` out as a landscape page of scene
//! tables; `write_docx()` packs that layout to disk, replacing any existing
//! file at the target path.

mod table;
mod text;

use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{AlignmentType, Docx, PageMargin, PageOrientationType};
use tracing::{debug, info};

use crate::document::Document;
use crate::error::{ContixError, Result};
use crate::theme::{cm_to_twips, THEME};
use table::{scene_band, scene_table};
use text::{multiline_run, spaced_paragraph, RunStyle};

/// What was written, for the end-of-run report
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub scenes: usize,
    pub cuts: usize,
}

fn page_setup(docx: Docx) -> Docx {
    let page = THEME.page;
    docx.page_size(cm_to_twips(page.width_cm), cm_to_twips(page.height_cm))
        .page_orient(PageOrientationType::Landscape)
        .page_margin(
            PageMargin::new()
                .top(cm_to_twips(page.margin_top_cm) as i32)
                .bottom(cm_to_twips(page.margin_bottom_cm) as i32)
                .left(cm_to_twips(page.margin_left_cm) as i32)
                .right(cm_to_twips(page.margin_right_cm) as i32),
        )
}

pub(crate) fn subtitle_text(document: &Document) -> String {
    format!(
        "총 {} | {}",
        document.total_duration, THEME.labels.subtitle_suffix
    )
}

fn title_block(docx: Docx, document: &Document) -> Docx {
    let title = spaced_paragraph(AlignmentType::Center, 0, 2).add_run(multiline_run(
        &document.title,
        RunStyle::sized(THEME.sizes.title).bold(),
    ));
    let subtitle = spaced_paragraph(AlignmentType::Center, 0, 6).add_run(multiline_run(
        &subtitle_text(document),
        RunStyle::sized(THEME.sizes.subtitle).color(THEME.colors.subtitle_text),
    ));

    docx.add_paragraph(title).add_paragraph(subtitle)
}

fn footer(docx: Docx) -> Docx {
    let paragraph = spaced_paragraph(AlignmentType::Right, 0, 0).add_run(multiline_run(
        THEME.labels.footer,
        RunStyle::sized(THEME.sizes.footer).color(THEME.colors.muted_text),
    ));
    docx.add_paragraph(paragraph)
}

/// Lay the whole document out in memory
pub fn build_docx(document: &Document) -> Docx {
    let mut docx = title_block(page_setup(Docx::new()), document);

    for scene in &document.scenes {
        debug!(scene_id = %scene.scene_id, rows = scene.cuts.len() + 1, "rendering scene table");
        docx = docx
            .add_paragraph(spaced_paragraph(AlignmentType::Left, 8, 0))
            .add_table(scene_band(scene))
            .add_table(scene_table(scene))
            .add_paragraph(spaced_paragraph(AlignmentType::Left, 2, 2));
    }

    footer(docx)
}

/// Render `document` and write it to `output`
///
/// Missing parent directories are created. An existing file at `output` is
/// overwritten.
pub fn write_docx(document: &Document, output: &Path) -> Result<RenderSummary> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ContixError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(output).map_err(|source| ContixError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    build_docx(document)
        .build()
        .pack(file)
        .map_err(|e| ContixError::Pack {
            path: output.to_path_buf(),
            message: e.to_string(),
        })?;

    let summary = RenderSummary {
        output: output.to_path_buf(),
        scenes: document.scene_count(),
        cuts: document.cut_count(),
    };
    info!(
        path = %output.display(),
        scenes = summary.scenes,
        cuts = summary.cuts,
        "wrote conti document"
    );

    Ok(summary)
}
