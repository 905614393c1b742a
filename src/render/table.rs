//! Scene tables
//!
//! Each scene renders as a full-width shaded heading band followed by a
//! four-column table: cut id, visual description, dialogue, and an image
//! placeholder cell reserved for a sketch pasted in later.

use docx_rs::{
    AlignmentType, HeightRule, Shading, Table, TableAlignmentType, TableCell, TableLayoutType,
    TableRow, VAlignType, WidthType,
};

use super::text::{cell_paragraph, RunStyle};
use crate::document::{Cut, Scene};
use crate::theme::{cm_to_twips, THEME};

fn shaded_cell(width: usize, fill: &str) -> TableCell {
    TableCell::new()
        .width(width, WidthType::Dxa)
        .shading(Shading::new().fill(fill))
}

fn fixed_table(rows: Vec<TableRow>, grid: Vec<usize>) -> Table {
    let total: usize = grid.iter().sum();
    Table::new(rows)
        .set_grid(grid)
        .width(total, WidthType::Dxa)
        .align(TableAlignmentType::Center)
        .layout(TableLayoutType::Fixed)
}

/// Text shown in the heading band
pub(crate) fn band_text(scene: &Scene) -> String {
    format!("  {}  |  {}", scene.scene_id, scene.heading)
}

/// Single-cell table spanning the scene table's width
pub(crate) fn scene_band(scene: &Scene) -> Table {
    let width = cm_to_twips(THEME.table_width_cm()) as usize;
    let style = RunStyle::sized(THEME.sizes.scene_heading)
        .bold()
        .color(THEME.colors.light_text);

    let cell = shaded_cell(width, THEME.colors.scene_bg).add_paragraph(cell_paragraph(
        &band_text(scene),
        style,
        AlignmentType::Left,
    ));

    fixed_table(vec![TableRow::new(vec![cell])], vec![width])
}

fn header_row(widths: &[usize]) -> TableRow {
    let style = RunStyle::sized(THEME.sizes.header)
        .bold()
        .color(THEME.colors.light_text);

    let cells = THEME
        .columns
        .iter()
        .zip(widths)
        .map(|(column, &width)| {
            shaded_cell(width, THEME.colors.header_bg)
                .vertical_align(VAlignType::Center)
                .add_paragraph(cell_paragraph(column.header, style, AlignmentType::Center))
        })
        .collect();

    TableRow::new(cells)
}

/// Caption inside the image placeholder cell
pub(crate) fn placeholder_label(cut: &Cut) -> String {
    format!(
        "{}\n{}\n{}",
        THEME.labels.placeholder_icon, cut.cut_id, THEME.labels.placeholder_caption
    )
}

/// Data row for the cut at zero-based `index` within its scene
pub(crate) fn cut_row(cut: &Cut, index: usize, widths: &[usize]) -> TableRow {
    let bg = THEME.row_bg(index);
    let body = RunStyle::sized(THEME.sizes.body);

    let id_cell = shaded_cell(widths[0], bg)
        .vertical_align(VAlignType::Center)
        .add_paragraph(cell_paragraph(
            &cut.cut_id,
            RunStyle::sized(THEME.sizes.cut_id).bold(),
            AlignmentType::Center,
        ));

    let visual_cell = shaded_cell(widths[1], bg).add_paragraph(cell_paragraph(
        &cut.visual,
        body,
        AlignmentType::Left,
    ));

    let dialogue_style = if cut.has_dialogue() {
        body.color(THEME.colors.dialogue_text)
    } else {
        body
    };
    let dialogue_cell = shaded_cell(widths[2], bg).add_paragraph(cell_paragraph(
        &cut.dialogue,
        dialogue_style,
        AlignmentType::Left,
    ));

    let placeholder_cell = shaded_cell(widths[3], THEME.colors.placeholder_bg)
        .vertical_align(VAlignType::Center)
        .add_paragraph(cell_paragraph(
            &placeholder_label(cut),
            RunStyle::sized(THEME.sizes.placeholder)
                .italic()
                .color(THEME.colors.muted_text),
            AlignmentType::Center,
        ));

    TableRow::new(vec![id_cell, visual_cell, dialogue_cell, placeholder_cell])
        .row_height(cm_to_twips(THEME.image_row_height_cm) as f32)
        .height_rule(HeightRule::AtLeast)
}

/// Header row plus one row per cut; a scene without cuts gets the header only
pub(crate) fn scene_table(scene: &Scene) -> Table {
    let widths = THEME.column_widths_twips();

    let mut rows = Vec::with_capacity(scene.cuts.len() + 1);
    rows.push(header_row(&widths));
    rows.extend(
        scene
            .cuts
            .iter()
            .enumerate()
            .map(|(index, cut)| cut_row(cut, index, &widths)),
    );

    fixed_table(rows, widths)
}
