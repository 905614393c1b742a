//! Run and paragraph builders
//!
//! Every run carries the theme font in all three font slots so Hangul text
//! renders in the same face as Latin text.

use docx_rs::{AlignmentType, BreakType, LineSpacing, Paragraph, Run, RunFonts};

use crate::theme::{half_points, pt_to_twips, THEME};

/// Character formatting for one run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct RunStyle {
    pub size: usize,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<&'static str>,
}

impl RunStyle {
    pub(crate) fn sized(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub(crate) fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub(crate) fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub(crate) fn color(mut self, hex: &'static str) -> Self {
        self.color = Some(hex);
        self
    }
}

fn theme_fonts() -> RunFonts {
    RunFonts::new()
        .ascii(THEME.font)
        .hi_ansi(THEME.font)
        .east_asia(THEME.font)
}

pub(crate) fn styled_run(style: RunStyle) -> Run {
    let mut run = Run::new()
        .size(half_points(style.size))
        .fonts(theme_fonts());
    if style.bold {
        run = run.bold();
    }
    if style.italic {
        run = run.italic();
    }
    if let Some(color) = style.color {
        run = run.color(color);
    }
    run
}

/// One run holding `text`, with each `\n` turned into a line break
///
/// Lines stay inside a single paragraph so cell spacing is applied once.
pub(crate) fn multiline_run(text: &str, style: RunStyle) -> Run {
    let mut run = styled_run(style);
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        run = run.add_text(line);
        if lines.peek().is_some() {
            run = run.add_break(BreakType::TextWrapping);
        }
    }
    run
}

/// Paragraph with explicit spacing before and after, in points
pub(crate) fn spaced_paragraph(align: AlignmentType, before_pt: u32, after_pt: u32) -> Paragraph {
    Paragraph::new().align(align).line_spacing(
        LineSpacing::new()
            .before(pt_to_twips(before_pt))
            .after(pt_to_twips(after_pt)),
    )
}

/// Cell paragraph: tight spacing, text split into lines
pub(crate) fn cell_paragraph(text: &str, style: RunStyle, align: AlignmentType) -> Paragraph {
    spaced_paragraph(align, 2, 2).add_run(multiline_run(text, style))
}
