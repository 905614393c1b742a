//! Fixed visual theme for rendered conti documents
//!
//! Every color, font, size and width the renderer uses lives in `THEME`.
//! Lengths are stored in centimetres and font sizes in points, and converted
//! to Word units (twips, half-points) at the call site.

/// Twips per centimetre
pub const TWIPS_PER_CM: f32 = 567.0;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Used for ascii, hAnsi and eastAsia font slots
    pub font: &'static str,
    pub page: PageTheme,
    pub colors: Palette,
    pub sizes: FontSizes,
    pub columns: [Column; 4],
    /// Minimum data row height, tall enough for a 9:16 sketch in the image column
    pub image_row_height_cm: f32,
    pub labels: Labels,
}

#[derive(Debug, Clone, Copy)]
pub struct PageTheme {
    pub width_cm: f32,
    pub height_cm: f32,
    pub margin_top_cm: f32,
    pub margin_bottom_cm: f32,
    pub margin_left_cm: f32,
    pub margin_right_cm: f32,
}

/// Hex RGB colors without a leading `#`, as Word expects them
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub header_bg: &'static str,
    pub scene_bg: &'static str,
    pub row_even_bg: &'static str,
    pub row_odd_bg: &'static str,
    pub placeholder_bg: &'static str,
    pub light_text: &'static str,
    pub subtitle_text: &'static str,
    pub dialogue_text: &'static str,
    pub muted_text: &'static str,
}

/// Point sizes
#[derive(Debug, Clone, Copy)]
pub struct FontSizes {
    pub title: usize,
    pub subtitle: usize,
    pub scene_heading: usize,
    pub header: usize,
    pub cut_id: usize,
    pub body: usize,
    pub placeholder: usize,
    pub footer: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width_cm: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub subtitle_suffix: &'static str,
    pub placeholder_icon: &'static str,
    pub placeholder_caption: &'static str,
    pub footer: &'static str,
}

pub const THEME: Theme = Theme {
    font: "맑은 고딕",
    // A4 landscape
    page: PageTheme {
        width_cm: 29.7,
        height_cm: 21.0,
        margin_top_cm: 1.2,
        margin_bottom_cm: 1.2,
        margin_left_cm: 1.5,
        margin_right_cm: 1.5,
    },
    colors: Palette {
        header_bg: "2C3E50",
        scene_bg: "D4A574",
        row_even_bg: "F7F3EE",
        row_odd_bg: "FFFFFF",
        placeholder_bg: "F0F0F0",
        light_text: "FFFFFF",
        subtitle_text: "646464",
        dialogue_text: "8B4513",
        muted_text: "B4B4B4",
    },
    sizes: FontSizes {
        title: 18,
        subtitle: 10,
        scene_heading: 12,
        header: 9,
        cut_id: 10,
        body: 9,
        placeholder: 8,
        footer: 8,
    },
    columns: [
        Column {
            header: "컷",
            width_cm: 2.0,
        },
        Column {
            header: "화면 묘사",
            width_cm: 10.0,
        },
        Column {
            header: "대사",
            width_cm: 8.5,
        },
        Column {
            header: "콘티 이미지",
            width_cm: 5.5,
        },
    ],
    image_row_height_cm: 7.5,
    labels: Labels {
        subtitle_suffix: "줄콘티 (Line Conti)",
        placeholder_icon: "📷",
        placeholder_caption: "(9:16 이미지 삽입)",
        footer: "Generated by contix | 줄콘티 v2",
    },
};

pub fn cm_to_twips(cm: f32) -> u32 {
    (cm * TWIPS_PER_CM).round() as u32
}

/// Word run sizes are in half-points
pub fn half_points(points: usize) -> usize {
    points * 2
}

/// Word spacing is in twentieths of a point
pub fn pt_to_twips(points: u32) -> u32 {
    points * 20
}

impl Theme {
    pub fn table_width_cm(&self) -> f32 {
        self.columns.iter().map(|c| c.width_cm).sum()
    }

    pub fn printable_width_cm(&self) -> f32 {
        self.page.width_cm - self.page.margin_left_cm - self.page.margin_right_cm
    }

    pub fn column_widths_twips(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|c| cm_to_twips(c.width_cm) as usize)
            .collect()
    }

    /// Background for a data row at zero-based `index` within its scene
    pub fn row_bg(&self, index: usize) -> &'static str {
        if index % 2 == 0 {
            self.colors.row_even_bg
        } else {
            self.colors.row_odd_bg
        }
    }
}
