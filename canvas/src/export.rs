//! Printable page layout for whiteboard exports.
//!
//! The exported page is a title band, wrapped heading and body text, a divider,
//! the drawing itself, and a footer line. Layout is computed here against a
//! caller-supplied text measurer; [`crate::web::export_png_data_url`] paints it.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::color::Rgb;
use crate::consts::{
    PAGE_BAND, PAGE_BAND_HEIGHT_PX, PAGE_BODY_COLOR, PAGE_BODY_FONT, PAGE_BODY_GAP_PX, PAGE_BODY_LINE_PX,
    PAGE_BOTTOM_PX, PAGE_DIVIDER_COLOR, PAGE_DIVIDER_OFFSET_PX, PAGE_DRAWING_OFFSET_PX, PAGE_FOOTER_COLOR,
    PAGE_FOOTER_FONT, PAGE_FOOTER_RISE_PX, PAGE_HEADING_COLOR, PAGE_HEADING_FONT, PAGE_HEADING_LINE_PX,
    PAGE_HEADING_TOP_PX, PAGE_MARGIN_PX, PAGE_TITLE_BASELINE_PX, PAGE_TITLE_COLOR, PAGE_TITLE_FONT,
};
use crate::coords::Size;
use crate::surface::SurfaceError;

/// Text content of an exported page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub heading: String,
    pub body: String,
    pub footer: String,
}

/// One line of text placed at a baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: &'static str,
    pub color: Rgb,
}

/// Positions of everything on an exported page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page size; the width matches the drawing.
    pub size: Size,
    pub band_height: f64,
    pub band_color: Rgb,
    pub lines: Vec<PlacedText>,
    /// Baseline y of the horizontal divider.
    pub divider_y: f64,
    pub divider_color: Rgb,
    /// Where the drawing's top-left corner lands.
    pub drawing_y: f64,
    pub footer: PlacedText,
}

impl PageLayout {
    /// Lay out a page for export. A drawing with zero area has nothing to
    /// export.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::EmptySurface`] when `drawing` has zero area.
    pub fn for_export(
        text: &PageText,
        drawing: Size,
        measure: impl FnMut(&str, &str) -> f64,
    ) -> Result<Self, SurfaceError> {
        if drawing.is_empty() {
            return Err(SurfaceError::EmptySurface);
        }
        Ok(Self::compose(text, drawing, measure))
    }

    /// Lay out `text` above a drawing of size `drawing`.
    ///
    /// `measure(font, text)` returns the rendered width of `text` in `font`.
    #[must_use]
    pub fn compose(text: &PageText, drawing: Size, mut measure: impl FnMut(&str, &str) -> f64) -> Self {
        let width = f64::from(drawing.width);
        let max_text = width - 2.0 * PAGE_MARGIN_PX;
        let mut lines = vec![PlacedText {
            text: text.title.clone(),
            x: PAGE_MARGIN_PX,
            y: PAGE_TITLE_BASELINE_PX,
            font: PAGE_TITLE_FONT,
            color: PAGE_TITLE_COLOR,
        }];

        let mut y = PAGE_HEADING_TOP_PX;
        for line in wrap_lines(&text.heading, max_text, |s| measure(PAGE_HEADING_FONT, s)) {
            lines.push(PlacedText { text: line, x: PAGE_MARGIN_PX, y, font: PAGE_HEADING_FONT, color: PAGE_HEADING_COLOR });
            y += PAGE_HEADING_LINE_PX;
        }

        y += PAGE_BODY_GAP_PX;
        for line in wrap_lines(&text.body, max_text, |s| measure(PAGE_BODY_FONT, s)) {
            lines.push(PlacedText { text: line, x: PAGE_MARGIN_PX, y, font: PAGE_BODY_FONT, color: PAGE_BODY_COLOR });
            y += PAGE_BODY_LINE_PX;
        }

        let drawing_y = y + PAGE_DRAWING_OFFSET_PX;
        let height = drawing_y + f64::from(drawing.height) + PAGE_BOTTOM_PX;

        Self {
            size: Size::new(drawing.width, to_px(height)),
            band_height: PAGE_BAND_HEIGHT_PX,
            band_color: PAGE_BAND,
            lines,
            divider_y: y + PAGE_DIVIDER_OFFSET_PX,
            divider_color: PAGE_DIVIDER_COLOR,
            drawing_y,
            footer: PlacedText {
                text: text.footer.clone(),
                x: PAGE_MARGIN_PX,
                y: height - PAGE_FOOTER_RISE_PX,
                font: PAGE_FOOTER_FONT,
                color: PAGE_FOOTER_COLOR,
            },
        }
    }

    /// Horizontal extent of the divider.
    #[must_use]
    pub fn divider_span(&self) -> (f64, f64) {
        (PAGE_MARGIN_PX, f64::from(self.size.width) - PAGE_MARGIN_PX)
    }
}

/// Greedy word wrap: break before a word that would push the line past
/// `max_width`. A single word wider than `max_width` gets a line of its own.
#[must_use]
pub fn wrap_lines(text: &str, max_width: f64, mut measure: impl FnMut(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_owned()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(value: f64) -> u32 {
    value.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}
