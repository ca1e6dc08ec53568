//! Shared numeric constants for the canvas crate.

use crate::color::Rgb;

// ── Tools ───────────────────────────────────────────────────────

/// Stroke width of the eraser on the teacher panel whiteboard.
pub const ERASER_WIDTH_PX: f64 = 25.0;

/// Stroke width of the eraser in the worksheet modal.
pub const WORKSHEET_ERASER_WIDTH_PX: f64 = 30.0;

/// Pen width used until the user picks another one.
pub const DEFAULT_PEN_WIDTH_PX: f64 = 3.0;

/// Lower bound for a user-selected pen width.
pub const MIN_STROKE_WIDTH_PX: f64 = 1.0;

/// Upper bound for a user-selected pen width.
pub const MAX_STROKE_WIDTH_PX: f64 = 40.0;

/// Diameter of the dot cursor shown while the pen is active.
pub const DOT_CURSOR_SIZE_PX: u32 = 8;

// ── Colors ──────────────────────────────────────────────────────

/// Surface background. The eraser paints with this color.
pub const BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Default pen color.
pub const INK_BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Palette entry: blue ink.
pub const INK_BLUE: Rgb = Rgb::new(0x25, 0x63, 0xeb);

/// Palette entry: red ink.
pub const INK_RED: Rgb = Rgb::new(0xdc, 0x26, 0x26);

/// Pen palette offered by the toolbar, in display order.
pub const PALETTE: [Rgb; 3] = [INK_BLACK, INK_BLUE, INK_RED];

/// Color of the "loading" placeholder text.
pub const PLACEHOLDER_TEXT: Rgb = Rgb::new(0x64, 0x74, 0x8b);

/// Color of the generation error placeholder text.
pub const PLACEHOLDER_ERROR: Rgb = Rgb::new(0xef, 0x44, 0x44);

// ── Playback ────────────────────────────────────────────────────

/// Text drawn while a new animation program is being generated.
pub const LOADING_MESSAGE: &str = "Се вчитува...";

/// Text drawn when generation fails.
pub const GENERATION_ERROR_MESSAGE: &str = "Грешка: Проверете API Key";

/// Font used for placeholder text.
pub const PLACEHOLDER_FONT: &str = "16px Inter, sans-serif";

// ── Layout ──────────────────────────────────────────────────────

/// Delay before re-measuring a surface after a layout transition.
pub const SETTLE_DELAY_MS: u32 = 100;

// ── Export ──────────────────────────────────────────────────────

/// Left and right page margin of an exported page.
pub const PAGE_MARGIN_PX: f64 = 40.0;

/// Height of the dark title band at the top of an exported page.
pub const PAGE_BAND_HEIGHT_PX: f64 = 100.0;

/// Baseline of the title inside the band.
pub const PAGE_TITLE_BASELINE_PX: f64 = 60.0;

/// Baseline of the first heading line.
pub const PAGE_HEADING_TOP_PX: f64 = 150.0;

/// Line advance for heading text.
pub const PAGE_HEADING_LINE_PX: f64 = 32.0;

/// Gap between the heading and the body text.
pub const PAGE_BODY_GAP_PX: f64 = 20.0;

/// Line advance for body text.
pub const PAGE_BODY_LINE_PX: f64 = 30.0;

/// Distance from the last text line to the divider.
pub const PAGE_DIVIDER_OFFSET_PX: f64 = 30.0;

/// Distance from the last text line to the top of the drawing.
pub const PAGE_DRAWING_OFFSET_PX: f64 = 60.0;

/// Space below the drawing, holding the footer.
pub const PAGE_BOTTOM_PX: f64 = 60.0;

/// Footer baseline, measured up from the bottom edge.
pub const PAGE_FOOTER_RISE_PX: f64 = 25.0;

pub const PAGE_BAND: Rgb = Rgb::new(0x11, 0x18, 0x27);
pub const PAGE_TITLE_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const PAGE_HEADING_COLOR: Rgb = Rgb::new(0x1e, 0x29, 0x3b);
pub const PAGE_BODY_COLOR: Rgb = Rgb::new(0x47, 0x55, 0x69);
pub const PAGE_DIVIDER_COLOR: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);
pub const PAGE_FOOTER_COLOR: Rgb = Rgb::new(0x94, 0xa3, 0xb8);

pub const PAGE_TITLE_FONT: &str = "bold 28px Inter, sans-serif";
pub const PAGE_HEADING_FONT: &str = "bold 22px Inter, sans-serif";
pub const PAGE_BODY_FONT: &str = "italic 20px Inter, sans-serif";
pub const PAGE_FOOTER_FONT: &str = "14px Inter, sans-serif";
