//! Input model: tools, tool state, pointer samples, and the stroke state machine.
//!
//! `ToolState` is what the toolbar edits; it decides how the next stroke looks.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying what the engine needs to extend or preview the stroke.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{
    BACKGROUND, DEFAULT_PEN_WIDTH_PX, DOT_CURSOR_SIZE_PX, ERASER_WIDTH_PX, INK_BLACK, MAX_STROKE_WIDTH_PX,
    MIN_STROKE_WIDTH_PX, PALETTE, WORKSHEET_ERASER_WIDTH_PX,
};
use crate::coords::Point;
use crate::surface::StrokeStyle;

/// Which drawing tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand ink (default).
    #[default]
    Pen,
    /// Straight segment with a live rubber-band preview.
    Line,
    /// Freehand strokes in the background color.
    Eraser,
}

impl Tool {
    /// Whether strokes follow the pointer path segment by segment.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}

/// Per-panel whiteboard parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// Width of eraser strokes; not user-adjustable.
    pub eraser_width: f64,
    /// Pen width for a fresh tool state.
    pub default_pen_width: f64,
    /// Whether the toolbar offers a width control.
    pub width_adjustable: bool,
    /// Pen colors offered by the toolbar.
    pub palette: Vec<Rgb>,
    /// Color the eraser paints with.
    pub background: Rgb,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            eraser_width: ERASER_WIDTH_PX,
            default_pen_width: DEFAULT_PEN_WIDTH_PX,
            width_adjustable: true,
            palette: PALETTE.to_vec(),
            background: BACKGROUND,
        }
    }
}

impl WhiteboardConfig {
    /// The worksheet modal's board: wider eraser, fixed pen width.
    #[must_use]
    pub fn worksheet() -> Self {
        Self {
            eraser_width: WORKSHEET_ERASER_WIDTH_PX,
            width_adjustable: false,
            ..Self::default()
        }
    }
}

/// Toolbar selection: active tool plus pen color and width.
///
/// Color and width always describe the pen; the eraser's look comes from
/// [`WhiteboardConfig`] and is applied by [`ToolState::effective_style`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Rgb,
    pub width: f64,
}

impl Default for ToolState {
    fn default() -> Self {
        Self { tool: Tool::Pen, color: INK_BLACK, width: DEFAULT_PEN_WIDTH_PX }
    }
}

impl ToolState {
    /// Fresh state for a panel.
    #[must_use]
    pub fn for_config(config: &WhiteboardConfig) -> Self {
        Self { width: clamp_width(config.default_pen_width), ..Self::default() }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Pick a pen color. Leaves the eraser if it was active.
    pub fn select_color(&mut self, color: Rgb) {
        if self.tool == Tool::Eraser {
            self.tool = Tool::Pen;
        }
        self.color = color;
    }

    /// Set the pen width, clamped to the supported range.
    pub fn set_width(&mut self, width: f64) {
        self.width = clamp_width(width);
    }

    /// The color and width the next segment will be drawn with.
    #[must_use]
    pub fn effective_style(&self, config: &WhiteboardConfig) -> StrokeStyle {
        match self.tool {
            Tool::Eraser => StrokeStyle { color: config.background, width: config.eraser_width },
            Tool::Pen | Tool::Line => StrokeStyle { color: self.color, width: self.width },
        }
    }

    /// CSS `cursor` value for the drawing area.
    ///
    /// The pen shows a small dot in the ink color; other tools use a crosshair.
    #[must_use]
    pub fn cursor(&self) -> String {
        match self.tool {
            Tool::Pen => {
                let size = DOT_CURSOR_SIZE_PX;
                let center = size / 2;
                let radius = center.saturating_sub(1);
                // `#` must be escaped inside a data URL.
                let fill = self.color.to_hex().replace('#', "%23");
                format!(
                    "url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\"><circle cx=\"{center}\" cy=\"{center}\" r=\"{radius}\" fill=\"{fill}\"/></svg>') {center} {center}, crosshair"
                )
            }
            Tool::Line | Tool::Eraser => "crosshair".to_owned(),
        }
    }
}

fn clamp_width(width: f64) -> f64 {
    if width.is_nan() {
        DEFAULT_PEN_WIDTH_PX
    } else {
        width.clamp(MIN_STROKE_WIDTH_PX, MAX_STROKE_WIDTH_PX)
    }
}

/// A pointer event reduced to what the engine needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Platform pointer id; distinguishes simultaneous touch contacts.
    pub pointer_id: i32,
    /// Position in viewport (client) coordinates.
    pub client: Point,
}

impl PointerSample {
    #[must_use]
    pub fn new(pointer_id: i32, client: Point) -> Self {
        Self { pointer_id, client }
    }
}

/// One pointer-down to pointer-up interaction.
#[derive(Debug, Clone)]
pub struct StrokeSession<Snap> {
    /// The pointer that owns this stroke; other pointers are ignored.
    pub pointer_id: i32,
    /// Tool captured at pointer-down.
    pub tool: Tool,
    /// Backing-space position where the stroke started.
    pub start: Point,
    /// Backing-space position of the previous event.
    pub last: Point,
    /// Raster content before the stroke, kept for the line preview.
    pub snapshot: Option<Snap>,
}

/// Gesture state between pointer events.
#[derive(Debug, Clone)]
pub enum InputState<Snap> {
    /// No stroke in progress.
    Idle,
    /// A stroke is being drawn.
    Drawing(StrokeSession<Snap>),
}

impl<Snap> Default for InputState<Snap> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<Snap> InputState<Snap> {
    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&StrokeSession<Snap>> {
        match self {
            Self::Idle => None,
            Self::Drawing(session) => Some(session),
        }
    }

    /// Whether `pointer_id` owns the active session.
    #[must_use]
    pub fn is_owned_by(&self, pointer_id: i32) -> bool {
        self.session().is_some_and(|s| s.pointer_id == pointer_id)
    }
}
