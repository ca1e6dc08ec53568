//! Freehand drawing engine.
//!
//! [`WhiteboardCore`] turns pointer samples into strokes on a [`Surface`]. It
//! holds no platform handles: the surface is passed into every call and the
//! host carries out the returned [`Action`]s (pointer capture, cursor changes).
//! [`crate::web::Whiteboard`] is the browser binding.

#[cfg(test)]
#[path = "whiteboard_test.rs"]
mod whiteboard_test;

use crate::color::Rgb;
use crate::coords::{Point, map_to_backing};
use crate::input::{InputState, PointerSample, StrokeSession, Tool, ToolState, WhiteboardConfig};
use crate::surface::{Surface, report};

/// Side effects the host must perform after an input handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Route all further events of this pointer to the canvas.
    CapturePointer(i32),
    /// Release a capture taken by [`Action::CapturePointer`].
    ReleasePointer(i32),
    /// Replace the canvas CSS cursor.
    SetCursor(String),
}

/// Drawing engine state for one whiteboard surface.
pub struct WhiteboardCore<S: Surface> {
    pub config: WhiteboardConfig,
    pub tools: ToolState,
    pub input: InputState<S::Snapshot>,
}

impl<S: Surface> WhiteboardCore<S> {
    #[must_use]
    pub fn new(config: WhiteboardConfig) -> Self {
        let tools = ToolState::for_config(&config);
        Self { config, tools, input: InputState::Idle }
    }

    /// Start from previously persisted tool preferences.
    ///
    /// The width is re-clamped, and ignored when the board has a fixed pen.
    #[must_use]
    pub fn with_tools(config: WhiteboardConfig, tools: ToolState) -> Self {
        let mut core = Self::new(config);
        core.adopt(tools);
        core
    }

    // --- Queries ---

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.session().is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> String {
        self.tools.cursor()
    }

    // --- Toolbar ---

    pub fn select_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.tools.select_tool(tool);
        vec![Action::SetCursor(self.cursor())]
    }

    pub fn select_color(&mut self, color: Rgb) -> Vec<Action> {
        self.tools.select_color(color);
        vec![Action::SetCursor(self.cursor())]
    }

    /// Take over a whole toolbar selection made outside the engine.
    ///
    /// Same width rules as [`Self::with_tools`]. A stroke in progress keeps
    /// its tool. Emits a cursor update only when the cursor changes.
    pub fn apply_tools(&mut self, tools: ToolState) -> Vec<Action> {
        let before = self.cursor();
        self.adopt(tools);
        let after = self.cursor();
        if after == before { Vec::new() } else { vec![Action::SetCursor(after)] }
    }

    fn adopt(&mut self, tools: ToolState) {
        self.tools.select_tool(tools.tool);
        self.tools.color = tools.color;
        if self.config.width_adjustable {
            self.tools.set_width(tools.width);
        }
    }

    /// Change the pen width. No-op on boards with a fixed pen.
    pub fn set_width(&mut self, width: f64) {
        if self.config.width_adjustable {
            self.tools.set_width(width);
        }
    }

    // --- Surface ---

    /// Blank the whole surface and drop any stroke in progress.
    pub fn clear(&mut self, surface: &mut S) -> Vec<Action> {
        report("clear", surface.clear());
        self.end_any_stroke()
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, surface: &mut S, sample: PointerSample) -> Vec<Action> {
        if self.is_drawing() {
            return Vec::new();
        }

        let start = to_backing(surface, sample);
        let tool = self.tools.tool;
        let snapshot = if tool == Tool::Line {
            match surface.snapshot() {
                Ok(snapshot) => Some(snapshot),
                Err(err) => {
                    log::debug!("line preview snapshot failed, drawing without restore: {err}");
                    None
                }
            }
        } else {
            None
        };

        self.input = InputState::Drawing(StrokeSession {
            pointer_id: sample.pointer_id,
            tool,
            start,
            last: start,
            snapshot,
        });
        vec![Action::CapturePointer(sample.pointer_id)]
    }

    pub fn on_pointer_move(&mut self, surface: &mut S, sample: PointerSample) -> Vec<Action> {
        let InputState::Drawing(session) = &mut self.input else {
            return Vec::new();
        };
        if session.pointer_id != sample.pointer_id {
            return Vec::new();
        }

        let current = to_backing(surface, sample);
        let style = ToolState { tool: session.tool, ..self.tools }.effective_style(&self.config);

        if session.tool.is_freehand() {
            report("stroke", surface.stroke_segment(session.last, current, &style));
        } else {
            if let Some(snapshot) = &session.snapshot {
                report("preview restore", surface.restore(snapshot));
            }
            report("line preview", surface.stroke_segment(session.start, current, &style));
        }
        session.last = current;
        Vec::new()
    }

    pub fn on_pointer_up(&mut self, _surface: &mut S, sample: PointerSample) -> Vec<Action> {
        self.end_stroke(sample.pointer_id)
    }

    pub fn on_pointer_leave(&mut self, _surface: &mut S, sample: PointerSample) -> Vec<Action> {
        self.end_stroke(sample.pointer_id)
    }

    pub fn on_pointer_cancel(&mut self, _surface: &mut S, sample: PointerSample) -> Vec<Action> {
        self.end_stroke(sample.pointer_id)
    }

    fn end_stroke(&mut self, pointer_id: i32) -> Vec<Action> {
        if !self.input.is_owned_by(pointer_id) {
            return Vec::new();
        }
        self.end_any_stroke()
    }

    fn end_any_stroke(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Drawing(session) => vec![Action::ReleasePointer(session.pointer_id)],
            InputState::Idle => Vec::new(),
        }
    }
}

fn to_backing<S: Surface>(surface: &S, sample: PointerSample) -> Point {
    map_to_backing(sample.client, surface.bounds(), surface.backing_size())
}
