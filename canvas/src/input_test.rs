#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{INK_BLUE, INK_RED};

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_freehand_classification() {
    assert!(Tool::Pen.is_freehand());
    assert!(Tool::Eraser.is_freehand());
    assert!(!Tool::Line.is_freehand());
}

#[test]
fn tool_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tool::Eraser).unwrap(), "\"eraser\"");
    assert_eq!(serde_json::from_str::<Tool>("\"line\"").unwrap(), Tool::Line);
}

// =============================================================
// WhiteboardConfig
// =============================================================

#[test]
fn config_default_is_the_lesson_panel_board() {
    let config = WhiteboardConfig::default();
    assert_eq!(config.eraser_width, 25.0);
    assert_eq!(config.default_pen_width, 3.0);
    assert!(config.width_adjustable);
    assert_eq!(config.palette, vec![INK_BLACK, INK_BLUE, INK_RED]);
    assert_eq!(config.background, Rgb::new(255, 255, 255));
}

#[test]
fn config_worksheet_variant() {
    let config = WhiteboardConfig::worksheet();
    assert_eq!(config.eraser_width, 30.0);
    assert!(!config.width_adjustable);
    assert_eq!(config.default_pen_width, 3.0);
}

#[test]
fn config_deserializes_partial_json_with_defaults() {
    let config: WhiteboardConfig = serde_json::from_str(r##"{"eraser_width": 40, "palette": ["#123456"]}"##).unwrap();
    assert_eq!(config.eraser_width, 40.0);
    assert_eq!(config.palette, vec![Rgb::new(0x12, 0x34, 0x56)]);
    assert_eq!(config.default_pen_width, 3.0);
}

// =============================================================
// ToolState
// =============================================================

#[test]
fn tool_state_default_is_black_pen() {
    let state = ToolState::default();
    assert_eq!(state.tool, Tool::Pen);
    assert_eq!(state.color, INK_BLACK);
    assert_eq!(state.width, 3.0);
}

#[test]
fn eraser_style_forces_background_and_fixed_width() {
    let config = WhiteboardConfig::default();
    let mut state = ToolState::default();
    state.select_color(INK_RED);
    state.set_width(7.0);
    state.select_tool(Tool::Eraser);

    let style = state.effective_style(&config);
    assert_eq!(style.color, config.background);
    assert_eq!(style.width, 25.0);
}

#[test]
fn pen_and_line_use_selected_color_and_width() {
    let config = WhiteboardConfig::default();
    let mut state = ToolState::default();
    state.select_color(INK_BLUE);
    state.set_width(6.0);
    for tool in [Tool::Pen, Tool::Line] {
        state.select_tool(tool);
        let style = state.effective_style(&config);
        assert_eq!(style.color, INK_BLUE);
        assert_eq!(style.width, 6.0);
    }
}

#[test]
fn selecting_color_leaves_eraser() {
    let mut state = ToolState::default();
    state.select_tool(Tool::Eraser);
    state.select_color(INK_BLUE);
    assert_eq!(state.tool, Tool::Pen);
    assert_eq!(state.color, INK_BLUE);
}

#[test]
fn selecting_color_keeps_line_tool() {
    let mut state = ToolState::default();
    state.select_tool(Tool::Line);
    state.select_color(INK_RED);
    assert_eq!(state.tool, Tool::Line);
}

#[test]
fn pen_color_survives_an_eraser_round_trip() {
    let mut state = ToolState::default();
    state.select_color(INK_RED);
    state.select_tool(Tool::Eraser);
    state.select_tool(Tool::Pen);
    assert_eq!(state.color, INK_RED);
}

#[test]
fn width_is_clamped() {
    let mut state = ToolState::default();
    state.set_width(0.1);
    assert_eq!(state.width, 1.0);
    state.set_width(500.0);
    assert_eq!(state.width, 40.0);
    state.set_width(f64::NAN);
    assert_eq!(state.width, 3.0);
}

#[test]
fn for_config_uses_config_pen_width() {
    let config = WhiteboardConfig { default_pen_width: 5.0, ..WhiteboardConfig::default() };
    assert_eq!(ToolState::for_config(&config).width, 5.0);
}

#[test]
fn pen_cursor_is_a_dot_in_ink_color() {
    let mut state = ToolState::default();
    state.select_color(INK_BLUE);
    let cursor = state.cursor();
    assert!(cursor.starts_with("url('data:image/svg+xml"));
    assert!(cursor.contains("%232563eb"));
    assert!(cursor.ends_with("4 4, crosshair"));
}

#[test]
fn other_tools_use_crosshair() {
    let mut state = ToolState::default();
    state.select_tool(Tool::Line);
    assert_eq!(state.cursor(), "crosshair");
    state.select_tool(Tool::Eraser);
    assert_eq!(state.cursor(), "crosshair");
}

#[test]
fn tool_state_round_trips_through_json() {
    let state = ToolState { tool: Tool::Line, color: INK_RED, width: 4.0 };
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"#dc2626\""));
    assert_eq!(serde_json::from_str::<ToolState>(&json).unwrap(), state);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state: InputState<()> = InputState::default();
    assert!(state.session().is_none());
    assert!(!state.is_owned_by(1));
}

#[test]
fn input_state_ownership() {
    let state = InputState::Drawing(StrokeSession {
        pointer_id: 7,
        tool: Tool::Pen,
        start: Point::new(0.0, 0.0),
        last: Point::new(0.0, 0.0),
        snapshot: None::<()>,
    });
    assert!(state.is_owned_by(7));
    assert!(!state.is_owned_by(8));
}
