#![allow(clippy::float_cmp)]

use super::*;

use canvas::color::Rgb;
use canvas::input::Tool;

#[test]
fn tools_key_is_namespaced() {
    assert_eq!(TOOLS_KEY, "whiteboard.tools");
}

#[test]
fn stored_pen_parses() {
    let raw = r##"{"color":"#2563eb","width":5.0}"##;
    let pen: SavedPen = parse_json(raw).unwrap();
    assert_eq!(pen.color, Rgb::new(0x25, 0x63, 0xeb));
    assert_eq!(pen.width, 5.0);
}

#[test]
fn saved_pen_leaves_out_the_tool() {
    let tools = ToolState { tool: Tool::Eraser, color: Rgb::new(0xdc, 0x26, 0x26), width: 7.0 };
    let json = serde_json::to_value(SavedPen::from_tools(&tools)).unwrap();
    assert!(json.get("tool").is_none());
    assert_eq!(json["color"], "#dc2626");
    assert_eq!(json["width"], 7.0);
}

#[test]
fn reload_reopens_on_the_pen() {
    // Entries written before only color and width were stored still carry a tool.
    let raw = r##"{"tool":"eraser","color":"#dc2626","width":7.0}"##;
    let tools = parse_json::<SavedPen>(raw).unwrap().into_tools();
    assert_eq!(tools.tool, Tool::Pen);
    assert_eq!(tools.color, Rgb::new(0xdc, 0x26, 0x26));
    assert_eq!(tools.width, 7.0);
}

#[test]
fn corrupt_entry_is_absent() {
    assert!(parse_json::<SavedPen>("{not json").is_none());
    assert!(parse_json::<SavedPen>(r#"{"color":"red","width":3.0}"#).is_none());
    assert!(parse_json::<SavedPen>(r##"{"color":"#000000"}"##).is_none());
}

#[test]
fn native_build_reads_nothing() {
    if cfg!(not(feature = "csr")) {
        assert!(load_tools().is_none());
    }
}
