//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own the imperative `canvas` engines and translate DOM events
//! and panel state into engine calls.

pub mod geometry_visualizer;
pub mod tool_palette;
pub mod whiteboard_panel;
