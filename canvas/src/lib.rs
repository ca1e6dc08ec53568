//! Canvas drawing and playback engine for the classroom whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and natively
//! for tests. It owns two engines that share one raster-surface abstraction:
//! the freehand whiteboard, driven by pointer input, and the animation player,
//! driven by generated per-frame programs. The host (the `client` crate) only
//! wires DOM events and generation results into them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`whiteboard`] | Freehand drawing engine and its host [`whiteboard::Action`]s |
//! | [`playback`] | Animation playback state machine |
//! | [`program`] | Animation program trait, faults, and source cleanup |
//! | [`surface`] | Surface trait, sizing policy, and the headless [`surface::MemorySurface`] |
//! | [`coords`] | Points, sizes, and viewport-to-backing mapping |
//! | [`input`] | Tools, tool state, and the stroke state machine |
//! | [`raster`] | Software RGBA raster behind the headless surface |
//! | [`export`] | Printable page layout for downloads |
//! | [`color`] | RGB colors and hex parsing |
//! | [`web`] | Browser bindings: canvas surface, JS programs, frame loop |
//! | [`consts`] | Shared constants (widths, palette, placeholder text, page metrics) |

pub mod color;
pub mod consts;
pub mod coords;
pub mod export;
pub mod input;
pub mod playback;
pub mod program;
pub mod raster;
pub mod surface;
pub mod web;
pub mod whiteboard;
