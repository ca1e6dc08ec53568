//! Animation programs: externally generated per-frame drawing logic.
//!
//! A program is called once per frame with the surface, its backing size, and
//! the frame counter. Programs are untrusted and may fail on any frame; a
//! failure is reported as a [`ProgramFault`] and never unwinds into the host.

#[cfg(test)]
#[path = "program_test.rs"]
mod program_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a program could not produce a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramFault {
    /// The source did not compile.
    #[error("program failed to compile: {0}")]
    Compile(String),
    /// The program threw while drawing a frame.
    #[error("program failed while drawing: {0}")]
    Runtime(String),
}

/// Identity of one accepted program. Fresh for every generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub Uuid);

impl ProgramId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProgramId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-frame drawing logic for a surface of type `S`.
pub trait AnimationProgram<S: ?Sized> {
    /// Draw frame number `frame` onto a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Any failure inside the program; playback stops on the first one.
    fn draw_frame(&mut self, surface: &mut S, width: u32, height: u32, frame: u64) -> Result<(), ProgramFault>;
}

impl<S: ?Sized, F> AnimationProgram<S> for F
where
    F: FnMut(&mut S, u32, u32, u64) -> Result<(), ProgramFault>,
{
    fn draw_frame(&mut self, surface: &mut S, width: u32, height: u32, frame: u64) -> Result<(), ProgramFault> {
        self(surface, width, height, frame)
    }
}

const FENCES: [&str; 3] = ["```javascript", "```js", "```"];

/// Strip Markdown code fences from generated source.
///
/// Returns `None` when nothing but whitespace is left.
#[must_use]
pub fn sanitize_source(raw: &str) -> Option<String> {
    let mut code = raw.to_owned();
    for fence in FENCES {
        code = code.replace(fence, "");
    }
    let code = code.trim();
    if code.is_empty() { None } else { Some(code.to_owned()) }
}

// =============================================================
// Drawing capability
// =============================================================

/// Context methods a generated program may call.
pub const DRAWING_METHODS: [&str; 31] = [
    "arc",
    "arcTo",
    "beginPath",
    "bezierCurveTo",
    "clearRect",
    "clip",
    "closePath",
    "createLinearGradient",
    "createRadialGradient",
    "ellipse",
    "fill",
    "fillRect",
    "fillText",
    "lineTo",
    "measureText",
    "moveTo",
    "quadraticCurveTo",
    "rect",
    "resetTransform",
    "restore",
    "rotate",
    "roundRect",
    "save",
    "scale",
    "setLineDash",
    "setTransform",
    "stroke",
    "strokeRect",
    "strokeText",
    "transform",
    "translate",
];

/// Context properties a generated program may read and assign.
pub const DRAWING_PROPERTIES: [&str; 17] = [
    "fillStyle",
    "strokeStyle",
    "lineWidth",
    "lineCap",
    "lineJoin",
    "miterLimit",
    "lineDashOffset",
    "font",
    "textAlign",
    "textBaseline",
    "globalAlpha",
    "globalCompositeOperation",
    "shadowBlur",
    "shadowColor",
    "shadowOffsetX",
    "shadowOffsetY",
    "imageSmoothingEnabled",
];

fn js_string_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("\"{name}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Body of the function that wraps a 2D context (parameter `ctx`) into the
/// object generated programs receive as their `ctx`.
///
/// The result is a frozen, prototype-less object holding only
/// [`DRAWING_METHODS`] and [`DRAWING_PROPERTIES`]. Its functions have no
/// prototype either, so neither `.canvas` nor `.constructor` is reachable
/// from it.
#[must_use]
pub fn capability_factory_source() -> String {
    format!(
        "\"use strict\";\n\
         const methods = {methods};\n\
         const properties = {properties};\n\
         const bare = (f) => {{ Object.setPrototypeOf(f, null); return f; }};\n\
         const api = Object.create(null);\n\
         for (const name of methods) {{\n\
         \x20   api[name] = bare((...args) => ctx[name](...args));\n\
         }}\n\
         for (const name of properties) {{\n\
         \x20   Object.defineProperty(api, name, {{\n\
         \x20       get: bare(() => ctx[name]),\n\
         \x20       set: bare((value) => {{ ctx[name] = value; }}),\n\
         \x20       enumerable: true,\n\
         \x20   }});\n\
         }}\n\
         return Object.freeze(api);",
        methods = js_string_list(&DRAWING_METHODS),
        properties = js_string_list(&DRAWING_PROPERTIES),
    )
}
