//! Browser bindings for both engines.
//!
//! This module is the only place that touches [`web_sys`]. It provides the
//! canvas-backed [`WebSurface`], the sandboxed [`JsProgram`], and the two
//! host-facing wrappers: [`Whiteboard`] (pointer events in, strokes out) and
//! [`Player`] (a `requestAnimationFrame` loop around [`PlaybackCore`]).
//!
//! `JsValue` errors are converted into [`SurfaceError::Platform`] or
//! [`ProgramFault`] with their debug text; nothing here panics.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, ImageData, PointerEvent};

use crate::color::Rgb;
use crate::consts::{BACKGROUND, PLACEHOLDER_FONT};
use crate::coords::{Point, Rect, Size};
use crate::export::{PageLayout, PageText};
use crate::input::{PointerSample, Tool, ToolState, WhiteboardConfig};
use crate::playback::{PlaybackCore, PlaybackPhase, TickOutcome};
use crate::program::{AnimationProgram, ProgramFault, ProgramId, capability_factory_source};
use crate::surface::{SizeSync, StrokeStyle, Surface, SurfaceError, sync_backing_size};
use crate::whiteboard::{Action, WhiteboardCore};

fn platform(err: JsValue) -> SurfaceError {
    SurfaceError::Platform(describe(&err))
}

fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn document() -> Result<Document, SurfaceError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SurfaceError::Platform("no document".into()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
    canvas
        .get_context("2d")
        .map_err(platform)?
        .ok_or_else(|| SurfaceError::Platform("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::Platform("unexpected context type".into()))
}

// =============================================================
// Surface
// =============================================================

/// A [`Surface`] backed by an `HTMLCanvasElement` and its 2D context.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    /// Bind to `canvas`.
    ///
    /// # Errors
    ///
    /// Fails when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The rendering context handed to animation programs.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for WebSurface {
    type Snapshot = ImageData;

    fn backing_size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn css_size(&self) -> Size {
        let width = u32::try_from(self.canvas.client_width()).unwrap_or(0);
        let height = u32::try_from(self.canvas.client_height()).unwrap_or(0);
        Size::new(width, height)
    }

    fn bounds(&self) -> Rect {
        let rect = self.canvas.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn set_backing_size(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn snapshot(&self) -> Result<ImageData, SurfaceError> {
        let size = self.backing_size();
        if size.is_empty() {
            return Err(SurfaceError::EmptySurface);
        }
        self.ctx
            .get_image_data(0.0, 0.0, f64::from(size.width), f64::from(size.height))
            .map_err(platform)
    }

    fn restore(&mut self, snapshot: &ImageData) -> Result<(), SurfaceError> {
        self.ctx.put_image_data(snapshot, 0.0, 0.0).map_err(platform)
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> Result<(), SurfaceError> {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&style.color.to_hex());
        ctx.set_line_width(style.width);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let size = self.backing_size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        Ok(())
    }

    fn draw_placeholder(&mut self, text: &str, color: Rgb) -> Result<(), SurfaceError> {
        let size = self.backing_size();
        let ctx = &self.ctx;
        ctx.set_font(PLACEHOLDER_FONT);
        ctx.set_fill_style_str(&color.to_hex());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(text, f64::from(size.width) / 2.0, f64::from(size.height) / 2.0)
            .map_err(platform)
    }
}

/// Suppress browser gestures and text selection on a drawing canvas.
///
/// # Errors
///
/// Fails when the style declaration rejects a property.
pub fn prepare_canvas(canvas: &HtmlCanvasElement) -> Result<(), SurfaceError> {
    let style = canvas.style();
    style.set_property("touch-action", "none").map_err(platform)?;
    style.set_property("user-select", "none").map_err(platform)?;
    style.set_property("-webkit-user-select", "none").map_err(platform)
}

/// Reduce a DOM pointer event to what the engine needs.
#[must_use]
pub fn pointer_sample(event: &PointerEvent) -> PointerSample {
    PointerSample::new(
        event.pointer_id(),
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
    )
}

// =============================================================
// Whiteboard
// =============================================================

/// A [`WhiteboardCore`] bound to a canvas element.
///
/// Every forwarded pointer event has its default action prevented, and the
/// core's [`Action`]s are applied to the element before the handler returns.
pub struct Whiteboard {
    surface: WebSurface,
    core: WhiteboardCore<WebSurface>,
}

impl Whiteboard {
    /// Bind a whiteboard to `canvas` and size it to its layout box.
    ///
    /// # Errors
    ///
    /// Fails when the canvas has no 2D context or cannot be styled.
    pub fn new(canvas: HtmlCanvasElement, config: WhiteboardConfig) -> Result<Self, SurfaceError> {
        let tools = ToolState::for_config(&config);
        Self::with_tools(canvas, config, tools)
    }

    /// Like [`Whiteboard::new`], restoring saved tool preferences.
    ///
    /// # Errors
    ///
    /// Fails when the canvas has no 2D context or cannot be styled.
    pub fn with_tools(
        canvas: HtmlCanvasElement,
        config: WhiteboardConfig,
        tools: ToolState,
    ) -> Result<Self, SurfaceError> {
        prepare_canvas(&canvas)?;
        let mut surface = WebSurface::new(canvas)?;
        sync_backing_size(&mut surface);
        let core = WhiteboardCore::with_tools(config, tools);
        let board = Self { surface, core };
        board.apply(vec![Action::SetCursor(board.core.cursor())]);
        Ok(board)
    }

    #[must_use]
    pub fn core(&self) -> &WhiteboardCore<WebSurface> {
        &self.core
    }

    #[must_use]
    pub fn tools(&self) -> ToolState {
        self.core.tools
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        event.prevent_default();
        let actions = self.core.on_pointer_down(&mut self.surface, pointer_sample(event));
        self.apply(actions);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        event.prevent_default();
        let actions = self.core.on_pointer_move(&mut self.surface, pointer_sample(event));
        self.apply(actions);
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        event.prevent_default();
        let actions = self.core.on_pointer_up(&mut self.surface, pointer_sample(event));
        self.apply(actions);
    }

    pub fn pointer_leave(&mut self, event: &PointerEvent) {
        event.prevent_default();
        let actions = self.core.on_pointer_leave(&mut self.surface, pointer_sample(event));
        self.apply(actions);
    }

    pub fn pointer_cancel(&mut self, event: &PointerEvent) {
        event.prevent_default();
        let actions = self.core.on_pointer_cancel(&mut self.surface, pointer_sample(event));
        self.apply(actions);
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let actions = self.core.select_tool(tool);
        self.apply(actions);
    }

    pub fn select_color(&mut self, color: Rgb) {
        let actions = self.core.select_color(color);
        self.apply(actions);
    }

    pub fn set_width(&mut self, width: f64) {
        self.core.set_width(width);
    }

    /// Adopt a toolbar selection held by the host.
    pub fn apply_tools(&mut self, tools: ToolState) {
        let actions = self.core.apply_tools(tools);
        self.apply(actions);
    }

    pub fn clear(&mut self) {
        let actions = self.core.clear(&mut self.surface);
        self.apply(actions);
    }

    /// Re-run the sizing policy; call after layout changes.
    pub fn resize(&mut self) -> SizeSync {
        sync_backing_size(&mut self.surface)
    }

    /// Render the drawing onto a printable page.
    ///
    /// # Errors
    ///
    /// Fails when the page canvas cannot be created or encoded.
    pub fn export_png(&self, text: &PageText) -> Result<String, SurfaceError> {
        export_png_data_url(&self.surface, text)
    }

    fn apply(&self, actions: Vec<Action>) {
        let canvas = &self.surface.canvas;
        for action in actions {
            match action {
                Action::CapturePointer(id) => {
                    if let Err(err) = canvas.set_pointer_capture(id) {
                        log::debug!("pointer capture failed: {}", describe(&err));
                    }
                }
                Action::ReleasePointer(id) => {
                    if canvas.has_pointer_capture(id) {
                        if let Err(err) = canvas.release_pointer_capture(id) {
                            log::debug!("pointer release failed: {}", describe(&err));
                        }
                    }
                }
                Action::SetCursor(cursor) => {
                    if let Err(err) = canvas.style().set_property("cursor", &cursor) {
                        log::debug!("cursor update failed: {}", describe(&err));
                    }
                }
            }
        }
    }
}

// =============================================================
// Untrusted programs
// =============================================================

/// Parameters every generated program receives.
const PROGRAM_PARAMS: [&str; 4] = ["ctx", "width", "height", "frame"];

/// Host globals shadowed by `undefined` parameters inside generated code.
const SHADOWED_GLOBALS: [&str; 14] = [
    "window",
    "document",
    "globalThis",
    "self",
    "fetch",
    "XMLHttpRequest",
    "localStorage",
    "sessionStorage",
    "indexedDB",
    "parent",
    "top",
    "opener",
    "location",
    "navigator",
];

/// Compile a strict-mode function with the given parameter names.
///
/// Constructing `Function` through `Reflect` turns a `SyntaxError` into an
/// `Err` instead of an uncaught throw.
fn strict_function<'a>(params: impl IntoIterator<Item = &'a str>, body: &str) -> Result<Function, ProgramFault> {
    let args = Array::new();
    for name in params {
        args.push(&JsValue::from_str(name));
    }
    args.push(&JsValue::from_str(body));

    let constructor = Function::new_no_args("").constructor();
    let compiled = Reflect::construct(&constructor, &args).map_err(|err| ProgramFault::Compile(describe(&err)))?;
    compiled
        .dyn_into::<Function>()
        .map_err(|_| ProgramFault::Compile("constructor did not return a function".into()))
}

/// Wrap `ctx` in the drawing capability generated programs receive.
fn drawing_capability(ctx: &CanvasRenderingContext2d) -> Result<JsValue, ProgramFault> {
    let factory = strict_function(["ctx"], &capability_factory_source())?;
    factory
        .call1(&JsValue::UNDEFINED, ctx.as_ref())
        .map_err(|err| ProgramFault::Runtime(describe(&err)))
}

/// A generated function body compiled into a strict-mode JS function.
///
/// The calling convention is `(ctx, width, height, frame)`, where `ctx` is a
/// frozen object exposing only drawing methods and style properties, never
/// the context itself. Common host globals are shadowed by extra parameters
/// that are never passed, and `this` is `undefined`.
///
/// This narrows what a program can reach by reference. It is not a separate
/// realm: code can still obtain the page's `Function` constructor from any
/// literal of its own.
pub struct JsProgram {
    function: Function,
    capability: Option<JsValue>,
}

impl JsProgram {
    /// Compile `body`.
    ///
    /// # Errors
    ///
    /// [`ProgramFault::Compile`] when the body is not valid JavaScript.
    pub fn compile(body: &str) -> Result<Self, ProgramFault> {
        let params = PROGRAM_PARAMS.iter().chain(SHADOWED_GLOBALS.iter()).copied();
        let function = strict_function(params, &format!("\"use strict\";\n{body}"))?;
        Ok(Self { function, capability: None })
    }
}

impl AnimationProgram<WebSurface> for JsProgram {
    #[allow(clippy::cast_precision_loss)]
    fn draw_frame(&mut self, surface: &mut WebSurface, width: u32, height: u32, frame: u64) -> Result<(), ProgramFault> {
        let capability = match &self.capability {
            Some(capability) => capability.clone(),
            None => {
                let capability = drawing_capability(surface.context())?;
                self.capability = Some(capability.clone());
                capability
            }
        };
        let args = Array::of4(
            &capability,
            &JsValue::from(width),
            &JsValue::from(height),
            &JsValue::from_f64(frame as f64),
        );
        self.function
            .apply(&JsValue::UNDEFINED, &args)
            .map(|_| ())
            .map_err(|err| ProgramFault::Runtime(describe(&err)))
    }
}

// =============================================================
// Player
// =============================================================

struct PlayerState {
    surface: WebSurface,
    core: PlaybackCore<WebSurface>,
    request: Option<i32>,
    on_halt: Option<Rc<dyn Fn()>>,
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A [`PlaybackCore`] driven by `requestAnimationFrame`.
///
/// At most one frame request is outstanding. The next frame is requested only
/// after the previous tick returns [`TickOutcome::Continue`]; pausing and
/// [`Player::dispose`] cancel the outstanding request.
pub struct Player {
    state: Rc<RefCell<PlayerState>>,
    on_frame: Rc<RefCell<Option<FrameCallback>>>,
}

impl Player {
    /// Bind a player to `canvas`.
    ///
    /// # Errors
    ///
    /// Fails when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let mut surface = WebSurface::new(canvas)?;
        sync_backing_size(&mut surface);
        let state = Rc::new(RefCell::new(PlayerState {
            surface,
            core: PlaybackCore::new(),
            request: None,
            on_halt: None,
        }));
        let on_frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let state_weak = Rc::downgrade(&state);
        let on_frame_weak = Rc::downgrade(&on_frame);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            run_frame(&state_weak, &on_frame_weak);
        }) as Box<dyn FnMut(f64)>);
        *on_frame.borrow_mut() = Some(callback);

        Ok(Self { state, on_frame })
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.state.borrow().core.phase()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.borrow().core.is_playing()
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.state.borrow().core.frame()
    }

    #[must_use]
    pub fn program_id(&self) -> Option<ProgramId> {
        self.state.borrow().core.program_id()
    }

    // --- Transport ---

    pub fn play(&self) {
        if self.state.borrow_mut().core.play() {
            schedule(&self.state, &self.on_frame);
        }
    }

    pub fn pause(&self) {
        let mut state = self.state.borrow_mut();
        state.core.pause();
        cancel(&mut state);
    }

    /// Flip between playing and paused. Returns whether playback is now running.
    pub fn toggle(&self) -> bool {
        let playing = self.state.borrow_mut().core.toggle();
        if playing {
            schedule(&self.state, &self.on_frame);
        } else {
            cancel(&mut self.state.borrow_mut());
        }
        playing
    }

    pub fn restart(&self) {
        self.state.borrow_mut().core.restart();
    }

    /// Re-run the sizing policy after a layout change such as fullscreen.
    pub fn relayout(&self) -> SizeSync {
        sync_backing_size(&mut self.state.borrow_mut().surface)
    }

    /// Call `f` whenever a program fault halts playback.
    pub fn on_halt(&self, f: impl Fn() + 'static) {
        self.state.borrow_mut().on_halt = Some(Rc::new(f));
    }

    // --- Generation ---

    pub fn begin_regenerate(&self) {
        let mut state = self.state.borrow_mut();
        cancel(&mut state);
        let PlayerState { surface, core, .. } = &mut *state;
        core.begin_regenerate(surface);
    }

    /// Install a program and start playing it.
    pub fn accept_program(&self, program: Box<dyn AnimationProgram<WebSurface>>) -> ProgramId {
        let id = {
            let mut state = self.state.borrow_mut();
            cancel(&mut state);
            let PlayerState { surface, core, .. } = &mut *state;
            core.accept_program(surface, program)
        };
        schedule(&self.state, &self.on_frame);
        id
    }

    /// Compile generated source and start playing it.
    ///
    /// # Errors
    ///
    /// [`ProgramFault::Compile`] when the source does not compile; the player
    /// is left as it was.
    pub fn accept_source(&self, source: &str) -> Result<ProgramId, ProgramFault> {
        let program = JsProgram::compile(source)?;
        Ok(self.accept_program(Box::new(program)))
    }

    pub fn reject_generation(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        cancel(&mut state);
        let PlayerState { surface, core, .. } = &mut *state;
        core.reject_generation(surface, message);
    }

    /// Cancel any pending frame and release the frame callback.
    pub fn dispose(&self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            cancel(&mut state);
            state.on_halt = None;
        }
        self.on_frame.borrow_mut().take();
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn run_frame(state: &Weak<RefCell<PlayerState>>, on_frame: &Weak<RefCell<Option<FrameCallback>>>) {
    let (Some(state), Some(on_frame)) = (state.upgrade(), on_frame.upgrade()) else {
        return;
    };
    let outcome = {
        let mut guard = state.borrow_mut();
        guard.request = None;
        let PlayerState { surface, core, .. } = &mut *guard;
        core.tick(surface)
    };
    match outcome {
        TickOutcome::Continue => schedule(&state, &on_frame),
        TickOutcome::Halted => {
            let on_halt = state.borrow().on_halt.clone();
            if let Some(on_halt) = on_halt {
                on_halt();
            }
        }
        TickOutcome::Idle => {}
    }
}

fn schedule(state: &RefCell<PlayerState>, on_frame: &RefCell<Option<FrameCallback>>) {
    let mut state = state.borrow_mut();
    if state.request.is_some() || !state.core.is_playing() {
        return;
    }
    let Some(window) = web_sys::window() else {
        log::warn!("no window; animation frames cannot be scheduled");
        return;
    };
    let callback = on_frame.borrow();
    let Some(callback) = callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => state.request = Some(id),
        Err(err) => log::warn!("requestAnimationFrame failed: {}", describe(&err)),
    }
}

fn cancel(state: &mut PlayerState) {
    let Some(id) = state.request.take() else {
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.cancel_animation_frame(id) {
            log::debug!("cancelAnimationFrame failed: {}", describe(&err));
        }
    }
}

// =============================================================
// Environment
// =============================================================

/// Whether any element is currently fullscreen.
#[must_use]
pub fn is_fullscreen() -> bool {
    document().is_ok_and(|doc| doc.fullscreen_element().is_some())
}

/// Enter fullscreen on `element`, or leave fullscreen if already in it.
///
/// # Errors
///
/// Fails when the browser refuses the request.
pub fn toggle_fullscreen(element: &Element) -> Result<(), SurfaceError> {
    let doc = document()?;
    if doc.fullscreen_element().is_some() {
        doc.exit_fullscreen();
        Ok(())
    } else {
        element.request_fullscreen().map_err(platform)
    }
}

/// Compose a printable page around the surface's current drawing and encode
/// it as a PNG data URL. The surface is only read.
///
/// # Errors
///
/// [`SurfaceError::EmptySurface`] when the drawing has zero area; otherwise
/// fails when the page canvas cannot be created, drawn, or encoded.
pub fn export_png_data_url(surface: &WebSurface, text: &PageText) -> Result<String, SurfaceError> {
    let drawing = surface.backing_size();
    let page = document()?
        .create_element("canvas")
        .map_err(platform)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::Platform("created element is not a canvas".into()))?;
    let ctx = context_2d(&page)?;

    let layout = PageLayout::for_export(text, drawing, |font, s| {
        ctx.set_font(font);
        ctx.measure_text(s).map(|m| m.width()).unwrap_or(0.0)
    })?;

    page.set_width(layout.size.width);
    page.set_height(layout.size.height);
    let page_w = f64::from(layout.size.width);

    ctx.set_fill_style_str(&BACKGROUND.to_hex());
    ctx.fill_rect(0.0, 0.0, page_w, f64::from(layout.size.height));
    ctx.set_fill_style_str(&layout.band_color.to_hex());
    ctx.fill_rect(0.0, 0.0, page_w, layout.band_height);

    ctx.set_text_align("left");
    ctx.set_text_baseline("alphabetic");
    for line in layout.lines.iter().chain(std::iter::once(&layout.footer)) {
        ctx.set_font(line.font);
        ctx.set_fill_style_str(&line.color.to_hex());
        ctx.fill_text(&line.text, line.x, line.y).map_err(platform)?;
    }

    let (x0, x1) = layout.divider_span();
    ctx.set_stroke_style_str(&layout.divider_color.to_hex());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(x0, layout.divider_y);
    ctx.line_to(x1, layout.divider_y);
    ctx.stroke();

    ctx.draw_image_with_html_canvas_element(surface.canvas(), 0.0, layout.drawing_y)
        .map_err(platform)?;

    page.to_data_url_with_type("image/png").map_err(platform)
}
