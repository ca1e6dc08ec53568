//! Whiteboard panel: toolbar plus a pointer-driven drawing canvas.
//!
//! ARCHITECTURE
//! ============
//! The panel owns a `canvas::web::Whiteboard` for its lifetime. Pointer events
//! go straight to the engine; toolbar edits, clear and export requests arrive
//! through `WhiteboardState` and are applied by effects.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::input::WhiteboardConfig;
use canvas::web::Whiteboard;

use crate::components::tool_palette::ToolPalette;
use crate::state::whiteboard::WhiteboardState;
use crate::util::ui_persistence::{load_tools, save_tools};

#[cfg(feature = "csr")]
use canvas::consts::SETTLE_DELAY_MS;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "csr")]
use crate::util::download::{export_file_name, now_ms, today_label, trigger_download};

type BoardCell = Rc<RefCell<Option<Whiteboard>>>;

fn with_board(board: &BoardCell, f: impl FnOnce(&mut Whiteboard)) {
    if let Some(board) = board.borrow_mut().as_mut() {
        f(board);
    }
}

fn resize_board(board: &mut Whiteboard) {
    let outcome = board.resize();
    log::debug!("whiteboard resize: {outcome:?}");
}

fn pointer_handler(
    board: &BoardCell,
    handle: fn(&mut Whiteboard, &web_sys::PointerEvent),
) -> impl Fn(leptos::ev::PointerEvent) + 'static + use<> {
    let board = Rc::clone(board);
    move |ev| with_board(&board, |b| handle(b, &ev))
}

#[cfg(feature = "csr")]
fn export_board(board: &Whiteboard, state: &WhiteboardState) {
    let text = state.page_text(&today_label());
    match board.export_png(&text) {
        Ok(url) => {
            if let Err(err) = trigger_download(&url, &export_file_name(now_ms())) {
                log::warn!("download failed: {err}");
            }
        }
        Err(err) => log::warn!("export failed: {err}"),
    }
}

/// Whiteboard with its toolbar.
///
/// With `persist_tools`, the pen color and width are restored from
/// `localStorage` on mount and saved on every change. `exportable` adds the
/// page download button.
#[component]
pub fn WhiteboardPanel(
    config: WhiteboardConfig,
    state: RwSignal<WhiteboardState>,
    #[prop(optional)] persist_tools: bool,
    #[prop(optional)] exportable: bool,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let palette = config.palette.clone();
    let width_adjustable = config.width_adjustable;
    let board: BoardCell = Rc::new(RefCell::new(None));
    let tools = Memo::new(move |_| state.with(|s| s.tools));
    let last_clear_seq = RwSignal::new(state.get_untracked().clear_seq);

    {
        let board = Rc::clone(&board);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if board.borrow().is_some() {
                return;
            }
            let saved = if persist_tools { load_tools() } else { None };
            let initial = saved.unwrap_or_else(|| state.get_untracked().tools);
            let instance = match Whiteboard::with_tools(canvas, config.clone(), initial) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("whiteboard unavailable: {err}");
                    return;
                }
            };
            let adopted = instance.tools();
            *board.borrow_mut() = Some(instance);
            state.update(|s| s.tools = adopted);

            // Modals may still be animating in; size again once layout settles.
            #[cfg(feature = "csr")]
            {
                let board = Rc::clone(&board);
                Timeout::new(SETTLE_DELAY_MS, move || with_board(&board, resize_board)).forget();
            }
        });
    }

    {
        let board = Rc::clone(&board);
        Effect::new(move || {
            let wanted = tools.get();
            let mut actual = None;
            with_board(&board, |b| {
                b.apply_tools(wanted);
                actual = Some(b.tools());
            });
            let Some(actual) = actual else {
                return;
            };
            if actual != wanted {
                state.update(|s| s.tools = actual);
                return;
            }
            if persist_tools {
                save_tools(&actual);
            }
        });
    }

    {
        let board = Rc::clone(&board);
        Effect::new(move || {
            let seq = state.with(|s| s.clear_seq);
            if seq == last_clear_seq.get_untracked() {
                return;
            }
            last_clear_seq.set(seq);
            with_board(&board, Whiteboard::clear);
        });
    }

    #[cfg(feature = "csr")]
    {
        let board = Rc::clone(&board);
        let last_layout_seq = RwSignal::new(state.get_untracked().layout_seq);
        Effect::new(move || {
            let seq = state.with(|s| s.layout_seq);
            if seq == last_layout_seq.get_untracked() {
                return;
            }
            last_layout_seq.set(seq);
            let board = Rc::clone(&board);
            Timeout::new(SETTLE_DELAY_MS, move || with_board(&board, resize_board)).forget();
        });
    }

    #[cfg(feature = "csr")]
    {
        let board = Rc::clone(&board);
        let last_export_seq = RwSignal::new(state.get_untracked().export_seq);
        Effect::new(move || {
            let seq = state.with(|s| s.export_seq);
            if seq == last_export_seq.get_untracked() {
                return;
            }
            last_export_seq.set(seq);
            let snapshot = state.get_untracked();
            if let Some(b) = board.borrow().as_ref() {
                export_board(b, &snapshot);
            }
        });
    }

    {
        let board = Rc::clone(&board);
        let handle = window_event_listener(leptos::ev::resize, move |_| with_board(&board, resize_board));
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = pointer_handler(&board, Whiteboard::pointer_down);
    let on_pointer_move = pointer_handler(&board, Whiteboard::pointer_move);
    let on_pointer_up = pointer_handler(&board, Whiteboard::pointer_up);
    let on_pointer_leave = pointer_handler(&board, Whiteboard::pointer_leave);
    let on_pointer_cancel = pointer_handler(&board, Whiteboard::pointer_cancel);

    view! {
        <div class="whiteboard-panel">
            <ToolPalette state=state palette=palette width_adjustable=width_adjustable exportable=exportable/>
            <div class="whiteboard-panel__surface">
                <canvas
                    class="whiteboard-panel__canvas"
                    style:width="100%"
                    style:height="100%"
                    style:display="block"
                    node_ref=canvas_ref
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointerleave=on_pointer_leave
                    on:pointercancel=on_pointer_cancel
                ></canvas>
            </div>
        </div>
    }
}
