//! Geometry visualizer: a prompt box that asks the generator for an
//! animation, and a stage that plays it.
//!
//! ARCHITECTURE
//! ============
//! The stage owns a `canvas::web::Player`. Generation runs as a local task
//! that holds only a weak handle to the player, so a late response after the
//! panel is gone is dropped. Unmounting disposes the player explicitly, which
//! cancels any pending frame even while handler closures still hold the cell.
//! `VisualizerState` mirrors the player's transport
//! so the overlay buttons can render; the player remains authoritative.

#[cfg(test)]
#[path = "geometry_visualizer_test.rs"]
mod geometry_visualizer_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use canvas::consts::GENERATION_ERROR_MESSAGE;
use canvas::web::{Player, is_fullscreen, toggle_fullscreen};

use crate::net::api::generate_animation;
use crate::state::visualizer::{GenerationState, PRESET_PROMPTS, VisualizerState};

type PlayerCell = Rc<RefCell<Option<Player>>>;

fn with_player(player: &PlayerCell, f: impl FnOnce(&Player)) {
    if let Some(player) = player.borrow().as_ref() {
        f(player);
    }
}

/// Take the value out of `cell` and hand it to `dispose`. Later calls find the
/// cell empty and do nothing.
fn release<T>(cell: &RefCell<Option<T>>, dispose: impl FnOnce(T)) {
    let taken = cell.borrow_mut().take();
    if let Some(value) = taken {
        dispose(value);
    }
}

fn relayout(player: &Player) {
    let outcome = player.relayout();
    log::debug!("visualizer relayout: {outcome:?}");
}

/// Compile and start generated code.
fn accept(player: &PlayerCell, code: &str) -> Result<(), String> {
    let player = player.borrow();
    let Some(player) = player.as_ref() else {
        return Err("player unavailable".to_owned());
    };
    let id = player.accept_source(code).map_err(|fault| fault.to_string())?;
    log::info!("playing generated program {id}");
    Ok(())
}

/// Prompt box, presets, and the animation stage.
#[component]
pub fn GeometryVisualizer() -> impl IntoView {
    let state = RwSignal::new(VisualizerState::default());
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let player: PlayerCell = Rc::new(RefCell::new(None));

    {
        let player = Rc::clone(&player);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if player.borrow().is_some() {
                return;
            }
            match Player::new(canvas) {
                Ok(instance) => {
                    instance.on_halt(move || state.update(|s| s.playing = false));
                    *player.borrow_mut() = Some(instance);
                }
                Err(err) => log::error!("visualizer unavailable: {err}"),
            }
        });
    }

    {
        let player = Rc::clone(&player);
        let handle = window_event_listener_untyped("fullscreenchange", move |_| {
            state.update(|s| s.fullscreen = is_fullscreen());
            with_player(&player, relayout);
        });
        on_cleanup(move || handle.remove());
    }

    {
        let player = Rc::clone(&player);
        let handle = window_event_listener(leptos::ev::resize, move |_| with_player(&player, relayout));
        on_cleanup(move || handle.remove());
    }

    {
        let player = SendWrapper::new(Rc::clone(&player));
        on_cleanup(move || {
            let cell: &RefCell<Option<Player>> = &player;
            release(cell, |instance| {
                instance.dispose();
                log::debug!("visualizer player disposed");
            });
        });
    }

    let on_generate = {
        let player = Rc::clone(&player);
        move |_ev: leptos::ev::MouseEvent| {
            let mut started = false;
            state.update(|s| started = s.begin_request());
            if !started {
                return;
            }
            with_player(&player, Player::begin_regenerate);
            let description = state.with_untracked(|s| s.description.clone());
            let player = Rc::downgrade(&player);
            leptos::task::spawn_local(async move {
                let generated = generate_animation(&description).await;
                let Some(player) = player.upgrade() else {
                    return;
                };
                match generated.and_then(|code| accept(&player, &code)) {
                    Ok(()) => state.update(VisualizerState::finish_ok),
                    Err(reason) => {
                        log::warn!("animation generation failed: {reason}");
                        with_player(&player, |p| p.reject_generation(GENERATION_ERROR_MESSAGE));
                        state.update(|s| s.finish_err(reason));
                    }
                }
            });
        }
    };

    let on_toggle = {
        let player = Rc::clone(&player);
        move |_ev: leptos::ev::MouseEvent| {
            let playing = player.borrow().as_ref().is_some_and(Player::toggle);
            state.update(|s| s.playing = playing);
        }
    };

    let on_restart = {
        let player = Rc::clone(&player);
        move |_ev: leptos::ev::MouseEvent| with_player(&player, Player::restart)
    };

    let on_fullscreen = move |_ev: leptos::ev::MouseEvent| {
        let Some(container) = container_ref.get() else {
            return;
        };
        if let Err(err) = toggle_fullscreen(&container) {
            log::warn!("fullscreen request failed: {err}");
        }
    };

    let presets = PRESET_PROMPTS
        .iter()
        .enumerate()
        .map(|(index, prompt)| {
            view! {
                <button class="geometry-visualizer__preset" on:click=move |_| state.update(|s| s.use_preset(index))>
                    "✨ " {*prompt}
                </button>
            }
        })
        .collect_view();

    let failure = move || match state.with(|s| s.generation.clone()) {
        GenerationState::Failed(reason) => Some(view! {
            <p class="geometry-visualizer__error">"Грешка при креирање на анимацијата: " {reason}</p>
        }),
        _ => None,
    };

    view! {
        <div class="geometry-visualizer">
            <div class="geometry-visualizer__controls">
                <label class="geometry-visualizer__label">"Опис на анимацијата"</label>
                <textarea
                    class="geometry-visualizer__prompt"
                    placeholder="На пр: Црвен квадрат кој ротира и се зголемува..."
                    prop:value=move || state.with(|s| s.description.clone())
                    on:input=move |ev| state.update(|s| s.description = event_target_value(&ev))
                ></textarea>
                <button
                    class="geometry-visualizer__generate"
                    disabled=move || !state.with(VisualizerState::can_generate)
                    on:click=on_generate
                >
                    {move || state.with(VisualizerState::generate_label)}
                </button>
                {failure}
                <div class="geometry-visualizer__presets">
                    <p class="geometry-visualizer__presets-title">"Брзи идеи:"</p>
                    {presets}
                </div>
            </div>
            <div
                class="geometry-visualizer__stage"
                class:geometry-visualizer__stage--fullscreen=move || state.with(|s| s.fullscreen)
                node_ref=container_ref
            >
                <button
                    class="geometry-visualizer__fullscreen"
                    title=move || state.with(VisualizerState::fullscreen_title)
                    on:click=on_fullscreen
                >
                    {move || if state.with(|s| s.fullscreen) { "✕" } else { "⛶" }}
                </button>
                <canvas
                    class="geometry-visualizer__canvas"
                    style:width="100%"
                    style:height="100%"
                    style:display="block"
                    node_ref=canvas_ref
                ></canvas>
                <div class="geometry-visualizer__transport">
                    <button
                        class="geometry-visualizer__toggle"
                        title=move || state.with(VisualizerState::transport_title)
                        on:click=on_toggle
                    >
                        {move || if state.with(|s| s.playing) { "⏸" } else { "▶" }}
                    </button>
                    <button class="geometry-visualizer__restart" title="Рестартирај" on:click=on_restart>
                        "↺"
                    </button>
                </div>
                <Show when=move || state.with(VisualizerState::is_requesting)>
                    <div class="geometry-visualizer__loading">"AI црта на таблата..."</div>
                </Show>
            </div>
            <p class="geometry-visualizer__note">
                "Анимацијата е генерирана со Canvas API. Може да содржи визуелни несовршености."
            </p>
        </div>
    }
}
