//! Worksheet page: task text plus a full-screen whiteboard modal for
//! explaining it to the class.

use leptos::prelude::*;

use canvas::input::WhiteboardConfig;

use crate::components::whiteboard_panel::WhiteboardPanel;
use crate::state::whiteboard::WhiteboardState;

#[component]
pub fn WorksheetPage() -> impl IntoView {
    let tasks = RwSignal::new(String::new());
    let board_open = RwSignal::new(false);

    view! {
        <div class="worksheet">
            <textarea
                class="worksheet__tasks"
                placeholder="Задачи за работниот лист"
                prop:value=move || tasks.get()
                on:input=move |ev| tasks.set(event_target_value(&ev))
            ></textarea>
            <div class="worksheet__actions">
                <button class="worksheet__explain" on:click=move |_| board_open.set(true)>
                    "👨‍🏫 Објасни на табла"
                </button>
            </div>
            <Show when=move || board_open.get()>
                <WorksheetBoardModal tasks=tasks on_close=Callback::new(move |()| board_open.set(false))/>
            </Show>
        </div>
    }
}

/// Modal whiteboard with a collapsible task list beside it.
#[component]
fn WorksheetBoardModal(tasks: RwSignal<String>, on_close: Callback<()>) -> impl IntoView {
    let board = RwSignal::new(WhiteboardState::default());
    let tasks_open = RwSignal::new(true);

    let on_toggle_tasks = move |_ev: leptos::ev::MouseEvent| {
        tasks_open.update(|open| *open = !*open);
        board.update(WhiteboardState::request_relayout);
    };

    view! {
        <div class="worksheet-modal">
            <div class="worksheet-modal__frame">
                <div class="worksheet-modal__header">
                    <button class="worksheet-modal__tasks-toggle" on:click=on_toggle_tasks>
                        {move || if tasks_open.get() { "👁️ Скриј задачи" } else { "👁️ Види задачи" }}
                    </button>
                    <button class="worksheet-modal__close" on:click=move |_| on_close.run(())>
                        "Затвори"
                    </button>
                </div>
                <div class="worksheet-modal__body">
                    <Show when=move || tasks_open.get()>
                        <aside class="worksheet-modal__tasks">
                            <h4>"📋 Задачи"</h4>
                            <p class="worksheet-modal__tasks-text">{move || tasks.get()}</p>
                        </aside>
                    </Show>
                    <WhiteboardPanel config=WhiteboardConfig::worksheet() state=board/>
                </div>
            </div>
        </div>
    }
}
