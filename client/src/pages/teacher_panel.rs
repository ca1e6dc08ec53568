//! Teacher panel: the lesson notebook with an interactive whiteboard.

use leptos::prelude::*;

use canvas::input::WhiteboardConfig;

use crate::components::whiteboard_panel::WhiteboardPanel;
use crate::state::whiteboard::WhiteboardState;

#[component]
pub fn TeacherPanelPage() -> impl IntoView {
    let board = expect_context::<RwSignal<WhiteboardState>>();
    let draft_topic = RwSignal::new(board.get_untracked().topic);
    let draft_problem = RwSignal::new(board.get_untracked().problem);

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let topic = draft_topic.get().trim().to_owned();
        let problem = draft_problem.get().trim().to_owned();
        if problem.is_empty() {
            return;
        }
        board.update(|b| b.open_problem(&topic, &problem));
    };

    view! {
        <div class="teacher-panel">
            <form class="teacher-panel__lesson" on:submit=on_open>
                <input
                    class="teacher-panel__topic"
                    type="text"
                    placeholder="Лекција"
                    prop:value=move || draft_topic.get()
                    on:input=move |ev| draft_topic.set(event_target_value(&ev))
                />
                <textarea
                    class="teacher-panel__problem"
                    placeholder="Задача"
                    prop:value=move || draft_problem.get()
                    on:input=move |ev| draft_problem.set(event_target_value(&ev))
                ></textarea>
                <button class="teacher-panel__open" type="submit">"Отвори задача"</button>
            </form>
            <div class="teacher-panel__notebook">
                <section class="teacher-panel__task">
                    <h3 class="teacher-panel__heading">{move || board.with(|b| b.topic.clone())}</h3>
                    <p class="teacher-panel__statement">{move || board.with(|b| b.problem.clone())}</p>
                </section>
                <WhiteboardPanel config=WhiteboardConfig::default() state=board persist_tools=true exportable=true/>
            </div>
        </div>
    }
}
