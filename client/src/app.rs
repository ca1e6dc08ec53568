//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{teacher_panel::TeacherPanelPage, visualizer::VisualizerPage, worksheet::WorksheetPage};
use crate::state::whiteboard::WhiteboardState;

/// Root application component.
///
/// Provides the teacher panel's board state, which outlives route changes,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(WhiteboardState::default());
    provide_context(board);

    view! {
        <Title text="Мате-Ментор"/>

        <Router>
            <nav class="app-nav">
                <A href="/">"Табла"</A>
                <A href="/worksheet">"Работен лист"</A>
                <A href="/visualizer">"AI Визуелизатор"</A>
            </nav>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=TeacherPanelPage/>
                    <Route path=StaticSegment("worksheet") view=WorksheetPage/>
                    <Route path=StaticSegment("visualizer") view=VisualizerPage/>
                </Routes>
            </main>
        </Router>
    }
}
