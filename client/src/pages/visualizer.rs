//! Geometry visualizer page.

use leptos::prelude::*;

use crate::components::geometry_visualizer::GeometryVisualizer;

#[component]
pub fn VisualizerPage() -> impl IntoView {
    view! {
        <div class="visualizer-page">
            <header class="visualizer-page__header">
                <h2>"🎨 AI Визуелизатор" <span class="visualizer-page__badge">"BETA"</span></h2>
                <p>"Опишете геометриска форма или движење, и AI веднаш ќе го анимира."</p>
            </header>
            <GeometryVisualizer/>
        </div>
    }
}
