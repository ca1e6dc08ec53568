//! Whiteboard toolbar: ink colors, tools, pen width, clear and save.
//!
//! DESIGN
//! ======
//! The toolbar only edits `WhiteboardState`. The panel that owns the engine
//! watches that state and applies it, so the toolbar never touches the
//! canvas directly.

use leptos::prelude::*;

use canvas::color::Rgb;
use canvas::consts::{MAX_STROKE_WIDTH_PX, MIN_STROKE_WIDTH_PX};
use canvas::input::Tool;

use crate::state::whiteboard::WhiteboardState;

#[derive(Clone, Copy)]
struct ToolDef {
    tool: Tool,
    label: &'static str,
    icon: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef { tool: Tool::Pen, label: "Рачно пишување", icon: "🖊️" },
    ToolDef { tool: Tool::Line, label: "Права линија", icon: "📏" },
    ToolDef { tool: Tool::Eraser, label: "Гума", icon: "🧽" },
];

/// Toolbar above a whiteboard.
#[component]
pub fn ToolPalette(
    state: RwSignal<WhiteboardState>,
    palette: Vec<Rgb>,
    #[prop(optional)] width_adjustable: bool,
    #[prop(optional)] exportable: bool,
) -> impl IntoView {
    let swatches = palette
        .into_iter()
        .map(|color| {
            let is_active = move || state.with(|s| s.tools.color == color && s.tools.tool != Tool::Eraser);
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                state.update(|s| s.tools.select_color(color));
            };
            view! {
                <button
                    class="tool-palette__swatch"
                    class:tool-palette__swatch--active=is_active
                    style:background-color=color.to_hex()
                    title=color.to_hex()
                    on:click=on_click
                ></button>
            }
        })
        .collect_view();

    let tools = TOOLS
        .iter()
        .map(|td| {
            let td = *td;
            let is_active = move || state.with(|s| s.tools.tool == td.tool);
            let on_click = move |_ev: leptos::ev::MouseEvent| {
                state.update(|s| s.tools.select_tool(td.tool));
            };
            view! {
                <button
                    class="tool-palette__tool"
                    class:tool-palette__tool--active=is_active
                    title=td.label
                    on:click=on_click
                >
                    {td.icon}
                </button>
            }
        })
        .collect_view();

    let width = move || state.with(|s| s.tools.width.to_string());
    let on_width = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            state.update(|s| s.tools.set_width(value));
        }
    };

    view! {
        <div class="tool-palette">
            <div class="tool-palette__group">
                <div class="tool-palette__swatches">{swatches}</div>
                <div class="tool-palette__tools">{tools}</div>
                <Show when=move || width_adjustable>
                    <input
                        class="tool-palette__width"
                        type="range"
                        min=MIN_STROKE_WIDTH_PX.to_string()
                        max=MAX_STROKE_WIDTH_PX.to_string()
                        step="1"
                        title="Дебелина"
                        prop:value=width
                        on:input=on_width
                    />
                </Show>
            </div>
            <div class="tool-palette__group">
                <button class="tool-palette__clear" on:click=move |_| state.update(WhiteboardState::request_clear)>
                    "Избриши"
                </button>
                <Show when=move || exportable>
                    <button class="tool-palette__save" on:click=move |_| state.update(WhiteboardState::request_export)>
                        "📸 Зачувај работа"
                    </button>
                </Show>
            </div>
        </div>
    }
}
