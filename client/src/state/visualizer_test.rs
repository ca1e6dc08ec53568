use super::*;

fn with_description(text: &str) -> VisualizerState {
    VisualizerState { description: text.to_owned(), ..VisualizerState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_stopped() {
    let state = VisualizerState::default();
    assert_eq!(state.generation, GenerationState::Idle);
    assert!(!state.playing);
    assert!(!state.fullscreen);
    assert!(state.description.is_empty());
}

#[test]
fn five_presets_are_offered() {
    assert_eq!(PRESET_PROMPTS.len(), 5);
    assert!(PRESET_PROMPTS.iter().all(|p| !p.trim().is_empty()));
}

// =============================================================
// can_generate / begin_request
// =============================================================

#[test]
fn blank_description_cannot_generate() {
    assert!(!with_description("").can_generate());
    assert!(!with_description("   \n").can_generate());
}

#[test]
fn description_allows_generation() {
    assert!(with_description("квадрат").can_generate());
}

#[test]
fn begin_request_stops_playback() {
    let mut state = with_description("квадрат");
    state.playing = true;
    assert!(state.begin_request());
    assert!(state.is_requesting());
    assert!(!state.playing);
}

#[test]
fn only_one_request_in_flight() {
    let mut state = with_description("квадрат");
    assert!(state.begin_request());
    assert!(!state.can_generate());
    assert!(!state.begin_request());
}

#[test]
fn begin_request_without_description_changes_nothing() {
    let mut state = VisualizerState::default();
    assert!(!state.begin_request());
    assert_eq!(state, VisualizerState::default());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn finish_ok_autoplays() {
    let mut state = with_description("квадрат");
    state.begin_request();
    state.finish_ok();
    assert_eq!(state.generation, GenerationState::Ready);
    assert!(state.playing);
    assert!(state.can_generate());
}

#[test]
fn finish_err_keeps_reason() {
    let mut state = with_description("квадрат");
    state.begin_request();
    state.finish_err("animation request failed: 500".to_owned());
    assert_eq!(state.generation, GenerationState::Failed("animation request failed: 500".to_owned()));
    assert!(!state.playing);
    assert!(state.can_generate());
}

// =============================================================
// Presets and labels
// =============================================================

#[test]
fn use_preset_fills_description() {
    let mut state = VisualizerState::default();
    state.use_preset(2);
    assert_eq!(state.description, PRESET_PROMPTS[2]);
}

#[test]
fn out_of_range_preset_is_ignored() {
    let mut state = with_description("мое");
    state.use_preset(PRESET_PROMPTS.len());
    assert_eq!(state.description, "мое");
}

#[test]
fn labels_follow_state() {
    let mut state = with_description("квадрат");
    assert_eq!(state.generate_label(), "🪄 Креирај Анимација");
    assert_eq!(state.transport_title(), "Пушти");
    assert_eq!(state.fullscreen_title(), "Цел екран");

    state.begin_request();
    assert_eq!(state.generate_label(), "Се црта...");

    state.finish_ok();
    state.fullscreen = true;
    assert_eq!(state.transport_title(), "Паузирај");
    assert_eq!(state.fullscreen_title(), "Излези од цел екран");
}
