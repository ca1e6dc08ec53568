use super::*;

use canvas::consts::INK_BLACK;
use canvas::input::Tool;

// =============================================================
// WhiteboardState defaults
// =============================================================

#[test]
fn default_state_is_empty_with_the_pen() {
    let state = WhiteboardState::default();
    assert!(state.topic.is_empty());
    assert!(state.problem.is_empty());
    assert_eq!(state.clear_seq, 0);
    assert_eq!(state.tools.tool, Tool::Pen);
    assert_eq!(state.tools.color, INK_BLACK);
}

// =============================================================
// Problems and clearing
// =============================================================

#[test]
fn open_problem_sets_text_and_requests_clear() {
    let mut state = WhiteboardState::default();
    state.open_problem("Агли", "Пресметај го аголот.");
    assert_eq!(state.topic, "Агли");
    assert_eq!(state.problem, "Пресметај го аголот.");
    assert_eq!(state.clear_seq, 1);
}

#[test]
fn request_clear_bumps_sequence() {
    let mut state = WhiteboardState::default();
    state.request_clear();
    state.request_clear();
    assert_eq!(state.clear_seq, 2);
}

#[test]
fn export_requests_are_counted_separately() {
    let mut state = WhiteboardState::default();
    state.request_export();
    assert_eq!(state.export_seq, 1);
    assert_eq!(state.clear_seq, 0);

    state.request_relayout();
    assert_eq!(state.layout_seq, 1);
    assert_eq!(state.export_seq, 1);
}

#[test]
fn clear_sequence_wraps() {
    let mut state = WhiteboardState { clear_seq: u64::MAX, ..WhiteboardState::default() };
    state.request_clear();
    assert_eq!(state.clear_seq, 0);
}

// =============================================================
// page_text
// =============================================================

#[test]
fn page_text_labels_heading_and_body() {
    let mut state = WhiteboardState::default();
    state.open_problem("Триаголник", "Најди ја плоштината.");
    let text = state.page_text("16.10.2026");
    assert_eq!(text.title, PAGE_TITLE);
    assert_eq!(text.heading, "Лекција: Триаголник");
    assert_eq!(text.body, "Задача: Најди ја плоштината.");
    assert_eq!(text.footer, "16.10.2026");
}

#[test]
fn page_text_credits_author() {
    let state = WhiteboardState { author: " Наставник ".to_owned(), ..WhiteboardState::default() };
    assert_eq!(state.page_text("16.10.2026").footer, "АВТОР: Наставник - 16.10.2026");
}
