//! Teacher panel state: the lesson being taught and the board's tool choice.
//!
//! DESIGN
//! ======
//! Pen color and width are mirrored here so toolbar buttons can render their
//! active state reactively; the authoritative copy is inside the
//! `canvas::web::Whiteboard` owned by the panel component.

#[cfg(test)]
#[path = "whiteboard_test.rs"]
mod whiteboard_test;

use canvas::export::PageText;
use canvas::input::ToolState;

/// Title printed in the dark band of every exported page.
pub const PAGE_TITLE: &str = "📐 Мате-Ментор | Интерактивна тетратка";

/// Lesson context and tool state for a whiteboard panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WhiteboardState {
    /// Lesson topic, printed as the page heading.
    pub topic: String,
    /// Problem statement the class is working on.
    pub problem: String,
    /// Author credited in the page footer.
    pub author: String,
    /// Bumped to request that the board be cleared.
    pub clear_seq: u64,
    /// Bumped to request a page export of the board.
    pub export_seq: u64,
    /// Bumped when the board's container changed size without a window resize.
    pub layout_seq: u64,
    pub tools: ToolState,
}

impl WhiteboardState {
    /// Switch to a new problem and wipe the board.
    pub fn open_problem(&mut self, topic: &str, problem: &str) {
        topic.clone_into(&mut self.topic);
        problem.clone_into(&mut self.problem);
        self.request_clear();
    }

    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.wrapping_add(1);
    }

    pub fn request_export(&mut self) {
        self.export_seq = self.export_seq.wrapping_add(1);
    }

    pub fn request_relayout(&mut self) {
        self.layout_seq = self.layout_seq.wrapping_add(1);
    }

    /// Text for an exported page, dated `date`.
    #[must_use]
    pub fn page_text(&self, date: &str) -> PageText {
        let footer = if self.author.trim().is_empty() {
            date.to_owned()
        } else {
            format!("АВТОР: {} - {date}", self.author.trim())
        };
        PageText {
            title: PAGE_TITLE.to_owned(),
            heading: format!("Лекција: {}", self.topic),
            body: format!("Задача: {}", self.problem),
            footer,
        }
    }
}
