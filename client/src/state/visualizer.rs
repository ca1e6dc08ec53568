//! Geometry visualizer state: the prompt, the generation request, and the
//! transport flags shown on the overlay controls.
//!
//! DESIGN
//! ======
//! `playing` mirrors `canvas::web::Player::is_playing` after every transport
//! call so buttons re-render; the player stays the source of truth.

#[cfg(test)]
#[path = "visualizer_test.rs"]
mod visualizer_test;

/// Ready-made descriptions offered under the prompt box.
pub const PRESET_PROMPTS: [&str; 5] = [
    "Ротација на рамностран триаголник околу неговиот центар",
    "Две паралелни прави пресечени со трансверзала, аглите трепкаат",
    "Кружница која се зголемува и намалува (пулсира)",
    "Тангента која се движи по кружница",
    "Симетрала на агол која се исцртува постепено",
];

/// Progress of the latest generation request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationState {
    #[default]
    Idle,
    /// Waiting on the generator.
    Requesting,
    /// A program was accepted and is running.
    Ready,
    /// The last request failed; carries the reason.
    Failed(String),
}

/// UI state for the visualizer panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualizerState {
    pub description: String,
    pub generation: GenerationState,
    pub playing: bool,
    pub fullscreen: bool,
}

impl VisualizerState {
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        self.generation == GenerationState::Requesting
    }

    /// A request can start when there is a description and none is in flight.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.description.trim().is_empty() && !self.is_requesting()
    }

    /// Fill the prompt box from a preset.
    pub fn use_preset(&mut self, index: usize) {
        if let Some(prompt) = PRESET_PROMPTS.get(index) {
            (*prompt).clone_into(&mut self.description);
        }
    }

    /// Mark a request as started. Returns `false` if one cannot start now.
    pub fn begin_request(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.generation = GenerationState::Requesting;
        self.playing = false;
        true
    }

    /// A program was accepted and autoplay started.
    pub fn finish_ok(&mut self) {
        self.generation = GenerationState::Ready;
        self.playing = true;
    }

    pub fn finish_err(&mut self, reason: String) {
        self.generation = GenerationState::Failed(reason);
        self.playing = false;
    }

    /// Label for the generate button.
    #[must_use]
    pub fn generate_label(&self) -> &'static str {
        if self.is_requesting() { "Се црта..." } else { "🪄 Креирај Анимација" }
    }

    /// Tooltip for the play/pause button.
    #[must_use]
    pub fn transport_title(&self) -> &'static str {
        if self.playing { "Паузирај" } else { "Пушти" }
    }

    /// Tooltip for the fullscreen button.
    #[must_use]
    pub fn fullscreen_title(&self) -> &'static str {
        if self.fullscreen { "Излези од цел екран" } else { "Цел екран" }
    }
}
