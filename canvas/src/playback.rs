//! Generated-animation playback engine.
//!
//! [`PlaybackCore`] owns the current [`AnimationProgram`], the frame counter,
//! and the play state. The host drives it one [`PlaybackCore::tick`] per
//! display frame and stops scheduling as soon as a tick reports anything but
//! [`TickOutcome::Continue`]. [`crate::web::Player`] does this with
//! `requestAnimationFrame`.
//!
//! ```text
//! Idle ──regenerate──▶ Loading ──accept──▶ Playing ◀──play/pause──▶ Paused
//!                        │                    │
//!                        └──reject──▶ Idle    └──fault──▶ Faulted
//! ```
//!
//! Any phase may enter `Loading` through [`PlaybackCore::begin_regenerate`].

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

use crate::consts::{LOADING_MESSAGE, PLACEHOLDER_ERROR, PLACEHOLDER_TEXT};
use crate::program::{AnimationProgram, ProgramId};
use crate::surface::{Surface, report, sync_backing_size};

/// Where the player is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// No program loaded.
    #[default]
    Idle,
    /// A new program is being generated; the loading placeholder is shown.
    Loading,
    /// Frames are being produced.
    Playing,
    /// A program is loaded but frames are not being produced.
    Paused,
    /// The program failed; the last good frame stays on screen.
    Faulted,
}

/// Result of one [`PlaybackCore::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing was drawn.
    Idle,
    /// A frame was drawn; schedule the next one.
    Continue,
    /// The program faulted; playback has stopped.
    Halted,
}

struct LoadedProgram<S> {
    id: ProgramId,
    program: Box<dyn AnimationProgram<S>>,
}

/// Playback state for one animation surface.
pub struct PlaybackCore<S: Surface> {
    phase: PlaybackPhase,
    frame: u64,
    loaded: Option<LoadedProgram<S>>,
}

impl<S: Surface> Default for PlaybackCore<S> {
    fn default() -> Self {
        Self { phase: PlaybackPhase::Idle, frame: 0, loaded: None }
    }
}

impl<S: Surface> PlaybackCore<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// The frame number the next tick will draw.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Identity of the installed program, if any.
    #[must_use]
    pub fn program_id(&self) -> Option<ProgramId> {
        self.loaded.as_ref().map(|loaded| loaded.id)
    }

    // --- Frame loop ---

    /// Draw one frame if playing.
    pub fn tick(&mut self, surface: &mut S) -> TickOutcome {
        if self.phase != PlaybackPhase::Playing {
            return TickOutcome::Idle;
        }
        let Some(loaded) = self.loaded.as_mut() else {
            self.phase = PlaybackPhase::Idle;
            return TickOutcome::Idle;
        };

        sync_backing_size(surface);
        let size = surface.backing_size();

        match loaded.program.draw_frame(surface, size.width, size.height, self.frame) {
            Ok(()) => {
                self.frame += 1;
                TickOutcome::Continue
            }
            Err(fault) => {
                log::error!("animation {} stopped at frame {}: {fault}", loaded.id, self.frame);
                self.phase = PlaybackPhase::Faulted;
                TickOutcome::Halted
            }
        }
    }

    // --- Transport ---

    /// Resume from `Paused`. Returns whether playback started.
    pub fn play(&mut self) -> bool {
        if self.phase == PlaybackPhase::Paused {
            self.phase = PlaybackPhase::Playing;
            true
        } else {
            false
        }
    }

    /// Stop producing frames, keeping the counter. Returns whether playback stopped.
    pub fn pause(&mut self) -> bool {
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Paused;
            true
        } else {
            false
        }
    }

    /// Flip between playing and paused. Returns [`Self::is_playing`] afterwards.
    pub fn toggle(&mut self) -> bool {
        if !self.pause() {
            self.play();
        }
        self.is_playing()
    }

    /// Rewind to frame 0 without changing the phase.
    pub fn restart(&mut self) {
        self.frame = 0;
    }

    // --- Generation ---

    /// Drop the current program and show the loading placeholder.
    pub fn begin_regenerate(&mut self, surface: &mut S) {
        self.phase = PlaybackPhase::Loading;
        self.loaded = None;
        self.frame = 0;

        sync_backing_size(surface);
        report("clear", surface.clear());
        report("loading placeholder", surface.draw_placeholder(LOADING_MESSAGE, PLACEHOLDER_TEXT));
    }

    /// Install a freshly generated program and start playing it from frame 0.
    pub fn accept_program(&mut self, surface: &mut S, program: Box<dyn AnimationProgram<S>>) -> ProgramId {
        report("clear", surface.clear());

        let id = ProgramId::new();
        log::debug!("animation {id} accepted");
        self.loaded = Some(LoadedProgram { id, program });
        self.frame = 0;
        self.phase = PlaybackPhase::Playing;
        id
    }

    /// Generation failed: go idle and show `message` in the error color.
    pub fn reject_generation(&mut self, surface: &mut S, message: &str) {
        self.phase = PlaybackPhase::Idle;
        self.loaded = None;
        self.frame = 0;

        report("clear", surface.clear());
        report("error placeholder", surface.draw_placeholder(message, PLACEHOLDER_ERROR));
    }
}
