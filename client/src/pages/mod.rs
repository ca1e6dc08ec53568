//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates canvas work to
//! `components`.

pub mod teacher_panel;
pub mod visualizer;
pub mod worksheet;
