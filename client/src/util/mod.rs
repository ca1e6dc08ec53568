//! Browser helpers shared by the panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui_persistence` wraps `localStorage` and `download` hands exported pages
//! to the browser, keeping that glue out of components.

pub mod download;
pub mod ui_persistence;
