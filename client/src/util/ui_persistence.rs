//! Browser localStorage helpers for whiteboard preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only read/write behavior so panels can
//! persist the pen color and width without repeating web-sys glue. Native
//! builds read nothing and write nothing.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use canvas::color::Rgb;
use canvas::input::ToolState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Storage key for the teacher panel's tool preferences.
pub const TOOLS_KEY: &str = "whiteboard.tools";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        parse_json(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(err) = storage.set_item(key, &raw) {
            log::debug!("localStorage write for {key} failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// The persisted part of a panel's tool choice. The active tool is not
/// stored, so a reload always reopens on the pen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPen {
    pub color: Rgb,
    pub width: f64,
}

impl SavedPen {
    pub fn from_tools(tools: &ToolState) -> Self {
        Self { color: tools.color, width: tools.width }
    }

    pub fn into_tools(self) -> ToolState {
        ToolState { color: self.color, width: self.width, ..ToolState::default() }
    }
}

/// Stored pen preferences as a tool state, if any. Unreadable entries count
/// as absent.
pub fn load_tools() -> Option<ToolState> {
    load_json::<SavedPen>(TOOLS_KEY).map(SavedPen::into_tools)
}

pub fn save_tools(tools: &ToolState) {
    save_json(TOOLS_KEY, &SavedPen::from_tools(tools));
}

#[cfg(any(test, feature = "csr"))]
fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring stored value: {err}");
            None
        }
    }
}
