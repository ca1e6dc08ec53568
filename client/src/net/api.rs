//! HTTP helpers for the animation generator.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning an error, since the endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so the visualizer can show a placeholder
//! and keep running instead of surfacing a panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use canvas::program::sanitize_source;

/// Path of the animation generator.
pub const ANIMATION_ENDPOINT: &str = "/api/animation";

#[cfg(any(test, feature = "csr"))]
fn generation_failed_message(status: u16) -> String {
    format!("animation request failed: {status}")
}

/// Strip Markdown fences from generated code; an empty result is an error.
#[cfg(any(test, feature = "csr"))]
fn clean_generated(code: &str) -> Result<String, String> {
    sanitize_source(code).ok_or_else(|| "generator returned no code".to_owned())
}

/// Ask the generator for an animation program via `POST /api/animation`.
///
/// Returns the cleaned function body, ready for compilation.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the returned code is empty.
pub async fn generate_animation(description: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        use super::types::{AnimationRequest, AnimationResponse};

        let payload = AnimationRequest { description: description.to_owned() };
        let resp = gloo_net::http::Request::post(ANIMATION_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(generation_failed_message(resp.status()));
        }
        let body: AnimationResponse = resp.json().await.map_err(|e| e.to_string())?;
        clean_generated(&body.code)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = description;
        Err("not available outside the browser".to_owned())
    }
}
