//! Saving exported boards as files.
//!
//! SYSTEM CONTEXT
//! ==============
//! `canvas::web::Whiteboard::export_png` produces a data URL; these helpers
//! name it and hand it to the browser through a temporary anchor.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// File name for a board exported at `timestamp_ms` (Unix epoch millis).
#[allow(clippy::cast_possible_truncation)]
pub fn export_file_name(timestamp_ms: f64) -> String {
    let stamp = if timestamp_ms.is_finite() { timestamp_ms.max(0.0).floor() as i64 } else { 0 };
    format!("MateMentor_Rabota_{stamp}.png")
}

/// Current time in Unix epoch millis.
#[cfg(feature = "csr")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Today's date formatted for the page footer.
#[cfg(feature = "csr")]
pub fn today_label() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("mk-MK", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Ask the browser to save `href` under `file_name`.
///
/// # Errors
///
/// Returns an error string when the anchor cannot be created.
#[cfg(feature = "csr")]
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
    let link = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_owned())?;
    link.set_download(file_name);
    link.set_href(href);
    link.click();
    Ok(())
}
