//! Document Commands
//!
//! Small DOM touches that live outside the component tree.

use wasm_bindgen::JsValue;

/// Whether the browser asks for a dark color scheme
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Mirror the theme flag onto the `dark` class of `<html>`
pub fn apply_theme(is_dark: bool) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| "document element unavailable".to_string())?;

    let classes = root.class_list();
    let result = if is_dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    result.map_err(|e: JsValue| format!("Failed to update theme class: {:?}", e))
}
