//! Render Hints
//!
//! Maps view-model values onto CSS classes. Kept free of Leptos so the
//! mapping is unit tested without a DOM.

use portfolio_core::SlideFrom;

/// Entry animation class for a carousel window
pub fn slide_class(from: SlideFrom) -> &'static str {
    match from {
        SlideFrom::Right => "project-window slide-in-right",
        SlideFrom::Left => "project-window slide-in-left",
    }
}

/// Accent palettes known to the stylesheet
const ACCENTS: &[&str] = &["blue", "purple", "green", "orange", "pink", "teal"];

/// `accent-<name>` for a known palette, `accent-blue` otherwise
pub fn accent_class(accent: &str) -> String {
    let accent = accent.trim().to_ascii_lowercase();
    if ACCENTS.contains(&accent.as_str()) {
        format!("accent-{}", accent)
    } else {
        "accent-blue".to_string()
    }
}
