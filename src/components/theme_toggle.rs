//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_theme;

/// Sun/moon button; the single writer of the theme flag
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            title=move || if theme.is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark.get() { "☀" } else { "🌙" }}
        </button>
    }
}
