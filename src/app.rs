//! Portfolio Frontend App
//!
//! Root component: theme provider, error boundary and content loading.

use leptos::prelude::*;
use portfolio_core::{ContentError, SiteContent, TitleRotation};

use crate::commands;
use crate::components::{ErrorFallback, Portfolio};
use crate::context::ThemeContext;
use crate::store::PageState;

/// Site document, embedded at build time
const SITE_CONTENT: &str = include_str!("../content/site.toml");

/// Everything the page needs to start
struct Site {
    content: SiteContent,
    rotation: TitleRotation,
    state: PageState,
}

fn load_site() -> Result<Site, ContentError> {
    let content = SiteContent::from_toml(SITE_CONTENT)?;
    let rotation = content.title_rotation()?;
    let state = PageState::new(content.project_carousel()?);
    Ok(Site { content, rotation, state })
}

#[component]
pub fn App() -> impl IntoView {
    let (is_dark, set_is_dark) = signal(commands::prefers_dark());

    // Provide context to all children
    provide_context(ThemeContext::new((is_dark, set_is_dark)));

    // Keep <html class="dark"> in step with the flag
    Effect::new(move |_| {
        let dark = is_dark.get();
        web_sys::console::log_1(&format!("[THEME] dark={}", dark).into());
        if let Err(e) = commands::apply_theme(dark) {
            web_sys::console::error_1(&format!("[THEME] {}", e).into());
        }
    });

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
            {load_site().map(|site| view! {
                <Portfolio content=site.content rotation=site.rotation state=site.state />
            })}
        </ErrorBoundary>
    }
}
