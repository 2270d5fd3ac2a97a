//! Navigation Bar Component
//!
//! Fixed top bar with in-page anchors and the theme toggle.

use leptos::prelude::*;
use portfolio_core::Section;

use crate::components::ThemeToggle;

#[component]
pub fn NavBar(name: String) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <a class="nav-brand" href=Section::Home.href()>{name}</a>
                <div class="nav-links">
                    {Section::ALL.iter().map(|section| view! {
                        <a class="nav-link" href=section.href()>{section.label()}</a>
                    }).collect_view()}
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}
