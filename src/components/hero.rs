//! Hero Section Component
//!
//! Avatar, name, the rotating title and the call-to-action links.

use leptos::prelude::*;
use portfolio_core::{Profile, Section, TimerGuard, TitleRotation, ROTATION_INTERVAL};

#[component]
pub fn Hero(profile: Profile, rotation: TitleRotation) -> impl IntoView {
    let rotation = RwSignal::new(rotation);

    // The guard lives as long as this view's owner; disposing it stops the ticks
    match set_interval_with_handle(move || { rotation.try_update(TitleRotation::tick); }, ROTATION_INTERVAL) {
        Ok(ticker) => {
            let guard = TimerGuard::new(move || ticker.clear());
            on_cleanup(move || drop(guard));
        }
        Err(e) => web_sys::console::error_1(&format!("[HERO] Failed to start title rotation: {:?}", e).into()),
    }

    let current_title = move || rotation.with(|r| r.current().to_string());

    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="hero-inner">
                <div class="avatar">{profile.initials.clone()}</div>
                <h1 class="hero-name">{profile.name.clone()}</h1>
                // Keyed on the index so the typing animation replays on every tick
                {move || {
                    let index = rotation.with(|r| r.current_index());
                    view! {
                        <p class="hero-title typewriter" data-index=index>{current_title()}</p>
                    }
                }}
                <p class="hero-tagline">{profile.tagline.clone()}</p>
                <p class="hero-summary">{profile.summary.clone()}</p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href=format!("mailto:{}", profile.email)>"Get In Touch"</a>
                    <a class="btn btn-dark" href=profile.github.clone() target="_blank" rel="noopener noreferrer">
                        "View GitHub"
                    </a>
                    <a class="btn btn-outline" href=profile.resume_path.clone() download="resume.pdf">
                        "Download Résumé"
                    </a>
                </div>
            </div>
        </section>
    }
}
