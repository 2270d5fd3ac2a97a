//! Error Fallback Component
//!
//! Shown by the root error boundary instead of a blank page.

use leptos::error::Errors;
use leptos::prelude::*;

#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| e.to_string())
            .collect::<Vec<_>>()
    };

    Effect::new({
        let messages = messages.clone();
        move |_| {
            for message in messages() {
                web_sys::console::error_1(&format!("[APP] {}", message).into());
            }
        }
    });

    view! {
        <div class="error-fallback">
            <h1>"Something went wrong"</h1>
            <p>"This page could not be displayed. Please try reloading."</p>
            <ul class="error-list">
                {move || messages().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
        </div>
    }
}
