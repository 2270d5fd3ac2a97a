//! Contact Form Component
//!
//! Name/email/message form relayed through the email service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{use_page_store, PageStateStoreFields};

/// Contact form bound to the page store
#[component]
pub fn ContactForm() -> impl IntoView {
    let store = use_page_store();

    let is_submitting = move || store.contact().read().is_submitting();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting() { return; }

        spawn_local(async move {
            if commands::send_contact_message(store).await.is_none() {
                web_sys::console::log_1(&"[RELAY] Submit ignored, delivery in flight".into());
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2>"Get In Touch"</h2>

            <label class="field">
                <span>"Your Name"</span>
                <input
                    type="text"
                    required=true
                    placeholder="Jane Doe"
                    prop:value=move || store.contact().read().message.sender_name.clone()
                    on:input=move |ev| {
                        store.contact().write().message.sender_name = event_target_value(&ev);
                    }
                />
            </label>

            <label class="field">
                <span>"Your Email"</span>
                <input
                    type="email"
                    required=true
                    placeholder="jane@example.com"
                    prop:value=move || store.contact().read().message.sender_email.clone()
                    on:input=move |ev| {
                        store.contact().write().message.sender_email = event_target_value(&ev);
                    }
                />
            </label>

            <label class="field">
                <span>"Message"</span>
                <textarea
                    required=true
                    rows=6
                    placeholder="Your message here..."
                    prop:value=move || store.contact().read().message.body.clone()
                    on:input=move |ev| {
                        store.contact().write().message.body = event_target_value(&ev);
                    }
                ></textarea>
            </label>

            <button type="submit" class="btn btn-primary submit" disabled=is_submitting>
                {move || if is_submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
