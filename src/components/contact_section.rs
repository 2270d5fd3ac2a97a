//! Contact Section Component
//!
//! Contact channels, social links and the contact form.

use leptos::prelude::*;
use portfolio_core::{ContactChannel, Section, SocialLink};

use crate::components::ContactForm;

#[component]
pub fn ContactSection(channels: Vec<ContactChannel>, socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor() class="section contact">
            <h2 class="section-title light">"Let's Work Together"</h2>
            <p class="section-subtitle light">
                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions."
            </p>

            <div class="channels">
                {channels.into_iter().map(|channel| view! {
                    <a class="channel" href=channel.href>
                        <div class="channel-icon">{channel.icon}</div>
                        <h3>{channel.title}</h3>
                        <p>{channel.value}</p>
                    </a>
                }).collect_view()}
            </div>

            <div class="socials">
                {socials.into_iter().map(|social| view! {
                    <a class="social" href=social.href target="_blank" rel="noopener noreferrer">{social.name}</a>
                }).collect_view()}
            </div>

            <ContactForm />
        </section>
    }
}
