//! Portfolio Page Component
//!
//! Assembles every section from the site content and owns the page store.

use leptos::prelude::*;
use portfolio_core::{SiteContent, TitleRotation};
use reactive_stores::Store;

use crate::components::{About, ContactSection, Footer, Hero, NavBar, ProjectShowcase, Skills, Toast};
use crate::store::PageState;

#[component]
pub fn Portfolio(content: SiteContent, rotation: TitleRotation, state: PageState) -> impl IntoView {
    // Provide the page store to every section
    provide_context(Store::new(state));

    let SiteContent {
        profile,
        projects: _,
        titles: _,
        education,
        certifications,
        interests,
        skills,
        leadership,
        contact_channels,
        socials,
    } = content;
    let name = profile.name.clone();

    view! {
        <div class="page">
            <NavBar name=name.clone() />
            <main>
                <Hero profile=profile rotation=rotation />
                <About education=education certifications=certifications interests=interests />
                <ProjectShowcase />
                <Skills categories=skills leadership=leadership />
                <ContactSection channels=contact_channels socials=socials />
            </main>
            <Footer name=name />
            <Toast />
        </div>
    }
}
