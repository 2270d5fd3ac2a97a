//! Project Showcase Component
//!
//! Three-card carousel over the project list with prev/next navigation.

use leptos::prelude::*;
use portfolio_core::{ProjectCard, Section};

use crate::hints::{accent_class, slide_class};
use crate::store::{use_page_store, PageStateStoreFields};

/// One project card
#[component]
fn ProjectCardView(project: ProjectCard) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class=format!("project-banner {}", accent_class(&project.accent))>
                <span class="project-icon">{project.icon}</span>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="project-subtitle">{project.subtitle}</p>
                <p class="muted">{project.description}</p>
                <div class="chips">
                    {project.tags.into_iter().map(|tag| view! {
                        <span class="chip small">{tag}</span>
                    }).collect_view()}
                </div>
                <p class="faint">{project.achievement}</p>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectShowcase() -> impl IntoView {
    let store = use_page_store();

    let on_previous = move |_| {
        store.carousel().write().previous();
    };
    let on_next = move |_| {
        store.carousel().write().next();
    };

    view! {
        <section id=Section::Projects.anchor() class="section projects">
            <h2 class="section-title">"Featured Projects"</h2>
            <p class="section-subtitle">"Some of my recent work"</p>

            <div class="carousel">
                <button class="carousel-btn prev" title="Previous project" on:click=on_previous>"‹"</button>

                // Rebuilt on every move so the slide-in animation replays
                {move || {
                    let (class, index, cards) = store.carousel().with(|carousel| {
                        let cards: Vec<ProjectCard> = carousel.visible_window().into_iter().cloned().collect();
                        (slide_class(carousel.direction().slide_from()), carousel.current_index(), cards)
                    });

                    view! {
                        <div class=class data-index=index>
                            {cards.into_iter().map(|project| view! {
                                <ProjectCardView project=project />
                            }).collect_view()}
                        </div>
                    }
                }}

                <button class="carousel-btn next" title="Next project" on:click=on_next>"›"</button>
            </div>

            <div class="carousel-dots">
                {move || {
                    let (current, len) = store.carousel().with(|c| (c.current_index(), c.len()));
                    (0..len).map(|i| view! {
                        <span class=if i == current { "dot active" } else { "dot" }></span>
                    }).collect_view()
                }}
            </div>
        </section>
    }
}
