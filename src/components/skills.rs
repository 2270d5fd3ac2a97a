//! Skills Section Component
//!
//! Skill category grid followed by leadership highlights.

use leptos::prelude::*;
use portfolio_core::{Highlight, Section, SkillCategory};

use crate::hints::accent_class;

#[component]
pub fn Skills(categories: Vec<SkillCategory>, leadership: Vec<Highlight>) -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="section skills">
            <h2 class="section-title">"Technical Skills"</h2>
            <div class="skills-grid">
                {categories.into_iter().map(|category| view! {
                    <div class=format!("panel skill-category {}", accent_class(&category.accent))>
                        <h3>{category.title}</h3>
                        <div class="stack">
                            {category.skills.into_iter().map(|skill| view! {
                                <div class="skill">{skill}</div>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="highlights-grid">
                {leadership.into_iter().map(|item| view! {
                    <div class="panel highlight">
                        <h3>{item.title}</h3>
                        <p class="muted">{item.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
