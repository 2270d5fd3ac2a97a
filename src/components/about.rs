//! About Section Component
//!
//! Education, certifications and interests.

use leptos::prelude::*;
use portfolio_core::{Certification, EducationEntry, Section};

use crate::hints::accent_class;

#[component]
pub fn About(
    education: Vec<EducationEntry>,
    certifications: Vec<Certification>,
    interests: Vec<String>,
) -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="section about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <div class="panel">
                    <h3>"🎓 Education"</h3>
                    <div class="stack">
                        {education.into_iter().map(|edu| view! {
                            <div class="card">
                                <h4 class=format!("card-title {}", accent_class(&edu.accent))>{edu.school}</h4>
                                <p>{edu.degree}</p>
                                <p class="muted">{edu.details}</p>
                                <p class="faint">{edu.period}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="panel">
                    <h3>"🏆 Certifications"</h3>
                    <div class="stack">
                        {certifications.into_iter().map(|cert| view! {
                            <div class=format!("card bordered {}", accent_class(&cert.accent))>
                                <h4 class="card-title">{cert.name}</h4>
                                <p class="muted">{cert.issuer}</p>
                            </div>
                        }).collect_view()}
                    </div>

                    {(!interests.is_empty()).then(|| view! {
                        <div class="card interests">
                            <h4 class="card-title">"🎯 Interests"</h4>
                            <div class="chips">
                                {interests.into_iter().map(|hobby| view! {
                                    <span class="chip">{hobby}</span>
                                }).collect_view()}
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
