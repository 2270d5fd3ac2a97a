//! UI Components
//!
//! Reusable Leptos components.

mod about;
mod contact_form;
mod contact_section;
mod error_fallback;
mod footer;
mod hero;
mod nav_bar;
mod portfolio;
mod project_showcase;
mod skills;
mod theme_toggle;
mod toast;

pub use about::About;
pub use contact_form::ContactForm;
pub use contact_section::ContactSection;
pub use error_fallback::ErrorFallback;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use portfolio::Portfolio;
pub use project_showcase::ProjectShowcase;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;
pub use toast::Toast;
