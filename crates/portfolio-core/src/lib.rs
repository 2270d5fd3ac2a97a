//! Portfolio Core
//!
//! Platform-independent behavior behind the portfolio page:
//! - rotator: timed title cycling
//! - timer: view-scoped ownership of the rotation interval
//! - carousel: windowed project navigation with a direction hint
//! - contact / relay: busy-flagged delivery through an email service
//! - content: the typed, embedded site document
//!
//! Nothing here touches the DOM, so it is tested natively.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod error;
pub mod relay;
pub mod rotator;
pub mod section;
pub mod timer;

pub use carousel::{Direction, ProjectCarousel, SlideFrom, WINDOW_SIZE};
pub use contact::{
    submit, ContactForm, ContactMessage, DeliveryOutcome, FormCell, Notification, Notifier, SubmitBlocked, DEFAULT_TIMEOUT,
};
pub use content::{
    Certification, ContactChannel, EducationEntry, Highlight, Profile, ProjectCard, SiteContent, SkillCategory, SocialLink,
};
pub use error::{CarouselError, ContentError, RelayError, RotationError};
pub use relay::{relay_from_config, EmailJsRelay, MessageRelay, RelayConfig, UnconfiguredRelay};
pub use rotator::{TitleRotation, ROTATION_INTERVAL};
pub use section::Section;
pub use timer::TimerGuard;
