//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use portfolio_core::{ContactForm, Notification, ProjectCard, ProjectCarousel};

/// Interactive state of the portfolio page
#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Project showcase position and last move direction
    pub carousel: ProjectCarousel<ProjectCard>,
    /// Contact form fields and in-flight flag
    pub contact: ContactForm,
    /// Relay notification still on screen
    pub notification: NotificationSlot,
}

impl PageState {
    pub fn new(carousel: ProjectCarousel<ProjectCard>) -> Self {
        Self {
            carousel,
            contact: ContactForm::default(),
            notification: NotificationSlot::default(),
        }
    }
}

/// The notification on screen, numbered so a delayed dismiss only
/// removes the showing it was started for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    seq: u64,
    current: Option<Notification>,
}

impl NotificationSlot {
    /// Show `notification`, replacing whatever is on screen; returns its number
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.seq += 1;
        self.current = Some(notification);
        self.seq
    }

    pub fn current(&self) -> Option<(u64, Notification)> {
        self.current.map(|notification| (self.seq, notification))
    }

    /// Whether showing `seq` is still on screen
    pub fn is_showing(&self, seq: u64) -> bool {
        self.current.is_some() && self.seq == seq
    }

    /// Remove showing `seq`; a newer showing is left alone
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.is_showing(seq) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earlier_dismiss_leaves_repeated_notification() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(Notification::Sent);
        let second = slot.show(Notification::Sent);

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current(), Some((second, Notification::Sent)));

        assert!(slot.dismiss(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_clear_then_stale_dismiss() {
        let mut slot = NotificationSlot::default();
        let seq = slot.show(Notification::Failed);
        slot.clear();
        assert!(!slot.is_showing(seq));
        assert!(!slot.dismiss(seq));
    }
}
