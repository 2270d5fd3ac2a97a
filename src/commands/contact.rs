//! Contact Relay Commands
//!
//! Binds the headless submit lifecycle to the page store and the
//! build-time relay configuration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use portfolio_core::{
    relay_from_config, submit, ContactForm, FormCell, MessageRelay, Notification, RelayConfig, DEFAULT_TIMEOUT,
};

use crate::store::{PageStateStoreFields, PageStore};

// ========================
// Build-time configuration
// ========================

const SERVICE_ID: Option<&str> = option_env!("PORTFOLIO_SERVICE_ID");
const TEMPLATE_ID: Option<&str> = option_env!("PORTFOLIO_TEMPLATE_ID");
const PUBLIC_KEY: Option<&str> = option_env!("PORTFOLIO_PUBLIC_KEY");
const RELAY_ENDPOINT: Option<&str> = option_env!("PORTFOLIO_RELAY_ENDPOINT");

/// Build the relay from the compiled-in configuration.
/// A missing identifier yields a relay that always fails.
pub fn build_relay() -> Box<dyn MessageRelay> {
    let config = RelayConfig::from_values(SERVICE_ID, TEMPLATE_ID, PUBLIC_KEY);
    if let Err(e) = &config {
        web_sys::console::warn_1(&format!("[RELAY] {}", e).into());
    }
    relay_from_config(config, RELAY_ENDPOINT)
}

/// The contact form as held by the page store
#[derive(Clone, Copy)]
struct StoreForm(PageStore);

impl FormCell for StoreForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        let contact = self.0.contact();
        let mut form = contact.write();
        f(&mut *form)
    }
}

/// Submit the contact form once.
///
/// Returns `None` when a delivery is already in flight.
pub async fn send_contact_message(store: PageStore) -> Option<Notification> {
    let relay = build_relay();
    let deadline = TimeoutFuture::new(DEFAULT_TIMEOUT.as_millis() as u32);
    let notify = move |notification: Notification| {
        match notification {
            Notification::Sent => web_sys::console::log_1(&"[RELAY] Message delivered".into()),
            Notification::Failed => web_sys::console::error_1(&"[RELAY] Message delivery failed".into()),
            Notification::Incomplete => web_sys::console::warn_1(&"[RELAY] Form incomplete, nothing sent".into()),
        }
        store.notification().write().show(notification);
    };

    submit(&StoreForm(store), relay.as_ref(), &notify, deadline, DEFAULT_TIMEOUT).await
}
