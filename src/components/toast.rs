//! Toast Component
//!
//! Shows the last relay notification, then dismisses it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::Notification;

use crate::store::{use_page_store, PageStateStoreFields};

/// How long a notification stays visible
const TOAST_MILLIS: u32 = 4000;

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_page_store();

    // Auto-dismiss the showing that started this timer; a newer one is left alone
    Effect::new(move |_| {
        if let Some((seq, _)) = store.notification().read().current() {
            spawn_local(async move {
                TimeoutFuture::new(TOAST_MILLIS).await;
                let notification = store.notification();
                if notification.try_read_untracked().map(|slot| slot.is_showing(seq)).unwrap_or(false) {
                    notification.write().dismiss(seq);
                }
            });
        }
    });

    view! {
        {move || store.notification().read().current().map(|(_, notification)| {
            let class = match notification {
                Notification::Sent => "toast success",
                Notification::Failed => "toast failure",
                Notification::Incomplete => "toast notice",
            };
            view! {
                <div class=class role="status" on:click=move |_| store.notification().write().clear()>
                    {notification.text()}
                </div>
            }
        })}
    }
}
