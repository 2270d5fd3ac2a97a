//! Contact Form
//!
//! Busy-flagged, single-attempt delivery of a contact message.
//!
//! The form state is plain data so the view layer can keep it in whatever
//! reactive cell it likes; [`FormCell`] is the seam between the two.
//! [`submit`] is the whole lifecycle: guard, send, settle, notify.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use futures::future::{self, Either};
use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::relay::MessageRelay;

/// How long a delivery may take before it counts as failed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The name/email/message triple typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
}

impl ContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_name: name.into(),
            sender_email: email.into(),
            body: body.into(),
        }
    }

    /// Every field carries something besides whitespace
    pub fn is_complete(&self) -> bool {
        [&self.sender_name, &self.sender_email, &self.body]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Result of one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Succeeded,
    Failed,
}

/// What the visitor is told after a submit settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Sent,
    Failed,
    /// Submit refused because a field holds only whitespace
    Incomplete,
}

impl Notification {
    pub fn text(self) -> &'static str {
        match self {
            Notification::Sent => "✅ Message sent successfully!",
            Notification::Failed => "❌ Failed to send message. Please try again later.",
            Notification::Incomplete => "⚠️ Please fill in your name, email and message.",
        }
    }
}

/// Why a submit did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A delivery is already in flight
    Busy,
    /// A field is empty or whitespace-only
    Incomplete,
}

/// Editable form fields plus the in-flight flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub message: ContactMessage,
    submitting: bool,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Claim the form for a delivery and return the message to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::Busy);
        }
        if !self.message.is_complete() {
            return Err(SubmitBlocked::Incomplete);
        }
        self.submitting = true;
        Ok(self.message.clone())
    }

    /// Settle the in-flight delivery. Fields are cleared only on success.
    pub fn complete(&mut self, outcome: DeliveryOutcome) -> Notification {
        self.submitting = false;
        match outcome {
            DeliveryOutcome::Succeeded => {
                self.message = ContactMessage::default();
                Notification::Sent
            }
            DeliveryOutcome::Failed => Notification::Failed,
        }
    }
}

/// Shared, interior-mutable home of a [`ContactForm`]
pub trait FormCell {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl FormCell for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// Receiver of the settle notification
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> Notifier for F {
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Send `message` through `relay`, giving up when `deadline` resolves first.
pub async fn deliver<R, D>(relay: &R, message: &ContactMessage, deadline: D, timeout: Duration) -> DeliveryOutcome
where
    R: MessageRelay + ?Sized,
    D: Future<Output = ()>,
{
    let send = relay.send(message);
    futures::pin_mut!(deadline);

    let result = match future::select(send, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(RelayError::Timeout(timeout.as_millis() as u64)),
    };

    match result {
        Ok(()) => {
            tracing::debug!("contact message delivered");
            DeliveryOutcome::Succeeded
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact message delivery failed");
            DeliveryOutcome::Failed
        }
    }
}

/// Run one submit of the form held in `cell`.
///
/// A call made while another is in flight returns `None` and emits nothing.
/// Every other call emits exactly one notification and returns it; an
/// incomplete form is answered with [`Notification::Incomplete`] without
/// touching the relay.
pub async fn submit<C, R, N, D>(cell: &C, relay: &R, notifier: &N, deadline: D, timeout: Duration) -> Option<Notification>
where
    C: FormCell + ?Sized,
    R: MessageRelay + ?Sized,
    N: Notifier + ?Sized,
    D: Future<Output = ()>,
{
    let message = match cell.with_form(ContactForm::begin_submit) {
        Ok(message) => message,
        Err(SubmitBlocked::Busy) => return None,
        Err(SubmitBlocked::Incomplete) => {
            tracing::debug!("contact form incomplete, nothing sent");
            notifier.notify(Notification::Incomplete);
            return Some(Notification::Incomplete);
        }
    };
    let outcome = deliver(relay, &message, deadline, timeout).await;
    let notification = cell.with_form(|form| form.complete(outcome));
    notifier.notify(notification);
    Some(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayResult;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::sync::Notify;

    /// Relay that counts calls and answers with a fixed result,
    /// optionally waiting for a release signal first
    struct FakeRelay {
        succeed: bool,
        calls: Cell<usize>,
        gate: Option<Rc<Notify>>,
    }

    impl FakeRelay {
        fn new(succeed: bool) -> Self {
            Self { succeed, calls: Cell::new(0), gate: None }
        }

        fn gated(succeed: bool, gate: Rc<Notify>) -> Self {
            Self { succeed, calls: Cell::new(0), gate: Some(gate) }
        }
    }

    #[async_trait(?Send)]
    impl MessageRelay for FakeRelay {
        async fn send(&self, _message: &ContactMessage) -> RelayResult<()> {
            self.calls.set(self.calls.get() + 1);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.succeed {
                Ok(())
            } else {
                Err(RelayError::Rejected { status: 500, body: "boom".to_string() })
            }
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    fn filled_form() -> RefCell<ContactForm> {
        RefCell::new(ContactForm {
            message: ContactMessage::new("Ada", "ada@example.com", "Hello"),
            submitting: false,
        })
    }

    fn never() -> future::Pending<()> {
        future::pending()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("portfolio_core=debug")
            .with_test_writer()
            .try_init();
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_notifies_once() {
        let form = filled_form();
        let relay = FakeRelay::new(true);
        let notes = Recorder::default();

        let result = submit(&form, &relay, &notes, never(), DEFAULT_TIMEOUT).await;

        assert_eq!(result, Some(Notification::Sent));
        assert_eq!(*notes.0.borrow(), vec![Notification::Sent]);
        let form = form.borrow();
        assert_eq!(form.message, ContactMessage::default());
        assert!(!form.is_submitting());
        assert_eq!(relay.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_notifies_once() {
        init_tracing();
        let form = filled_form();
        let relay = FakeRelay::new(false);
        let notes = Recorder::default();

        let result = submit(&form, &relay, &notes, never(), DEFAULT_TIMEOUT).await;

        assert_eq!(result, Some(Notification::Failed));
        assert_eq!(*notes.0.borrow(), vec![Notification::Failed]);
        let form = form.borrow();
        assert_eq!(form.message, ContactMessage::new("Ada", "ada@example.com", "Hello"));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_noop() {
        let form = filled_form();
        let gate = Rc::new(Notify::new());
        let relay = FakeRelay::gated(true, gate.clone());
        let notes = Recorder::default();

        let first = submit(&form, &relay, &notes, never(), DEFAULT_TIMEOUT);
        futures::pin_mut!(first);

        // Drive the first submit up to its pending network call
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(form.borrow().is_submitting());

        let second = submit(&form, &relay, &notes, never(), DEFAULT_TIMEOUT).await;
        assert_eq!(second, None);
        assert_eq!(relay.calls.get(), 1);

        gate.notify_one();
        assert_eq!(first.await, Some(Notification::Sent));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(notes.0.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_deadline_counts_as_failure() {
        init_tracing();
        let form = filled_form();
        // Gate is never released, so only the deadline can finish the call
        let relay = FakeRelay::gated(true, Rc::new(Notify::new()));
        let notes = Recorder::default();
        let timeout = Duration::from_millis(10);

        let result = submit(&form, &relay, &notes, tokio::time::sleep(timeout), timeout).await;

        assert_eq!(result, Some(Notification::Failed));
        assert_eq!(form.borrow().message.sender_name, "Ada");
        assert!(!form.borrow().is_submitting());
    }

    #[tokio::test]
    async fn test_whitespace_field_is_reported_and_sends_nothing() {
        let form = RefCell::new(ContactForm {
            message: ContactMessage::new("Ada", "   ", "Hello"),
            submitting: false,
        });
        let relay = FakeRelay::new(true);
        let notes = Recorder::default();

        let result = submit(&form, &relay, &notes, never(), DEFAULT_TIMEOUT).await;

        assert_eq!(result, Some(Notification::Incomplete));
        assert_eq!(*notes.0.borrow(), vec![Notification::Incomplete]);
        assert_eq!(relay.calls.get(), 0);
        let form = form.borrow();
        assert!(!form.is_submitting());
        assert_eq!(form.message.sender_name, "Ada");
    }

    #[tokio::test]
    async fn test_closure_notifier() {
        let form = filled_form();
        let relay = FakeRelay::new(true);
        let count = Cell::new(0);
        let notifier = |_: Notification| count.set(count.get() + 1);

        submit(&form, &relay, &notifier, never(), DEFAULT_TIMEOUT).await;
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_busy_wins_over_incomplete() {
        let mut form = ContactForm {
            message: ContactMessage::default(),
            submitting: true,
        };
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Busy));
        form.submitting = false;
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Incomplete));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_begin_submit_sets_busy_flag() {
        let mut form = filled_form().into_inner();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Busy));
        assert_eq!(form.complete(DeliveryOutcome::Failed), Notification::Failed);
        assert!(!form.is_submitting());
    }
}
