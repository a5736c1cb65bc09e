//! Page-wide notification and confirmation slots.
//!
//! The root component calls [`use_feedback_provider`] once and mounts
//! [`crate::Toast`] and [`crate::ConfirmDialog`]; everything below reads
//! the same [`Feedback`] through [`use_feedback`].

use std::fmt::Display;
use std::time::Duration;

use dioxus::prelude::*;
use markwatch_core::{ConfirmSlot, Notice, Notifier};
use web_time::Instant;

/// Deferred action of a confirmation.
pub type ConfirmAction = Box<dyn FnOnce()>;

/// Handle to the notification emitter and confirmation slot.
#[derive(Clone, Copy, PartialEq)]
pub struct Feedback {
    pub(crate) notifier: Signal<Notifier>,
    pub(crate) confirm: Signal<ConfirmSlot<ConfirmAction>>,
}

impl Feedback {
    /// Show `notice`, replacing any visible notification.
    pub fn notify(mut self, notice: Notice) {
        self.notifier.write().notify(notice, Instant::now());
    }

    pub fn success(self, text: impl Into<String>) {
        self.notify(Notice::success(text));
    }

    pub fn error(self, err: impl Display) {
        self.notify(Notice::error(err.to_string()));
    }

    /// Ask a yes/no question and run `on_confirm` only on "yes".
    ///
    /// A question still open is replaced and its action dropped.
    pub fn ask(mut self, message: impl Into<String>, on_confirm: impl FnOnce() + 'static) {
        self.confirm.write().request(message, Box::new(on_confirm));
    }

    /// Dismiss the open question without running its action.
    pub fn cancel(mut self) {
        self.confirm.write().cancel();
    }

    /// Accept the open question.
    ///
    /// The action is taken out of the slot before it runs, so it may
    /// ask a follow-up question.
    pub fn accept(mut self) {
        let action = self.confirm.write().confirm();
        if let Some(action) = action {
            action();
        }
    }
}

/// Create the page's [`Feedback`] with notifications visible for
/// `duration`.
pub fn use_feedback_provider(duration: Duration) -> Feedback {
    use_context_provider(|| Feedback {
        notifier: Signal::new(Notifier::new(duration)),
        confirm: Signal::new(ConfirmSlot::new()),
    })
}

/// The [`Feedback`] provided by an ancestor.
#[must_use]
pub fn use_feedback() -> Feedback {
    use_context()
}
