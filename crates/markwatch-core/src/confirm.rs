//! Single-slot yes/no confirmation.
//!
//! The slot holds at most one live request. Issuing a new request
//! overwrites the pending action in place, so a superseded action is
//! dropped without ever running.

/// A prompt waiting for the user's answer.
#[derive(Debug)]
pub struct ConfirmationRequest<A> {
    pub message: String,
    pub on_confirm: A,
}

/// Holder of the one live [`ConfirmationRequest`].
///
/// `A` is the deferred action, typically `Box<dyn FnOnce()>`. The slot
/// never calls it; [`ConfirmSlot::confirm`] hands it back so the caller
/// runs it after releasing any borrow of the slot.
#[derive(Debug)]
pub struct ConfirmSlot<A> {
    live: Option<ConfirmationRequest<A>>,
}

impl<A> ConfirmSlot<A> {
    #[must_use]
    pub const fn new() -> Self {
        Self { live: None }
    }

    /// Show `message` and bind `on_confirm` as the only pending action.
    ///
    /// A request that was still live is discarded without running its
    /// action.
    pub fn request(&mut self, message: impl Into<String>, on_confirm: A) {
        let message = message.into();
        if let Some(old) = self.live.replace(ConfirmationRequest {
            message,
            on_confirm,
        }) {
            tracing::debug!(superseded = %old.message, "confirmation superseded");
        }
    }

    /// Returns `true` while a request is shown.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Message of the live request.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.live.as_ref().map(|r| r.message.as_str())
    }

    /// Accept the live request, returning its action for the caller to
    /// run. Returns `None` if nothing is pending.
    pub fn confirm(&mut self) -> Option<A> {
        self.live.take().map(|r| r.on_confirm)
    }

    /// Decline the live request. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.live.take().is_some()
    }
}

impl<A> Default for ConfirmSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}
