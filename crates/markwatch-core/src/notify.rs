//! Transient toast notifications.
//!
//! At most one message is visible. A new message replaces the current
//! one immediately and restarts the dismiss countdown; dismissals
//! carry the token of the message they were scheduled for, so a timer
//! left over from an older message cannot hide a newer one.

use std::time::Duration;

use web_time::Instant;

use crate::types::Severity;

/// Default time a notification stays visible.
pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);

/// Text and styling of a notification, before it is shown.
///
/// Flows return a `Notice`; the emitter turns it into a
/// [`NotificationMessage`] with an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// The currently visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub text: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Identifies the message a scheduled dismissal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

/// Single-slot notification emitter.
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<(DismissToken, NotificationMessage)>,
    issued: u64,
    duration: Duration,
}

impl Notifier {
    /// Create an emitter whose messages stay visible for `duration`.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            issued: 0,
            duration,
        }
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `notice` now, replacing anything visible.
    ///
    /// Returns the token to pass to [`Notifier::dismiss`] when the
    /// countdown elapses.
    pub fn notify(&mut self, notice: Notice, now: Instant) -> DismissToken {
        self.issued += 1;
        let token = DismissToken(self.issued);
        if let Some((_, old)) = &self.current {
            tracing::debug!(preempted = %old.text, "notification preempted");
        }
        self.current = Some((
            token,
            NotificationMessage {
                text: notice.text,
                severity: notice.severity,
                expires_at: now + self.duration,
            },
        ));
        token
    }

    /// Hide the message `token` was issued for.
    ///
    /// Returns `false` and does nothing if a newer message has replaced
    /// it or it is already hidden.
    pub fn dismiss(&mut self, token: DismissToken) -> bool {
        match self.current {
            Some((current, _)) if current == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hide the current message if it has expired at `now`.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, msg)) if now >= msg.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Token of the visible message, if any.
    #[must_use]
    pub fn current_token(&self) -> Option<DismissToken> {
        self.current.as_ref().map(|(token, _)| *token)
    }

    /// The visible message, if any.
    #[must_use]
    pub fn current(&self) -> Option<&NotificationMessage> {
        self.current.as_ref().map(|(_, msg)| msg)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_shows_message_with_expiry() {
        let now = Instant::now();
        let mut n = Notifier::default();
        n.notify(Notice::success("Saved"), now);
        let msg = n.current().cloned();
        assert_eq!(msg.as_ref().map(|m| m.text.as_str()), Some("Saved"));
        assert_eq!(msg.map(|m| m.expires_at), Some(now + DEFAULT_DISMISS));
    }

    #[test]
    fn newest_message_wins_and_old_timer_is_inert() {
        let now = Instant::now();
        let mut n = Notifier::default();
        let first = n.notify(Notice::success("A"), now);
        let second = n.notify(Notice::error("B"), now + Duration::from_millis(1000));

        assert!(!n.dismiss(first), "stale dismissal must not hide B");
        let msg = n.current().cloned();
        assert_eq!(msg.as_ref().map(|m| m.text.as_str()), Some("B"));
        assert_eq!(msg.map(|m| m.severity), Some(Severity::Error));

        assert_eq!(n.current_token(), Some(second));
        assert!(n.dismiss(second));
        assert!(n.current().is_none());
        assert_eq!(n.current_token(), None);
    }

    #[test]
    fn expire_respects_restarted_countdown() {
        let t0 = Instant::now();
        let mut n = Notifier::default();
        n.notify(Notice::success("A"), t0);
        n.notify(Notice::success("B"), t0 + Duration::from_millis(2500));
        assert!(!n.expire(t0 + Duration::from_millis(3000)));
        assert!(n.expire(t0 + Duration::from_millis(5500)));
        assert!(n.current().is_none());
    }

    #[test]
    fn dismiss_twice_is_harmless() {
        let mut n = Notifier::new(Duration::from_millis(10));
        let token = n.notify(Notice::success("x"), Instant::now());
        assert!(n.dismiss(token));
        assert!(!n.dismiss(token));
    }
}
