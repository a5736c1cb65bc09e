//! Transient notification popup.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::feedback::use_feedback;

/// Shows the current notification and dismisses it when its time is up.
///
/// Mount once, near the root, so the countdown outlives page switches.
/// A restarted countdown cancels the previous one; the dismiss token
/// keeps a late timer from hiding a newer message.
#[component]
pub fn Toast() -> Element {
    let feedback = use_feedback();
    let mut notifier = feedback.notifier;
    let mut countdown = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let Some(token) = notifier.read().current_token() else {
            return;
        };
        let ms = u32::try_from(notifier.peek().duration().as_millis()).unwrap_or(u32::MAX);
        let task = spawn(async move {
            TimeoutFuture::new(ms).await;
            notifier.write().dismiss(token);
        });
        if let Some(previous) = countdown.write().replace(task) {
            previous.cancel();
        }
    });

    let current = notifier.read().current().cloned();
    rsx! {
        if let Some(msg) = current {
            div {
                class: "popup-notification {msg.severity.css_class()} show",
                role: "status",
                "{msg.text}"
            }
        }
    }
}
