//! Yes/No confirmation overlay.

use dioxus::prelude::*;

use crate::feedback::use_feedback;

#[component]
pub fn ConfirmDialog() -> Element {
    let feedback = use_feedback();
    let message = feedback.confirm.read().message().map(str::to_owned);

    rsx! {
        if let Some(message) = message {
            div { class: "confirm-overlay show",
                div { class: "confirm-box", role: "alertdialog",
                    p { class: "confirm-message", "{message}" }
                    div { class: "confirm-buttons",
                        button {
                            class: "confirm-yes",
                            onclick: move |_| feedback.accept(),
                            "Yes"
                        }
                        button {
                            class: "confirm-no",
                            onclick: move |_| feedback.cancel(),
                            "No"
                        }
                    }
                }
            }
        }
    }
}
