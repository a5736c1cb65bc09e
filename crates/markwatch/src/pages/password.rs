//! New-password form: requirement checklist, strength meter and
//! confirm-match gating.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use markwatch_core::FieldError;
use markwatch_core::validate::{PasswordChecks, can_proceed, confirm_hint, validate_new_password};
use markwatch_io::use_feedback;

#[component]
pub fn PasswordPage() -> Element {
    let feedback = use_feedback();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submit_error = use_signal(|| Option::<FieldError>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = validate_new_password(&password.read(), &confirm.read());
        match outcome {
            Ok(()) => {
                tracing::info!("new password accepted");
                feedback.success("Password created successfully!");
                password.set(String::new());
                confirm.set(String::new());
                submit_error.set(None);
            }
            Err(e) => submit_error.set(Some(e)),
        }
    };

    let (pw, cf) = (password(), confirm());
    let checks = PasswordChecks::of(&pw);
    let strength = checks.strength();
    let password_error = submit_error().filter(|e| *e == FieldError::RequirementsUnmet);
    let confirm_error = confirm_hint(&pw, &cf)
        .or_else(|| submit_error().filter(|e| *e == FieldError::PasswordMismatch));

    rsx! {
        section { class: "page auth-page",
            h2 { "Create Password" }
            form { class: "auth-form", onsubmit: on_submit,
                SecretField {
                    label: "Password",
                    value: pw.clone(),
                    invalid: password_error.is_some(),
                    on_input: move |v| {
                        password.set(v);
                        submit_error.set(None);
                    },
                }
                if let Some(e) = password_error {
                    div { class: "field-error show", "{e}" }
                }
                if !pw.is_empty() {
                    div { class: "password-strength show",
                        div { class: "strength-bar {strength.css_class()}" }
                        span { class: "strength-text", "{strength.label()}" }
                    }
                    ul { class: "password-requirements show",
                        for (label, met) in checks.items() {
                            li {
                                key: "{label}",
                                class: if met { "requirement met" } else { "requirement" },
                                span { class: "requirement-icon", if met { "✓" } else { "○" } }
                                " {label}"
                            }
                        }
                    }
                }
                SecretField {
                    label: "Confirm Password",
                    value: cf.clone(),
                    invalid: confirm_error.is_some(),
                    on_input: move |v| confirm.set(v),
                }
                if let Some(e) = confirm_error {
                    div { class: "field-error show", "{e}" }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: !can_proceed(&pw, &cf),
                    "Proceed"
                }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
fn SecretField(
    label: &'static str,
    value: String,
    invalid: bool,
    on_input: EventHandler<String>,
) -> Element {
    let mut visible = use_signal(|| false);
    rsx! {
        label { "{label}"
            div { class: "secret-field",
                input {
                    r#type: if visible() { "text" } else { "password" },
                    class: if invalid { "error" },
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "secret-toggle",
                    title: if visible() { "Hide" } else { "Show" },
                    onclick: move |_| visible.toggle(),
                    if visible() {
                        Icon { width: 16, height: 16, icon: LdEyeOff }
                    } else {
                        Icon { width: 16, height: 16, icon: LdEye }
                    }
                }
            }
        }
    }
}
