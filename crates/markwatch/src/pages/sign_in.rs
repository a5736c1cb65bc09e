//! Sign-in form with client-side field checks.

use dioxus::prelude::*;
use markwatch_core::SignInErrors;
use markwatch_core::api::paths;
use markwatch_io::browser;

const FORM_ID: &str = "signin-form";

#[component]
pub fn SignInPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(SignInErrors::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let checked = SignInErrors::check(&email.read(), &password.read());
        errors.set(checked);
        if checked.is_valid() {
            tracing::info!("submitting sign-in");
            browser::submit_form(FORM_ID);
        }
    };

    let shown = errors();
    rsx! {
        section { class: "page auth-page",
            h2 { "Sign In" }
            form {
                id: FORM_ID,
                class: "auth-form",
                method: "post",
                action: paths::SIGN_IN,
                novalidate: true,
                onsubmit: on_submit,
                label { "Email"
                    input {
                        r#type: "email",
                        name: "email",
                        class: if shown.email.is_some() { "error" },
                        value: "{email}",
                        oninput: move |evt| {
                            email.set(evt.value());
                            errors.write().email = None;
                        },
                    }
                }
                if let Some(e) = shown.email {
                    div { class: "field-error show", "{e}" }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        name: "password",
                        class: if shown.password.is_some() { "error" },
                        value: "{password}",
                        oninput: move |evt| {
                            password.set(evt.value());
                            errors.write().password = None;
                        },
                    }
                }
                if let Some(e) = shown.password {
                    div { class: "field-error show", "{e}" }
                }
                button { r#type: "submit", class: "btn-primary", "Sign In" }
            }
        }
    }
}
