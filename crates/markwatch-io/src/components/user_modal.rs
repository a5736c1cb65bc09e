//! Add/edit user modal.

use dioxus::prelude::*;
use markwatch_core::{DropdownSlot, UserForm, UserTable};

use super::RoleDropdown;

#[derive(Props, Clone, PartialEq)]
pub struct UserModalProps {
    /// `Some` while the modal is open.
    form: Signal<Option<UserForm>>,
    /// Holder of the open-dropdown slot, shared with the table.
    table: Signal<UserTable>,
    /// Show the password field (remote backend only).
    #[props(default)]
    with_password: bool,
    on_submit: EventHandler<UserForm>,
}

#[component]
pub fn UserModal(props: UserModalProps) -> Element {
    let mut form = props.form;
    let mut table = props.table;
    let on_submit = props.on_submit;
    let Some(current) = form.read().clone() else {
        return rsx! {};
    };

    let mut close = move || {
        table.write().close_dropdowns();
        form.set(None);
    };

    rsx! {
        div {
            class: "modal-overlay show",
            onclick: move |_| close(),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "{current.title()}" }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if let Some(f) = form.read().clone() {
                            on_submit.call(f);
                        }
                    },
                    label { "Name"
                        input {
                            r#type: "text",
                            value: "{current.name}",
                            oninput: move |evt| {
                                if let Some(f) = form.write().as_mut() {
                                    f.name = evt.value();
                                }
                            },
                        }
                    }
                    label { "Email"
                        input {
                            r#type: "email",
                            value: "{current.email}",
                            oninput: move |evt| {
                                if let Some(f) = form.write().as_mut() {
                                    f.email = evt.value();
                                }
                            },
                        }
                    }
                    if props.with_password {
                        label { "Password"
                            input {
                                r#type: "password",
                                value: "{current.password}",
                                oninput: move |evt| {
                                    if let Some(f) = form.write().as_mut() {
                                        f.password = evt.value();
                                    }
                                },
                            }
                        }
                    }
                    div { class: "modal-role",
                        span { "Role" }
                        RoleDropdown {
                            slot: DropdownSlot::ModalRole,
                            role: current.role,
                            table,
                            on_pick: move |role| {
                                if let Some(f) = form.write().as_mut() {
                                    f.role = role;
                                }
                            },
                        }
                    }
                    div { class: "modal-buttons",
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            onclick: move |_| close(),
                            "Cancel"
                        }
                        button { r#type: "submit", class: "btn-primary",
                            "{current.submit_label()}"
                        }
                    }
                }
            }
        }
    }
}
