//! Admin page: the user table with role changes, deletes and the
//! add/edit modal.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use markwatch_core::api::GENERIC_FAILURE;
use markwatch_core::users::DELETE_PROMPT;
use markwatch_core::{
    AppConfig, NewUser, Role, RoleUpdate, UserForm, UserFormMode, UserId, UserTable,
};
use markwatch_io::{Feedback, RoleTable, UserBackend, UserModal, browser, use_feedback};

#[component]
pub fn AdminPage() -> Element {
    let config = use_context::<AppConfig>();
    let feedback = use_feedback();
    let mut users = use_context::<Signal<UserTable>>();
    let mut form = use_signal(|| Option::<UserForm>::None);
    let backend = use_hook(|| {
        let origin = browser::page_origin();
        UserBackend::new(config.admin_backend, config.resolve_base(&origin))
    });

    // The remote table is reloaded on every visit; the in-memory one
    // is seeded once.
    let loader = backend.clone();
    use_hook(move || {
        if !loader.is_remote() && !users.peek().rows().is_empty() {
            return;
        }
        spawn(async move {
            match loader.load().await {
                Ok(rows) => users.write().replace_all(rows),
                Err(e) => {
                    tracing::error!(error = %e, "loading users failed");
                    feedback.error(e.user_message());
                }
            }
        });
    });

    let role_backend = backend.clone();
    let on_role = move |(id, role): (UserId, Role)| {
        let backend = role_backend.clone();
        // Root-scoped so a page switch does not abort the request.
        spawn_forever(async move {
            let outcome = backend.update_role(RoleUpdate { user_id: id, role }).await;
            let notice = users.write().settle_role_change(id, role, outcome);
            feedback.notify(notice);
        });
    };

    let delete_backend = backend.clone();
    let on_delete = move |id: UserId| {
        let backend = delete_backend.clone();
        feedback.ask(DELETE_PROMPT, move || {
            spawn_forever(async move {
                let outcome = backend.delete(id).await;
                let notice = users.write().settle_delete(id, outcome);
                feedback.notify(notice);
            });
        });
    };

    let on_edit = move |id: UserId| {
        let record = users.read().get(id).map(UserForm::edit);
        if let Some(f) = record {
            form.set(Some(f));
        }
    };

    let submit_backend = backend.clone();
    let on_submit = move |submitted: UserForm| {
        if !submit_backend.is_remote() || matches!(submitted.mode, UserFormMode::Edit(_)) {
            let outcome = submitted.apply_local(&mut users.write());
            match outcome {
                Ok(notice) => {
                    form.set(None);
                    feedback.notify(notice);
                }
                Err(e) => feedback.error(e),
            }
            return;
        }
        match submitted.to_new_user(true) {
            Ok(user) => {
                let backend = submit_backend.clone();
                spawn(async move { add_remote(&backend, &user, users, form, feedback).await });
            }
            Err(e) => feedback.error(e),
        }
    };

    let editable = !backend.is_remote();
    rsx! {
        section {
            class: "page",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    form.set(None);
                }
            },
            div { class: "page-header",
                h2 { "User Management" }
                button {
                    class: "btn-primary",
                    onclick: move |_| {
                        users.write().close_dropdowns();
                        form.set(Some(UserForm::add()));
                    },
                    "Add User"
                }
            }
            if editable {
                RoleTable { table: users, on_role, on_delete, on_edit }
            } else {
                RoleTable { table: users, on_role, on_delete }
            }
            UserModal {
                form,
                table: users,
                with_password: backend.is_remote(),
                on_submit,
            }
        }
    }
}

/// Add `user` on the server, then reload the table from it.
///
/// The modal stays open with its input when the server refuses.
#[allow(clippy::future_not_send)] // WASM is single-threaded
async fn add_remote(
    backend: &UserBackend,
    user: &NewUser,
    mut users: Signal<UserTable>,
    mut form: Signal<Option<UserForm>>,
    feedback: Feedback,
) {
    match backend.add(user).await {
        Ok(reply) if reply.success => {
            form.set(None);
            feedback.success(reply.message_or("User added successfully!"));
        }
        Ok(reply) => {
            feedback.error(reply.message_or(GENERIC_FAILURE));
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "adding user failed");
            feedback.error(e.user_message());
            return;
        }
    }
    match backend.load().await {
        Ok(rows) => users.write().replace_all(rows),
        Err(e) => {
            tracing::error!(error = %e, "reloading users failed");
            feedback.error(e.user_message());
        }
    }
}
