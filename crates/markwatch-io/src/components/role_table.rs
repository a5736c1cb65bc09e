//! The admin user table.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use markwatch_core::{DropdownSlot, Role, UserId, UserTable};

use super::RoleDropdown;

#[derive(Props, Clone, PartialEq)]
pub struct RoleTableProps {
    table: Signal<UserTable>,
    /// A role was picked for a row.
    on_role: EventHandler<(UserId, Role)>,
    on_delete: EventHandler<UserId>,
    /// Shows an Edit button per row when set.
    #[props(default)]
    on_edit: Option<EventHandler<UserId>>,
}

/// Rows are keyed and addressed by [`UserId`], never by position.
#[component]
pub fn RoleTable(props: RoleTableProps) -> Element {
    let table = props.table;
    let on_role = props.on_role;
    let on_delete = props.on_delete;
    let on_edit = props.on_edit;
    let rows = table.read().rows().to_vec();

    rsx! {
        table { class: "admin-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Role" }
                    th { "Actions" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { colspan: 4, class: "admin-empty", "No users yet." }
                    }
                }
                for user in rows {
                    tr { key: "{user.id}",
                        td { "{user.name}" }
                        td { "{user.email}" }
                        td {
                            RoleDropdown {
                                slot: DropdownSlot::Row(user.id),
                                role: user.role,
                                table,
                                on_pick: move |role| on_role.call((user.id, role)),
                            }
                        }
                        td { class: "admin-actions",
                            if let Some(edit) = on_edit {
                                button {
                                    class: "admin-edit-btn",
                                    onclick: move |_| edit.call(user.id),
                                    Icon { width: 14, height: 14, icon: LdPencil }
                                    " Edit"
                                }
                            }
                            button {
                                class: "admin-delete-btn",
                                onclick: move |_| on_delete.call(user.id),
                                Icon { width: 14, height: 14, icon: LdTrash2 }
                                " Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
