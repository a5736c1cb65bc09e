//! Role selector that shares the page's single open-dropdown slot.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use markwatch_core::{DropdownSlot, Role, UserTable};

#[derive(Props, Clone, PartialEq)]
pub struct RoleDropdownProps {
    /// Which slot this dropdown occupies when open.
    slot: DropdownSlot,
    /// Role currently shown.
    role: Role,
    /// Holder of the open-dropdown slot.
    table: Signal<UserTable>,
    on_pick: EventHandler<Role>,
}

/// Opening this dropdown closes any other one on the page.
#[component]
pub fn RoleDropdown(props: RoleDropdownProps) -> Element {
    let mut table = props.table;
    let slot = props.slot;
    let on_pick = props.on_pick;
    let open = table.read().is_open(slot);

    rsx! {
        div { class: if open { "role-dropdown show" } else { "role-dropdown" },
            div {
                class: "role-select",
                onclick: move |_| table.write().toggle_dropdown(slot),
                span { "{props.role}" }
                Icon { width: 14, height: 14, icon: LdChevronDown }
            }
            if open {
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| table.write().close_dropdowns(),
                }
                div { class: "role-options",
                    for role in Role::ALL {
                        div {
                            key: "{role}",
                            class: if role == props.role {
                                "role-option selected"
                            } else {
                                "role-option"
                            },
                            onclick: move |_| {
                                table.write().close_dropdowns();
                                on_pick.call(role);
                            },
                            "{role}"
                        }
                    }
                }
            }
        }
    }
}
