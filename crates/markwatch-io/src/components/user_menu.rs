//! Top-right account menu.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdUser};
use markwatch_core::{DropdownSlot, UserTable};

#[derive(Props, Clone, PartialEq)]
pub struct UserMenuProps {
    table: Signal<UserTable>,
    on_logout: EventHandler<()>,
}

#[component]
pub fn UserMenu(props: UserMenuProps) -> Element {
    let mut table = props.table;
    let on_logout = props.on_logout;
    let open = table.read().is_open(DropdownSlot::UserMenu);

    rsx! {
        div { class: "user-menu",
            button {
                class: "user-icon",
                title: "Account",
                onclick: move |_| table.write().toggle_dropdown(DropdownSlot::UserMenu),
                Icon { width: 20, height: 20, icon: LdUser }
            }
            if open {
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| table.write().close_dropdowns(),
                }
                div { class: "user-dropdown show",
                    div {
                        class: "user-dropdown-item",
                        onclick: move |_| {
                            table.write().close_dropdowns();
                            on_logout.call(());
                        },
                        Icon { width: 14, height: 14, icon: LdLogOut }
                        " Logout"
                    }
                }
            }
        }
    }
}
