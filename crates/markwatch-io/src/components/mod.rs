//! Dioxus UI components for markwatch.
//!
//! Provides the file selection area, date picker, notification popup,
//! confirmation dialog, admin user table and modal, account menu and
//! tab strip.

mod confirm_dialog;
mod date_picker;
mod role_dropdown;
mod role_table;
mod tabs;
mod toast;
mod upload;
mod user_menu;
mod user_modal;

pub use confirm_dialog::ConfirmDialog;
pub use date_picker::DatePicker;
pub use role_dropdown::RoleDropdown;
pub use role_table::RoleTable;
pub use tabs::Tabs;
pub use toast::Toast;
pub use upload::SelectionWidget;
pub use user_menu::UserMenu;
pub use user_modal::UserModal;
