//! markwatch-io: Browser I/O and Dioxus component library.
//!
//! Talks to the backend API, reads the page clock, location and
//! configuration global, creates Blob URLs for image previews, and
//! provides reusable UI components for the markwatch web application.

pub mod api;
pub mod backend;
pub mod blob;
pub mod browser;
pub mod components;
pub mod feedback;
pub mod files;

pub use api::ApiClient;
pub use backend::UserBackend;
pub use components::{
    ConfirmDialog, DatePicker, RoleDropdown, RoleTable, SelectionWidget, Tabs, Toast, UserMenu,
    UserModal,
};
pub use feedback::{Feedback, use_feedback, use_feedback_provider};
