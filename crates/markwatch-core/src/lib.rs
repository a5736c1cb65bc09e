//! markwatch-core: Pure widget state and form rules (sans-IO).
//!
//! Holds every piece of front-end behavior that has real state:
//! file selection, the calendar, confirmation and notification slots,
//! the user/role table, upload submission planning, and client-side
//! field validation.
//!
//! This crate has **no I/O dependencies** -- no DOM, no network, no
//! wall clock. Callers pass the current date or instant in. All
//! browser interaction lives in `markwatch-io`.

pub mod api;
pub mod calendar;
pub mod compare;
pub mod config;
pub mod confirm;
pub mod manage;
pub mod notify;
pub mod search;
pub mod selection;
pub mod submit;
pub mod types;
pub mod users;
pub mod validate;

pub use api::{ApiReply, NewUser, RemoteError, RoleUpdate, TrademarkHit};
pub use calendar::{CalendarState, DayCell, Nav, PickerPhase};
pub use compare::{ComparePicker, LeftSource, RightSource};
pub use config::{AdminBackend, AppConfig, ConfigError};
pub use confirm::{ConfirmSlot, ConfirmationRequest};
pub use manage::{DatasetRow, ManageTable};
pub use notify::{DismissToken, Notice, NotificationMessage, Notifier};
pub use search::{SearchPlan, SearchQuery};
pub use selection::{
    AcceptFilter, FileIcon, FileListView, FileRow, Rejection, RemoveTarget, SelectionMode,
    SelectionState, SubmitAffordance,
};
pub use submit::{SubmitError, SubmitPlan, UploadFields};
pub use types::{FileKey, FileRef, Role, Severity, UserId};
pub use users::{DropdownSlot, TableError, UserForm, UserFormMode, UserRecord, UserTable};
pub use validate::{FieldError, PasswordChecks, SignInErrors, Strength};
