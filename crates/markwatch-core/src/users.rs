//! The admin user table and its mutation flows.
//!
//! Rows are keyed by [`UserId`]. Remote completions may arrive late and
//! in any order, so every settle function looks its row up by id at the
//! time the reply is applied and never by position.

use serde::{Deserialize, Serialize};

use crate::api::{ApiReply, NewUser, RemoteError};
use crate::notify::Notice;
use crate::types::{Role, UserId};
use crate::validate::FieldError;

/// One row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A dropdown or menu that takes part in page-wide exclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownSlot {
    /// Top-right account menu.
    UserMenu,
    /// Role selector inside the add/edit modal.
    ModalRole,
    /// Role selector on a table row.
    Row(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("no user with id {0}")]
    NotFound(UserId),
}

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to log out?";

/// Users shown by the in-memory backend on first load.
#[must_use]
pub fn demo_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: UserId(1),
            name: "Victoria Foo".to_owned(),
            email: "victoria.foo@skrine.com".to_owned(),
            role: Role::Admin,
        },
        UserRecord {
            id: UserId(2),
            name: "Xian Xin".to_owned(),
            email: "xianxin@skrine.com".to_owned(),
            role: Role::User,
        },
    ]
}

/// User rows plus the page's single open-dropdown slot.
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    rows: Vec<UserRecord>,
    open: Option<DropdownSlot>,
    next_local_id: u64,
}

impl UserTable {
    #[must_use]
    pub fn new(rows: Vec<UserRecord>) -> Self {
        let mut table = Self::default();
        table.replace_all(rows);
        table
    }

    #[must_use]
    pub fn rows(&self) -> &[UserRecord] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Replace every row, e.g. after reloading from the server.
    ///
    /// A row dropdown whose user is gone is closed.
    pub fn replace_all(&mut self, rows: Vec<UserRecord>) {
        self.next_local_id = rows.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        self.rows = rows;
        if let Some(DropdownSlot::Row(id)) = self.open
            && self.get(id).is_none()
        {
            self.open = None;
        }
    }

    /// Append a user with a freshly generated id.
    pub fn insert_local(&mut self, name: String, email: String, role: Role) -> UserId {
        let id = UserId(self.next_local_id);
        self.next_local_id += 1;
        self.rows.push(UserRecord {
            id,
            name,
            email,
            role,
        });
        tracing::debug!(%id, "user inserted");
        id
    }

    /// Overwrite name, email and role of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the row no longer exists.
    pub fn update_local(
        &mut self,
        id: UserId,
        name: String,
        email: String,
        role: Role,
    ) -> Result<(), TableError> {
        let row = self.row_mut(id)?;
        row.name = name;
        row.email = email;
        row.role = role;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the row no longer exists.
    pub fn set_role(&mut self, id: UserId, role: Role) -> Result<(), TableError> {
        self.row_mut(id)?.role = role;
        Ok(())
    }

    /// Remove exactly the row `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the row no longer exists.
    pub fn remove(&mut self, id: UserId) -> Result<UserRecord, TableError> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(TableError::NotFound(id))?;
        if self.open == Some(DropdownSlot::Row(id)) {
            self.open = None;
        }
        Ok(self.rows.remove(pos))
    }

    fn row_mut(&mut self, id: UserId) -> Result<&mut UserRecord, TableError> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(TableError::NotFound(id))
    }

    // --- dropdown exclusivity -------------------------------------------

    #[must_use]
    pub const fn open_dropdown(&self) -> Option<DropdownSlot> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, slot: DropdownSlot) -> bool {
        self.open == Some(slot)
    }

    /// Open `slot` (closing whatever else is open) or close it if it is
    /// already the open one.
    pub fn toggle_dropdown(&mut self, slot: DropdownSlot) {
        self.open = if self.open == Some(slot) {
            None
        } else {
            Some(slot)
        };
    }

    pub const fn close_dropdowns(&mut self) {
        self.open = None;
    }

    // --- remote completions ---------------------------------------------

    /// Apply the outcome of a role update for `id`.
    ///
    /// Only a successful reply changes the table. A reply for a row
    /// that has since disappeared is logged and otherwise ignored.
    pub fn settle_role_change(
        &mut self,
        id: UserId,
        role: Role,
        outcome: Result<ApiReply, RemoteError>,
    ) -> Notice {
        match outcome {
            Ok(reply) if reply.success => {
                if self.set_role(id, role).is_err() {
                    tracing::warn!(%id, "role update completed for a user no longer listed");
                }
                Notice::success(reply.message_or(&format!("Role updated to {role}")))
            }
            Ok(reply) => Notice::error(reply.message_or(crate::api::GENERIC_FAILURE)),
            Err(e) => {
                tracing::error!(%id, error = %e, "role update failed");
                Notice::error(e.user_message())
            }
        }
    }

    /// Apply the outcome of a delete for `id`.
    pub fn settle_delete(&mut self, id: UserId, outcome: Result<ApiReply, RemoteError>) -> Notice {
        match outcome {
            Ok(reply) if reply.success => {
                if self.remove(id).is_err() {
                    tracing::warn!(%id, "delete completed for a user no longer listed");
                }
                Notice::success(reply.message_or("User deleted successfully!"))
            }
            Ok(reply) => Notice::error(reply.message_or(crate::api::GENERIC_FAILURE)),
            Err(e) => {
                tracing::error!(%id, error = %e, "delete failed");
                Notice::error(e.user_message())
            }
        }
    }
}

/// Whether the modal adds a new user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFormMode {
    #[default]
    Add,
    Edit(UserId),
}

/// State of the add/edit user modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub mode: UserFormMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserForm {
    /// Blank form for adding a user. Role defaults to `User`.
    #[must_use]
    pub fn add() -> Self {
        Self::default()
    }

    /// Form prefilled from `record`.
    #[must_use]
    pub fn edit(record: &UserRecord) -> Self {
        Self {
            mode: UserFormMode::Edit(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            password: String::new(),
            role: record.role,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.mode {
            UserFormMode::Add => "Add New User",
            UserFormMode::Edit(_) => "Edit User",
        }
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            UserFormMode::Add => "Add User",
            UserFormMode::Edit(_) => "Update User",
        }
    }

    /// Trimmed request body for this form.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::MissingFields`] if name or email is blank,
    /// or if `require_password` is set and the password is blank.
    pub fn to_new_user(&self, require_password: bool) -> Result<NewUser, FieldError> {
        let user = NewUser {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.trim().to_owned(),
            role: self.role,
        };
        if user.name.is_empty()
            || user.email.is_empty()
            || (require_password && user.password.is_empty())
        {
            return Err(FieldError::MissingFields);
        }
        Ok(user)
    }

    /// Apply this form to an in-memory table.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::MissingFields`] for blank fields. Editing a
    /// row that was deleted meanwhile yields an error notice and leaves
    /// the table unchanged.
    pub fn apply_local(&self, table: &mut UserTable) -> Result<Notice, FieldError> {
        let user = self.to_new_user(false)?;
        match self.mode {
            UserFormMode::Add => {
                table.insert_local(user.name, user.email, user.role);
                Ok(Notice::success("User added successfully!"))
            }
            UserFormMode::Edit(id) => match table.update_local(id, user.name, user.email, user.role)
            {
                Ok(()) => Ok(Notice::success("User updated successfully!")),
                Err(e) => {
                    tracing::warn!(error = %e, "edited user no longer listed");
                    Ok(Notice::error(e.to_string()))
                }
            },
        }
    }
}
