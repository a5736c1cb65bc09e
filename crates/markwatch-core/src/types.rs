//! Shared types for the markwatch front end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A file offered to a selection widget.
///
/// `H` is the opaque content handle. In the browser it is the
/// platform file object whose bytes are read only at submission time;
/// tests use `()` or small integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef<H> {
    /// File name as reported by the browser, including extension.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type, empty when the browser could not determine one.
    pub mime_type: String,
    /// Opaque handle to the file contents.
    pub handle: H,
}

impl<H> FileRef<H> {
    /// Create a new file reference.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
        handle: H,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            handle,
        }
    }

    /// Identity used for deduplication and removal.
    #[must_use]
    pub fn key(&self) -> FileKey {
        FileKey {
            name: self.name.clone(),
            size_bytes: self.size_bytes,
        }
    }

    /// Returns `true` if this file has the same `(name, size)` as `key`.
    #[must_use]
    pub fn matches(&self, key: &FileKey) -> bool {
        self.name == key.name && self.size_bytes == key.size_bytes
    }

    /// File name without its final extension.
    ///
    /// A name without a dot is its own base name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        split_extension(&self.name).0
    }

    /// Final extension including the leading dot, or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        split_extension(&self.name).1
    }
}

/// Split `name` into `(base, ".ext")` at the last dot.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    name.rfind('.').map_or((name, ""), |i| name.split_at(i))
}

/// `(name, size)` identity of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.size_bytes)
    }
}

/// Styling of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// CSS modifier class for the popup.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Map a remote `success` flag to a severity.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Error }
    }
}

/// Role of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Every role, in dropdown order.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];

    /// Display label, also the wire value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Stable identifier of a user row.
///
/// Server-assigned when the table is backed by the API, generated from
/// a counter by the in-memory backend. Never derived from row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_and_extension_split_at_last_dot() {
        let f = FileRef::new("logo.final.png", 10, "image/png", ());
        assert_eq!(f.base_name(), "logo.final");
        assert_eq!(f.extension(), ".png");
    }

    #[test]
    fn name_without_dot_is_its_own_base() {
        let f = FileRef::new("README", 10, "", ());
        assert_eq!(f.base_name(), "README");
        assert_eq!(f.extension(), "");
    }

    #[test]
    fn key_matches_name_and_size_only() {
        let a = FileRef::new("a.csv", 1, "text/csv", 1_u8);
        let b = FileRef::new("a.csv", 1, "", 2_u8);
        assert!(b.matches(&a.key()));
        let c = FileRef::new("a.csv", 2, "text/csv", 3_u8);
        assert!(!c.matches(&a.key()));
    }

    #[test]
    fn role_round_trips_through_label() {
        for role in Role::ALL {
            assert_eq!(role.label().parse::<Role>(), Ok(role));
        }
        assert!("Owner".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_as_label() {
        let json = serde_json::to_string(&Role::Admin).unwrap_or_default();
        assert_eq!(json, "\"Admin\"");
    }

    #[test]
    fn user_id_is_transparent_on_the_wire() {
        let id: Result<UserId, _> = serde_json::from_str("42");
        assert_eq!(id.ok(), Some(UserId(42)));
    }
}
