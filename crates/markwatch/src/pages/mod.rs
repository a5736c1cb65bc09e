//! Top-level pages and the navigation between them.

use std::fmt;

mod admin;
mod client_dataset;
mod compare;
mod dataset;
mod manage;
mod password;
mod search;
mod sign_in;

pub use admin::AdminPage;
pub use client_dataset::ClientDatasetPage;
pub use compare::ComparePage;
pub use dataset::DatasetPage;
pub use password::PasswordPage;
pub use search::SearchPage;
pub use sign_in::SignInPage;

/// A page reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Search,
    Compare,
    Dataset,
    ClientDataset,
    Admin,
    SignIn,
    Password,
}

impl Page {
    /// Pages in navigation-bar order.
    pub const ALL: [Self; 7] = [
        Self::Search,
        Self::Compare,
        Self::Dataset,
        Self::ClientDataset,
        Self::Admin,
        Self::SignIn,
        Self::Password,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Compare => "Compare",
            Self::Dataset => "MYIPO Dataset",
            Self::ClientDataset => "Client Dataset",
            Self::Admin => "Admin",
            Self::SignIn => "Sign In",
            Self::Password => "Change Password",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabs shared by both dataset pages.
pub(crate) const DATASET_TABS: [&str; 2] = ["Upload", "Manage"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Page::ALL.len());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Page::ClientDataset.to_string(), "Client Dataset");
    }
}
