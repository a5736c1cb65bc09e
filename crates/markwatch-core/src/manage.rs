//! The "Manage" tab of the dataset pages: a checkable list of uploaded
//! files with name and date filters.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::notify::Notice;
use crate::validate::FieldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub id: u64,
    pub name: String,
    pub size_bytes: u64,
    pub uploaded_on: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct ManageTable {
    rows: Vec<DatasetRow>,
    checked: BTreeSet<u64>,
    name_filter: Option<String>,
    date_filter: Option<NaiveDate>,
    next_id: u64,
}

impl ManageTable {
    #[must_use]
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        let next_id = rows.iter().map(|r| r.id).max().map_or(1, |m| m + 1);
        Self {
            rows,
            next_id,
            ..Self::default()
        }
    }

    /// Add a row for a file that was just uploaded.
    pub fn record_upload(&mut self, name: String, size_bytes: u64, on: NaiveDate) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.rows.push(DatasetRow {
            id,
            name,
            size_bytes,
            uploaded_on: on,
        });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows passing the current name and date filters.
    pub fn visible(&self) -> impl Iterator<Item = &DatasetRow> {
        let needle = self.name_filter.as_deref().map(str::to_lowercase);
        self.rows.iter().filter(move |r| {
            needle
                .as_deref()
                .is_none_or(|n| r.name.to_lowercase().contains(n))
                && self.date_filter.is_none_or(|d| r.uploaded_on == d)
        })
    }

    #[must_use]
    pub fn is_checked(&self, id: u64) -> bool {
        self.checked.contains(&id)
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.checked.remove(&id) {
            self.checked.insert(id);
        }
    }

    /// Check or uncheck every visible row.
    pub fn toggle_all(&mut self, check: bool) {
        let ids: Vec<u64> = self.visible().map(|r| r.id).collect();
        for id in ids {
            if check {
                self.checked.insert(id);
            } else {
                self.checked.remove(&id);
            }
        }
    }

    /// State of the select-all box: every visible row is checked and
    /// there is at least one.
    #[must_use]
    pub fn all_checked(&self) -> bool {
        let mut any = false;
        for row in self.visible() {
            if !self.checked.contains(&row.id) {
                return false;
            }
            any = true;
        }
        any
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked rows the filters currently show.
    fn checked_visible(&self) -> BTreeSet<u64> {
        self.visible()
            .map(|r| r.id)
            .filter(|id| self.checked.contains(id))
            .collect()
    }

    /// Prompt for deleting the checked rows in view.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NothingChecked`] when no visible row is
    /// checked.
    pub fn delete_prompt(&self) -> Result<String, FieldError> {
        match self.checked_visible().len() {
            0 => Err(FieldError::NothingChecked),
            n => Ok(format!("Are you sure you want to delete {n} file(s)?")),
        }
    }

    /// Remove the checked rows in view. Rows hidden by a filter keep
    /// their check mark and are not deleted.
    pub fn delete_checked(&mut self) -> Notice {
        let before = self.rows.len();
        let doomed = self.checked_visible();
        self.checked.retain(|id| !doomed.contains(id));
        self.rows.retain(|r| !doomed.contains(&r.id));
        let removed = before - self.rows.len();
        tracing::debug!(removed, "dataset rows deleted");
        Notice::success(format!("{removed} file(s) deleted successfully!"))
    }

    /// Filter rows by name.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::SearchTermRequired`] for a blank term and
    /// keeps the previous filter.
    pub fn search(&mut self, term: &str) -> Result<Notice, FieldError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(FieldError::SearchTermRequired);
        }
        self.name_filter = Some(term.to_owned());
        Ok(Notice::success(format!("Searching for \"{term}\"...")))
    }

    pub fn clear_search(&mut self) {
        self.name_filter = None;
    }

    #[must_use]
    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }

    pub const fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.date_filter = date;
    }
}
