//! Source choice on the compare page.
//!
//! Each side is a group of mutually exclusive options; at most one per
//! side is chosen.

use crate::notify::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftSource {
    Upload,
    ClientDataset,
}

impl LeftSource {
    pub const ALL: [Self; 2] = [Self::Upload, Self::ClientDataset];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload File",
            Self::ClientDataset => "Client Dataset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightSource {
    MyipoJournals,
    ClientDataset,
}

impl RightSource {
    pub const ALL: [Self; 2] = [Self::MyipoJournals, Self::ClientDataset];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MyipoJournals => "MYIPO Journals",
            Self::ClientDataset => "Client Dataset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComparePicker {
    left: Option<LeftSource>,
    right: Option<RightSource>,
}

impl ComparePicker {
    #[must_use]
    pub const fn left(&self) -> Option<LeftSource> {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> Option<RightSource> {
        self.right
    }

    /// Choose `source` on the left, or unchoose it if already chosen.
    pub fn toggle_left(&mut self, source: LeftSource) {
        self.left = if self.left == Some(source) {
            None
        } else {
            Some(source)
        };
    }

    pub fn toggle_right(&mut self, source: RightSource) {
        self.right = if self.right == Some(source) {
            None
        } else {
            Some(source)
        };
    }

    #[must_use]
    pub const fn can_compare(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Notice for the compare button, `None` while it is disabled.
    #[must_use]
    pub fn summary(&self) -> Option<Notice> {
        let (left, right) = (self.left?, self.right?);
        Some(Notice::success(format!(
            "Comparing {} with {}!",
            left.label(),
            right.label()
        )))
    }

    /// Track the upload list: files present select the upload source,
    /// an emptied list unselects it.
    ///
    /// Returns a notice when files were just added.
    pub fn on_files_changed(&mut self, added: usize, remaining: usize) -> Option<Notice> {
        if remaining == 0 {
            if self.left == Some(LeftSource::Upload) {
                self.left = None;
            }
            return None;
        }
        self.left = Some(LeftSource::Upload);
        (added > 0).then(|| Notice::success("File(s) uploaded successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_needs_both_sides() {
        let mut p = ComparePicker::default();
        p.toggle_left(LeftSource::ClientDataset);
        assert!(!p.can_compare());
        assert!(p.summary().is_none());
        p.toggle_right(RightSource::MyipoJournals);
        assert_eq!(
            p.summary().map(|n| n.text).as_deref(),
            Some("Comparing Client Dataset with MYIPO Journals!")
        );
    }

    #[test]
    fn options_in_a_group_are_exclusive() {
        let mut p = ComparePicker::default();
        p.toggle_right(RightSource::MyipoJournals);
        p.toggle_right(RightSource::ClientDataset);
        assert_eq!(p.right(), Some(RightSource::ClientDataset));
        p.toggle_right(RightSource::ClientDataset);
        assert_eq!(p.right(), None);
    }

    #[test]
    fn uploading_selects_upload_and_emptying_clears_it() {
        let mut p = ComparePicker::default();
        p.toggle_left(LeftSource::ClientDataset);
        let notice = p.on_files_changed(2, 2);
        assert_eq!(p.left(), Some(LeftSource::Upload));
        assert_eq!(notice.map(|n| n.text).as_deref(), Some("File(s) uploaded successfully!"));

        assert!(p.on_files_changed(0, 1).is_none());
        assert_eq!(p.left(), Some(LeftSource::Upload));
        p.on_files_changed(0, 0);
        assert_eq!(p.left(), None);
    }

    #[test]
    fn emptying_keeps_a_dataset_choice() {
        let mut p = ComparePicker::default();
        p.toggle_left(LeftSource::ClientDataset);
        p.on_files_changed(0, 0);
        assert_eq!(p.left(), Some(LeftSource::ClientDataset));
    }
}
