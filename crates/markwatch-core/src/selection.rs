//! File selection state behind every upload area.
//!
//! One [`SelectionState`] is owned by each mounted upload widget. Drag
//! and drop and the file picker both feed [`SelectionState::add_files`];
//! the widget renders [`SelectionState::rows`] and derives its submit
//! button from [`SelectionState::submit_affordance`].

use serde::{Deserialize, Serialize};

use crate::types::{FileKey, FileRef};

/// How many files a widget may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one file; a second add is rejected until it is removed.
    #[default]
    SingleFile,
    /// Any number of files, deduplicated by `(name, size)`.
    MultiFile,
}

/// Which MIME types a widget accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AcceptFilter {
    #[default]
    Any,
    /// Only `image/*`.
    ImagesOnly,
}

impl AcceptFilter {
    /// Returns `true` if a file with `mime_type` may be selected.
    #[must_use]
    pub fn accepts(self, mime_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::ImagesOnly => mime_type.starts_with("image/"),
        }
    }

    /// Value for the file input's `accept` attribute.
    #[must_use]
    pub const fn input_accept(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::ImagesOnly => "image/*",
        }
    }
}

/// Why a batch of candidates was not added.
///
/// The display text is shown to the user as an error notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Single-file widget already holds a file.
    #[error("You can only upload one file at a time.")]
    ExceedsCountLimit,

    /// More than one file offered to a single-file widget.
    #[error("Please select only one file.")]
    MultipleFilesNotAllowed,

    /// A candidate's type is not accepted by this widget.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

/// Which file to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    /// The file with this `(name, size)` identity.
    Key(FileKey),
    /// The file at this position in the current list.
    Index(usize),
}

/// Icon category for a listed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Pdf,
    Word,
    Spreadsheet,
    Presentation,
    Generic,
}

impl FileIcon {
    /// Classify by MIME type.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.contains("pdf") {
            Self::Pdf
        } else if mime_type.contains("word") {
            Self::Word
        } else if mime_type.contains("excel") || mime_type.contains("spreadsheet") {
            Self::Spreadsheet
        } else if mime_type.contains("presentation") || mime_type.contains("powerpoint") {
            Self::Presentation
        } else {
            Self::Generic
        }
    }

    /// Classify by file extension (without the dot, any case).
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Word,
            "xls" | "xlsx" | "csv" => Self::Spreadsheet,
            "ppt" | "pptx" => Self::Presentation,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => Self::Image,
            _ => Self::Generic,
        }
    }

    /// Classify a file, preferring its MIME type and falling back to
    /// the extension when the browser reported no specific type.
    #[must_use]
    pub fn classify(name: &str, mime_type: &str) -> Self {
        match Self::from_mime(mime_type) {
            Self::Generic => {
                let ext = crate::types::split_extension(name).1.trim_start_matches('.');
                Self::from_extension(ext)
            }
            icon => icon,
        }
    }

    /// Short badge text.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Image => "IMG",
            Self::Pdf => "PDF",
            Self::Word => "DOC",
            Self::Spreadsheet => "XLS",
            Self::Presentation => "PPT",
            Self::Generic => "FILE",
        }
    }
}

/// Format a byte count as `"12.3 KB"` or `"4.5 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

/// Enabled state and label of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAffordance {
    pub enabled: bool,
    pub label: String,
}

/// One displayed entry of the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow<'a> {
    /// Position in the current list.
    pub index: usize,
    /// Stable identity for keyed rendering and removal.
    pub key: FileKey,
    pub name: &'a str,
    /// Human-readable size, e.g. `"1.5 KB"`.
    pub size_label: String,
    pub icon: FileIcon,
}

/// Restartable, read-only view over the current selection.
///
/// Cheap to copy; every call to [`FileListView::iter`] starts from the
/// first file again.
#[derive(Debug)]
pub struct FileListView<'a, H> {
    items: &'a [FileRef<H>],
}

impl<H> Clone for FileListView<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for FileListView<'_, H> {}

impl<'a, H> FileListView<'a, H> {
    /// Number of rows.
    #[must_use]
    pub const fn len(self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there is nothing to display.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.items.is_empty()
    }

    /// Iterate rows from the first file.
    pub fn iter(self) -> impl Iterator<Item = FileRow<'a>> + 'a {
        self.items.iter().enumerate().map(|(index, file)| FileRow {
            index,
            key: file.key(),
            name: &file.name,
            size_label: format_file_size(file.size_bytes),
            icon: FileIcon::classify(&file.name, &file.mime_type),
        })
    }
}

/// Files currently chosen in one upload widget.
///
/// # Invariants
///
/// - `SingleFile` mode holds at most one file.
/// - No two files share `(name, size)`.
///
/// Every mutating method preserves both, and a rejected add leaves the
/// state exactly as it was.
#[derive(Debug, Clone)]
pub struct SelectionState<H> {
    mode: SelectionMode,
    accept: AcceptFilter,
    items: Vec<FileRef<H>>,
}

impl<H> SelectionState<H> {
    /// Create an empty selection accepting any file type.
    #[must_use]
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            accept: AcceptFilter::Any,
            items: Vec::new(),
        }
    }

    /// Restrict which MIME types may be added.
    #[must_use]
    pub const fn with_accept(mut self, accept: AcceptFilter) -> Self {
        self.accept = accept;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub const fn accept(&self) -> AcceptFilter {
        self.accept
    }

    #[must_use]
    pub fn items(&self) -> &[FileRef<H>] {
        &self.items
    }

    /// The first (in single mode: the only) selected file.
    #[must_use]
    pub fn first(&self) -> Option<&FileRef<H>> {
        self.items.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offer files from a drop or the file picker.
    ///
    /// Returns how many files were added. An empty batch (e.g. a drop of
    /// plain text) adds nothing and is not an error.
    ///
    /// # Errors
    ///
    /// In `SingleFile` mode returns [`Rejection::ExceedsCountLimit`] if a
    /// file is already selected, or [`Rejection::MultipleFilesNotAllowed`]
    /// if more than one candidate is offered. In either mode returns
    /// [`Rejection::UnsupportedType`] if any candidate fails the accept
    /// filter. Nothing is added when an error is returned.
    pub fn add_files(&mut self, candidates: Vec<FileRef<H>>) -> Result<usize, Rejection> {
        if candidates.is_empty() {
            return Ok(0);
        }

        if self.mode == SelectionMode::SingleFile {
            if !self.items.is_empty() {
                tracing::debug!("single-file selection already occupied");
                return Err(Rejection::ExceedsCountLimit);
            }
            if candidates.len() > 1 {
                tracing::debug!(offered = candidates.len(), "rejected multi-file drop");
                return Err(Rejection::MultipleFilesNotAllowed);
            }
        }

        if let Some(bad) = candidates.iter().find(|f| !self.accept.accepts(&f.mime_type)) {
            return Err(Rejection::UnsupportedType(bad.name.clone()));
        }

        let before = self.items.len();
        for candidate in candidates {
            let duplicate = self
                .items
                .iter()
                .any(|f| f.name == candidate.name && f.size_bytes == candidate.size_bytes);
            if !duplicate {
                self.items.push(candidate);
            }
        }
        let added = self.items.len() - before;
        tracing::debug!(added, total = self.items.len(), "files added to selection");
        Ok(added)
    }

    /// Remove one file, returning it if it was present.
    pub fn remove(&mut self, target: &RemoveTarget) -> Option<FileRef<H>> {
        let index = match target {
            RemoveTarget::Key(key) => self.items.iter().position(|f| f.matches(key))?,
            RemoveTarget::Index(i) if *i < self.items.len() => *i,
            RemoveTarget::Index(_) => return None,
        };
        let removed = self.items.remove(index);
        tracing::debug!(name = %removed.name, remaining = self.items.len(), "file removed");
        Some(removed)
    }

    /// Drop every selected file.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Display rows for the file list.
    #[must_use]
    pub fn rows(&self) -> FileListView<'_, H> {
        FileListView { items: &self.items }
    }

    /// Submit button state: disabled iff nothing is selected, with the
    /// file count in the label.
    #[must_use]
    pub fn submit_affordance(&self) -> SubmitAffordance {
        let count = self.items.len();
        let label = match (self.mode, count) {
            (SelectionMode::SingleFile, 0) => "Upload File".to_owned(),
            (SelectionMode::MultiFile, 0) => "Upload Files".to_owned(),
            (_, 1) => "Upload 1 File".to_owned(),
            (_, n) => format!("Upload {n} Files"),
        };
        SubmitAffordance {
            enabled: count > 0,
            label,
        }
    }
}

impl<H> Default for SelectionState<H> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> FileRef<()> {
        FileRef::new(name, size, "application/pdf", ())
    }

    fn image(name: &str) -> FileRef<()> {
        FileRef::new(name, 100, "image/png", ())
    }

    // --- SingleFile mode ---

    #[test]
    fn single_mode_accepts_one_file() {
        let mut sel = SelectionState::new(SelectionMode::SingleFile);
        assert_eq!(sel.add_files(vec![file("a.pdf", 1)]), Ok(1));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn single_mode_rejects_second_add_without_mutation() {
        let mut sel = SelectionState::new(SelectionMode::SingleFile);
        sel.add_files(vec![file("a.pdf", 1)]).ok();
        assert_eq!(
            sel.add_files(vec![file("b.pdf", 2)]),
            Err(Rejection::ExceedsCountLimit)
        );
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.first().map(|f| f.name.as_str()), Some("a.pdf"));
    }

    #[test]
    fn single_mode_rejects_batch_of_two() {
        let mut sel = SelectionState::new(SelectionMode::SingleFile);
        assert_eq!(
            sel.add_files(vec![file("a.pdf", 1), file("b.pdf", 2)]),
            Err(Rejection::MultipleFilesNotAllowed)
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn occupied_check_precedes_batch_size_check() {
        let mut sel = SelectionState::new(SelectionMode::SingleFile);
        sel.add_files(vec![file("a.pdf", 1)]).ok();
        assert_eq!(
            sel.add_files(vec![file("b.pdf", 2), file("c.pdf", 3)]),
            Err(Rejection::ExceedsCountLimit)
        );
    }

    #[test]
    fn single_mode_never_exceeds_one_over_any_sequence() {
        let mut sel = SelectionState::new(SelectionMode::SingleFile);
        let batches = [
            vec![file("a", 1)],
            vec![],
            vec![file("b", 2), file("c", 3)],
            vec![file("d", 4)],
        ];
        for batch in batches {
            let _ = sel.add_files(batch);
            assert!(sel.len() <= 1, "single selection grew to {}", sel.len());
        }
        sel.remove(&RemoveTarget::Index(0));
        assert_eq!(sel.add_files(vec![file("e", 5)]), Ok(1));
        assert!(sel.len() <= 1);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut sel: SelectionState<()> = SelectionState::new(SelectionMode::SingleFile);
        assert_eq!(sel.add_files(Vec::new()), Ok(0));
        assert!(sel.is_empty());
    }

    // --- MultiFile mode ---

    #[test]
    fn multi_mode_merges_and_skips_duplicates() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        assert_eq!(sel.add_files(vec![file("a", 1), file("b", 2)]), Ok(2));
        assert_eq!(sel.add_files(vec![file("a", 1), file("c", 3)]), Ok(1));
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn multi_mode_same_name_different_size_is_distinct() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        sel.add_files(vec![file("a", 1)]).ok();
        assert_eq!(sel.add_files(vec![file("a", 2)]), Ok(1));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn multi_mode_deduplicates_within_one_batch() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        assert_eq!(sel.add_files(vec![file("a", 1), file("a", 1)]), Ok(1));
    }

    #[test]
    fn multi_mode_has_no_duplicate_keys_after_many_adds() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        for round in 0..4_u64 {
            let batch = (0..5).map(|i| file(&format!("f{i}"), (i + round) % 3)).collect();
            sel.add_files(batch).ok();
        }
        let mut keys: Vec<FileKey> = sel.items().iter().map(FileRef::key).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total, "selection contains duplicate keys");
    }

    // --- Accept filter ---

    #[test]
    fn images_only_rejects_whole_batch_on_one_bad_file() {
        let mut sel =
            SelectionState::new(SelectionMode::MultiFile).with_accept(AcceptFilter::ImagesOnly);
        assert_eq!(
            sel.add_files(vec![image("a.png"), file("b.pdf", 1)]),
            Err(Rejection::UnsupportedType("b.pdf".into()))
        );
        assert!(sel.is_empty());
        assert_eq!(sel.add_files(vec![image("a.png")]), Ok(1));
    }

    // --- Removal ---

    #[test]
    fn remove_by_key_and_index() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        sel.add_files(vec![file("a", 1), file("b", 2), file("c", 3)]).ok();
        let removed = sel.remove(&RemoveTarget::Key(FileKey {
            name: "b".into(),
            size_bytes: 2,
        }));
        assert_eq!(removed.map(|f| f.name), Some("b".to_owned()));
        let removed = sel.remove(&RemoveTarget::Index(1));
        assert_eq!(removed.map(|f| f.name), Some("c".to_owned()));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn remove_missing_target_returns_none() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        sel.add_files(vec![file("a", 1)]).ok();
        assert!(sel.remove(&RemoveTarget::Index(5)).is_none());
        assert!(
            sel.remove(&RemoveTarget::Key(FileKey {
                name: "a".into(),
                size_bytes: 9,
            }))
            .is_none()
        );
        assert_eq!(sel.len(), 1);
    }

    // --- Rendering ---

    #[test]
    fn rows_view_is_restartable_and_pure() {
        let mut sel = SelectionState::new(SelectionMode::MultiFile);
        sel.add_files(vec![file("a.pdf", 2048), image("b.png")]).ok();
        let view = sel.rows();
        let first: Vec<_> = view.iter().map(|r| r.name).collect();
        let second: Vec<_> = view.iter().map(|r| r.name).collect();
        assert_eq!(first, second);
        assert_eq!(view.len(), 2);
        let rows: Vec<_> = view.iter().collect();
        assert_eq!(rows[0].size_label, "2.0 KB");
        assert_eq!(rows[0].icon, FileIcon::Pdf);
        assert_eq!(rows[1].icon, FileIcon::Image);
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn affordance_tracks_count() {
        let mut multi = SelectionState::new(SelectionMode::MultiFile);
        assert_eq!(
            multi.submit_affordance(),
            SubmitAffordance {
                enabled: false,
                label: "Upload Files".into()
            }
        );
        multi.add_files(vec![file("a", 1)]).ok();
        assert_eq!(multi.submit_affordance().label, "Upload 1 File");
        multi.add_files(vec![file("b", 1)]).ok();
        let aff = multi.submit_affordance();
        assert!(aff.enabled);
        assert_eq!(aff.label, "Upload 2 Files");

        let single: SelectionState<()> = SelectionState::new(SelectionMode::SingleFile);
        assert_eq!(single.submit_affordance().label, "Upload File");
    }

    #[test]
    fn file_size_switches_to_megabytes() {
        assert_eq!(format_file_size(512), "0.5 KB");
        assert_eq!(format_file_size(1024 * 1023), "1023.0 KB");
        assert_eq!(format_file_size(1024 * 1024 * 3 / 2), "1.5 MB");
    }

    #[test]
    fn icon_classification_falls_back_to_extension() {
        assert_eq!(FileIcon::classify("sheet.csv", ""), FileIcon::Spreadsheet);
        assert_eq!(
            FileIcon::classify("deck.bin", "application/vnd.ms-powerpoint"),
            FileIcon::Presentation
        );
        assert_eq!(FileIcon::classify("notes", ""), FileIcon::Generic);
        assert_eq!(FileIcon::from_extension("DOCX"), FileIcon::Word);
    }
}
