//! Upload submission planning.
//!
//! [`plan_submission`] runs every check up front and describes what
//! the page has to do: optionally ask for a rename confirmation, then
//! submit and show the success notice. Nothing is mutated until
//! [`complete_submission`] is called after the upload went through.

use std::sync::LazyLock;

use regex::Regex;

use crate::notify::Notice;
use crate::selection::{SelectionMode, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please select a file before uploading.")]
    EmptySelection,
    #[error("Batch number must be one or two digits.")]
    InvalidBatch,
    #[error("Year must be four digits.")]
    InvalidYear,
    #[error("Year cannot be later than {0}.")]
    FutureYear(i32),
}

/// Auxiliary inputs next to an upload area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadFields {
    pub batch: String,
    pub year: String,
    /// Requested base name, without extension. Empty keeps the
    /// original name.
    pub file_name: String,
}

impl UploadFields {
    pub fn clear(&mut self) {
        self.batch.clear();
        self.year.clear();
        self.file_name.clear();
    }
}

/// What to do once every check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan {
    /// Rename prompt to confirm before submitting, if any.
    pub confirmation: Option<String>,
    /// Notice to show once the submission completes.
    pub success: Notice,
    /// Name of the single uploaded file after any rename.
    pub final_name: Option<String>,
}

#[allow(clippy::expect_used)]
static BATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("batch pattern is valid"));

#[allow(clippy::expect_used)]
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("year pattern is valid"));

/// Check the batch/year gate.
///
/// # Errors
///
/// Returns the first failing field in batch, year order.
pub fn check_gate(fields: &UploadFields, current_year: i32) -> Result<(), SubmitError> {
    if !BATCH.is_match(fields.batch.trim()) {
        return Err(SubmitError::InvalidBatch);
    }
    let year = fields.year.trim();
    if !YEAR.is_match(year) {
        return Err(SubmitError::InvalidYear);
    }
    match year.parse::<i32>() {
        Ok(y) if y <= current_year => Ok(()),
        Ok(_) => Err(SubmitError::FutureYear(current_year)),
        Err(_) => Err(SubmitError::InvalidYear),
    }
}

/// Validate a submission and describe its steps.
///
/// With `gate` set, batch and year are checked after the selection.
///
/// # Errors
///
/// [`SubmitError::EmptySelection`] when nothing is selected, otherwise
/// the gate's error.
pub fn plan_submission<H>(
    selection: &SelectionState<H>,
    fields: &UploadFields,
    gate: bool,
    current_year: i32,
) -> Result<SubmitPlan, SubmitError> {
    let Some(first) = selection.first() else {
        return Err(SubmitError::EmptySelection);
    };
    if gate {
        check_gate(fields, current_year)?;
    }

    if selection.mode() == SelectionMode::MultiFile {
        return Ok(SubmitPlan {
            confirmation: None,
            success: Notice::success(format!(
                "{} file(s) uploaded successfully!",
                selection.len()
            )),
            final_name: None,
        });
    }

    let requested = fields.file_name.trim();
    if requested.is_empty() || requested == first.base_name() {
        return Ok(SubmitPlan {
            confirmation: None,
            success: Notice::success(format!("File \"{}\" uploaded successfully!", first.name)),
            final_name: Some(first.name.clone()),
        });
    }

    let ext = first.extension();
    let new_name = format!("{requested}{ext}");
    Ok(SubmitPlan {
        confirmation: Some(format!(
            "Are you sure you want to rename \"{}\" to \"{new_name}\" before uploading?",
            first.name
        )),
        success: Notice::success(format!(
            "File name changed to \"{new_name}\" and uploaded successfully!"
        )),
        final_name: Some(new_name),
    })
}

/// Reset the upload area after a successful submission.
pub fn complete_submission<H>(selection: &mut SelectionState<H>, fields: &mut UploadFields) {
    selection.clear();
    fields.clear();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::FileRef;

    fn single(name: &str) -> SelectionState<()> {
        let mut s = SelectionState::new(SelectionMode::SingleFile);
        s.add_files(vec![FileRef::new(name, 2048, "text/csv", ())]).unwrap();
        s
    }

    fn gated(batch: &str, year: &str) -> UploadFields {
        UploadFields {
            batch: batch.into(),
            year: year.into(),
            file_name: String::new(),
        }
    }

    #[test]
    fn empty_selection_is_rejected_first() {
        let s: SelectionState<()> = SelectionState::new(SelectionMode::SingleFile);
        let err = plan_submission(&s, &gated("x", "y"), true, 2025).unwrap_err();
        assert_eq!(err, SubmitError::EmptySelection);
    }

    #[test]
    fn gate_checks_batch_then_year() {
        let s = single("a.csv");
        let plan = |b, y| plan_submission(&s, &gated(b, y), true, 2025);
        assert_eq!(plan("123", "2024").unwrap_err(), SubmitError::InvalidBatch);
        assert_eq!(plan("", "2024").unwrap_err(), SubmitError::InvalidBatch);
        assert_eq!(plan("7", "24").unwrap_err(), SubmitError::InvalidYear);
        assert_eq!(plan("07", "2026").unwrap_err(), SubmitError::FutureYear(2025));
        assert!(plan("07", "2025").is_ok());
    }

    #[test]
    fn gate_accepts_only_ascii_digits() {
        let fields = |b: &str| gated(b, "2024");
        assert_eq!(check_gate(&fields("٣"), 2025), Err(SubmitError::InvalidBatch));
        assert_eq!(check_gate(&fields("１２"), 2025), Err(SubmitError::InvalidBatch));
        assert_eq!(check_gate(&gated("3", "２０２４"), 2025), Err(SubmitError::InvalidYear));
        assert_eq!(check_gate(&fields("12"), 2025), Ok(()));
    }

    #[test]
    fn gate_off_ignores_fields() {
        let s = single("a.csv");
        assert!(plan_submission(&s, &gated("", ""), false, 2025).is_ok());
    }

    #[test]
    fn rename_needs_confirmation() {
        let s = single("marks.csv");
        let fields = UploadFields {
            file_name: "Q1 marks".into(),
            ..UploadFields::default()
        };
        let plan = plan_submission(&s, &fields, false, 2025).unwrap();
        assert_eq!(
            plan.confirmation.as_deref(),
            Some("Are you sure you want to rename \"marks.csv\" to \"Q1 marks.csv\" before uploading?")
        );
        assert_eq!(
            plan.success.text,
            "File name changed to \"Q1 marks.csv\" and uploaded successfully!"
        );
        assert_eq!(plan.final_name.as_deref(), Some("Q1 marks.csv"));
    }

    #[test]
    fn same_name_skips_confirmation() {
        let s = single("marks.csv");
        let fields = UploadFields {
            file_name: "marks".into(),
            ..UploadFields::default()
        };
        let plan = plan_submission(&s, &fields, false, 2025).unwrap();
        assert!(plan.confirmation.is_none());
        assert_eq!(plan.success.text, "File \"marks.csv\" uploaded successfully!");
    }

    #[test]
    fn rename_of_extensionless_file_keeps_no_extension() {
        let s = single("README");
        let fields = UploadFields {
            file_name: "NOTES".into(),
            ..UploadFields::default()
        };
        let plan = plan_submission(&s, &fields, false, 2025).unwrap();
        assert_eq!(plan.final_name.as_deref(), Some("NOTES"));
    }

    #[test]
    fn multi_file_counts_files() {
        let mut s = SelectionState::new(SelectionMode::MultiFile);
        s.add_files(vec![
            FileRef::new("a.pdf", 1, "application/pdf", ()),
            FileRef::new("b.pdf", 2, "application/pdf", ()),
        ])
        .unwrap();
        let plan = plan_submission(&s, &UploadFields::default(), false, 2025).unwrap();
        assert_eq!(plan.success.text, "2 file(s) uploaded successfully!");
    }

    #[test]
    fn completion_resets_everything() {
        let mut s = single("a.csv");
        let mut fields = UploadFields {
            batch: "3".into(),
            year: "2024".into(),
            file_name: "b".into(),
        };
        complete_submission(&mut s, &mut fields);
        assert!(s.is_empty());
        assert_eq!(fields, UploadFields::default());
    }
}
