//! Integration test: a client-dataset upload from file drop to reset,
//! through the confirmation and notification slots.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use markwatch_core::submit::{complete_submission, plan_submission};
use markwatch_core::{
    ConfirmSlot, FileRef, Notifier, Rejection, SelectionMode, SelectionState, Severity,
    UploadFields,
};
use web_time::Instant;

type Upload = (SelectionState<u32>, UploadFields);

#[test]
fn rename_upload_runs_only_after_confirmation() {
    let mut selection = SelectionState::new(SelectionMode::SingleFile);
    let mut fields = UploadFields {
        batch: "4".into(),
        year: "2024".into(),
        file_name: "march-journal".into(),
    };
    let mut notifier = Notifier::default();
    let mut confirm: ConfirmSlot<Box<dyn FnOnce(&mut Upload) -> markwatch_core::Notice>> =
        ConfirmSlot::new();
    let t0 = Instant::now();

    selection
        .add_files(vec![FileRef::new("journal.pdf", 4096, "application/pdf", 7)])
        .unwrap();

    // A second drop is refused without touching the selection.
    let err = selection
        .add_files(vec![FileRef::new("other.pdf", 1, "application/pdf", 8)])
        .unwrap_err();
    notifier.notify(markwatch_core::Notice::error(err.to_string()), t0);
    assert_eq!(err, Rejection::ExceedsCountLimit);
    assert_eq!(selection.len(), 1);

    let plan = plan_submission(&selection, &fields, true, 2025).unwrap();
    let prompt = plan.confirmation.clone().expect("rename needs confirmation");
    let success = plan.success.clone();
    confirm.request(
        prompt,
        Box::new(move |(sel, f): &mut Upload| {
            complete_submission(sel, f);
            success
        }),
    );

    // Nothing happens until the user answers.
    assert_eq!(selection.len(), 1);
    assert_eq!(fields.file_name, "march-journal");

    let mut upload = (selection, fields);
    let action = confirm.confirm().unwrap();
    let notice = action(&mut upload);
    notifier.notify(notice, t0 + Duration::from_millis(500));
    (selection, fields) = upload;

    assert!(selection.is_empty());
    assert_eq!(fields, UploadFields::default());
    let shown = notifier.current().unwrap();
    assert_eq!(
        shown.text,
        "File name changed to \"march-journal.pdf\" and uploaded successfully!"
    );
    assert_eq!(shown.severity, Severity::Success);
    assert_eq!(selection.submit_affordance().label, "Upload File");
}

#[test]
fn declined_rename_is_silent() {
    let mut selection = SelectionState::new(SelectionMode::SingleFile);
    selection
        .add_files(vec![FileRef::new("a.csv", 10, "text/csv", 1_u32)])
        .unwrap();
    let fields = UploadFields {
        file_name: "b".into(),
        ..UploadFields::default()
    };
    let plan = plan_submission(&selection, &fields, false, 2025).unwrap();
    let mut confirm: ConfirmSlot<()> = ConfirmSlot::new();
    confirm.request(plan.confirmation.unwrap(), ());
    assert!(confirm.cancel());
    assert_eq!(selection.len(), 1);
    assert_eq!(fields.file_name, "b");
}

#[test]
fn failing_gate_leaves_selection_intact() {
    let mut selection = SelectionState::new(SelectionMode::SingleFile);
    selection
        .add_files(vec![FileRef::new("a.csv", 10, "text/csv", 1_u32)])
        .unwrap();
    let fields = UploadFields {
        batch: "abc".into(),
        year: "2024".into(),
        file_name: String::new(),
    };
    let err = plan_submission(&selection, &fields, true, 2025).unwrap_err();
    assert_eq!(err.to_string(), "Batch number must be one or two digits.");
    assert_eq!(selection.len(), 1);
}
