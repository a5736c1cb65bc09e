//! Client dataset page: one file at a time, tagged with batch and year,
//! with an optional rename before upload.

use chrono::Datelike;
use dioxus::html::FileData;
use dioxus::prelude::*;
use markwatch_core::submit::{complete_submission, plan_submission};
use markwatch_core::{
    AppConfig, ManageTable, Notice, SelectionMode, SelectionState, UploadFields,
};
use markwatch_io::{SelectionWidget, Tabs, browser, use_feedback};

use super::DATASET_TABS;
use super::manage::ManagePanel;
use crate::Datasets;

#[component]
pub fn ClientDatasetPage() -> Element {
    let config = use_context::<AppConfig>();
    let datasets = use_context::<Datasets>();
    let mut tab = use_signal(|| 0usize);

    rsx! {
        section { class: "page",
            h2 { "Client Dataset" }
            Tabs {
                labels: DATASET_TABS.to_vec(),
                active: tab(),
                on_select: move |i| tab.set(i),
            }
            if tab() == 0 {
                ClientUpload { manage: datasets.client, gate: config.client_upload_gate }
            } else {
                ManagePanel { table: datasets.client, emit_on_clear: config.emit_change_on_clear }
            }
        }
    }
}

#[component]
fn ClientUpload(manage: Signal<ManageTable>, gate: bool) -> Element {
    let feedback = use_feedback();
    let mut manage = manage;
    let mut selection = use_signal(|| SelectionState::<FileData>::new(SelectionMode::SingleFile));
    let mut fields = use_signal(UploadFields::default);

    // Runs after the plan was accepted, and after the rename was
    // confirmed if one was asked for.
    let mut finish = move |final_name: Option<String>, success: Notice| {
        let today = browser::today();
        if let (Some(name), Some(file)) = (final_name, selection.peek().first()) {
            manage.write().record_upload(name, file.size_bytes, today);
        }
        tracing::info!("client dataset upload submitted");
        complete_submission(&mut *selection.write(), &mut *fields.write());
        feedback.notify(success);
    };

    let on_submit = move |_| {
        let year = browser::today().year();
        let plan = plan_submission(&*selection.read(), &fields.read(), gate, year);
        match plan {
            Ok(plan) => match plan.confirmation {
                Some(question) => {
                    let (name, success) = (plan.final_name, plan.success);
                    feedback.ask(question, move || finish(name, success));
                }
                None => finish(plan.final_name, plan.success),
            },
            Err(e) => feedback.error(e),
        }
    };

    let affordance = selection.read().submit_affordance();
    let current = fields.read().clone();
    rsx! {
        SelectionWidget {
            selection,
            formats: "Supported: PDF, Word, Excel, PowerPoint, images",
        }
        div { class: "upload-fields",
            label { "Batch"
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "2",
                    value: "{current.batch}",
                    oninput: move |evt| fields.write().batch = evt.value(),
                }
            }
            label { "Year"
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "4",
                    value: "{current.year}",
                    oninput: move |evt| fields.write().year = evt.value(),
                }
            }
            label { "File name"
                input {
                    r#type: "text",
                    placeholder: "Keep original name",
                    value: "{current.file_name}",
                    oninput: move |evt| fields.write().file_name = evt.value(),
                }
            }
        }
        div { class: "upload-actions",
            button {
                class: "btn-primary",
                disabled: !affordance.enabled,
                onclick: on_submit,
                "{affordance.label}"
            }
        }
    }
}
