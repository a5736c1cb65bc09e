//! MYIPO dataset page: multi-file upload plus the Manage tab.

use chrono::Datelike;
use dioxus::html::FileData;
use dioxus::prelude::*;
use markwatch_core::submit::{complete_submission, plan_submission};
use markwatch_core::{AppConfig, ManageTable, SelectionMode, SelectionState, UploadFields};
use markwatch_io::{SelectionWidget, Tabs, browser, use_feedback};

use super::DATASET_TABS;
use super::manage::ManagePanel;
use crate::Datasets;

#[component]
pub fn DatasetPage() -> Element {
    let config = use_context::<AppConfig>();
    let datasets = use_context::<Datasets>();
    let mut tab = use_signal(|| 0usize);

    rsx! {
        section { class: "page",
            h2 { "MYIPO Dataset" }
            Tabs {
                labels: DATASET_TABS.to_vec(),
                active: tab(),
                on_select: move |i| tab.set(i),
            }
            if tab() == 0 {
                DatasetUpload { manage: datasets.myipo }
            } else {
                ManagePanel { table: datasets.myipo, emit_on_clear: config.emit_change_on_clear }
            }
        }
    }
}

#[component]
fn DatasetUpload(manage: Signal<ManageTable>) -> Element {
    let feedback = use_feedback();
    let mut manage = manage;
    let mut selection = use_signal(|| SelectionState::<FileData>::new(SelectionMode::MultiFile));

    let on_submit = move |_| {
        let today = browser::today();
        let mut fields = UploadFields::default();
        let plan = match plan_submission(&*selection.read(), &fields, false, today.year()) {
            Ok(plan) => plan,
            Err(e) => {
                feedback.error(e);
                return;
            }
        };
        for file in selection.read().items() {
            manage.write().record_upload(file.name.clone(), file.size_bytes, today);
        }
        tracing::info!(files = selection.peek().len(), "dataset upload submitted");
        complete_submission(&mut *selection.write(), &mut fields);
        feedback.notify(plan.success);
    };

    let affordance = selection.read().submit_affordance();
    rsx! {
        SelectionWidget {
            selection,
            formats: "Supported: PDF, Word, Excel, PowerPoint, images",
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
