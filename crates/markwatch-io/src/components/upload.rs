//! File selection area with drag-and-drop, file picker and file list.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdUpload, LdX};
use markwatch_core::{FileIcon, RemoveTarget, SelectionMode, SelectionState};

use crate::feedback::use_feedback;
use crate::files;

/// Props for the [`SelectionWidget`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SelectionWidgetProps {
    /// Selection owned by the page; the widget is its only writer.
    selection: Signal<SelectionState<FileData>>,
    /// Second line of the drop zone, e.g. the supported formats.
    #[props(default)]
    formats: String,
    /// Render the removable file list below the drop zone.
    #[props(default = true)]
    show_list: bool,
    /// Called after every change with `(added, remaining)`.
    #[props(default)]
    on_change: Option<EventHandler<(usize, usize)>>,
}

struct ListedFile {
    key: String,
    target: RemoveTarget,
    name: String,
    size_label: String,
    icon: FileIcon,
}

/// A drop zone that also opens the file picker when clicked.
///
/// Dropped and picked files both go through
/// [`SelectionState::add_files`]; a rejected batch leaves the selection
/// untouched and shows the reason as an error notification.
#[component]
pub fn SelectionWidget(props: SelectionWidgetProps) -> Element {
    let feedback = use_feedback();
    let mut selection = props.selection;
    let on_change = props.on_change;
    let mut dragging = use_signal(|| false);

    let mut add = move |picked: Vec<FileData>| {
        if picked.is_empty() {
            return;
        }
        let outcome = selection.write().add_files(files::candidates(picked));
        match outcome {
            Ok(added) => {
                if let Some(handler) = on_change {
                    handler.call((added, selection.peek().len()));
                }
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "selection rejected");
                feedback.error(rejection);
            }
        }
    };

    let handle_files = move |evt: FormEvent| add(evt.files());

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        add(evt.files());
    };

    let (mode, accept) = {
        let sel = selection.read();
        (sel.mode(), sel.accept())
    };
    let listed: Vec<ListedFile> = selection
        .read()
        .rows()
        .iter()
        .map(|row| ListedFile {
            key: row.key.to_string(),
            target: RemoveTarget::Key(row.key),
            name: row.name.to_owned(),
            size_label: row.size_label,
            icon: row.icon,
        })
        .collect();

    let zone_class = if dragging() {
        "upload-area dragover"
    } else {
        "upload-area"
    };
    let prompt = match mode {
        SelectionMode::SingleFile => "Drag & drop a file or",
        SelectionMode::MultiFile => "Drag & drop files or",
    };

    rsx! {
        label {
            class: zone_class,
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: handle_drop,

            input {
                r#type: "file",
                class: "hidden",
                accept: accept.input_accept(),
                multiple: mode == SelectionMode::MultiFile,
                onchange: handle_files,
            }
            div { class: "upload-icon",
                Icon { width: 32, height: 32, icon: LdUpload }
            }
            div { class: "upload-text",
                "{prompt} "
                span { class: "browse", "Browse" }
            }
            if !props.formats.is_empty() {
                div { class: "upload-formats", "{props.formats}" }
            }
        }

        if props.show_list && !listed.is_empty() {
            div { class: "file-list",
                for file in listed {
                    div { key: "{file.key}", class: "file-item",
                        span { class: "file-badge badge-{file.icon.badge().to_lowercase()}",
                            "{file.icon.badge()}"
                        }
                        div { class: "file-info",
                            div { class: "file-name", "{file.name}" }
                            div { class: "file-meta", "{file.size_label}" }
                        }
                        button {
                            class: "file-remove",
                            title: "Remove",
                            onclick: move |_| {
                                let removed = selection.write().remove(&file.target);
                                if removed.is_some()
                                    && let Some(handler) = on_change
                                {
                                    handler.call((0, selection.peek().len()));
                                }
                            },
                            Icon { width: 16, height: 16, icon: LdX }
                        }
                    }
                }
            }
        }
    }
}
