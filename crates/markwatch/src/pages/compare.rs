//! Compare page: pick one source per side, then compare.

use dioxus::html::FileData;
use dioxus::prelude::*;
use markwatch_core::{ComparePicker, LeftSource, RightSource, SelectionMode, SelectionState};
use markwatch_io::{SelectionWidget, use_feedback};

#[component]
pub fn ComparePage() -> Element {
    let feedback = use_feedback();
    let mut picker = use_signal(ComparePicker::default);
    let selection = use_signal(|| SelectionState::<FileData>::new(SelectionMode::MultiFile));

    let on_files = move |(added, remaining): (usize, usize)| {
        let notice = picker.write().on_files_changed(added, remaining);
        if let Some(notice) = notice {
            feedback.notify(notice);
        }
    };

    let on_compare = move |_| {
        let current = *picker.read();
        if let Some(notice) = current.summary() {
            tracing::info!(left = ?current.left(), right = ?current.right(), "compare requested");
            feedback.notify(notice);
        }
    };

    let current = picker();
    rsx! {
        section { class: "page",
            h2 { "Compare" }
            div { class: "compare-grid",
                div { class: "compare-side",
                    h3 { "Compare" }
                    for source in LeftSource::ALL {
                        label { key: "{source.label()}", class: "compare-option",
                            input {
                                r#type: "checkbox",
                                checked: current.left() == Some(source),
                                onchange: move |_| picker.write().toggle_left(source),
                            }
                            " {source.label()}"
                        }
                    }
                    SelectionWidget {
                        selection,
                        formats: "Upload files to compare",
                        on_change: on_files,
                    }
                }
                div { class: "compare-side",
                    h3 { "With" }
                    for source in RightSource::ALL {
                        label { key: "{source.label()}", class: "compare-option",
                            input {
                                r#type: "checkbox",
                                checked: current.right() == Some(source),
                                onchange: move |_| picker.write().toggle_right(source),
                            }
                            " {source.label()}"
                        }
                    }
                }
            }
            div { class: "upload-actions",
                button {
                    class: "btn-primary",
                    disabled: !current.can_compare(),
                    onclick: on_compare,
                    "Compare"
                }
            }
        }
    }
}
