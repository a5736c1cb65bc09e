//! The "Manage" tab: uploaded files with checkboxes and filters.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdTrash2};
use markwatch_core::ManageTable;
use markwatch_core::calendar::{format_date, parse_date};
use markwatch_core::selection::format_file_size;
use markwatch_io::{DatePicker, use_feedback};

#[component]
pub fn ManagePanel(table: Signal<ManageTable>, emit_on_clear: bool) -> Element {
    let feedback = use_feedback();
    let mut table = table;
    let mut term = use_signal(String::new);

    let mut on_search = move |_| {
        let outcome = table.write().search(&term.read());
        match outcome {
            Ok(notice) => feedback.notify(notice),
            Err(e) => feedback.error(e),
        }
    };

    let on_delete = move |_| {
        let prompt = table.read().delete_prompt();
        match prompt {
            Ok(message) => feedback.ask(message, move || {
                let notice = table.write().delete_checked();
                feedback.notify(notice);
            }),
            Err(e) => feedback.error(e),
        }
    };

    let on_date = move |text: Option<String>| {
        let date = text.as_deref().and_then(|t| match parse_date(t) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(t, error = %e, "unparsable date filter");
                None
            }
        });
        table.write().set_date_filter(date);
    };

    let (rows, all_checked, filtered) = {
        let t = table.read();
        let rows: Vec<_> = t
            .visible()
            .map(|r| (r.clone(), t.is_checked(r.id)))
            .collect();
        (rows, t.all_checked(), t.name_filter().is_some())
    };

    rsx! {
        div { class: "manage-toolbar",
            div { class: "search-box",
                input {
                    r#type: "text",
                    placeholder: "Search by file name",
                    value: "{term}",
                    oninput: move |evt| term.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            on_search(());
                        }
                    },
                }
                button { class: "btn-icon", title: "Search", onclick: move |_| on_search(()),
                    Icon { width: 16, height: 16, icon: LdSearch }
                }
                if filtered {
                    button {
                        class: "btn-link",
                        onclick: move |_| {
                            term.set(String::new());
                            table.write().clear_search();
                        },
                        "Clear"
                    }
                }
            }
            DatePicker {
                placeholder: "Upload date",
                emit_on_clear,
                on_change: on_date,
            }
            button { class: "btn-danger", onclick: on_delete,
                Icon { width: 14, height: 14, icon: LdTrash2 }
                " Delete"
            }
        }

        table { class: "manage-table",
            thead {
                tr {
                    th {
                        input {
                            r#type: "checkbox",
                            checked: all_checked,
                            onchange: move |evt| table.write().toggle_all(evt.checked()),
                        }
                    }
                    th { "File name" }
                    th { "Size" }
                    th { "Uploaded" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { colspan: "4", class: "empty", "No files." }
                    }
                }
                for (row, checked) in rows {
                    tr { key: "{row.id}",
                        td {
                            input {
                                r#type: "checkbox",
                                checked,
                                onchange: move |_| table.write().toggle(row.id),
                            }
                        }
                        td { "{row.name}" }
                        td { "{format_file_size(row.size_bytes)}" }
                        td { "{format_date(row.uploaded_on)}" }
                    }
                }
            }
        }
    }
}
