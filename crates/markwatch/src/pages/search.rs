//! Trademark search by image, words and class filter.

use dioxus::core::Task;
use dioxus::html::FileData;
use dioxus::prelude::*;
use markwatch_core::search::{parse_classes, plan_search};
use markwatch_core::{
    AcceptFilter, AppConfig, RemoteError, SearchPlan, SearchQuery, SelectionMode, SelectionState,
    TrademarkHit,
};
use markwatch_io::blob::{bytes_to_blob_url, revoke_blob_url};
use markwatch_io::{ApiClient, SelectionWidget, browser, use_feedback};

/// The selected image, read into memory.
#[derive(Clone)]
struct LoadedImage {
    bytes: Vec<u8>,
    name: String,
    mime_type: String,
    /// Object URL of the preview; revoked when replaced.
    url: String,
}

#[component]
pub fn SearchPage() -> Element {
    let config = use_context::<AppConfig>();
    let feedback = use_feedback();
    let api = use_hook(|| ApiClient::new(config.resolve_base(&browser::page_origin())));
    let selection = use_signal(|| {
        SelectionState::<FileData>::new(SelectionMode::SingleFile)
            .with_accept(AcceptFilter::ImagesOnly)
    });
    let mut image = use_signal(|| Option::<LoadedImage>::None);
    let mut reading = use_signal(|| Option::<Task>::None);
    let mut query = use_signal(SearchQuery::default);
    let mut results = use_signal(|| Option::<Vec<TrademarkHit>>::None);
    let mut searching = use_signal(|| false);

    // Re-read the image whenever the selection changes.
    use_effect(move || {
        let first = selection
            .read()
            .first()
            .map(|f| (f.name.clone(), f.mime_type.clone(), f.handle.clone()));
        if let Some(task) = reading.write().take() {
            task.cancel();
        }
        if let Some(old) = image.write().take() {
            revoke_blob_url(&old.url);
        }
        let Some((name, mime_type, handle)) = first else {
            return;
        };
        let task = spawn(async move {
            let bytes = match handle.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!(error = %e, name = %name, "reading image failed");
                    feedback.error("Could not read the selected image.");
                    return;
                }
            };
            match bytes_to_blob_url(&bytes, &mime_type) {
                Ok(url) => image.set(Some(LoadedImage {
                    bytes,
                    name,
                    mime_type,
                    url,
                })),
                Err(e) => {
                    tracing::error!(error = %e, "image preview failed");
                    feedback.error(e);
                }
            }
        });
        reading.set(Some(task));
    });

    use_drop(move || {
        if let Some(old) = image.peek().as_ref() {
            revoke_blob_url(&old.url);
        }
    });

    let search_api = api.clone();
    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query.read().clone();
        let loaded = image.read().clone();
        let plan = plan_search(loaded.is_some(), &q);
        if plan == SearchPlan::Nothing {
            results.set(None);
            return;
        }
        let api = search_api.clone();
        searching.set(true);
        spawn(async move {
            let body = q.to_body();
            let outcome: Result<Vec<TrademarkHit>, RemoteError> = match loaded {
                Some(img) if plan == SearchPlan::Image => {
                    api.image_search(img.bytes, img.name, &img.mime_type, &body).await
                }
                _ => api.text_search(&body).await,
            };
            searching.set(false);
            match outcome {
                Ok(hits) => {
                    tracing::info!(hits = hits.len(), ?plan, "search finished");
                    results.set(Some(hits));
                }
                Err(e) => {
                    tracing::error!(error = %e, "search failed");
                    feedback.error(e.user_message());
                }
            }
        });
    };

    let preview = image.read().as_ref().map(|img| img.url.clone());
    let current = query.read().clone();
    rsx! {
        section { class: "page",
            h2 { "Trademark Search" }
            form { class: "search-form", onsubmit: on_search,
                div { class: "search-image",
                    SelectionWidget {
                        selection,
                        formats: "PNG, JPG, GIF or WebP",
                    }
                    if let Some(url) = preview {
                        img { class: "image-preview", src: "{url}", alt: "Selected image" }
                    }
                }
                label { "Words"
                    input {
                        r#type: "text",
                        value: "{current.words}",
                        oninput: move |evt| query.write().words = evt.value(),
                    }
                }
                label { "Classes"
                    input {
                        r#type: "text",
                        placeholder: "e.g. 9, 35, 42",
                        value: "{current.class_filter}",
                        oninput: move |evt| query.write().class_filter = evt.value(),
                    }
                }
                button { r#type: "submit", class: "btn-primary", disabled: searching(),
                    if searching() { "Searching..." } else { "Search" }
                }
            }

            if let Some(hits) = results() {
                SearchResults { hits, api: api.clone() }
            }
        }
    }
}

fn classes_of(hit: &TrademarkHit) -> Vec<u16> {
    hit.class_indices.as_deref().map(parse_classes).unwrap_or_default()
}

#[component]
fn SearchResults(hits: Vec<TrademarkHit>, api: ApiClient) -> Element {
    rsx! {
        div { class: "search-results",
            p { class: "result-count", "{hits.len()} result(s)" }
            for hit in hits {
                div { key: "{hit.id}", class: "result-item",
                    if let Some(path) = hit.logo_path() {
                        a { href: "{api.url(&path)}", target: "_blank",
                            img { class: "result-logo", src: "{api.url(&path)}", alt: "Logo" }
                        }
                    }
                    div { class: "result-info",
                        div { class: "result-serial", "{hit.serial_number}" }
                        if let Some(name) = &hit.applicant_name {
                            div { class: "result-applicant", "{name}" }
                        }
                        if let Some(text) = &hit.description {
                            div { class: "result-description", "{text}" }
                        }
                        div { class: "result-classes",
                            for class in classes_of(&hit) {
                                span { class: "class-chip", "{class}" }
                            }
                        }
                        if let Some(date) = &hit.registration_date {
                            div { class: "result-date", "Registered {date}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(classes: Option<&str>) -> TrademarkHit {
        TrademarkHit {
            id: 7,
            has_logo: false,
            class_indices: classes.map(str::to_owned),
            serial_number: "2019001234".to_owned(),
            applicant_name: None,
            description: None,
            registration_date: None,
        }
    }

    #[test]
    fn classes_of_hit() {
        assert_eq!(classes_of(&hit(Some("9, 35 42"))), vec![9, 35, 42]);
        assert!(classes_of(&hit(None)).is_empty());
    }
}
