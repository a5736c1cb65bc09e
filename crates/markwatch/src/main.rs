use dioxus::prelude::*;
use markwatch_core::users::LOGOUT_PROMPT;
use markwatch_core::{AppConfig, ManageTable, UserTable, api::paths};
use markwatch_io::{ConfirmDialog, Toast, UserMenu, browser, use_feedback_provider};

mod pages;

use pages::{
    AdminPage, ClientDatasetPage, ComparePage, DatasetPage, Page, PasswordPage, SearchPage,
    SignInPage,
};

/// Uploaded-file lists of the two dataset pages.
#[derive(Clone, Copy, PartialEq)]
pub struct Datasets {
    pub myipo: Signal<ManageTable>,
    pub client: Signal<ManageTable>,
}

fn main() {
    let (config, config_error) = match browser::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logger(&config);
    if let Some(e) = config_error {
        tracing::error!(error = %e, "ignoring invalid {}", browser::CONFIG_GLOBAL);
    }
    tracing::info!(?config, "starting markwatch");
    dioxus::LaunchBuilder::new().with_context(config).launch(app);
}

fn init_logger(config: &AppConfig) {
    let level = config.log_level.parse().unwrap_or_else(|_| {
        console_warn(&format!("unknown log level {:?}, using info", config.log_level));
        tracing::Level::INFO
    });
    if let Err(e) = dioxus::logger::init(level) {
        console_warn(&format!("logger already initialized: {e}"));
    }
}

/// The logger is not up yet, so write straight to the console.
fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Root application component.
///
/// Owns the state that outlives a page: the notification and
/// confirmation slots, the user table (which also holds the single
/// open-dropdown slot), and the uploaded dataset lists.
fn app() -> Element {
    let config = use_context::<AppConfig>();
    let feedback = use_feedback_provider(config.notification_duration());
    let mut users = use_context_provider(|| Signal::new(UserTable::default()));
    use_context_provider(|| Datasets {
        myipo: Signal::new(ManageTable::default()),
        client: Signal::new(ManageTable::default()),
    });
    let mut page = use_signal(Page::default);

    let on_logout = move |()| {
        feedback.ask(LOGOUT_PROMPT, || browser::navigate_to(paths::LOGOUT));
    };

    let on_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            feedback.cancel();
            users.write().close_dropdowns();
        }
    };

    let current = page();
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "app", tabindex: "-1", onkeydown: on_key,
            header { class: "app-header",
                h1 { class: "brand", "markwatch" }
                nav { class: "app-nav",
                    for p in Page::ALL {
                        button {
                            key: "{p:?}",
                            class: if p == current { "nav-btn active" } else { "nav-btn" },
                            onclick: move |_| {
                                users.write().close_dropdowns();
                                page.set(p);
                            },
                            "{p}"
                        }
                    }
                }
                UserMenu { table: users, on_logout }
            }

            main { class: "app-main",
                match current {
                    Page::Search => rsx! { SearchPage {} },
                    Page::Compare => rsx! { ComparePage {} },
                    Page::Dataset => rsx! { DatasetPage {} },
                    Page::ClientDataset => rsx! { ClientDatasetPage {} },
                    Page::Admin => rsx! { AdminPage {} },
                    Page::SignIn => rsx! { SignInPage {} },
                    Page::Password => rsx! { PasswordPage {} },
                }
            }

            Toast {}
            ConfirmDialog {}
        }
    }
}
