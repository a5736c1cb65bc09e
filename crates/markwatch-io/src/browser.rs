//! Page-level browser access: clock, location, forms and the config
//! global.

use chrono::NaiveDate;
use markwatch_core::{AppConfig, ConfigError};
use wasm_bindgen::{JsCast, JsValue};

/// Name of the optional global holding the page configuration.
pub const CONFIG_GLOBAL: &str = "MARKWATCH_CONFIG";

/// Today's date in the browser's local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `window.location.origin`, or `""` outside a browser.
#[must_use]
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Navigate the whole page to `path`.
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        tracing::error!(?e, path, "navigation failed");
    }
}

/// Submit the form with element id `id` the native way.
///
/// Does not fire `submit` handlers again.
pub fn submit_form(id: &str) {
    let form = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok());
    match form {
        Some(form) => {
            if let Err(e) = form.submit() {
                tracing::error!(?e, id, "form submission failed");
            }
        }
        None => tracing::error!(id, "no such form"),
    }
}

/// Read [`CONFIG_GLOBAL`] from `window`.
///
/// The global may be a JSON string or a plain object. Missing means
/// defaults. Runs before any logger is installed, so the caller
/// reports the error.
///
/// # Errors
///
/// Returns [`ConfigError`] if the global is present but unusable.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    config_from_text(read_config_global()?.as_deref())
}

fn read_config_global() -> Result<Option<String>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return Ok(None);
    };
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    if let Some(text) = value.as_string() {
        return Ok(Some(text));
    }
    js_sys::JSON::stringify(&value)
        .map(|text| Some(String::from(text)))
        .map_err(|e| ConfigError::Unserializable(format!("{e:?}")))
}

/// Parse config text. No text means defaults.
pub(crate) fn config_from_text(text: Option<&str>) -> Result<AppConfig, ConfigError> {
    text.map_or_else(|| Ok(AppConfig::default()), AppConfig::from_json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use markwatch_core::AdminBackend;

    use super::*;

    #[test]
    fn missing_global_gives_defaults() {
        assert_eq!(config_from_text(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn invalid_global_is_reported() {
        assert!(matches!(
            config_from_text(Some(r#"{"notification_ms": 0}"#)),
            Err(ConfigError::ZeroNotificationTime)
        ));
        assert!(matches!(
            config_from_text(Some("[1, 2")),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn valid_global_is_used() {
        let config = config_from_text(Some(r#"{"admin_backend": "in_memory"}"#)).unwrap();
        assert_eq!(config.admin_backend, AdminBackend::InMemory);
    }
}
