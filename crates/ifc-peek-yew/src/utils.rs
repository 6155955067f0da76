//! Utility functions for the Yew UI

use ifc_peek_core::locale::{self, Language, LanguageHints};
use ifc_peek_core::{ConfigError, QueryOverrides, ViewerConfig};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, UrlSearchParams};

/// Id of the optional `<script type="application/json">` config block
pub const CONFIG_ELEMENT_ID: &str = "ifc-peek-config";

/// `location.search` of the current page, empty when unavailable
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Decoded query parameters of `search`, `None` if they cannot be parsed
pub fn search_params(search: &str) -> Option<UrlSearchParams> {
    UrlSearchParams::new_with_str(search).ok()
}

/// Config overrides from a query string (`?debug=1&bg=%23f0f0f0`)
pub fn query_overrides(search: &str) -> QueryOverrides {
    match search_params(search) {
        Some(params) => QueryOverrides::from_lookup(|key| params.get(key)),
        None => QueryOverrides::default(),
    }
}

/// Language requested with `?lng=`
pub fn query_language(search: &str) -> Option<String> {
    search_params(search)?.get(locale::QUERY_KEY)
}

/// Read the page config block, falling back to defaults
///
/// Returns the error alongside the defaults so the caller can log it once
/// the logger is installed.
pub fn page_config() -> (ViewerConfig, Option<ConfigError>) {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match json {
        Some(json) => match ViewerConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (ViewerConfig::default(), Some(e)),
        },
        None => (ViewerConfig::default(), None),
    }
}

/// Collect the language hints the browser exposes
pub fn language_hints() -> LanguageHints {
    let Some(window) = web_sys::window() else {
        return LanguageHints::default();
    };
    let document = window.document();

    let cookie = document
        .as_ref()
        .and_then(|d| d.dyn_ref::<HtmlDocument>())
        .and_then(|d| d.cookie().ok())
        .and_then(|cookies| locale::cookie_value(&cookies, locale::COOKIE_NAME));

    let navigator = window
        .navigator()
        .languages()
        .iter()
        .filter_map(|lang| lang.as_string())
        .collect();

    let local_storage = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(locale::STORAGE_KEY).ok().flatten());

    let html_tag = document
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute("lang"));

    LanguageHints {
        query_string: query_language(&location_search()),
        cookie,
        navigator,
        local_storage,
        html_tag,
    }
}

/// Remember the chosen language for the next visit
pub fn cache_language(language: Language) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if storage.set_item(locale::STORAGE_KEY, language.code()).is_err() {
            log::debug!("Could not cache language in localStorage");
        }
    }
}

/// Mirror the active language on `<html lang>`
pub fn set_document_language(language: Language) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if root.set_attribute("lang", language.code()).is_err() {
            log::debug!("Could not set <html lang>");
        }
    }
}
