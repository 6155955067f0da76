//! IFC-Peek Viewer
//!
//! WASM entry point. Reads the page config, installs the console logger,
//! picks the UI language and mounts the Yew application.

use ifc_peek_core::locale::{self, Language};
use ifc_peek_core::Translations;
use ifc_peek_yew::{logging, utils, App, AppContext, AppProps};
use wasm_bindgen::prelude::*;

/// Translations for the detected language
///
/// The tables are embedded, so failing to parse one is a build defect; the
/// viewer still starts with whatever table does load.
fn load_translations(language: Language, fallback: Language) -> Result<Translations, JsValue> {
    match Translations::load(language, fallback) {
        Ok(translations) => Ok(translations),
        Err(e) => {
            log::error!("{}", e);
            Translations::load(fallback, fallback).map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }
}

/// WASM entry point - starts Yew UI
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, config_error) = utils::page_config();
    let config = config.with_overrides(&utils::query_overrides(&utils::location_search()));

    logging::init(config.debug);
    if let Some(e) = config_error {
        log::error!("Ignoring page config: {}", e);
    }
    log::info!("Starting IFC-Peek Viewer");

    let language = locale::detect_language(
        &utils::language_hints(),
        &config.detection_order,
        config.fallback_language,
    );
    utils::cache_language(language);
    utils::set_document_language(language);

    let translations = load_translations(language, config.fallback_language)?;
    let context = AppContext::new(config, translations);

    yew::Renderer::<App>::with_props(AppProps { context }).render();
    Ok(())
}
