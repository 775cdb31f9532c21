use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::Config;
use shared::PageContext;

pub mod config;
pub mod environment;
pub mod slot;

/// Returns the API base, resolving it first if the start function has not run.
#[wasm_bindgen(js_name = apiBase)]
pub fn api_base() -> String {
    Config::api_base_url()
}

/// Returns the last resolution as JSON: `{"value": "...", "source": "..."}`.
#[wasm_bindgen(js_name = apiBaseResolution)]
pub fn api_base_resolution() -> Result<String, JsValue> {
    let resolved = Config::resolution().unwrap_or_else(Config::init_api_base);
    resolved
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Runs the resolution policy on explicit inputs without touching the page.
#[wasm_bindgen(js_name = resolveApiBase)]
pub fn resolve_api_base(preset: Option<String>, query: Option<String>, hostname: String) -> String {
    let context = PageContext {
        preset,
        query,
        hostname,
    };
    shared::resolve(&context).value
}

// Trunk and plain <script type="module"> loaders both invoke this on instantiation
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    console_error_panic_hook::set_once();

    info!("Resolving API base");
    Config::init_api_base();

    Ok(())
}
