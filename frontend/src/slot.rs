//! The global `API_BASE` property other page scripts read.
//!
//! All reads and writes of the property go through this module.

use log::warn;
use wasm_bindgen::JsValue;

/// Name of the property on `window`.
pub const API_BASE_GLOBAL: &str = "API_BASE";

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

/// Current slot value when it is a non-empty string.
///
/// Non-string values are reported and treated as absent.
pub fn read() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(API_BASE_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    match value.as_string() {
        Some(base) if !base.is_empty() => Some(base),
        Some(_) => None,
        None => {
            warn!("Ignoring non-string window.{} value: {:?}", API_BASE_GLOBAL, value);
            None
        }
    }
}

pub fn publish(value: &str) -> Result<(), JsValue> {
    let window = window()?;
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(API_BASE_GLOBAL),
        &JsValue::from_str(value),
    )?;
    Ok(())
}

/// Removes the property so the next read sees no preset.
pub fn clear() -> Result<(), JsValue> {
    let window = window()?;
    js_sys::Reflect::delete_property(&window, &JsValue::from_str(API_BASE_GLOBAL))?;
    Ok(())
}
