#![cfg(target_arch = "wasm32")]

use frontend::config::Config;
use frontend::environment::BrowserEnvironment;
use frontend::{api_base, api_base_resolution, resolve_api_base, slot};
use shared::api_base::hostname_default;
use shared::{ApiBaseSource, PageEnvironment, StaticEnvironment, LOCAL_API_BASE, PRODUCTION_API_BASE};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset_slot() {
    slot::clear().unwrap();
    assert_eq!(slot::read(), None);
}

#[wasm_bindgen_test]
fn test_publishes_production_default() {
    reset_slot();
    let resolved = Config::init_with(&StaticEnvironment::new("www.example.com"));
    assert_eq!(resolved.source, ApiBaseSource::Production);
    assert_eq!(slot::read().as_deref(), Some(PRODUCTION_API_BASE));
}

#[wasm_bindgen_test]
fn test_publishes_local_default() {
    reset_slot();
    Config::init_with(&StaticEnvironment::new("0.0.0.0"));
    assert_eq!(slot::read().as_deref(), Some(LOCAL_API_BASE));
}

#[wasm_bindgen_test]
fn test_publishes_query_override() {
    reset_slot();
    let env = StaticEnvironment::new("localhost").with_query("?api=%20http://example.com:9000%20");
    Config::init_with(&env);
    assert_eq!(slot::read().as_deref(), Some("http://example.com:9000"));
    assert_eq!(Config::resolution().map(|r| r.source), Some(ApiBaseSource::QueryOverride));
}

#[wasm_bindgen_test]
fn test_preset_slot_is_left_untouched() {
    reset_slot();
    slot::publish("https://staging.example.com").unwrap();

    let resolved = Config::init_api_base();
    assert_eq!(resolved.source, ApiBaseSource::Preset);
    assert_eq!(resolved.value, "https://staging.example.com");
    assert_eq!(slot::read().as_deref(), Some("https://staging.example.com"));
}

#[wasm_bindgen_test]
fn test_injected_preset_is_published_to_empty_slot() {
    reset_slot();
    let resolved = Config::init_with(&StaticEnvironment::new("x").with_preset("http://p"));
    assert_eq!(resolved.source, ApiBaseSource::Preset);
    assert_eq!(slot::read().as_deref(), Some("http://p"));
    assert_eq!(Config::resolution().map(|r| r.value), slot::read());
    assert_eq!(api_base(), "http://p");
}

#[wasm_bindgen_test]
fn test_empty_preset_is_replaced() {
    reset_slot();
    slot::publish("").unwrap();
    assert_eq!(slot::read(), None);

    let resolved = Config::init_api_base();
    assert_ne!(resolved.source, ApiBaseSource::Preset);
    assert_eq!(slot::read(), Some(resolved.value));
}

#[wasm_bindgen_test]
fn test_non_string_preset_is_replaced() {
    reset_slot();
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str(slot::API_BASE_GLOBAL), &JsValue::from_f64(42.0)).unwrap();
    assert_eq!(slot::read(), None);

    let resolved = Config::init_api_base();
    assert_eq!(slot::read(), Some(resolved.value));
}

#[wasm_bindgen_test]
fn test_browser_environment_uses_page_hostname() {
    reset_slot();
    let hostname = BrowserEnvironment.hostname();
    let resolved = Config::init_api_base();

    // The test runner page carries no `api` parameter
    assert_eq!(resolved, hostname_default(&hostname));
}

#[wasm_bindgen_test]
fn test_api_base_url_initializes_on_demand() {
    reset_slot();
    let base = Config::api_base_url();
    assert!(!base.is_empty());
    assert_eq!(slot::read(), Some(base));
}

#[wasm_bindgen_test]
fn test_api_base_url_follows_later_overwrites() {
    reset_slot();
    Config::init_with(&StaticEnvironment::new("www.example.com"));
    slot::publish("http://overwritten:1").unwrap();
    assert_eq!(api_base(), "http://overwritten:1");
}

#[wasm_bindgen_test]
fn test_resolution_json_export() {
    reset_slot();
    Config::init_with(&StaticEnvironment::new("127.0.0.1"));
    let json = api_base_resolution().unwrap();
    assert!(json.contains("\"source\":\"local_development\""));
    assert!(json.contains(LOCAL_API_BASE));
}

#[wasm_bindgen_test]
fn test_resolve_api_base_export_is_pure() {
    reset_slot();
    let value = resolve_api_base(None, Some("?api=http://x:1".to_string()), "www.example.com".to_string());
    assert_eq!(value, "http://x:1");

    let value = resolve_api_base(Some("http://p".to_string()), None, "localhost".to_string());
    assert_eq!(value, "http://p");

    let value = resolve_api_base(None, Some("?api=%20%20".to_string()), "localhost".to_string());
    assert_eq!(value, LOCAL_API_BASE);

    assert_eq!(slot::read(), None);
}
