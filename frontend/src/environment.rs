use crate::slot;
use shared::{PageEnvironment, Result, SharedError};

/// Reads the resolver inputs from the live page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

impl PageEnvironment for BrowserEnvironment {
    fn preset_api_base(&self) -> Option<String> {
        slot::read()
    }

    fn query_string(&self) -> Result<String> {
        let window = web_sys::window()
            .ok_or_else(|| SharedError::HostUnavailable("window is not available".to_string()))?;
        window
            .location()
            .search()
            .map_err(|e| SharedError::HostUnavailable(format!("location.search failed: {:?}", e)))
    }

    // No window means no recognizable host, which lands on the production default
    fn hostname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default()
    }
}
