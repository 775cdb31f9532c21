use crate::environment::BrowserEnvironment;
use crate::slot;
use log::{debug, error};
use shared::{resolve_from, PageEnvironment, ResolvedApiBase};
use std::cell::RefCell;

thread_local! {
    static LAST_RESOLUTION: RefCell<Option<ResolvedApiBase>> = RefCell::new(None);
}

pub struct Config;

impl Config {
    /// Resolves the API base from the live page and publishes it to `window.API_BASE`.
    ///
    /// Runs from the wasm start function, before any page script that reads the slot.
    pub fn init_api_base() -> ResolvedApiBase {
        Self::init_with(&BrowserEnvironment)
    }

    /// Same as [`Config::init_api_base`] with explicit page inputs.
    pub fn init_with<E: PageEnvironment + ?Sized>(env: &E) -> ResolvedApiBase {
        let resolved = resolve_from(env);

        // A slot already holding the value is left exactly as the host page wrote it
        if slot::read().as_deref() != Some(resolved.value.as_str()) {
            if let Err(e) = slot::publish(&resolved.value) {
                error!("Failed to publish API base {}: {:?}", resolved.value, e);
            }
        }

        LAST_RESOLUTION.with(|last| *last.borrow_mut() = Some(resolved.clone()));
        resolved
    }

    /// The API base downstream code should call.
    ///
    /// Reads the global slot, so later overwrites by other scripts are honored.
    /// Resolves first if nothing has been published yet.
    pub fn api_base_url() -> String {
        match slot::read() {
            Some(base) => base,
            None => {
                debug!("API base requested before initialization");
                Self::init_api_base().value
            }
        }
    }

    /// Outcome of the most recent resolution on this page.
    pub fn resolution() -> Option<ResolvedApiBase> {
        LAST_RESOLUTION.with(|last| last.borrow().clone())
    }
}
