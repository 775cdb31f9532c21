//! Access to the page inputs the API base resolver depends on.

use crate::api_base::PageContext;
use crate::error::{Result, SharedError};

/// Source of the three inputs read at page load.
///
/// The browser implementation lives in the frontend crate; `StaticEnvironment`
/// serves tests and callers that already hold the values.
pub trait PageEnvironment {
    /// Value already present in the global `API_BASE` slot, if any.
    fn preset_api_base(&self) -> Option<String>;

    /// Raw query string of the current page, including the leading `?` when present.
    fn query_string(&self) -> Result<String>;

    /// Hostname of the current page, without port.
    fn hostname(&self) -> String;
}

/// Fixed, in-memory page inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticEnvironment {
    preset: Option<String>,
    query: Result<String>,
    hostname: String,
}

impl StaticEnvironment {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            preset: None,
            query: Ok(String::new()),
            hostname: hostname.into(),
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Ok(query.into());
        self
    }

    /// Simulates a host whose query string cannot be read.
    pub fn with_unreadable_query(mut self, reason: impl Into<String>) -> Self {
        self.query = Err(SharedError::HostUnavailable(reason.into()));
        self
    }
}

impl From<PageContext> for StaticEnvironment {
    fn from(context: PageContext) -> Self {
        Self {
            preset: context.preset,
            query: Ok(context.query.unwrap_or_default()),
            hostname: context.hostname,
        }
    }
}

impl PageEnvironment for StaticEnvironment {
    fn preset_api_base(&self) -> Option<String> {
        self.preset.clone()
    }

    fn query_string(&self) -> Result<String> {
        self.query.clone()
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}
