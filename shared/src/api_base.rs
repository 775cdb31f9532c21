//! Resolution of the backend API base URL used by the browser client.
//!
//! Priority order, first match wins:
//! 1. a non-empty value already present in the global slot,
//! 2. the trimmed `api` query parameter,
//! 3. the local development endpoint for loopback hostnames, the production
//!    endpoint for everything else.

use crate::environment::PageEnvironment;
use crate::error::Result;
use crate::query::query_param;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameter that overrides the API base.
pub const API_QUERY_PARAM: &str = "api";

/// Hostnames treated as local development. Matched exactly and case-sensitively.
pub const LOCAL_HOSTNAMES: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

/// Endpoint used when the page is served from a local development host.
/// Overridable at build time with `RECIPE_API_LOCAL_URL`.
pub const LOCAL_API_BASE: &str = match option_env!("RECIPE_API_LOCAL_URL") {
    Some(url) if !url.is_empty() => url,
    _ => "http://localhost:8000",
};

/// Endpoint used for every other host.
/// Overridable at build time with `RECIPE_API_PRODUCTION_URL`.
pub const PRODUCTION_API_BASE: &str = match option_env!("RECIPE_API_PRODUCTION_URL") {
    Some(url) if !url.is_empty() => url,
    _ => "https://recipe-rag-assistant-api.onrender.com",
};

/// Which step of the fallback chain produced the API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiBaseSource {
    Preset,
    QueryOverride,
    LocalDevelopment,
    Production,
}

impl fmt::Display for ApiBaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApiBaseSource::Preset => "preset",
            ApiBaseSource::QueryOverride => "query override",
            ApiBaseSource::LocalDevelopment => "local development default",
            ApiBaseSource::Production => "production default",
        };
        f.write_str(label)
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedApiBase {
    pub value: String,
    pub source: ApiBaseSource,
}

impl ResolvedApiBase {
    pub fn new(value: impl Into<String>, source: ApiBaseSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ResolvedApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Snapshot of the page inputs, for callers that inject them explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub preset: Option<String>,
    pub query: Option<String>,
    pub hostname: String,
}

impl PageContext {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Returns the preset when it is a non-empty string.
///
/// Only emptiness disqualifies a preset; whitespace is kept as-is.
pub fn preset_value(preset: Option<&str>) -> Option<String> {
    preset.filter(|value| !value.is_empty()).map(str::to_string)
}

/// Extracts a usable `api` override from a query string.
///
/// Absent, whitespace-only and unparseable input all yield `None`.
pub fn query_override(query: Option<&str>) -> Option<String> {
    let query = query?;
    match query_param(query, API_QUERY_PARAM) {
        Ok(value) => value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
        Err(e) => {
            debug!("Ignoring query override: {}", e);
            None
        }
    }
}

pub fn is_local_hostname(hostname: &str) -> bool {
    LOCAL_HOSTNAMES.contains(&hostname)
}

/// Picks the local or production endpoint from the hostname alone.
pub fn hostname_default(hostname: &str) -> ResolvedApiBase {
    if is_local_hostname(hostname) {
        ResolvedApiBase::new(LOCAL_API_BASE, ApiBaseSource::LocalDevelopment)
    } else {
        ResolvedApiBase::new(PRODUCTION_API_BASE, ApiBaseSource::Production)
    }
}

/// Runs the fallback chain over explicit inputs. Never fails.
pub fn resolve(context: &PageContext) -> ResolvedApiBase {
    let resolved = if let Some(preset) = preset_value(context.preset.as_deref()) {
        ResolvedApiBase::new(preset, ApiBaseSource::Preset)
    } else if let Some(value) = query_override(context.query.as_deref()) {
        ResolvedApiBase::new(value, ApiBaseSource::QueryOverride)
    } else {
        hostname_default(&context.hostname)
    };

    info!("API base resolved to {} ({})", resolved.value, resolved.source);
    resolved
}

/// Reads the inputs from `env` and resolves them.
///
/// A query string the host cannot provide counts as no override.
pub fn resolve_from<E: PageEnvironment + ?Sized>(env: &E) -> ResolvedApiBase {
    let query = match env.query_string() {
        Ok(query) => Some(query),
        Err(e) => {
            debug!("Query string unavailable: {}", e);
            None
        }
    };

    let context = PageContext {
        preset: env.preset_api_base(),
        query,
        hostname: env.hostname(),
    };
    resolve(&context)
}
