pub mod api_base;
pub mod environment;
pub mod error;
pub mod query;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use api_base::{
    resolve, resolve_from, ApiBaseSource, PageContext, ResolvedApiBase,
    API_QUERY_PARAM, LOCAL_API_BASE, LOCAL_HOSTNAMES, PRODUCTION_API_BASE,
};
pub use environment::{PageEnvironment, StaticEnvironment};
