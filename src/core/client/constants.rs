//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Default UA; identifies the crate and its version.
pub(crate) const USER_AGENT: &str = concat!("fmp-rs/", env!("CARGO_PKG_VERSION"));

/// FMP "stable" API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/stable/";

/// Environment variable consulted when no key is passed to the builder.
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Query parameter FMP reads the key from.
pub(crate) const API_KEY_PARAM: &str = "apikey";

/// Overall request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
