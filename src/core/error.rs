use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every failure category is its own variant so callers can branch on it,
/// e.g. back off on [`FmpError::RateLimited`] or prompt for a key on
/// [`FmpError::MissingCredential`]. Nothing is retried internally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FmpError {
    /// No API key was passed to the builder and `FMP_API_KEY` is unset or empty.
    #[error("missing API key: pass one to the client builder or set the {env} environment variable")]
    MissingCredential {
        /// The environment variable that was consulted.
        env: &'static str,
    },

    /// The server rejected the API key (HTTP 401 or 403).
    #[error("authentication failed ({status}) at {url}{}", fmt_message(.message))]
    Authentication {
        /// The HTTP status code (401 or 403).
        status: u16,
        /// The requested URL, with the API key redacted.
        url: String,
        /// The message from FMP's error envelope, when one was returned.
        message: Option<String>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found at {url}")]
    NotFound {
        /// The requested URL, with the API key redacted.
        url: String,
    },

    /// The API key exceeded its request quota (HTTP 429).
    #[error("rate limited at {url}")]
    RateLimited {
        /// The requested URL, with the API key redacted.
        url: String,
    },

    /// The server failed to handle the request (HTTP 5xx).
    #[error("server error {status} at {url}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The requested URL, with the API key redacted.
        url: String,
    },

    /// Any other unsuccessful HTTP status code.
    #[error("unexpected response status: {status} at {url}{}", fmt_message(.message))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL, with the API key redacted.
        url: String,
        /// The message from FMP's error envelope, when one was returned.
        message: Option<String>,
    },

    /// The request never produced a response (DNS, connect, timeout, reset).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A successful response carried a body that could not be decoded.
    #[error("could not parse response: {0}")]
    ResponseParsing(String),

    /// FMP answered 200 but the body was its `Error Message` envelope.
    #[error("API error: {0}")]
    Api(String),

    /// A caller-supplied argument was rejected before any request was made.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

fn fmt_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl From<reqwest::Error> for FmpError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest embeds the request URL (and so the key) in its messages.
        Self::Network(e.without_url())
    }
}

impl FmpError {
    /// The HTTP status code behind this error, if it came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Server { status, .. }
            | Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// `true` for [`FmpError::RateLimited`].
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// `true` for credential problems, whether local or reported by the server.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::Authentication { .. }
        )
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
