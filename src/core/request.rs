use serde_json::Value;

use crate::core::decode::BodyFormat;
use crate::core::params::{Symbols, required};
use crate::core::table::{self, Output, Table};
use crate::core::{FmpClient, FmpError, QueryParams};

/// A prepared call to one endpoint, returned by every façade method.
///
/// Nothing is sent until [`fetch`](Self::fetch) (or one of its typed
/// shorthands) is awaited. Argument validation happens when the request is
/// built; a rejected argument is reported by `fetch` as
/// [`FmpError::InvalidParameter`] without touching the network.
///
/// Output is a [`Table`] by default; call [`as_table(false)`](Self::as_table)
/// or [`raw`](Self::raw) to get the decoded JSON untouched.
#[derive(Debug)]
#[must_use = "requests do nothing until fetched"]
pub struct FmpRequest<'a> {
    client: &'a FmpClient,
    path: String,
    params: Result<QueryParams, FmpError>,
    as_table: bool,
    format: BodyFormat,
}

impl<'a> FmpRequest<'a> {
    pub(crate) fn new(client: &'a FmpClient, path: impl Into<String>, params: QueryParams) -> Self {
        Self::try_new(client, path, Ok(params))
    }

    pub(crate) fn try_new(
        client: &'a FmpClient,
        path: impl Into<String>,
        params: Result<QueryParams, FmpError>,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            params,
            as_table: true,
            format: BodyFormat::Json,
        }
    }

    /// Declares the body as CSV (bulk downloads).
    pub(crate) const fn csv(mut self) -> Self {
        self.format = BodyFormat::Csv;
        self
    }

    /// Chooses the output shape: a [`Table`] (`true`, the default) or raw JSON.
    pub const fn as_table(mut self, yes: bool) -> Self {
        self.as_table = yes;
        self
    }

    /// Shorthand for `as_table(false)`.
    pub const fn raw(self) -> Self {
        self.as_table(false)
    }

    /// The endpoint path, relative to the client's base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters (without the API key), or the validation error
    /// that will be returned on fetch.
    pub fn query(&self) -> Result<&QueryParams, &FmpError> {
        self.params.as_ref()
    }

    /// The body format this request expects.
    pub const fn format(&self) -> BodyFormat {
        self.format
    }

    /// Sends the request and shapes the payload as configured.
    ///
    /// # Errors
    ///
    /// - [`FmpError::InvalidParameter`] if an argument was rejected (no request is sent).
    /// - Any executor error: authentication, not found, rate limit, server, network, parsing.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fmp.fetch",
            skip(self),
            fields(path = %self.path, as_table = self.as_table)
        )
    )]
    pub async fn fetch(self) -> Result<Output, FmpError> {
        let as_table = self.as_table;
        let payload = self.send().await?;
        table::shape(payload, as_table)
    }

    /// Sends the request and returns the payload as a [`Table`], whatever `as_table` says.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch); a top-level scalar payload is a parsing error.
    pub async fn table(self) -> Result<Table, FmpError> {
        let payload = self.send().await?;
        Table::from_json(&payload)
    }

    /// Sends the request and returns the decoded JSON, whatever `as_table` says.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch).
    pub async fn json(self) -> Result<Value, FmpError> {
        self.send().await
    }

    /// Sends the request and converts the payload into a Polars `DataFrame`.
    ///
    /// # Errors
    ///
    /// See [`fetch`](Self::fetch); a failed frame construction is reported as
    /// [`FmpError::ResponseParsing`].
    #[cfg(feature = "dataframe")]
    pub async fn dataframe(self) -> Result<polars::prelude::DataFrame, FmpError> {
        use crate::core::dataframe::ToDataFrame;

        let table = self.table().await?;
        table
            .to_dataframe()
            .map_err(|e| FmpError::ResponseParsing(format!("dataframe conversion failed: {e}")))
    }

    async fn send(self) -> Result<Value, FmpError> {
        let params = self.params?;
        self.client.get(&self.path, &params, self.format).await
    }
}

/// Builds a request whose parameters come from a fallible closure.
pub(crate) fn build<'a>(
    client: &'a FmpClient,
    path: impl Into<String>,
    params: impl FnOnce() -> Result<QueryParams, FmpError>,
) -> FmpRequest<'a> {
    FmpRequest::try_new(client, path, params())
}

/// A request without parameters.
pub(crate) fn plain<'a>(client: &'a FmpClient, path: impl Into<String>) -> FmpRequest<'a> {
    FmpRequest::new(client, path, QueryParams::new())
}

/// A request keyed by one required `symbol`.
pub(crate) fn by_symbol<'a>(
    client: &'a FmpClient,
    path: impl Into<String>,
    symbol: &str,
) -> FmpRequest<'a> {
    by_required(client, path, "symbol", symbol)
}

/// A request keyed by one required free-text parameter.
pub(crate) fn by_required<'a>(
    client: &'a FmpClient,
    path: impl Into<String>,
    key: &str,
    value: &str,
) -> FmpRequest<'a> {
    build(client, path, || {
        Ok(QueryParams::new().with(key, required(key, value)?))
    })
}

/// A request keyed by a comma-joined symbol list under `key`.
pub(crate) fn by_symbols<'a>(
    client: &'a FmpClient,
    path: impl Into<String>,
    key: &str,
    symbols: Symbols,
) -> FmpRequest<'a> {
    build(client, path, || Ok(QueryParams::new().with(key, symbols.encode()?)))
}
