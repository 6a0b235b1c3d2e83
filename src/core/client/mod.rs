//! Public client surface + builder.
//! Internals are split into `auth` (key resolution) and `constants` (UA + defaults).

mod auth;
pub(crate) mod constants;

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::{FmpError, FmpRequest, QueryParams};
use crate::{
    analyst::AnalystApi, bulk::BulkApi, calendar::CalendarApi, chart::ChartApi,
    company::CompanyApi, crypto::CryptoApi, directory::DirectoryApi, etf::EtfApi,
    forex::ForexApi, market::MarketApi, news::NewsApi, quote::QuoteApi, search::SearchApi,
    sec::SecApi, statements::StatementsApi,
};
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};

/// Client for the Financial Modeling Prep API.
///
/// Holds the resolved API key, the base URL and a pooled HTTP client. It is
/// immutable once built and cheap to clone; clones share the connection pool.
///
/// Each API category is reached through an accessor returning a façade whose
/// methods build an [`FmpRequest`]:
///
/// ```no_run
/// # use fmp_rs::FmpClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), fmp_rs::FmpError> {
/// let client = FmpClient::builder().api_key("demo").build()?;
///
/// let quote = client.quote().real_time("AAPL").table().await?;
/// println!("{} rows, columns {:?}", quote.len(), quote.columns());
///
/// let raw = client.company().profile("MSFT").json().await?;
/// println!("{raw}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FmpClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /// Builds a client with default settings, reading the key from `FMP_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingCredential`] if the variable is unset or blank.
    pub fn new() -> Result<Self, FmpError> {
        Self::builder().build()
    }

    /// The base URL endpoint paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A request for an arbitrary endpoint path, for endpoints without a
    /// dedicated façade method.
    pub fn endpoint(&self, path: impl Into<String>, params: QueryParams) -> FmpRequest<'_> {
        FmpRequest::new(self, path, params)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /* -------- façades -------- */

    /// Company profiles, executives, market cap and share float.
    pub fn company(&self) -> CompanyApi<'_> {
        CompanyApi::new(self)
    }

    /// Real-time, aftermarket and batch quotes.
    pub fn quote(&self) -> QuoteApi<'_> {
        QuoteApi::new(self)
    }

    /// End-of-day and intraday price history.
    pub fn chart(&self) -> ChartApi<'_> {
        ChartApi::new(self)
    }

    /// Financial statements, metrics, ratios and growth.
    pub fn statements(&self) -> StatementsApi<'_> {
        StatementsApi::new(self)
    }

    /// Estimates, ratings, price targets and grades.
    pub fn analyst(&self) -> AnalystApi<'_> {
        AnalystApi::new(self)
    }

    /// Dividends, earnings, IPOs and splits.
    pub fn calendar(&self) -> CalendarApi<'_> {
        CalendarApi::new(self)
    }

    /// Sector/industry performance, movers and exchange hours.
    pub fn market(&self) -> MarketApi<'_> {
        MarketApi::new(self)
    }

    /// Cryptocurrency listings, quotes and history.
    pub fn crypto(&self) -> CryptoApi<'_> {
        CryptoApi::new(self)
    }

    /// Forex pairs, quotes and history.
    pub fn forex(&self) -> ForexApi<'_> {
        ForexApi::new(self)
    }

    /// ETF and mutual fund holdings and disclosures.
    pub fn etf(&self) -> EtfApi<'_> {
        EtfApi::new(self)
    }

    /// Articles, press releases and news feeds.
    pub fn news(&self) -> NewsApi<'_> {
        NewsApi::new(self)
    }

    /// SEC filings and company search.
    pub fn sec(&self) -> SecApi<'_> {
        SecApi::new(self)
    }

    /// Whole-market bulk downloads (CSV).
    pub fn bulk(&self) -> BulkApi<'_> {
        BulkApi::new(self)
    }

    /// Symbol, exchange, sector and industry listings.
    pub fn directory(&self) -> DirectoryApi<'_> {
        DirectoryApi::new(self)
    }

    /// Symbol, name, identifier search and the stock screener.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`FmpClient`].
#[derive(Default)]
pub struct FmpClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl fmt::Debug for FmpClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl FmpClientBuilder {
    /// Use this API key. A blank key is ignored and `FMP_API_KEY` is consulted instead.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (default `https://financialmodelingprep.com/stable/`).
    ///
    /// A missing trailing slash is added so endpoint paths nest under the base.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall request timeout. Default: 30 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Resolves the API key and builds the client.
    ///
    /// The key is resolved here, not on first use: a client without a
    /// credential cannot be constructed.
    ///
    /// # Errors
    ///
    /// - [`FmpError::MissingCredential`] if neither the builder nor `FMP_API_KEY` supplies a key.
    /// - [`FmpError::Url`] if the default base URL fails to parse.
    /// - [`FmpError::Network`] if the HTTP client cannot be initialised.
    pub fn build(self) -> Result<FmpClient, FmpError> {
        let api_key = auth::resolve_api_key(self.api_key.as_deref(), auth::key_from_env())?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let base_url = with_trailing_slash(base_url);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FmpClient {
            http,
            base_url,
            api_key,
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
