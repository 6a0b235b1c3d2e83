//! Symbol, name and identifier search, plus the stock screener.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, QueryParams};

/// Search endpoints. Obtained from [`FmpClient::search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    client: &'a FmpClient,
}

fn text_query<'a>(
    client: &'a FmpClient,
    path: &str,
    query: &str,
    limit: Option<u32>,
    exchange: Option<&str>,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new()
            .with("query", required("query", query)?)
            .with_opt("limit", limit)
            .with_opt("exchange", exchange))
    })
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Tickers starting with or containing `query`.
    pub fn symbol(
        &self,
        query: &str,
        limit: Option<u32>,
        exchange: Option<&str>,
    ) -> FmpRequest<'a> {
        text_query(self.client, "search-symbol", query, limit, exchange)
    }

    /// Companies whose name matches `query`.
    pub fn company_name(
        &self,
        query: &str,
        limit: Option<u32>,
        exchange: Option<&str>,
    ) -> FmpRequest<'a> {
        text_query(self.client, "search-name", query, limit, exchange)
    }

    /// Companies registered under a SEC Central Index Key.
    pub fn cik(&self, cik: &str, limit: Option<u32>) -> FmpRequest<'a> {
        request::build(self.client, "search-cik", || {
            Ok(QueryParams::new()
                .with("cik", required("cik", cik)?)
                .with_opt("limit", limit))
        })
    }

    /// Securities matching a CUSIP.
    pub fn cusip(&self, cusip: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "search-cusip", "cusip", cusip)
    }

    /// Securities matching an ISIN.
    pub fn isin(&self, isin: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "search-isin", "isin", isin)
    }

    /// Runs the company screener with the filters set on `query`.
    ///
    /// ```no_run
    /// # use fmp_rs::{FmpClient, search::ScreenerQuery};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), fmp_rs::FmpError> {
    /// let client = FmpClient::new()?;
    /// let query = ScreenerQuery::new()
    ///     .sector("Technology")
    ///     .market_cap_more_than(10_000_000_000)
    ///     .is_actively_trading(true)
    ///     .limit(50);
    /// let hits = client.search().screener(&query).table().await?;
    /// println!("{} matches", hits.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn screener(&self, query: &ScreenerQuery) -> FmpRequest<'a> {
        FmpRequest::new(self.client, "company-screener", query.to_params())
    }

    /// The same company listed on other exchanges.
    pub fn exchange_variants(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "search-exchange-variants", symbol)
    }
}

/// Filters for [`SearchApi::screener`]. Every filter is optional; unset
/// filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenerQuery {
    market_cap_more_than: Option<u64>,
    market_cap_lower_than: Option<u64>,
    sector: Option<String>,
    industry: Option<String>,
    beta_more_than: Option<f64>,
    beta_lower_than: Option<f64>,
    price_more_than: Option<f64>,
    price_lower_than: Option<f64>,
    dividend_more_than: Option<f64>,
    dividend_lower_than: Option<f64>,
    volume_more_than: Option<u64>,
    volume_lower_than: Option<u64>,
    exchange: Option<String>,
    country: Option<String>,
    is_etf: Option<bool>,
    is_fund: Option<bool>,
    is_actively_trading: Option<bool>,
    limit: Option<u32>,
    include_all_share_classes: Option<bool>,
}

impl ScreenerQuery {
    /// An empty query that matches everything FMP returns by default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum market capitalization.
    #[must_use]
    pub const fn market_cap_more_than(mut self, v: u64) -> Self {
        self.market_cap_more_than = Some(v);
        self
    }

    /// Maximum market capitalization.
    #[must_use]
    pub const fn market_cap_lower_than(mut self, v: u64) -> Self {
        self.market_cap_lower_than = Some(v);
        self
    }

    /// Sector name, e.g. `"Technology"`.
    #[must_use]
    pub fn sector(mut self, s: impl Into<String>) -> Self {
        self.sector = Some(s.into());
        self
    }

    /// Industry name, e.g. `"Consumer Electronics"`.
    #[must_use]
    pub fn industry(mut self, s: impl Into<String>) -> Self {
        self.industry = Some(s.into());
        self
    }

    /// Minimum beta.
    #[must_use]
    pub const fn beta_more_than(mut self, v: f64) -> Self {
        self.beta_more_than = Some(v);
        self
    }

    /// Maximum beta.
    #[must_use]
    pub const fn beta_lower_than(mut self, v: f64) -> Self {
        self.beta_lower_than = Some(v);
        self
    }

    /// Minimum share price.
    #[must_use]
    pub const fn price_more_than(mut self, v: f64) -> Self {
        self.price_more_than = Some(v);
        self
    }

    /// Maximum share price.
    #[must_use]
    pub const fn price_lower_than(mut self, v: f64) -> Self {
        self.price_lower_than = Some(v);
        self
    }

    /// Minimum annual dividend per share.
    #[must_use]
    pub const fn dividend_more_than(mut self, v: f64) -> Self {
        self.dividend_more_than = Some(v);
        self
    }

    /// Maximum annual dividend per share.
    #[must_use]
    pub const fn dividend_lower_than(mut self, v: f64) -> Self {
        self.dividend_lower_than = Some(v);
        self
    }

    /// Minimum average volume.
    #[must_use]
    pub const fn volume_more_than(mut self, v: u64) -> Self {
        self.volume_more_than = Some(v);
        self
    }

    /// Maximum average volume.
    #[must_use]
    pub const fn volume_lower_than(mut self, v: u64) -> Self {
        self.volume_lower_than = Some(v);
        self
    }

    /// Exchange short name, e.g. `"NASDAQ"`.
    #[must_use]
    pub fn exchange(mut self, s: impl Into<String>) -> Self {
        self.exchange = Some(s.into());
        self
    }

    /// ISO country code, e.g. `"US"`.
    #[must_use]
    pub fn country(mut self, s: impl Into<String>) -> Self {
        self.country = Some(s.into());
        self
    }

    /// Only ETFs (`true`) or only non-ETFs (`false`).
    #[must_use]
    pub const fn is_etf(mut self, yes: bool) -> Self {
        self.is_etf = Some(yes);
        self
    }

    /// Only funds (`true`) or only non-funds (`false`).
    #[must_use]
    pub const fn is_fund(mut self, yes: bool) -> Self {
        self.is_fund = Some(yes);
        self
    }

    /// Only actively trading symbols.
    #[must_use]
    pub const fn is_actively_trading(mut self, yes: bool) -> Self {
        self.is_actively_trading = Some(yes);
        self
    }

    /// Maximum number of rows.
    #[must_use]
    pub const fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Include every share class, not just the primary listing.
    #[must_use]
    pub const fn include_all_share_classes(mut self, yes: bool) -> Self {
        self.include_all_share_classes = Some(yes);
        self
    }

    /// The wire parameters, in FMP's camelCase spelling.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("marketCapMoreThan", self.market_cap_more_than)
            .with_opt("marketCapLowerThan", self.market_cap_lower_than)
            .with_opt("sector", self.sector.as_deref())
            .with_opt("industry", self.industry.as_deref())
            .with_opt("betaMoreThan", self.beta_more_than)
            .with_opt("betaLowerThan", self.beta_lower_than)
            .with_opt("priceMoreThan", self.price_more_than)
            .with_opt("priceLowerThan", self.price_lower_than)
            .with_opt("dividendMoreThan", self.dividend_more_than)
            .with_opt("dividendLowerThan", self.dividend_lower_than)
            .with_opt("volumeMoreThan", self.volume_more_than)
            .with_opt("volumeLowerThan", self.volume_lower_than)
            .with_opt("exchange", self.exchange.as_deref())
            .with_opt("country", self.country.as_deref())
            .with_opt("isEtf", self.is_etf)
            .with_opt("isFund", self.is_fund)
            .with_opt("isActivelyTrading", self.is_actively_trading)
            .with_opt("limit", self.limit)
            .with_opt("includeAllShareClasses", self.include_all_share_classes)
    }
}
