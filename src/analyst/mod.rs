//! Analyst estimates, ratings, price targets and grades.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, Period, QueryParams};

/// Analyst endpoints. Obtained from [`FmpClient::analyst`].
#[derive(Debug, Clone, Copy)]
pub struct AnalystApi<'a> {
    client: &'a FmpClient,
}

fn symbol_limit<'a>(
    client: &'a FmpClient,
    path: &str,
    symbol: &str,
    limit: Option<u32>,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new()
            .with("symbol", required("symbol", symbol)?)
            .with_opt("limit", limit))
    })
}

fn latest<'a>(client: &'a FmpClient, path: &str, limit: Option<u32>) -> FmpRequest<'a> {
    request::build(client, path, || Ok(QueryParams::new().with_opt("limit", limit)))
}

impl<'a> AnalystApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Consensus revenue, EBITDA and EPS estimates.
    pub fn financial_estimates(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        request::build(self.client, "analyst-estimates", || {
            Ok(QueryParams::new()
                .with("symbol", required("symbol", symbol)?)
                .with("period", period)
                .with_opt("limit", limit))
        })
    }

    /// Current rating with its component scores.
    pub fn ratings_snapshot(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "ratings-snapshot", symbol)
    }

    /// Past FMP ratings, newest first.
    pub fn historical_ratings(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        symbol_limit(self.client, "ratings-historical", symbol, limit)
    }

    /// Average price targets over the last month, quarter, year and all time.
    pub fn price_target_summary(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "price-target-summary", symbol)
    }

    /// High, low, median and consensus price target.
    pub fn price_target_consensus(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "price-target-consensus", symbol)
    }

    /// Analyst price target announcements for `symbol`.
    pub fn price_target_news(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        symbol_limit(self.client, "price-target-news", symbol, limit)
    }

    /// Latest price target announcements across all symbols.
    pub fn price_target_latest_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "price-target-latest-news", limit)
    }

    /// Upgrades and downgrades.
    pub fn grades(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        symbol_limit(self.client, "grades", symbol, limit)
    }

    /// Counts of buy/hold/sell grades over time.
    pub fn historical_grades(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        symbol_limit(self.client, "grades-historical", symbol, limit)
    }

    /// Current grade consensus.
    pub fn grades_summary(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "grades-consensus", symbol)
    }

    /// Analyst upgrade and downgrade announcements for `symbol`.
    pub fn grade_news(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        symbol_limit(self.client, "grades-news", symbol, limit)
    }

    /// The latest upgrades and downgrades across all symbols.
    pub fn grade_latest_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "grades-latest-news", limit)
    }
}
