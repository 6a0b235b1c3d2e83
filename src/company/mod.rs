//! Company profiles, executives, market capitalisation and share float.

use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, Symbols};

/// Company information endpoints. Obtained from [`FmpClient::company`].
#[derive(Debug, Clone, Copy)]
pub struct CompanyApi<'a> {
    client: &'a FmpClient,
}

impl<'a> CompanyApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Company profile (sector, description, CEO, market cap, ...) for one or more symbols.
    pub fn profile(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(self.client, "profile", "symbol", symbols.into())
    }

    /// Company profile looked up by SEC Central Index Key.
    pub fn profile_by_cik(&self, cik: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "profile-cik", "cik", cik)
    }

    /// Notes (debt securities) issued by the company.
    pub fn notes(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "company-notes", symbol)
    }

    /// Companies trading in the same sector and market-cap band.
    pub fn peers(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "stock-peers", symbol)
    }

    /// Companies delisted from US exchanges.
    pub fn delisted_companies(&self) -> FmpRequest<'a> {
        request::plain(self.client, "delisted-companies")
    }

    /// Latest reported employee count.
    pub fn employee_count(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "employee-count", symbol)
    }

    /// Employee counts across past filings.
    pub fn historical_employee_count(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "historical-employee-count", symbol)
    }

    /// Current market capitalisation.
    pub fn market_cap(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "market-capitalization", symbol)
    }

    /// Market capitalisation for several symbols in one call.
    pub fn batch_market_cap(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(
            self.client,
            "market-capitalization-batch",
            "symbols",
            symbols.into(),
        )
    }

    /// Daily market capitalisation history.
    pub fn historical_market_cap(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "historical-market-capitalization", symbol)
    }

    /// Free float and outstanding shares.
    pub fn shares_float(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "shares-float", symbol)
    }

    /// Share float for every covered company.
    pub fn all_shares_float(&self) -> FmpRequest<'a> {
        request::plain(self.client, "shares-float-all")
    }

    /// Key executives and their pay.
    pub fn executives(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "key-executives", symbol)
    }

    /// Executive compensation from proxy filings.
    pub fn executive_compensation(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "governance-executive-compensation", symbol)
    }

    /// Average executive compensation by industry.
    pub fn executive_compensation_benchmark(&self) -> FmpRequest<'a> {
        request::plain(self.client, "executive-compensation-benchmark")
    }
}
