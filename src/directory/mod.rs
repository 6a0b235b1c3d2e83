//! Symbol lists and reference data.

use crate::core::FmpClient;
use crate::core::request::{self, FmpRequest};

/// Directory endpoints. Obtained from [`FmpClient::directory`].
///
/// None of these take arguments; most return several thousand rows.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryApi<'a> {
    client: &'a FmpClient,
}

impl<'a> DirectoryApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Every stock symbol FMP covers.
    pub fn company_symbols(&self) -> FmpRequest<'a> {
        request::plain(self.client, "stock-list")
    }

    /// Symbols with financial statements available.
    pub fn financial_statement_symbols(&self) -> FmpRequest<'a> {
        request::plain(self.client, "financial-statement-symbol-list")
    }

    /// SEC CIKs with registrant names.
    pub fn cik_list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "cik-list")
    }

    /// Ticker renames after mergers, acquisitions and rebrandings.
    pub fn symbol_changes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "symbol-change")
    }

    /// Every ETF symbol FMP covers.
    pub fn etf_list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "etf-list")
    }

    /// Symbols currently trading.
    pub fn actively_trading_list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "actively-trading-list")
    }

    /// Symbols with earnings call transcripts.
    pub fn earnings_transcript_list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "earnings-transcript-list")
    }

    /// Exchanges FMP has data for.
    pub fn available_exchanges(&self) -> FmpRequest<'a> {
        request::plain(self.client, "available-exchanges")
    }

    /// Sector names used across FMP.
    pub fn available_sectors(&self) -> FmpRequest<'a> {
        request::plain(self.client, "available-sectors")
    }

    /// Industry names used across FMP.
    pub fn available_industries(&self) -> FmpRequest<'a> {
        request::plain(self.client, "available-industries")
    }

    /// Country codes used across FMP.
    pub fn available_countries(&self) -> FmpRequest<'a> {
        request::plain(self.client, "available-countries")
    }
}
