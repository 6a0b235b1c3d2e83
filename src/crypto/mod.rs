//! Cryptocurrency listings, quotes and price history.

use crate::chart;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateRange, FmpClient, Interval};

/// Cryptocurrency endpoints. Obtained from [`FmpClient::crypto`].
///
/// Symbols use FMP's pair notation, e.g. `"BTCUSD"`.
#[derive(Debug, Clone, Copy)]
pub struct CryptoApi<'a> {
    client: &'a FmpClient,
}

impl<'a> CryptoApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Every traded cryptocurrency.
    pub fn list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "cryptocurrency-list")
    }

    /// Full quote for one pair, e.g. `"BTCUSD"`.
    pub fn quote(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "quote", symbol)
    }

    /// Price, change and volume only.
    pub fn quote_short(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "quote-short", symbol)
    }

    /// Quotes for all cryptocurrencies.
    pub fn batch_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-crypto-quotes")
    }

    /// Daily closing prices.
    pub fn historical_price_light(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        chart::history(self.client, "historical-price-eod/light", symbol, &range)
    }

    /// Daily OHLCV.
    pub fn historical_price_full(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        chart::history(self.client, "historical-price-eod/full", symbol, &range)
    }

    /// Intraday bars at `interval`.
    pub fn intraday(&self, interval: Interval, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        chart::intraday(self.client, interval, symbol, &range)
    }

    /// One-minute bars.
    pub fn intraday_1min(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M1, symbol, range)
    }

    /// Five-minute bars.
    pub fn intraday_5min(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M5, symbol, range)
    }

    /// Hourly bars.
    pub fn intraday_1hour(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::H1, symbol, range)
    }
}
