//! Currency pairs, quotes and price history.

use crate::chart;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateRange, FmpClient, Interval};

/// Forex endpoints. Obtained from [`FmpClient::forex`].
///
/// Pairs are written without a separator, e.g. `"EURUSD"`.
#[derive(Debug, Clone, Copy)]
pub struct ForexApi<'a> {
    client: &'a FmpClient,
}

impl<'a> ForexApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Every quoted currency pair.
    pub fn list(&self) -> FmpRequest<'a> {
        request::plain(self.client, "forex-list")
    }

    /// Full quote for one pair, e.g. `"EURUSD"`.
    pub fn quote(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "quote", symbol)
    }

    /// Price, change and volume only.
    pub fn quote_short(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "quote-short", symbol)
    }

    /// Quotes for all pairs.
    pub fn batch_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-forex-quotes")
    }

    /// Daily closes and volume.
    pub fn historical_price_light(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        chart::history(self.client, "historical-price-eod/light", symbol, &range)
    }

    /// Daily OHLCV bars with change columns.
    pub fn historical_price_full(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        chart::history(self.client, "historical-price-eod/full", symbol, &range)
    }

    /// Intraday bars of any supported size.
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
