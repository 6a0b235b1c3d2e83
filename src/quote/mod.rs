//! Real-time, aftermarket and batch quotes.

use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, Symbols};

/// Quote endpoints. Obtained from [`FmpClient::quote`].
///
/// ```no_run
/// # use fmp_rs::FmpClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), fmp_rs::FmpError> {
/// let client = FmpClient::new()?;
/// let quotes = client.quote().batch(["AAPL", "MSFT"]).table().await?;
/// for row in quotes.iter_records() {
///     println!("{row:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuoteApi<'a> {
    client: &'a FmpClient,
}

impl<'a> QuoteApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Full real-time quote for one or more symbols.
    pub fn real_time(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(self.client, "quote", "symbol", symbols.into())
    }

    /// Price, change and volume only.
    pub fn short(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(self.client, "quote-short", "symbol", symbols.into())
    }

    /// Latest aftermarket trade.
    pub fn aftermarket_trade(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "aftermarket-trade", symbol)
    }

    /// Latest aftermarket bid/ask.
    pub fn aftermarket_quote(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "aftermarket-quote", symbol)
    }

    /// Percentage price change over standard windows (1D, 5D, 1M, ... 10Y).
    pub fn price_change(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "stock-price-change", symbol)
    }

    /// Full quotes for several symbols.
    pub fn batch(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(self.client, "batch-quote", "symbols", symbols.into())
    }

    /// Short quotes for several symbols.
    pub fn batch_short(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(self.client, "batch-quote-short", "symbols", symbols.into())
    }

    /// Aftermarket trades for several symbols.
    pub fn batch_aftermarket_trade(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(
            self.client,
            "batch-aftermarket-trade",
            "symbols",
            symbols.into(),
        )
    }

    /// Aftermarket quotes for several symbols.
    pub fn batch_aftermarket_quote(&self, symbols: impl Into<Symbols>) -> FmpRequest<'a> {
        request::by_symbols(
            self.client,
            "batch-aftermarket-quote",
            "symbols",
            symbols.into(),
        )
    }

    /// Quotes for every stock listed on `exchange` (e.g. `"NASDAQ"`).
    pub fn exchange_quotes(&self, exchange: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "batch-exchange-quote", "exchange", exchange)
    }

    /// Quotes for all mutual funds.
    pub fn mutual_fund_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-mutualfund-quotes")
    }

    /// Quotes for all ETFs.
    pub fn etf_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-etf-quotes")
    }

    /// Quotes for all commodities.
    pub fn commodity_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-commodity-quotes")
    }

    /// Quotes for all cryptocurrencies.
    pub fn crypto_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-crypto-quotes")
    }

    /// Quotes for all forex pairs.
    pub fn forex_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-forex-quotes")
    }

    /// Quotes for all market indexes.
    pub fn index_quotes(&self) -> FmpRequest<'a> {
        request::plain(self.client, "batch-index-quotes")
    }
}
