//! End-of-day and intraday price history.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateArg, DateRange, FmpClient, Interval, QueryParams};

/// Chart endpoints. Obtained from [`FmpClient::chart`].
///
/// Every history method takes a [`DateRange`]; pass `DateRange::new()` to let
/// FMP pick its default window.
///
/// ```no_run
/// # use fmp_rs::{DateRange, FmpClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), fmp_rs::FmpError> {
/// let client = FmpClient::new()?;
/// let bars = client
///     .chart()
///     .full("AAPL", DateRange::between("2024-01-01", "2024-03-31"))
///     .table()
///     .await?;
/// println!("{} daily bars", bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChartApi<'a> {
    client: &'a FmpClient,
}

/// `symbol` plus the optional `from`/`to` window; shared with crypto and forex.
pub(crate) fn history<'a>(
    client: &'a FmpClient,
    path: impl Into<String>,
    symbol: &str,
    range: &DateRange,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        QueryParams::new()
            .with("symbol", required("symbol", symbol)?)
            .with_range(range)
    })
}

/// Intraday bars of the given size.
pub(crate) fn intraday<'a>(
    client: &'a FmpClient,
    interval: Interval,
    symbol: &str,
    range: &DateRange,
) -> FmpRequest<'a> {
    history(client, format!("historical-chart/{interval}"), symbol, range)
}

impl<'a> ChartApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Daily closing price and volume only.
    pub fn basic(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        history(self.client, "historical-price-eod/light", symbol, &range)
    }

    /// Daily OHLCV with change and VWAP.
    pub fn full(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        history(self.client, "historical-price-eod/full", symbol, &range)
    }

    /// Daily OHLCV not adjusted for splits.
    pub fn unadjusted(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        history(
            self.client,
            "historical-price-eod/non-split-adjusted",
            symbol,
            &range,
        )
    }

    /// Daily OHLCV adjusted for dividends.
    pub fn dividend_adjusted(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        history(
            self.client,
            "historical-price-eod/dividend-adjusted",
            symbol,
            &range,
        )
    }

    /// Intraday bars of any supported size.
    pub fn intraday(&self, interval: Interval, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        intraday(self.client, interval, symbol, &range)
    }

    /// 1-minute bars.
    pub fn one_minute(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M1, symbol, range)
    }

    /// 5-minute bars.
    pub fn five_minute(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M5, symbol, range)
    }

    /// 15-minute bars.
    pub fn fifteen_minute(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M15, symbol, range)
    }

    /// 30-minute bars.
    pub fn thirty_minute(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::M30, symbol, range)
    }

    /// 1-hour bars.
    pub fn one_hour(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::H1, symbol, range)
    }

    /// 4-hour bars.
    pub fn four_hour(&self, symbol: &str, range: DateRange) -> FmpRequest<'a> {
        self.intraday(Interval::H4, symbol, range)
    }

    /// End-of-day prices for every symbol on one date.
    pub fn batch_eod(&self, date: impl Into<DateArg>) -> FmpRequest<'a> {
        let date = date.into();
        request::build(self.client, "batch-eod", || {
            Ok(QueryParams::new().with("date", date.encode()?))
        })
    }
}
