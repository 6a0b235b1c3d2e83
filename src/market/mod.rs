//! Sector and industry performance, movers, trading hours and holidays.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateArg, DateRange, FmpClient, QueryParams};

/// Market-wide endpoints. Obtained from [`FmpClient::market`].
#[derive(Debug, Clone, Copy)]
pub struct MarketApi<'a> {
    client: &'a FmpClient,
}

fn on_date<'a>(client: &'a FmpClient, path: &str, date: DateArg) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new().with("date", date.encode()?))
    })
}

impl<'a> MarketApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Average daily change per sector on `date`.
    pub fn sector_performance(&self, date: impl Into<DateArg>) -> FmpRequest<'a> {
        on_date(self.client, "sector-performance-snapshot", date.into())
    }

    /// Average daily change per industry on `date`.
    pub fn industry_performance(&self, date: impl Into<DateArg>) -> FmpRequest<'a> {
        on_date(self.client, "industry-performance-snapshot", date.into())
    }

    /// Daily performance of one sector (e.g. `"Energy"`) over a window.
    pub fn historical_sector_performance(&self, sector: &str, range: DateRange) -> FmpRequest<'a> {
        request::build(self.client, "historical-sector-performance", || {
            QueryParams::new()
                .with("sector", required("sector", sector)?)
                .with_range(&range)
        })
    }

    /// Price-to-earnings per sector on `date`.
    pub fn sector_pe(&self, date: impl Into<DateArg>) -> FmpRequest<'a> {
        on_date(self.client, "sector-pe-snapshot", date.into())
    }

    /// Price-to-earnings per industry on `date`.
    pub fn industry_pe(&self, date: impl Into<DateArg>) -> FmpRequest<'a> {
        on_date(self.client, "industry-pe-snapshot", date.into())
    }

    /// Largest percentage gainers today.
    pub fn biggest_gainers(&self) -> FmpRequest<'a> {
        request::plain(self.client, "biggest-gainers")
    }

    /// Largest percentage losers today.
    pub fn biggest_losers(&self) -> FmpRequest<'a> {
        request::plain(self.client, "biggest-losers")
    }

    /// Highest-volume stocks of the session.
    pub fn most_actives(&self) -> FmpRequest<'a> {
        request::plain(self.client, "most-actives")
    }

    /// Opening hours and current open/closed state of one exchange.
    pub fn exchange_hours(&self, exchange: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "exchange-market-hours", "exchange", exchange)
    }

    /// Trading hours for every exchange.
    pub fn all_exchange_hours(&self) -> FmpRequest<'a> {
        request::plain(self.client, "all-exchange-market-hours")
    }

    /// Holidays on which `exchange` is closed.
    pub fn holidays(&self, exchange: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "holidays-by-exchange", "exchange", exchange)
    }
}
