//! Dividend, earnings, IPO and split calendars.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateRange, FmpClient, QueryParams};

/// Corporate event calendars. Obtained from [`FmpClient::calendar`].
///
/// The `*_calendar` methods take a [`DateRange`]; FMP caps the window at
/// roughly three months and picks one when neither bound is set.
#[derive(Debug, Clone, Copy)]
pub struct CalendarApi<'a> {
    client: &'a FmpClient,
}

fn window<'a>(client: &'a FmpClient, path: &str, range: &DateRange) -> FmpRequest<'a> {
    request::build(client, path, || QueryParams::new().with_range(range))
}

impl<'a> CalendarApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Dividend history for one symbol.
    pub fn dividends(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "dividends", symbol)
    }

    /// Upcoming and past dividends across all symbols.
    pub fn dividends_calendar(&self, range: DateRange) -> FmpRequest<'a> {
        window(self.client, "dividends-calendar", &range)
    }

    /// Earnings reports (actual and estimated EPS and revenue) for one symbol.
    pub fn earnings(&self, symbol: &str, limit: Option<u32>) -> FmpRequest<'a> {
        request::build(self.client, "earnings", || {
            Ok(QueryParams::new()
                .with("symbol", required("symbol", symbol)?)
                .with_opt("limit", limit))
        })
    }

    /// Earnings announcements in the window.
    pub fn earnings_calendar(&self, range: DateRange) -> FmpRequest<'a> {
        window(self.client, "earnings-calendar", &range)
    }

    /// Upcoming and recent IPOs in the window.
    pub fn ipos_calendar(&self, range: DateRange) -> FmpRequest<'a> {
        window(self.client, "ipos-calendar", &range)
    }

    /// IPO disclosure filings.
    pub fn ipos_disclosure(&self) -> FmpRequest<'a> {
        request::plain(self.client, "ipos-disclosure")
    }

    /// IPO prospectus filings.
    pub fn ipos_prospectus(&self) -> FmpRequest<'a> {
        request::plain(self.client, "ipos-prospectus")
    }

    /// Split history for one symbol.
    pub fn stock_splits(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "splits", symbol)
    }

    /// Stock splits in the window.
    pub fn stock_splits_calendar(&self, range: DateRange) -> FmpRequest<'a> {
        window(self.client, "splits-calendar", &range)
    }
}
