//! Whole-universe bulk downloads.
//!
//! These endpoints answer with CSV. Each request declares its body as CSV so
//! the rows are decoded into the same shape as a JSON array of objects.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, FmpError, Period, QueryParams};

/// Bulk endpoints. Obtained from [`FmpClient::bulk`].
///
/// Responses can be tens of megabytes; consider a longer client timeout.
#[derive(Debug, Clone, Copy)]
pub struct BulkApi<'a> {
    client: &'a FmpClient,
}

fn csv<'a>(client: &'a FmpClient, path: &str) -> FmpRequest<'a> {
    request::plain(client, path).csv()
}

/// Bulk statements are split by fiscal year and one fiscal period.
fn statement_period(period: Period) -> Result<Period, FmpError> {
    match period {
        Period::Annual | Period::FY => Ok(Period::FY),
        Period::Q1 | Period::Q2 | Period::Q3 | Period::Q4 => Ok(period),
        Period::Quarter => Err(FmpError::invalid(
            "bulk statements need a single quarter (Q1-Q4) or FY",
        )),
    }
}

fn statements<'a>(client: &'a FmpClient, path: &str, year: i32, period: Period) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new()
            .with("year", year)
            .with("period", statement_period(period)?))
    })
    .csv()
}

impl<'a> BulkApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Company profiles, delivered in numbered parts starting at `"0"`.
    pub fn company_profile(&self, part: &str) -> FmpRequest<'a> {
        request::build(self.client, "profile-bulk", || {
            Ok(QueryParams::new().with("part", required("part", part)?))
        })
        .csv()
    }

    /// FMP ratings for every symbol.
    pub fn stock_rating(&self) -> FmpRequest<'a> {
        csv(self.client, "rating-bulk")
    }

    /// Discounted cash flow valuations.
    pub fn dcf_valuations(&self) -> FmpRequest<'a> {
        csv(self.client, "dcf-bulk")
    }

    /// Altman Z and Piotroski scores for every symbol.
    pub fn financial_scores(&self) -> FmpRequest<'a> {
        csv(self.client, "scores-bulk")
    }

    /// Price target averages over several windows for every symbol.
    pub fn price_target_summary(&self) -> FmpRequest<'a> {
        csv(self.client, "price-target-summary-bulk")
    }

    /// ETF holdings, delivered in numbered parts.
    pub fn etf_holder(&self, part: &str) -> FmpRequest<'a> {
        request::build(self.client, "etf-holder-bulk", || {
            Ok(QueryParams::new().with("part", required("part", part)?))
        })
        .csv()
    }

    /// Analyst grade consensus for every symbol.
    pub fn upgrades_downgrades_consensus(&self) -> FmpRequest<'a> {
        csv(self.client, "upgrades-downgrades-consensus-bulk")
    }

    /// Trailing-twelve-month key metrics for every symbol.
    pub fn key_metrics_ttm(&self) -> FmpRequest<'a> {
        csv(self.client, "key-metrics-ttm-bulk")
    }

    /// Trailing-twelve-month ratios for every symbol.
    pub fn ratios_ttm(&self) -> FmpRequest<'a> {
        csv(self.client, "ratios-ttm-bulk")
    }

    /// Peer lists for every symbol.
    pub fn stock_peers(&self) -> FmpRequest<'a> {
        csv(self.client, "peers-bulk")
    }

    /// Actual against estimated EPS for every report in `year`.
    pub fn earnings_surprises(&self, year: i32) -> FmpRequest<'a> {
        FmpRequest::new(
            self.client,
            "earnings-surprises-bulk",
            QueryParams::new().with("year", year),
        )
        .csv()
    }

    /// Income statements for one fiscal period. `Period::Annual` is sent as `FY`.
    pub fn income_statement(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(self.client, "income-statement-bulk", year, period)
    }

    /// Income statement growth for one fiscal period.
    pub fn income_statement_growth(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(self.client, "income-statement-growth-bulk", year, period)
    }

    /// Balance sheets for one fiscal period.
    pub fn balance_sheet_statement(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(self.client, "balance-sheet-statement-bulk", year, period)
    }

    /// Balance sheet growth for one fiscal period.
    pub fn balance_sheet_statement_growth(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(
            self.client,
            "balance-sheet-statement-growth-bulk",
            year,
            period,
        )
    }

    /// Cash flow statements for one fiscal period.
    pub fn cash_flow_statement(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(self.client, "cash-flow-statement-bulk", year, period)
    }

    /// Cash flow growth for one fiscal period.
    pub fn cash_flow_statement_growth(&self, year: i32, period: Period) -> FmpRequest<'a> {
        statements(self.client, "cash-flow-statement-growth-bulk", year, period)
    }
}
