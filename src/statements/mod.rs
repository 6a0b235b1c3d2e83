//! Financial statements, metrics, ratios and their growth rates.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, Period, QueryParams};

/// Statement endpoints. Obtained from [`FmpClient::statements`].
///
/// Period-based methods take a [`Period`] (`Period::default()` is annual) and
/// an optional row limit.
#[derive(Debug, Clone, Copy)]
pub struct StatementsApi<'a> {
    client: &'a FmpClient,
}

/// `symbol`, `period` and an optional `limit`.
fn periodic<'a>(
    client: &'a FmpClient,
    path: &str,
    symbol: &str,
    period: Period,
    limit: Option<u32>,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new()
            .with("symbol", required("symbol", symbol)?)
            .with("period", period)
            .with_opt("limit", limit))
    })
}

impl<'a> StatementsApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Income statements.
    pub fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "income-statement", symbol, period, limit)
    }

    /// Balance sheet statements.
    pub fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "balance-sheet-statement", symbol, period, limit)
    }

    /// Cash flow statements.
    pub fn cash_flow(&self, symbol: &str, period: Period, limit: Option<u32>) -> FmpRequest<'a> {
        periodic(self.client, "cash-flow-statement", symbol, period, limit)
    }

    /// Key metrics (EV, P/E, ROIC, ...).
    pub fn key_metrics(&self, symbol: &str, period: Period, limit: Option<u32>) -> FmpRequest<'a> {
        periodic(self.client, "key-metrics", symbol, period, limit)
    }

    /// Financial ratios.
    pub fn financial_ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "ratios", symbol, period, limit)
    }

    /// Owner earnings.
    pub fn owner_earnings(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "owner-earnings", symbol, period, limit)
    }

    /// Enterprise value history.
    pub fn enterprise_values(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "enterprise-values", symbol, period, limit)
    }

    /// Period-over-period growth of income statement items.
    pub fn income_statement_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "income-statement-growth", symbol, period, limit)
    }

    /// Period-over-period growth of balance sheet items.
    pub fn balance_sheet_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "balance-sheet-statement-growth", symbol, period, limit)
    }

    /// Period-over-period growth of cash flow items.
    pub fn cash_flow_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "cash-flow-statement-growth", symbol, period, limit)
    }

    /// Growth of every reported line item combined.
    pub fn financial_growth(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        periodic(self.client, "financial-growth", symbol, period, limit)
    }

    /// Trailing-twelve-month income statement.
    pub fn income_statement_ttm(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "income-statement-ttm", symbol)
    }

    /// Trailing-twelve-month balance sheet.
    pub fn balance_sheet_ttm(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "balance-sheet-statement-ttm", symbol)
    }

    /// Trailing-twelve-month cash flow.
    pub fn cash_flow_ttm(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "cash-flow-statement-ttm", symbol)
    }

    /// Trailing-twelve-month key metrics.
    pub fn key_metrics_ttm(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "key-metrics-ttm", symbol)
    }

    /// Trailing-twelve-month ratios.
    pub fn financial_ratios_ttm(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "ratios-ttm", symbol)
    }

    /// Altman Z-score and Piotroski score.
    pub fn financial_scores(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "financial-scores", symbol)
    }

    /// Most recently filed statements across all companies.
    pub fn latest_financial_statements(&self) -> FmpRequest<'a> {
        request::plain(self.client, "latest-financial-statements")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_and_limit_are_sent_in_order() {
        let c = FmpClient::builder().api_key("k").build().unwrap();
        let req = c.statements().balance_sheet("MSFT", Period::Quarter, Some(4));
        assert_eq!(req.path(), "balance-sheet-statement");
        let pairs: Vec<_> = req.query().unwrap().iter().collect();
        assert_eq!(
            pairs,
            vec![("symbol", "MSFT"), ("period", "quarter"), ("limit", "4")]
        );
    }

    #[test]
    fn default_period_is_annual_and_limit_is_omitted() {
        let c = FmpClient::builder().api_key("k").build().unwrap();
        let req = c.statements().income_statement("AAPL", Period::default(), None);
        let q = req.query().unwrap();
        assert_eq!(q.get("period"), Some("annual"));
        assert!(!q.contains("limit"));
    }
}
