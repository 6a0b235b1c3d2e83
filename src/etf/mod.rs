//! ETF and mutual fund holdings, exposures and disclosures.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, FmpError, QueryParams};

/// Fund endpoints. Obtained from [`FmpClient::etf`].
#[derive(Debug, Clone, Copy)]
pub struct EtfApi<'a> {
    client: &'a FmpClient,
}

impl<'a> EtfApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Constituents with weights and share counts.
    pub fn holdings(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "etf/holdings", symbol)
    }

    /// Expense ratio, AUM, inception date and issuer.
    pub fn info(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "etf/info", symbol)
    }

    /// Fund exposure by country.
    pub fn country_weightings(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "etf/country-weightings", symbol)
    }

    /// Funds that hold `symbol`, with their weight in each.
    pub fn asset_exposure(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "etf/asset-exposure", symbol)
    }

    /// Fund exposure by sector.
    pub fn sector_weightings(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "etf/sector-weightings", symbol)
    }

    /// Most recent holder disclosures for a fund.
    pub fn disclosure_holders_latest(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "funds/disclosure-holders-latest", symbol)
    }

    /// Holdings disclosed for one fiscal quarter.
    ///
    /// A `quarter` outside `1..=4` is reported as
    /// [`FmpError::InvalidParameter`] when fetched.
    pub fn disclosure(&self, symbol: &str, year: i32, quarter: u8) -> FmpRequest<'a> {
        request::build(self.client, "funds/disclosure", || {
            if !(1..=4).contains(&quarter) {
                return Err(FmpError::invalid(format!(
                    "quarter must be between 1 and 4, got {quarter}"
                )));
            }
            Ok(QueryParams::new()
                .with("symbol", required("symbol", symbol)?)
                .with("year", year)
                .with("quarter", quarter))
        })
    }

    /// Funds whose name matches `name`.
    pub fn disclosure_holders_search(&self, name: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "funds/disclosure-holders-search", "name", name)
    }

    /// Dates for which disclosures exist.
    pub fn disclosure_dates(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "funds/disclosure-dates", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_is_bounded() {
        let c = FmpClient::builder().api_key("k").build().unwrap();
        for bad in [0u8, 5] {
            let req = c.etf().disclosure("VOO", 2024, bad);
            assert!(matches!(req.query(), Err(FmpError::InvalidParameter(_))));
        }
        let req = c.etf().disclosure("VOO", 2024, 4);
        let pairs: Vec<_> = req.query().unwrap().iter().collect();
        assert_eq!(pairs, vec![("symbol", "VOO"), ("year", "2024"), ("quarter", "4")]);
        assert_eq!(req.path(), "funds/disclosure");
    }
}
