//! SEC filings search and company registration data.

use crate::core::params::required;
use crate::core::request::{self, FmpRequest};
use crate::core::{DateRange, FmpClient, QueryParams};

/// SEC filing endpoints. Obtained from [`FmpClient::sec`].
///
/// Filing searches accept a [`DateRange`] and an optional `limit`.
#[derive(Debug, Clone, Copy)]
pub struct SecApi<'a> {
    client: &'a FmpClient,
}

/// An optional leading key/value, then `from`/`to`, then `limit`.
fn filings<'a>(
    client: &'a FmpClient,
    path: &str,
    key: Option<(&str, &str)>,
    range: &DateRange,
    limit: Option<u32>,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        let mut params = QueryParams::new();
        if let Some((name, value)) = key {
            params.insert(name, required(name, value)?);
        }
        Ok(params.with_range(range)?.with_opt("limit", limit))
    })
}

impl<'a> SecApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Latest 8-K filings.
    pub fn latest_8k_filings(&self, range: DateRange, limit: Option<u32>) -> FmpRequest<'a> {
        filings(self.client, "sec-filings-8k", None, &range, limit)
    }

    /// Latest filings that carry financial statements (10-K, 10-Q, ...).
    pub fn latest_filings(&self, range: DateRange, limit: Option<u32>) -> FmpRequest<'a> {
        filings(self.client, "sec-filings-financials", None, &range, limit)
    }

    /// Filings of one form type, e.g. `"10-K"` or `"S-1"`.
    pub fn filings_by_form_type(
        &self,
        form_type: &str,
        range: DateRange,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        filings(
            self.client,
            "sec-filings-search/form-type",
            Some(("formType", form_type)),
            &range,
            limit,
        )
    }

    /// Filings by one company, looked up by ticker.
    pub fn filings_by_symbol(
        &self,
        symbol: &str,
        range: DateRange,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        filings(
            self.client,
            "sec-filings-search/symbol",
            Some(("symbol", symbol)),
            &range,
            limit,
        )
    }

    /// Filings by one registrant, looked up by CIK.
    pub fn filings_by_cik(
        &self,
        cik: &str,
        range: DateRange,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        filings(
            self.client,
            "sec-filings-search/cik",
            Some(("cik", cik)),
            &range,
            limit,
        )
    }

    /// Registrants whose name matches `company`.
    pub fn filings_by_name(&self, company: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "sec-filings-company-search/name", "company", company)
    }

    /// Registrant details for a ticker.
    pub fn company_search_by_symbol(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "sec-filings-company-search/symbol", symbol)
    }

    /// Registrant details for a CIK.
    pub fn company_search_by_cik(&self, cik: &str) -> FmpRequest<'a> {
        request::by_required(self.client, "sec-filings-company-search/cik", "cik", cik)
    }

    /// Registration details (SIC code, addresses, fiscal year end) for a symbol.
    pub fn company_profile(&self, symbol: &str) -> FmpRequest<'a> {
        request::by_symbol(self.client, "sec-profile", symbol)
    }
}
