//! FMP articles, general news, press releases and asset news.

use crate::core::request::{self, FmpRequest};
use crate::core::{FmpClient, QueryParams, Symbols};

/// News endpoints. Obtained from [`FmpClient::news`].
#[derive(Debug, Clone, Copy)]
pub struct NewsApi<'a> {
    client: &'a FmpClient,
}

const ARTICLES_PAGE: u32 = 0;
const ARTICLES_SIZE: u32 = 10;

fn latest<'a>(client: &'a FmpClient, path: &str, limit: Option<u32>) -> FmpRequest<'a> {
    request::build(client, path, || Ok(QueryParams::new().with_opt("limit", limit)))
}

fn by_symbols<'a>(
    client: &'a FmpClient,
    path: &str,
    symbols: Symbols,
    limit: Option<u32>,
) -> FmpRequest<'a> {
    request::build(client, path, || {
        Ok(QueryParams::new()
            .with("symbols", symbols.encode()?)
            .with_opt("limit", limit))
    })
}

impl<'a> NewsApi<'a> {
    pub(crate) const fn new(client: &'a FmpClient) -> Self {
        Self { client }
    }

    /// Articles written by FMP. Pages start at 0; page size defaults to 10.
    pub fn fmp_articles(&self, page: Option<u32>, size: Option<u32>) -> FmpRequest<'a> {
        FmpRequest::new(
            self.client,
            "fmp-articles",
            QueryParams::new()
                .with("page", page.unwrap_or(ARTICLES_PAGE))
                .with("size", size.unwrap_or(ARTICLES_SIZE)),
        )
    }

    /// Latest general market news.
    pub fn general_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "news/general-latest", limit)
    }

    /// Latest company press releases.
    pub fn press_releases(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "news/press-releases-latest", limit)
    }

    /// Latest stock news across all symbols.
    pub fn stock_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "news/stock-latest", limit)
    }

    /// Latest crypto news.
    pub fn crypto_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "news/crypto-latest", limit)
    }

    /// Latest forex news.
    pub fn forex_news(&self, limit: Option<u32>) -> FmpRequest<'a> {
        latest(self.client, "news/forex-latest", limit)
    }

    /// Press releases for the given symbols.
    pub fn search_press_releases(
        &self,
        symbols: impl Into<Symbols>,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        by_symbols(self.client, "news/press-releases", symbols.into(), limit)
    }

    /// Stock news for the given symbols.
    pub fn search_stock_news(
        &self,
        symbols: impl Into<Symbols>,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        by_symbols(self.client, "news/stock", symbols.into(), limit)
    }

    /// Crypto news for the given pairs.
    pub fn search_crypto_news(
        &self,
        symbols: impl Into<Symbols>,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        by_symbols(self.client, "news/crypto", symbols.into(), limit)
    }

    /// Forex news for the given pairs.
    pub fn search_forex_news(
        &self,
        symbols: impl Into<Symbols>,
        limit: Option<u32>,
    ) -> FmpRequest<'a> {
        by_symbols(self.client, "news/forex", symbols.into(), limit)
    }
}
