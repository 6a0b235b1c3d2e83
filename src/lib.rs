//! fmp-rs: an async client for the Financial Modeling Prep REST API.
//!
//! A single [`FmpClient`] holds the API key, base URL and HTTP connection
//! pool. Endpoints are grouped into façades reached through accessor methods
//! (`client.quote()`, `client.statements()`, ...). Every façade method returns
//! an [`FmpRequest`]; awaiting [`FmpRequest::fetch`] performs one HTTP GET and
//! returns a [`Table`] unless raw JSON was asked for.
//!
//! ```no_run
//! use fmp_rs::{FmpClient, Period};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), fmp_rs::FmpError> {
//! // Reads FMP_API_KEY from the environment.
//! let client = FmpClient::new()?;
//!
//! let quote = client.quote().real_time("AAPL").table().await?;
//! println!("{:?}", quote.get(0, "price"));
//!
//! let income = client
//!     .statements()
//!     .income_statement("AAPL", Period::Quarter, Some(4))
//!     .raw()
//!     .fetch()
//!     .await?;
//! println!("{}", income.into_json());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `dataframe`: `FmpRequest::dataframe` and the `ToDataFrame` trait (polars).
//! - `tracing`: spans and debug events around each request. The API key is
//!   never logged.
//! - `tracing-subscriber`: pulls in `tracing-subscriber` for the demos.
//! - `test-mode`: records response bodies to `tests/fixtures` when
//!   `FMP_RECORD=1`.

pub mod core;

pub mod analyst;
pub mod bulk;
pub mod calendar;
pub mod chart;
pub mod company;
pub mod crypto;
pub mod directory;
pub mod etf;
pub mod forex;
pub mod market;
pub mod news;
pub mod quote;
pub mod search;
pub mod sec;
pub mod statements;

pub use crate::core::client::constants::API_KEY_ENV;
pub use crate::core::{
    BodyFormat, DateArg, DateRange, FmpClient, FmpClientBuilder, FmpError, FmpRequest, Interval,
    Output, Period, QueryParams, Symbols, Table,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;

pub use analyst::AnalystApi;
pub use bulk::BulkApi;
pub use calendar::CalendarApi;
pub use chart::ChartApi;
pub use company::CompanyApi;
pub use crypto::CryptoApi;
pub use directory::DirectoryApi;
pub use etf::EtfApi;
pub use forex::ForexApi;
pub use market::MarketApi;
pub use news::NewsApi;
pub use quote::QuoteApi;
pub use search::{ScreenerQuery, SearchApi};
pub use sec::SecApi;
pub use statements::StatementsApi;
