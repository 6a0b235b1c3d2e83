//! Core components of the `fmp-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - The request executor every endpoint funnels through.
//! - The shared argument types and the [`Table`] response shaper.

/// The main client (`FmpClient`), builder, and configuration.
pub mod client;
/// Response body decoding (JSON, CSV).
pub mod decode;
/// The primary error type (`FmpError`) for the crate.
pub mod error;
/// Query parameters and shared argument types (`Symbols`, `DateRange`, `Period`, ...).
pub mod params;
/// The per-endpoint request handle (`FmpRequest`).
pub mod request;
/// Tabular shaping of JSON payloads.
pub mod table;

/// Polars integration.
#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use client::{FmpClient, FmpClientBuilder};
pub use decode::BodyFormat;
pub use error::FmpError;
pub use params::{DateArg, DateRange, Interval, Period, QueryParams, Symbols};
pub use request::FmpRequest;
pub use table::{Output, Table};
