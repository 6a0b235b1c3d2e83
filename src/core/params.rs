//! Query parameters and the shared argument types façade methods accept.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::core::FmpError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered set of query parameters.
///
/// Absent (`None`) and blank values are never stored, so unset options can't
/// leak into the query string. Setting a key twice replaces the first value.
/// The API key is not part of this set; the executor appends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// An empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets `key` to `value`. Blank values are dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        self.pairs.retain(|(k, _)| *k != key);
        if !value.trim().is_empty() {
            self.pairs.push((key, value));
        }
    }

    /// Sets `key` only when `value` is `Some`.
    pub fn insert_opt<V: fmt::Display>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`insert_opt`](Self::insert_opt).
    #[must_use]
    pub fn with_opt<V: fmt::Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Adds `from`/`to` for whichever ends of `range` are set.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] for malformed dates or a reversed range.
    pub fn with_range(mut self, range: &DateRange) -> Result<Self, FmpError> {
        let (from, to) = range.resolve()?;
        self.insert_opt("from", from.map(|d| d.format(DATE_FORMAT)));
        self.insert_opt("to", to.map(|d| d.format(DATE_FORMAT)));
        Ok(self)
    }

    /// The value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when no parameter is stored.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Validates a required free-text argument (CIK, CUSIP, exchange, ...).
pub(crate) fn required(name: &str, value: &str) -> Result<String, FmpError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(FmpError::invalid(format!("`{name}` must not be empty")));
    }
    Ok(v.to_string())
}

/* ---------------- Symbols ---------------- */

/// One or more ticker symbols.
///
/// Built from a single symbol (`"AAPL"`, passed through as given, so a
/// pre-joined `"AAPL,MSFT"` also works) or from a list, which is joined with
/// commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols(Vec<String>);

impl Symbols {
    /// The comma-joined wire form.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] if the list is empty or contains a blank symbol.
    pub fn encode(&self) -> Result<String, FmpError> {
        if self.0.is_empty() {
            return Err(FmpError::invalid("at least one symbol is required"));
        }
        let mut out = Vec::with_capacity(self.0.len());
        for s in &self.0 {
            let s = s.trim();
            if s.is_empty() {
                return Err(FmpError::invalid("symbols must not be blank"));
            }
            out.push(s);
        }
        Ok(out.join(","))
    }
}

impl From<&str> for Symbols {
    fn from(s: &str) -> Self {
        Self(vec![s.to_string()])
    }
}

impl From<String> for Symbols {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl From<&String> for Symbols {
    fn from(s: &String) -> Self {
        Self(vec![s.clone()])
    }
}

impl From<Vec<String>> for Symbols {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<Vec<&str>> for Symbols {
    fn from(v: Vec<&str>) -> Self {
        Self(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Symbols {
    fn from(v: &[&str]) -> Self {
        Self(v.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<&[String]> for Symbols {
    fn from(v: &[String]) -> Self {
        Self(v.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Symbols {
    fn from(v: [&str; N]) -> Self {
        Self(v.iter().map(|s| (*s).to_string()).collect())
    }
}

/* ---------------- Dates ---------------- */

/// A calendar date argument: either `YYYY-MM-DD` text or a `chrono` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    /// Unvalidated text; checked when the request is built.
    Text(String),
    /// An already-typed date.
    Date(NaiveDate),
}

impl DateArg {
    /// Validates and returns the date.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::InvalidParameter`] if the text is not a `YYYY-MM-DD` date.
    pub fn to_date(&self) -> Result<NaiveDate, FmpError> {
        match self {
            Self::Date(d) => Ok(*d),
            Self::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
                FmpError::invalid(format!("invalid date format: {s:?} (expected YYYY-MM-DD)"))
            }),
        }
    }

    /// The `YYYY-MM-DD` wire form.
    ///
    /// # Errors
    ///
    /// See [`to_date`](Self::to_date).
    pub fn encode(&self) -> Result<String, FmpError> {
        Ok(self.to_date()?.format(DATE_FORMAT).to_string())
    }
}

impl From<&str> for DateArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDate> for DateArg {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for DateArg {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Date(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateArg {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Date(dt.date_naive())
    }
}

/// An optionally bounded date window, sent as `from`/`to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<DateArg>,
    to: Option<DateArg>,
}

impl DateRange {
    /// An unbounded range; FMP applies its own default window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A range bounded on both ends.
    #[must_use]
    pub fn between(from: impl Into<DateArg>, to: impl Into<DateArg>) -> Self {
        Self::new().from(from).to(to)
    }

    /// Sets the first day of the window (inclusive).
    #[must_use]
    pub fn from(mut self, date: impl Into<DateArg>) -> Self {
        self.from = Some(date.into());
        self
    }

    /// Sets the last day of the window (inclusive).
    #[must_use]
    pub fn to(mut self, date: impl Into<DateArg>) -> Self {
        self.to = Some(date.into());
        self
    }

    fn resolve(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), FmpError> {
        let from = self.from.as_ref().map(DateArg::to_date).transpose()?;
        let to = self.to.as_ref().map(DateArg::to_date).transpose()?;
        if let (Some(f), Some(t)) = (from, to)
            && f > t
        {
            return Err(FmpError::invalid(format!(
                "date range start {f} is after its end {t}"
            )));
        }
        Ok((from, to))
    }
}

/* ---------------- Period ---------------- */

/// Reporting period for statements, metrics and estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    /// Fiscal years.
    #[default]
    Annual,
    /// Every fiscal quarter.
    Quarter,
    /// First fiscal quarter only.
    Q1,
    /// Second fiscal quarter only.
    Q2,
    /// Third fiscal quarter only.
    Q3,
    /// Fourth fiscal quarter only.
    Q4,
    /// Full fiscal year (bulk endpoints).
    FY,
}

impl Period {
    /// The wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::FY => "FY",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Self::Annual),
            "quarter" | "quarterly" => Ok(Self::Quarter),
            "q1" => Ok(Self::Q1),
            "q2" => Ok(Self::Q2),
            "q3" => Ok(Self::Q3),
            "q4" => Ok(Self::Q4),
            "fy" => Ok(Self::FY),
            _ => Err(FmpError::invalid(format!(
                "unsupported period {s:?} (expected annual, quarter, Q1-Q4 or FY)"
            ))),
        }
    }
}

/* ---------------- Interval ---------------- */

/// Bar size for intraday charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// 1-minute bars.
    M1,
    /// 5-minute bars.
    M5,
    /// 15-minute bars.
    M15,
    /// 30-minute bars.
    M30,
    /// 1-hour bars.
    H1,
    /// 4-hour bars.
    H4,
}

impl Interval {
    /// The path segment FMP uses for this interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1min",
            Self::M5 => "5min",
            Self::M15 => "15min",
            Self::M30 => "30min",
            Self::H1 => "1hour",
            Self::H4 => "4hour",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1min" => Ok(Self::M1),
            "5min" => Ok(Self::M5),
            "15min" => Ok(Self::M15),
            "30min" => Ok(Self::M30),
            "1hour" => Ok(Self::H1),
            "4hour" => Ok(Self::H4),
            _ => Err(FmpError::invalid(format!("unsupported interval {s:?}"))),
        }
    }
}
