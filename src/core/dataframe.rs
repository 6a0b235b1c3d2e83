use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;
use serde_json::Value;

use crate::core::Table;

/// Trait for converting tabular payloads into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

/// The narrowest column type that holds every non-null cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Empty,
    Int,
    Float,
    Bool,
    Text,
}

fn widen(acc: Kind, cell: &Value) -> Kind {
    let this = match cell {
        Value::Null => return acc,
        Value::Number(n) if n.is_i64() => Kind::Int,
        Value::Number(_) => Kind::Float,
        Value::Bool(_) => Kind::Bool,
        _ => Kind::Text,
    };
    match (acc, this) {
        (Kind::Empty, k) => k,
        (a, b) if a == b => a,
        (Kind::Int, Kind::Float) | (Kind::Float, Kind::Int) => Kind::Float,
        _ => Kind::Text,
    }
}

fn text_of(cell: &Value) -> Option<String> {
    match cell {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_column(name: PlSmallStr, cells: &[&Value]) -> Column {
    Column::new(name, cells.iter().map(|c| text_of(c)).collect::<Vec<_>>())
}

/// Columns FMP fills with calendar dates or timestamps.
const DATE_COLUMNS: [&str; 4] = ["date", "publishedDate", "reportDate", "filingDate"];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A parsed temporal cell.
#[derive(Debug, Clone, Copy)]
enum Stamp {
    Day(NaiveDate),
    Moment(NaiveDateTime),
}

fn stamp_of(cell: &Value) -> Option<Stamp> {
    let s = cell.as_str()?.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(Stamp::Day(d));
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .ok()
        .map(Stamp::Moment)
}

/// Parses a text column of dates (`Date`) or timestamps (`Datetime[ms]`).
///
/// `None` unless every non-null cell parses; a mix of both shapes widens to
/// `Datetime`.
fn temporal_column(name: PlSmallStr, cells: &[&Value]) -> PolarsResult<Option<Column>> {
    let mut stamps = Vec::with_capacity(cells.len());
    for cell in cells {
        if cell.is_null() {
            stamps.push(None);
            continue;
        }
        match stamp_of(cell) {
            Some(stamp) => stamps.push(Some(stamp)),
            None => return Ok(None),
        }
    }
    if stamps.iter().all(Option::is_none) {
        return Ok(None);
    }

    if stamps.iter().flatten().all(|s| matches!(s, Stamp::Day(_))) {
        let epoch = NaiveDate::default();
        let days: Vec<Option<i32>> = stamps
            .into_iter()
            .map(|s| match s {
                Some(Stamp::Day(d)) => {
                    i32::try_from(d.signed_duration_since(epoch).num_days()).ok()
                }
                _ => None,
            })
            .collect();
        return Column::new(name, days).cast(&DataType::Date).map(Some);
    }

    let millis: Vec<Option<i64>> = stamps
        .into_iter()
        .map(|s| {
            s.map(|s| match s {
                Stamp::Day(d) => d.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
                Stamp::Moment(dt) => dt.and_utc().timestamp_millis(),
            })
        })
        .collect();
    Column::new(name, millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .map(Some)
}

fn column_of(name: &str, cells: &[&Value]) -> PolarsResult<Column> {
    let kind = cells.iter().fold(Kind::Empty, |acc, c| widen(acc, c));
    let name = PlSmallStr::from(name);
    let column = match kind {
        Kind::Int => Column::new(name, cells.iter().map(|c| c.as_i64()).collect::<Vec<_>>()),
        Kind::Float => Column::new(name, cells.iter().map(|c| c.as_f64()).collect::<Vec<_>>()),
        Kind::Bool => Column::new(name, cells.iter().map(|c| c.as_bool()).collect::<Vec<_>>()),
        Kind::Text if DATE_COLUMNS.contains(&name.as_str()) => {
            match temporal_column(name.clone(), cells)? {
                Some(column) => column,
                None => text_column(name, cells),
            }
        }
        Kind::Empty | Kind::Text => text_column(name, cells),
    };
    Ok(column)
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let columns = self
            .columns()
            .iter()
            .map(|name| {
                let cells = self.column(name).unwrap_or_default();
                column_of(name, &cells)
            })
            .collect::<PolarsResult<Vec<_>>>()?;
        DataFrame::new(columns)
    }
}
