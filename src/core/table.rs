//! Tabular view of JSON payloads.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::FmpError;

/// Column name used when an array element is not an object.
const SCALAR_COLUMN: &str = "value";

/// A read-only table derived from a JSON payload.
///
/// Rows keep payload order. Columns are the union of all keys seen, in the
/// order they first appear; cells for keys a row lacks hold [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table from a payload without consuming it.
    ///
    /// - an array of objects gives one row per element;
    /// - a single object gives a one-row table;
    /// - an empty array or `null` gives an empty table with no columns.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::ResponseParsing`] for a top-level scalar.
    pub fn from_json(payload: &Value) -> Result<Self, FmpError> {
        match payload {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => Ok(Self::from_items(std::slice::from_ref(payload))),
            Value::Array(items) => Ok(Self::from_items(items)),
            other => Err(FmpError::ResponseParsing(format!(
                "cannot tabulate a top-level {}",
                kind_of(other)
            ))),
        }
    }

    fn from_items(items: &[Value]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for item in items {
            match item {
                Value::Object(obj) => {
                    for key in obj.keys() {
                        if seen.insert(key.as_str()) {
                            columns.push(key.clone());
                        }
                    }
                }
                _ => {
                    if seen.insert(SCALAR_COLUMN) {
                        columns.push(SCALAR_COLUMN.to_string());
                    }
                }
            }
        }

        let rows = items
            .iter()
            .map(|item| match item {
                Value::Object(obj) => columns
                    .iter()
                    .map(|c| obj.get(c).cloned().unwrap_or(Value::Null))
                    .collect(),
                scalar => columns
                    .iter()
                    .map(|c| {
                        if c == SCALAR_COLUMN {
                            scalar.clone()
                        } else {
                            Value::Null
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows of cells, aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// The cell at `row` in column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Iterates over rows as `(column, cell)` pairs.
    pub fn iter_records(&self) -> impl Iterator<Item = Vec<(&str, &Value)>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter())
                .collect()
        })
    }

    /// Converts back into a JSON array of objects (with explicit nulls).
    pub fn into_json(self) -> Value {
        let columns = self.columns;
        Value::Array(
            self.rows
                .into_iter()
                .map(|row| {
                    Value::Object(columns.iter().cloned().zip(row).collect::<Map<_, _>>())
                })
                .collect(),
        )
    }
}

/// What an endpoint call produced: a table or the untouched JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The payload shaped into rows and columns.
    Table(Table),
    /// The payload as decoded, unchanged.
    Json(Value),
}

impl Output {
    /// The table, if this output was shaped.
    pub const fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            Self::Json(_) => None,
        }
    }

    /// The raw JSON, if this output was not shaped.
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Table(_) => None,
        }
    }

    /// A table either way; raw JSON is shaped on demand.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::ResponseParsing`] if raw JSON is a top-level scalar.
    pub fn into_table(self) -> Result<Table, FmpError> {
        match self {
            Self::Table(t) => Ok(t),
            Self::Json(v) => Table::from_json(&v),
        }
    }

    /// JSON either way; a table is turned back into an array of objects.
    pub fn into_json(self) -> Value {
        match self {
            Self::Table(t) => t.into_json(),
            Self::Json(v) => v,
        }
    }
}

/// Applies the requested output shape to a decoded payload.
pub(crate) fn shape(payload: Value, as_table: bool) -> Result<Output, FmpError> {
    if as_table {
        Table::from_json(&payload).map(Output::Table)
    } else {
        Ok(Output::Json(payload))
    }
}

const fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
