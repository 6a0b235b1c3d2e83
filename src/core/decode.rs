//! Body decoding: JSON first, CSV for bulk downloads.

use serde_json::{Map, Number, Value};

use crate::core::FmpError;

/// How a request expects its body to be encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyFormat {
    /// JSON, falling back to CSV when the body plainly isn't JSON but looks like CSV.
    #[default]
    Json,
    /// CSV (bulk endpoints); JSON bodies are still accepted.
    Csv,
}

const EXCERPT_CHARS: usize = 200;

/// Decodes a successful response body into a payload.
pub(crate) fn decode_body(body: &str, format: BodyFormat) -> Result<Value, FmpError> {
    let trimmed = body.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => Ok(Value::Array(Vec::new())),
        Ok(v) => Ok(v),
        Err(json_err) => {
            if looks_like_csv(trimmed, format) {
                parse_csv(trimmed)
            } else {
                Err(FmpError::ResponseParsing(format!(
                    "invalid JSON ({json_err}): {}",
                    excerpt(trimmed)
                )))
            }
        }
    }
}

fn looks_like_csv(body: &str, format: BodyFormat) -> bool {
    let Some(first_line) = body.lines().next() else {
        return false;
    };
    if !first_line.contains(',') {
        return false;
    }
    match format {
        BodyFormat::Csv => true,
        BodyFormat::Json => body.starts_with('"') || body.starts_with(','),
    }
}

/// Parses CSV text into an array of objects keyed by the header row.
///
/// Each column gets one type for all its rows: integer or float when every
/// non-empty cell parses as such and none is zero-padded, text otherwise.
pub(crate) fn parse_csv(body: &str) -> Result<Value, FmpError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FmpError::ResponseParsing(format!("invalid CSV header: {e}")))?
        .clone();

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FmpError::ResponseParsing(format!("invalid CSV record: {e}")))?;

    let kinds: Vec<CellKind> = (0..headers.len())
        .map(|i| column_kind(records.iter().filter_map(|r| r.get(i))))
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            let obj: Map<String, Value> = headers
                .iter()
                .zip(&kinds)
                .enumerate()
                .map(|(i, (name, kind))| {
                    let cell = record.get(i).map_or(Value::Null, |raw| typed_cell(raw, *kind));
                    (name.to_string(), cell)
                })
                .collect();
            Value::Object(obj)
        })
        .collect();
    Ok(Value::Array(rows))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Int,
    Float,
    Text,
}

fn column_kind<'r>(cells: impl Iterator<Item = &'r str>) -> CellKind {
    let mut kind = CellKind::Int;
    for s in cells.map(str::trim).filter(|s| !s.is_empty()) {
        if has_leading_zero(s) {
            return CellKind::Text;
        }
        if s.parse::<i64>().is_ok() {
            continue;
        }
        // Integers past i64 would lose digits as floats.
        if is_integral(s) || !s.parse::<f64>().is_ok_and(f64::is_finite) {
            return CellKind::Text;
        }
        kind = CellKind::Float;
    }
    kind
}

fn typed_cell(raw: &str, kind: CellKind) -> Value {
    let s = raw.trim();
    if s.is_empty() {
        return Value::Null;
    }
    let number = match kind {
        CellKind::Int => s.parse::<i64>().ok().map(Number::from),
        CellKind::Float => s.parse::<f64>().ok().and_then(Number::from_f64),
        CellKind::Text => None,
    };
    number.map_or_else(|| Value::String(s.to_string()), Value::Number)
}

fn is_integral(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut chars = digits.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Pulls FMP's error text out of an error body, if it has one.
///
/// FMP answers failures with `{"Error Message": "..."}`; some gateways use
/// `{"message": "..."}` instead.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body.trim()).ok()?;
    let obj = v.as_object()?;
    obj.get("Error Message")
        .or_else(|| obj.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `Some(message)` when a 2xx payload is nothing but FMP's error envelope.
pub(crate) fn envelope_error(payload: &Value) -> Option<String> {
    let obj = payload.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    obj.get("Error Message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn excerpt(body: &str) -> String {
    let mut out: String = body.chars().take(EXCERPT_CHARS).collect();
    if body.chars().count() > EXCERPT_CHARS {
        out.push_str("...");
    }
    out
}
