use crate::common::{client_for, mock_json, setup_server};
use chrono::NaiveDate;
use fmp_rs::{DateRange, Interval};
use serde_json::json;

#[tokio::test]
async fn full_history_sends_date_window() {
    let server = setup_server();
    let mock = mock_json(
        &server,
        "historical-price-eod/full",
        "AAPL",
        &[("symbol", "AAPL"), ("from", "2025-01-31"), ("to", "2025-02-04")],
    );

    let client = client_for(&server);
    let from = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let bars = client
        .chart()
        .full("AAPL", DateRange::between(from, "2025-02-04"))
        .table()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars.get(0, "date"), Some(&json!("2025-02-04")));
    assert_eq!(bars.get(2, "close"), Some(&json!(236)));
}

#[tokio::test]
async fn intraday_uses_interval_in_path() {
    let server = setup_server();
    let mock = mock_json(&server, "historical-chart/5min", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let bars = client
        .chart()
        .intraday(Interval::M5, "AAPL", DateRange::new())
        .table()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 2);
    assert!(bars.columns().iter().any(|c| c == "volume"));
}

#[tokio::test]
async fn interval_parsed_from_text() {
    let interval: Interval = "5min".parse().unwrap();
    assert_eq!(interval, Interval::M5);
    assert!("2min".parse::<Interval>().is_err());
}

#[cfg(feature = "dataframe")]
#[tokio::test]
async fn daily_bars_fetch_into_typed_dataframe() {
    use polars::prelude::{DataType, TimeUnit};

    let server = setup_server();
    let mock = mock_json(
        &server,
        "historical-price-eod/full",
        "AAPL",
        &[("symbol", "AAPL")],
    );

    let client = client_for(&server);
    let df = client
        .chart()
        .full("AAPL", DateRange::new())
        .dataframe()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(df.height(), 3);
    assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
    assert_eq!(df.column("close").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("volume").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("symbol").unwrap().dtype(), &DataType::String);

    let intraday = mock_json(&server, "historical-chart/5min", "AAPL", &[("symbol", "AAPL")]);
    let df = client
        .chart()
        .intraday(Interval::M5, "AAPL", DateRange::new())
        .dataframe()
        .await
        .unwrap();

    intraday.assert();
    assert_eq!(
        df.column("date").unwrap().dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
}
