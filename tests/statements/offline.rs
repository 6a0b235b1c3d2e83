use crate::common::{client_for, mock_json, setup_server};
use fmp_rs::Period;
use serde_json::json;

#[tokio::test]
async fn income_statement_quarterly_with_limit() {
    let server = setup_server();
    let mock = mock_json(
        &server,
        "income-statement",
        "AAPL",
        &[("symbol", "AAPL"), ("period", "quarter"), ("limit", "2")],
    );

    let client = client_for(&server);
    let period: Period = "Quarter".parse().unwrap();
    let table = client
        .statements()
        .income_statement("AAPL", period, Some(2))
        .table()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(table.len(), 2);
    // CIK stays text; amounts stay integral.
    assert_eq!(table.get(0, "cik"), Some(&json!("0000320193")));
    assert_eq!(table.get(1, "revenue"), Some(&json!(383_285_000_000_i64)));
}

#[tokio::test]
async fn table_round_trips_to_records() {
    let server = setup_server();
    let _mock = mock_json(&server, "income-statement", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let table = client
        .statements()
        .income_statement("AAPL", Period::Annual, None)
        .table()
        .await
        .unwrap();

    let records = table.into_json();
    assert_eq!(records[0]["fiscalYear"], "2024");
    assert_eq!(records.as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_period_is_rejected() {
    let err = "monthly".parse::<Period>().unwrap_err();
    assert!(matches!(err, fmp_rs::FmpError::InvalidParameter(_)));
}
