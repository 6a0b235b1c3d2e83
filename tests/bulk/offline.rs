use crate::common::{client_for, mock_csv, setup_server};
use fmp_rs::Period;
use serde_json::{Value, json};

#[tokio::test]
async fn rating_csv_becomes_table() {
    let server = setup_server();
    let mock = mock_csv(&server, "rating-bulk", &[]);

    let client = client_for(&server);
    let table = client.bulk().stock_rating().table().await.unwrap();

    mock.assert();
    assert_eq!(
        table.columns(),
        [
            "symbol",
            "date",
            "rating",
            "ratingScore",
            "ratingRecommendation",
            "ratingDetailsDCFScore"
        ]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0, "ratingScore"), Some(&json!(4)));
    assert_eq!(table.get(1, "rating"), Some(&json!("B+")));
    // Blank cells are nulls; zero-padded tickers stay text.
    assert_eq!(table.get(2, "symbol"), Some(&json!("000001.SZ")));
    assert_eq!(table.get(2, "rating"), Some(&Value::Null));
}

#[tokio::test]
async fn quoted_statement_csv_with_year_and_period() {
    let server = setup_server();
    let mock = mock_csv(
        &server,
        "income-statement-bulk",
        &[("year", "2024"), ("period", "Q4")],
    );

    let client = client_for(&server);
    let json = client
        .bulk()
        .income_statement(2024, Period::Q4)
        .json()
        .await
        .unwrap();

    mock.assert();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["cik"], "0000320193");
    assert_eq!(rows[1]["netIncome"], 24_667_000_000_i64);
}

#[tokio::test]
async fn bulk_endpoint_answering_json_still_decodes() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/dcf-bulk");
        then.status(200).body(r#"[{"symbol":"AAPL","dcf":147.2}]"#);
    });

    let client = client_for(&server);
    let table = client.bulk().dcf_valuations().table().await.unwrap();

    mock.assert();
    assert_eq!(table.get(0, "dcf"), Some(&json!(147.2)));
}

#[tokio::test]
async fn bulk_requests_accept_csv() {
    let server = setup_server();
    let body = crate::common::fixture("rating-bulk", "all", "csv");
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/rating-bulk")
            .header("accept", "text/csv, application/json");
        then.status(200).header("content-type", "text/csv").body(body);
    });

    let client = client_for(&server);
    let table = client.bulk().stock_rating().table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 3);
}
