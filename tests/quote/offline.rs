use crate::common::{TEST_KEY, client_for, mock_json, setup_server};
use httpmock::Method::GET;
use serde_json::json;

#[tokio::test]
async fn real_time_quote_is_one_row_table() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote")
            .query_param("symbol", "AAPL")
            .query_param("apikey", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol":"AAPL","price":150.0}]"#);
    });

    let client = client_for(&server);
    let table = client.quote().real_time("AAPL").table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 1);
    assert_eq!(table.columns(), ["symbol", "price"]);
    assert_eq!(table.get(0, "symbol"), Some(&json!("AAPL")));
    assert_eq!(table.get(0, "price"), Some(&json!(150.0)));
}

#[tokio::test]
async fn recorded_quote_keeps_payload_column_order() {
    let server = setup_server();
    let mock = mock_json(&server, "quote", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let out = client.quote().real_time("AAPL").fetch().await.unwrap();

    mock.assert();
    let table = out.as_table().expect("tabular by default");
    assert_eq!(&table.columns()[..3], ["symbol", "name", "price"]);
    assert_eq!(table.get(0, "exchange"), Some(&json!("NASDAQ")));
}

#[tokio::test]
async fn batch_quote_sends_comma_joined_symbols() {
    let server = setup_server();
    let mock = mock_json(&server, "batch-quote", "AAPL-MSFT", &[("symbols", "AAPL,MSFT")]);

    let client = client_for(&server);
    let table = client
        .quote()
        .batch(["AAPL", "MSFT"])
        .table()
        .await
        .unwrap();

    mock.assert();
    let symbols: Vec<_> = table
        .column("symbol")
        .unwrap()
        .into_iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(symbols, ["AAPL", "MSFT"]);
}

#[tokio::test]
async fn raw_output_returns_json_untouched() {
    let server = setup_server();
    let mock = mock_json(&server, "quote", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let out = client.quote().real_time("AAPL").raw().fetch().await.unwrap();

    mock.assert();
    let value = out.as_json().expect("raw output");
    assert_eq!(value[0]["symbol"], "AAPL");
    assert_eq!(value[0]["timestamp"], 1_738_702_801);
}

#[tokio::test]
async fn empty_array_is_empty_table() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/quote").query_param("symbol", "ZZZZ");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let table = client.quote().real_time("ZZZZ").table().await.unwrap();

    mock.assert();
    assert!(table.is_empty());
    assert_eq!(table.width(), 0);
}

#[tokio::test]
async fn single_object_payload_becomes_one_row() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/exchange-market-hours").query_param("exchange", "NYSE");
        then.status(200)
            .body(r#"{"exchange":"NYSE","openingHour":"09:30 AM -04:00","isMarketOpen":false}"#);
    });

    let client = client_for(&server);
    let table = client.market().exchange_hours("NYSE").table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "isMarketOpen"), Some(&json!(false)));
}
