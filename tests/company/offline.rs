use crate::common::{client_for, mock_json, setup_server};
use serde_json::json;

#[tokio::test]
async fn profile_table_has_company_fields() {
    let server = setup_server();
    let mock = mock_json(&server, "profile", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let table = client.company().profile("AAPL").table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "sector"), Some(&json!("Technology")));
    assert_eq!(table.get(0, "isEtf"), Some(&json!(false)));
}

#[tokio::test]
async fn batch_market_cap_uses_symbols_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/market-capitalization-batch")
            .query_param("symbols", "AAPL,MSFT,GOOG");
        then.status(200).body(
            r#"[{"symbol":"AAPL","date":"2025-02-04","marketCap":3500823120000},
                {"symbol":"MSFT","date":"2025-02-04","marketCap":3065638231578},
                {"symbol":"GOOG","date":"2025-02-04","marketCap":2528243283000}]"#,
        );
    });

    let client = client_for(&server);
    let symbols = vec!["AAPL".to_string(), "MSFT".to_string(), "GOOG".to_string()];
    let table = client.company().batch_market_cap(symbols).table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 3);
}
