use crate::common::{client_for, mock_json, setup_server};
use fmp_rs::ScreenerQuery;

#[tokio::test]
async fn screener_sends_camel_case_filters() {
    let server = setup_server();
    let mock = mock_json(
        &server,
        "company-screener",
        "all",
        &[
            ("sector", "Technology"),
            ("marketCapMoreThan", "1000000000000"),
            ("isActivelyTrading", "true"),
            ("limit", "2"),
        ],
    );

    let client = client_for(&server);
    let query = ScreenerQuery::new()
        .sector("Technology")
        .market_cap_more_than(1_000_000_000_000)
        .is_actively_trading(true)
        .limit(2);
    let table = client.search().screener(&query).table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1, "symbol").and_then(|v| v.as_str()), Some("AVGO"));
}

#[tokio::test]
async fn symbol_search_omits_unset_options() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/search-symbol")
            .query_param("query", "AAPL")
            .query_param("limit", "5");
        then.status(200)
            .body(crate::common::fixture("search-symbol", "all", "json"));
    });

    let client = client_for(&server);
    let req = client.search().symbol("AAPL", Some(5), None);
    assert!(!req.query().unwrap().contains("exchange"));
    let table = req.table().await.unwrap();

    mock.assert();
    assert_eq!(table.len(), 2);
}

#[tokio::test]
async fn exchange_filter_is_forwarded() {
    let server = setup_server();
    let mock = mock_json(
        &server,
        "search-symbol",
        "all",
        &[("query", "AAPL"), ("exchange", "NASDAQ")],
    );

    let client = client_for(&server);
    let out = client
        .search()
        .symbol("AAPL", None, Some("NASDAQ"))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(out.as_table().is_some());
}
