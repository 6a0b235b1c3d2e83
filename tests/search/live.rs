/// Live recorder for tests/fixtures/search-symbol_all.json and company-screener_all.json.
///   FMP_API_KEY=... FMP_RECORD=1 cargo test --features test-mode --test search -- --ignored record_search_live
#[tokio::test]
#[ignore]
async fn record_search_live() {
    let client = fmp_rs::FmpClient::new().unwrap();

    let hits = client
        .search()
        .symbol("AAPL", Some(2), None)
        .table()
        .await
        .unwrap();
    assert!(!hits.is_empty());

    let query = fmp_rs::ScreenerQuery::new()
        .sector("Technology")
        .market_cap_more_than(1_000_000_000_000)
        .is_actively_trading(true)
        .limit(2);
    let _ = client.search().screener(&query).json().await.unwrap();
}
