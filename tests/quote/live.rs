/// Live recorder for tests/fixtures/quote_AAPL.json and batch-quote_AAPL-MSFT.json.
/// Needs a real key and recording turned on:
///   FMP_API_KEY=... FMP_RECORD=1 cargo test --features test-mode --test quote -- --ignored record_quotes_live
#[tokio::test]
#[ignore]
async fn record_quotes_live() {
    let client = fmp_rs::FmpClient::new().unwrap();

    let _ = client.quote().real_time("AAPL").json().await.unwrap();
    let _ = client.quote().batch(["AAPL", "MSFT"]).json().await.unwrap();
}
