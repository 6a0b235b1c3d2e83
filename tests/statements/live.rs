/// Live recorder for tests/fixtures/income-statement_AAPL.json.
///   FMP_API_KEY=... FMP_RECORD=1 cargo test --features test-mode --test statements -- --ignored record_income_statement_live
#[tokio::test]
#[ignore]
async fn record_income_statement_live() {
    let client = fmp_rs::FmpClient::new().unwrap();

    let table = client
        .statements()
        .income_statement("AAPL", fmp_rs::Period::Annual, Some(2))
        .table()
        .await
        .unwrap();
    assert!(!table.is_empty());
}
