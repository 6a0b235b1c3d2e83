//! Quick tour of the client: quotes, statements, history and search.
//!
//! Run with: FMP_API_KEY=... cargo run --example 01_quickstart
//! Add `--features tracing-subscriber` and `RUST_LOG=fmp_rs=debug` to see each request.

use std::time::Duration;

use fmp_rs::{DateRange, FmpClient, Period, ScreenerQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. The key comes from FMP_API_KEY unless passed to the builder.
    let client = FmpClient::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    println!("--- Real-time quotes ---");
    let quotes = client.quote().batch(["AAPL", "MSFT", "NVDA"]).table().await?;
    for row in quotes.iter_records() {
        let get = |name: &str| row.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);
        println!(
            "  {}: {}",
            get("symbol").and_then(|v| v.as_str()).unwrap_or("?"),
            get("price").and_then(|v| v.as_f64()).unwrap_or_default()
        );
    }
    println!();

    // 2. Statements come back as tables with FMP's own column names.
    println!("--- AAPL quarterly revenue ---");
    let income = client
        .statements()
        .income_statement("AAPL", Period::Quarter, Some(4))
        .table()
        .await?;
    for i in 0..income.len() {
        println!(
            "  {}: {}",
            income.get(i, "date").and_then(|v| v.as_str()).unwrap_or("?"),
            income.get(i, "revenue").and_then(|v| v.as_i64()).unwrap_or_default()
        );
    }
    println!();

    // 3. Raw JSON is one call away.
    println!("--- Last five daily bars (raw JSON) ---");
    let bars = client
        .chart()
        .basic("AAPL", DateRange::new())
        .raw()
        .fetch()
        .await?
        .into_json();
    if let Some(rows) = bars.as_array() {
        for bar in rows.iter().take(5) {
            println!("  {bar}");
        }
    }
    println!();

    // 4. Screener filters are typed; unset filters are not sent.
    println!("--- Large-cap technology ---");
    let query = ScreenerQuery::new()
        .sector("Technology")
        .market_cap_more_than(500_000_000_000)
        .is_actively_trading(true)
        .limit(5);
    let hits = client.search().screener(&query).table().await?;
    println!("  {} companies, columns: {:?}", hits.len(), hits.columns());

    // 5. Errors carry their category.
    match client.company().profile("").fetch().await {
        Err(e) => println!("\nrejected before sending: {e}"),
        Ok(_) => unreachable!("blank symbols are rejected"),
    }

    Ok(())
}
