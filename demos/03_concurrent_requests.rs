//! Several symbols fetched concurrently from one client.
//!
//! Run with: FMP_API_KEY=... cargo run --example 03_concurrent_requests

use futures::future::try_join_all;
use fmp_rs::{FmpClient, FmpError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FmpClient::new()?;
    let symbols = ["AAPL", "GOOGL", "TSLA"];

    println!("--- Profiles and price targets for several symbols ---");
    let tasks: Vec<_> = symbols
        .iter()
        .map(|&s| {
            let client = client.clone();
            async move {
                let profile = client.company().profile(s).table().await?;
                let target = client.analyst().price_target_consensus(s).table().await?;
                println!(
                    "{s}: {} | sector {} | consensus target {}",
                    profile
                        .get(0, "companyName")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default(),
                    profile
                        .get(0, "sector")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default(),
                    target
                        .get(0, "targetConsensus")
                        .and_then(|v| v.as_f64())
                        .unwrap_or_default()
                );
                Ok::<_, FmpError>(())
            }
        })
        .collect();
    try_join_all(tasks).await?;
    println!();

    // Rate limits are reported, never retried; back off and try again.
    match client.quote().real_time(symbols).fetch().await {
        Ok(out) => println!("{} quotes", out.into_table()?.len()),
        Err(e) if e.is_rate_limited() => eprintln!("slow down: {e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
