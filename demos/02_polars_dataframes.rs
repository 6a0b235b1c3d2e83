//! Polars `DataFrame` output.
//!
//! Run with: FMP_API_KEY=... cargo run --example 02_polars_dataframes --features dataframe

#[cfg(feature = "dataframe")]
use polars::prelude::*;

#[cfg(feature = "dataframe")]
use fmp_rs::{DateRange, FmpClient, Period, ToDataFrame};

#[cfg(feature = "dataframe")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = FmpClient::new()?;

    println!("=== Polars DataFrame output with fmp-rs ===\n");

    section_history_df(&client).await?;
    section_statements_df(&client).await?;
    section_bulk_df(&client).await?;

    Ok(())
}

#[cfg(feature = "dataframe")]
async fn section_history_df(client: &FmpClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Daily history");
    let df = client
        .chart()
        .full("AAPL", DateRange::between("2024-01-01", "2024-06-30"))
        .dataframe()
        .await?;
    println!("   shape: {:?}", df.shape());
    println!("{}", df.head(Some(5)));

    let up_days = df
        .lazy()
        .filter(col("change").gt(lit(0.0)))
        .collect()?;
    println!("   up days: {}\n", up_days.height());
    Ok(())
}

#[cfg(feature = "dataframe")]
async fn section_statements_df(client: &FmpClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Income statements via Table::to_dataframe");
    let table = client
        .statements()
        .income_statement("MSFT", Period::Annual, Some(5))
        .table()
        .await?;
    let df = table.to_dataframe()?;
    let slim = df.select(["date", "revenue", "netIncome"])?;
    println!("{slim}\n");
    Ok(())
}

#[cfg(feature = "dataframe")]
async fn section_bulk_df(client: &FmpClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Bulk ratings (CSV body)");
    let df = client.bulk().stock_rating().dataframe().await?;
    println!("   shape: {:?}", df.shape());
    println!("{}", df.head(Some(3)));
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    println!("This example requires the 'dataframe' feature.");
    println!("Run with: cargo run --example 02_polars_dataframes --features dataframe");
}
