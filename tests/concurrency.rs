//! One client shared across concurrent calls.

mod common;

use common::{client_for, mock_json, setup_server};
use fmp_rs::{DateRange, Period};

#[tokio::test]
async fn independent_calls_share_one_client() {
    let server = setup_server();
    let quote = mock_json(&server, "quote", "AAPL", &[("symbol", "AAPL")]);
    let profile = mock_json(&server, "profile", "AAPL", &[("symbol", "AAPL")]);
    let income = mock_json(&server, "income-statement", "AAPL", &[("symbol", "AAPL")]);
    let bars = mock_json(&server, "historical-price-eod/full", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let (q, p, i, b) = futures::try_join!(
        client.quote().real_time("AAPL").table(),
        client.company().profile("AAPL").table(),
        client
            .statements()
            .income_statement("AAPL", Period::Annual, None)
            .table(),
        client.chart().full("AAPL", DateRange::new()).table(),
    )
    .unwrap();

    quote.assert();
    profile.assert();
    income.assert();
    bars.assert();
    assert_eq!((q.len(), p.len(), i.len(), b.len()), (1, 1, 2, 3));
}

#[tokio::test]
async fn cloned_clients_run_on_spawned_tasks() {
    let server = setup_server();
    let mock = mock_json(&server, "quote", "AAPL", &[("symbol", "AAPL")]);

    let client = client_for(&server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.quote().real_time("AAPL").table().await })
        })
        .collect();

    let results = futures::future::try_join_all(handles).await.unwrap();
    for table in results {
        assert_eq!(table.unwrap().len(), 1);
    }
    mock.assert_hits(4);
}
