//! Rejected arguments never reach the network.

mod common;

use common::{client_for, setup_server};
use fmp_rs::{DateRange, FmpError, Symbols};

#[tokio::test]
async fn invalid_parameters_make_no_request() {
    let server = setup_server();
    let catch_all = server.mock(|when, then| {
        when.method(httpmock::Method::GET);
        then.status(200).body("[]");
    });

    let client = client_for(&server);

    let errors = vec![
        client.quote().real_time(Vec::<String>::new()).fetch().await,
        client.quote().batch(["AAPL", " "]).fetch().await,
        client.company().peers("").fetch().await,
        client
            .chart()
            .full("AAPL", DateRange::new().from("2024/01/01"))
            .fetch()
            .await,
        client
            .calendar()
            .earnings_calendar(DateRange::between("2024-06-01", "2024-01-01"))
            .fetch()
            .await,
        client.etf().disclosure("VOO", 2024, 7).fetch().await,
        client.market().sector_performance("yesterday").fetch().await,
    ];

    for result in errors {
        match result {
            Err(FmpError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
    catch_all.assert_hits(0);
}

#[test]
fn symbols_accept_common_shapes() {
    let owned = vec!["AAPL".to_string(), "MSFT".to_string()];
    assert_eq!(Symbols::from(&owned[..]).encode().unwrap(), "AAPL,MSFT");
    assert_eq!(Symbols::from(" aapl ").encode().unwrap(), "aapl");
}
