mod common;

use common::{TEST_KEY, client_for, mock_status, setup_server};
use fmp_rs::FmpError;

#[tokio::test]
async fn unauthorized_maps_to_authentication_with_message() {
    let server = setup_server();
    let mock = mock_status(
        &server,
        "quote",
        401,
        r#"{"Error Message":"Invalid API KEY. Feel free to create a Free API Key."}"#,
    );

    let client = client_for(&server);
    let err = client.quote().real_time("AAPL").fetch().await.unwrap_err();

    mock.assert();
    assert!(err.is_auth());
    assert_eq!(err.status(), Some(401));
    match &err {
        FmpError::Authentication { url, message, .. } => {
            assert!(url.contains("/quote"));
            assert!(message.as_deref().unwrap_or_default().starts_with("Invalid API KEY"));
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
    // The key never leaks into messages.
    assert!(!err.to_string().contains(TEST_KEY));
    assert!(err.to_string().contains("apikey=***"));
}

#[tokio::test]
async fn forbidden_is_also_authentication() {
    let server = setup_server();
    let mock = mock_status(&server, "bulk-only", 403, "{}");

    let client = client_for(&server);
    let err = client
        .endpoint("bulk-only", fmp_rs::QueryParams::new())
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::Authentication { status: 403, .. }));
}

#[tokio::test]
async fn missing_maps_to_not_found() {
    let server = setup_server();
    let mock = mock_status(&server, "profile", 404, "{}");

    let client = client_for(&server);
    let err = client.company().profile("MISSING").fetch().await.unwrap_err();

    mock.assert();
    match err {
        FmpError::NotFound { url } => {
            assert!(url.contains("symbol=MISSING"));
            assert!(!url.contains(TEST_KEY));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = setup_server();
    let mock = mock_status(&server, "quote", 429, "{}");

    let client = client_for(&server);
    let err = client.quote().real_time("AAPL").fetch().await.unwrap_err();

    mock.assert();
    assert!(err.is_rate_limited());
    assert!(matches!(err, FmpError::RateLimited { .. }));
}

#[tokio::test]
async fn server_failure_maps_to_server() {
    let server = setup_server();
    let mock = mock_status(&server, "ratios", 503, "upstream unavailable");

    let client = client_for(&server);
    let err = client
        .statements()
        .financial_ratios("AAPL", fmp_rs::Period::Annual, None)
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, FmpError::Server { status: 503, .. }));
}

#[tokio::test]
async fn other_status_keeps_code_and_message() {
    let server = setup_server();
    let mock = mock_status(&server, "earnings", 400, r#"{"message":"limit too large"}"#);

    let client = client_for(&server);
    let err = client
        .calendar()
        .earnings("AAPL", Some(100_000))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        FmpError::Status { status, message, .. } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("limit too large"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn error_envelope_on_success_maps_to_api_error() {
    let server = setup_server();
    let mock = mock_status(
        &server,
        "key-metrics",
        200,
        r#"{"Error Message":"Limit Reach . Please upgrade your plan."}"#,
    );

    let client = client_for(&server);
    let err = client
        .statements()
        .key_metrics("AAPL", fmp_rs::Period::Annual, None)
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        FmpError::Api(message) => assert!(message.starts_with("Limit Reach")),
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_maps_to_response_parsing() {
    let server = setup_server();
    let mock = mock_status(&server, "quote", 200, "<html>maintenance</html>");

    let client = client_for(&server);
    let err = client.quote().real_time("AAPL").fetch().await.unwrap_err();

    mock.assert();
    match err {
        FmpError::ResponseParsing(msg) => assert!(msg.contains("<html>")),
        other => panic!("expected ResponseParsing, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_maps_to_network() {
    // Port 9 (discard) on localhost is closed on test machines.
    let client = fmp_rs::FmpClient::builder()
        .api_key(TEST_KEY)
        .base_url(url::Url::parse("http://127.0.0.1:9/stable/").unwrap())
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.quote().real_time("AAPL").fetch().await.unwrap_err();

    assert!(matches!(err, FmpError::Network(_)));
    assert!(!err.to_string().contains(TEST_KEY));
}
