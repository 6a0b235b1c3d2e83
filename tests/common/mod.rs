#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const TEST_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client pointed at the mock server with a fixed key.
pub fn client_for(server: &MockServer) -> fmp_rs::FmpClient {
    fmp_rs::FmpClient::builder()
        .api_key(TEST_KEY)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn fixture(endpoint: &str, tag: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{tag}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Serves `tests/fixtures/<endpoint with / as _>_<tag>.json` at `/<endpoint>`,
/// matching the key and any extra query params.
pub fn mock_json<'a>(
    server: &'a MockServer,
    endpoint: &str,
    tag: &str,
    query: &[(&str, &str)],
) -> Mock<'a> {
    let body = fixture(&endpoint.replace('/', "_"), tag, "json");
    server.mock(|when, then| {
        let mut when = when
            .method(GET)
            .path(format!("/{endpoint}"))
            .query_param("apikey", TEST_KEY);
        for (k, v) in query {
            when = when.query_param(*k, *v);
        }
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Serves a CSV fixture the way the bulk endpoints do.
pub fn mock_csv<'a>(
    server: &'a MockServer,
    endpoint: &str,
    query: &[(&str, &str)],
) -> Mock<'a> {
    let body = fixture(endpoint, "all", "csv");
    server.mock(|when, then| {
        let mut when = when
            .method(GET)
            .path(format!("/{endpoint}"))
            .query_param("apikey", TEST_KEY);
        for (k, v) in query {
            when = when.query_param(*k, *v);
        }
        then.status(200)
            .header("content-type", "text/csv")
            .body(body);
    })
}

/// Any GET to `/<endpoint>` answers with `status` and `body`.
pub fn mock_status<'a>(
    server: &'a MockServer,
    endpoint: &str,
    status: u16,
    body: &str,
) -> Mock<'a> {
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET).path(format!("/{endpoint}"));
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}
