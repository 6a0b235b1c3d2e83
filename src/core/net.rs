//! The request executor: every outbound call goes through [`FmpClient::get`].

use serde_json::Value;
use url::Url;

use crate::core::client::constants::API_KEY_PARAM;
use crate::core::decode::{self, BodyFormat};
use crate::core::{FmpClient, FmpError, QueryParams};

impl FmpClient {
    /// Performs one GET against `path` and returns the decoded payload.
    ///
    /// Parameters are sent in insertion order followed by the API key. Non-2xx
    /// statuses are classified into [`FmpError`] variants; nothing is retried.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(path = %path))
    )]
    pub(crate) async fn get(
        &self,
        path: &str,
        params: &QueryParams,
        format: BodyFormat,
    ) -> Result<Value, FmpError> {
        let url = self.endpoint_url(path, params)?;
        let shown = redact(&url);

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %shown, "sending request");

        let resp = self
            .http()
            .get(url)
            .header("accept", accept_for(format))
            .send()
            .await?;

        let status = resp.status();
        let tag = params
            .get("symbol")
            .or_else(|| params.get("symbols"))
            .unwrap_or_default();
        let ext = match format {
            BodyFormat::Json => "json",
            BodyFormat::Csv => "csv",
        };
        let body = get_text(resp, path, tag, ext).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(map_status(status.as_u16(), shown, &body));
        }

        let payload = decode::decode_body(&body, format)?;
        if let Some(message) = decode::envelope_error(&payload) {
            return Err(FmpError::Api(message));
        }
        Ok(payload)
    }

    /// `base_url` + `path` + params + `apikey`.
    pub(crate) fn endpoint_url(&self, path: &str, params: &QueryParams) -> Result<Url, FmpError> {
        let mut url = self.base_url().join(path.trim_start_matches('/'))?;
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params.iter() {
                qp.append_pair(k, v);
            }
            qp.append_pair(API_KEY_PARAM, self.api_key());
        }
        Ok(url)
    }
}

/// `Accept` header value; bulk endpoints answer CSV but may fall back to JSON.
pub(crate) const fn accept_for(format: BodyFormat) -> &'static str {
    match format {
        BodyFormat::Json => "application/json",
        BodyFormat::Csv => "text/csv, application/json",
    }
}

/// Maps an unsuccessful status to its error kind.
pub(crate) fn map_status(status: u16, url: String, body: &str) -> FmpError {
    match status {
        401 | 403 => FmpError::Authentication {
            status,
            url,
            message: decode::error_message(body),
        },
        404 => FmpError::NotFound { url },
        429 => FmpError::RateLimited { url },
        500..=599 => FmpError::Server { status, url },
        _ => FmpError::Status {
            status,
            url,
            message: decode::error_message(body),
        },
    }
}

/// The URL as text with the API key masked, for errors and logs.
pub(crate) fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return shown.to_string();
    }
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

/// Read the response body as text.
/// In `test-mode`, if `FMP_RECORD=1`, successful bodies are saved as fixtures.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _path: &str,
    _tag: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    #[cfg(feature = "test-mode")]
    let ok = resp.status().is_success();

    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if ok
            && std::env::var("FMP_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_path, _tag, _ext, &text)
        {
            eprintln!("FMP_RECORD: failed to write fixture for {_path}: {e}");
        }
    }

    Ok(text)
}
