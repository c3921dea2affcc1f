use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::utils::resolve_url;

const JSON_MEDIA_TYPE: &str = "application/json";

/// JSON-over-HTTP helper for the QFlow backend.
///
/// Every call is a single POST with no retry and no timeout. A successful answer is
/// decoded as JSON when the backend says it is JSON, otherwise the raw text comes back
/// as a [`Value::String`].
#[derive(Debug, Clone)]
pub struct QflowClient {
    http: Client,
    base_url: String,
}

impl QflowClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn post_json<B>(&self, path_or_url: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post_json_with_headers(path_or_url, body, HeaderMap::new())
            .await
    }

    /// Same as [`post_json`](Self::post_json); `headers` win over the default JSON content type.
    pub async fn post_json_with_headers<B>(
        &self,
        path_or_url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = resolve_url(&self.base_url, path_or_url);
        let json_body = serde_json::to_string(body)?;

        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        merged.extend(headers);

        debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .headers(merged)
            .body(json_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A broken body on an error answer is not worth a second failure.
            let detail = response.text().await.unwrap_or_default();
            warn!("POST {url} failed with status {status}");
            return Err(ApiError::from_status(status, detail));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(JSON_MEDIA_TYPE));

        if is_json {
            Ok(response.json::<Value>().await?)
        } else {
            Ok(Value::String(response.text().await.unwrap_or_default()))
        }
    }
}
