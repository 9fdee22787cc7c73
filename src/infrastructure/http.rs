use crate::config::{ClientConfig, Credentials};
use crate::domain::ports::{Transport, TransportResponse};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

/// API version header required on every request.
pub const API_VERSION_HEADER: &str = "x-verkkomaksut-api-version";
pub const API_VERSION: &str = "1";

/// HTTPS transport backed by a pooled `reqwest::Client`.
///
/// Every request carries the merchant's basic-auth credentials and the
/// fixed JSON/API version headers. The underlying client is reused across
/// calls so connections are kept alive.
pub struct ReqwestTransport {
    client: reqwest::Client,
    credentials: Credentials,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .basic_auth(
                &self.credentials.merchant_id,
                Some(&self.credentials.merchant_secret),
            )
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(%url, status, "gateway responded");

        Ok(TransportResponse { status, body })
    }
}
