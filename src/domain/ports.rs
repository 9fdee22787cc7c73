use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Status and raw body of a gateway response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Authenticated sender of JSON requests to the gateway.
///
/// Implementations attach the merchant's basic-auth credentials and the fixed
/// API headers. Network failures must be reported as
/// [`PaytrailError::TransportError`](crate::error::PaytrailError::TransportError).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse>;
}

pub type TransportBox = Box<dyn Transport>;
