use crate::error::{PaytrailError, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "https://payment.paytrail.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Merchant identity, used for HTTP basic auth and for callback hashing.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub merchant_id: String,
    pub merchant_secret: String,
}

impl Credentials {
    pub fn new(merchant_id: impl Into<String>, merchant_secret: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_secret: merchant_secret.into(),
        }
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_secret", &"<redacted>")
            .finish()
    }
}

/// Settings needed to build a [`PaytrailClient`](crate::PaytrailClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub service_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration pointing at the production gateway with a 30s timeout.
    pub fn new(merchant_id: impl Into<String>, merchant_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(merchant_id, merchant_secret),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rejects configurations that could never authenticate or connect.
    pub fn validate(&self) -> Result<()> {
        if self.credentials.merchant_id.trim().is_empty() {
            return Err(PaytrailError::ValidationError(
                "Merchant id must not be empty".to_string(),
            ));
        }
        if self.credentials.merchant_secret.is_empty() {
            return Err(PaytrailError::ValidationError(
                "Merchant secret must not be empty".to_string(),
            ));
        }
        if !(self.service_url.starts_with("https://") || self.service_url.starts_with("http://")) {
            return Err(PaytrailError::ValidationError(format!(
                "Service URL must be an http(s) URL, got {:?}",
                self.service_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(PaytrailError::ValidationError(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of the payment creation endpoint.
    pub fn create_payment_url(&self) -> String {
        format!("{}/api-payment/create", self.service_url.trim_end_matches('/'))
    }
}
