use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaytrailError>;

/// Error code used when the gateway gives no usable error description.
pub const UNKNOWN_ERROR: &str = "unknown-error";
/// Error code used when a success response lacks the token or redirect URL.
pub const MALFORMED_RESPONSE: &str = "malformed-response";

#[derive(Error, Debug)]
pub enum PaytrailError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    GatewayError(#[from] GatewayError),
    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A failure reported by the gateway, or a success response it could not honor.
///
/// `code` is either the gateway's own `errorCode` or one of [`UNKNOWN_ERROR`]
/// and [`MALFORMED_RESPONSE`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Gateway error [{code}]: {message}")]
pub struct GatewayError {
    pub code: String,
    pub message: String,
}

impl GatewayError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Network-level failure reaching the gateway.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl From<reqwest::Error> for PaytrailError {
    fn from(err: reqwest::Error) -> Self {
        PaytrailError::TransportError(err.into())
    }
}

impl PaytrailError {
    /// Returns the gateway error if this failure came from the gateway itself.
    pub fn as_gateway(&self) -> Option<&GatewayError> {
        match self {
            PaytrailError::GatewayError(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = PaytrailError::from(GatewayError::new("E1", "bad request"));
        assert_eq!(err.to_string(), "Gateway error [E1]: bad request");
        assert_eq!(err.as_gateway(), Some(&GatewayError::new("E1", "bad request")));
    }

    #[test]
    fn test_non_gateway_errors_are_distinct() {
        let err = PaytrailError::TransportError(TransportError::Timeout("30s".to_string()));
        assert!(err.as_gateway().is_none());

        let err = PaytrailError::ValidationError("nope".to_string());
        assert!(err.as_gateway().is_none());
    }

    #[test]
    fn test_error_kinds() {
        let kind = |err: &PaytrailError| match err {
            PaytrailError::ValidationError(_) => "validation",
            PaytrailError::GatewayError(_) => "gateway",
            PaytrailError::TransportError(_) => "transport",
            PaytrailError::JsonError(_) => "json",
        };
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        assert_eq!(kind(&PaytrailError::ValidationError("x".to_string())), "validation");
        assert_eq!(kind(&GatewayError::new("E1", "x").into()), "gateway");
        assert_eq!(kind(&TransportError::Other("x".to_string()).into()), "transport");
        assert_eq!(kind(&json.into()), "json");
    }
}
