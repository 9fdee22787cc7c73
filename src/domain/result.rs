use serde::Deserialize;

/// Returned by the gateway once a payment has been created.
///
/// The end user should be redirected to `url`; `token` identifies the
/// payment when embedding the gateway's payment page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayResult {
    pub token: String,
    pub url: String,
}

impl GatewayResult {
    pub fn new(token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            url: url.into(),
        }
    }
}
