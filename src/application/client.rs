use crate::config::{ClientConfig, Credentials};
use crate::domain::callback::{CallbackParams, auth_code};
use crate::domain::payment::Payment;
use crate::domain::ports::{TransportBox, TransportResponse};
use crate::domain::result::GatewayResult;
use crate::error::{GatewayError, MALFORMED_RESPONSE, Result, UNKNOWN_ERROR};
use crate::infrastructure::http::ReqwestTransport;
use serde::Deserialize;
use serde_json::Value;

const HTTP_CREATED: u16 = 201;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_code: String,
    error_message: String,
}

/// Client for the Paytrail REST payment API.
///
/// Holds the merchant credentials and an authenticated transport. A client
/// never mutates the payments it submits, and performs no retries: every
/// failure is returned to the caller as-is.
pub struct PaytrailClient {
    config: ClientConfig,
    transport: TransportBox,
}

impl PaytrailClient {
    /// Version of the payment module protocol this client speaks.
    pub const VERSION: &'static str = "1.0";

    /// Creates a client talking to the gateway over HTTPS.
    ///
    /// # Arguments
    ///
    /// * `config` - Merchant credentials, service URL and request timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Box::new(ReqwestTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a client using a caller-provided transport.
    pub fn with_transport(config: ClientConfig, transport: TransportBox) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn version(&self) -> &'static str {
        Self::VERSION
    }

    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    pub fn service_url(&self) -> &str {
        &self.config.service_url
    }

    /// Creates the payment at the gateway and returns where to send the user.
    pub async fn submit(&self, payment: &dyn Payment) -> Result<GatewayResult> {
        let payload = payment.to_wire_payload()?;
        let url = self.config.create_payment_url();
        tracing::debug!(
            order_number = payment.order_number(),
            %url,
            "submitting payment"
        );

        let response = self.transport.post_json(&url, &payload).await?;
        let result = parse_response(response);
        match &result {
            Ok(created) => {
                tracing::debug!(token = %created.token, "payment token issued");
                tracing::info!(order_number = payment.order_number(), "payment created");
            }
            Err(err) => {
                tracing::warn!(
                    order_number = payment.order_number(),
                    code = %err.code,
                    "payment rejected"
                );
            }
        }
        Ok(result?)
    }

    /// Checks the authentication code of a return or notification callback.
    ///
    /// Returns `false` for any tampered field. Callers should treat a
    /// mismatch as a possible forgery and not confirm the order.
    pub fn verify_callback(
        &self,
        order_number: &str,
        timestamp: &str,
        paid: &str,
        method: &str,
        auth_code: &str,
    ) -> bool {
        let expected = self.callback_auth_code(order_number, timestamp, paid, method);
        let valid = expected == auth_code;
        if !valid {
            tracing::warn!(order_number, "callback authentication code mismatch");
        }
        valid
    }

    pub fn verify_callback_params(&self, params: &CallbackParams) -> bool {
        self.verify_callback(
            &params.order_number,
            &params.timestamp,
            &params.paid,
            &params.method,
            &params.auth_code,
        )
    }

    /// Computes the authentication code the gateway would send for these fields.
    pub fn callback_auth_code(
        &self,
        order_number: &str,
        timestamp: &str,
        paid: &str,
        method: &str,
    ) -> String {
        auth_code(
            order_number,
            timestamp,
            paid,
            method,
            &self.config.credentials.merchant_secret,
        )
    }
}

fn parse_response(
    response: TransportResponse,
) -> std::result::Result<GatewayResult, GatewayError> {
    if response.status != HTTP_CREATED {
        return Err(match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(body) => GatewayError::new(body.error_code, body.error_message),
            Err(_) => GatewayError::new(
                UNKNOWN_ERROR,
                format!("HTTP {}: {}", response.status, response.body),
            ),
        });
    }

    if response.body.trim().is_empty() {
        return Err(GatewayError::new(
            UNKNOWN_ERROR,
            "Gateway returned an empty response",
        ));
    }

    let data: Value = serde_json::from_str(&response.body).map_err(|e| {
        GatewayError::new(MALFORMED_RESPONSE, format!("Response is not valid JSON: {e}"))
    })?;

    let empty = match &data {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(GatewayError::new(
            UNKNOWN_ERROR,
            "Gateway returned an empty response",
        ));
    }

    let field = |name: &str| {
        data.get(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                GatewayError::new(MALFORMED_RESPONSE, format!("Response is missing `{name}`"))
            })
    };

    Ok(GatewayResult::new(field("token")?, field("url")?))
}
