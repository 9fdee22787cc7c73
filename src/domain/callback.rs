use serde::Deserialize;

/// Parameters the gateway appends to the success, failure and notification
/// URLs. Field names match the query parameters so a web framework can
/// deserialize them directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallbackParams {
    #[serde(rename = "ORDER_NUMBER")]
    pub order_number: String,
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: String,
    #[serde(rename = "PAID")]
    pub paid: String,
    #[serde(rename = "METHOD")]
    pub method: String,
    #[serde(rename = "RETURN_AUTHCODE")]
    pub auth_code: String,
}

/// Computes the callback authentication code.
///
/// Uppercase hex MD5 of `order_number|timestamp|paid|method|secret`. This
/// scheme is dictated by the gateway protocol and is neither constant-time
/// nor a proper MAC.
pub fn auth_code(
    order_number: &str,
    timestamp: &str,
    paid: &str,
    method: &str,
    secret: &str,
) -> String {
    let base = [order_number, timestamp, paid, method, secret].join("|");
    format!("{:X}", md5::compute(base.as_bytes()))
}
