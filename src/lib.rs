//! Client for the Paytrail REST payment API.
//!
//! Build a [`SimplePayment`] or an [`ItemizedPayment`], submit it with
//! [`PaytrailClient::submit`] and redirect the user to the returned URL.
//! When the gateway calls back, check the parameters with
//! [`PaytrailClient::verify_callback`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::client::PaytrailClient;
pub use config::{ClientConfig, Credentials};
pub use domain::callback::CallbackParams;
pub use domain::contact::Contact;
pub use domain::line_item::{ItemType, LineItem};
pub use domain::payment::{Currency, ItemizedPayment, Locale, Payment, SimplePayment};
pub use domain::result::GatewayResult;
pub use domain::url_set::ReturnUrlSet;
pub use error::{GatewayError, PaytrailError, Result, TransportError};
