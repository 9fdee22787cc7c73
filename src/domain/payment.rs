use super::contact::Contact;
use super::line_item::LineItem;
use super::url_set::ReturnUrlSet;
use super::wire::{ItemizedBody, OrderDetailsWire, PaymentEnvelope, SimpleBody};
use crate::error::{PaytrailError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of product rows the gateway accepts in one payment.
pub const MAX_LINE_ITEMS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "SEK")]
    Sek,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Sek => "SEK",
        }
    }
}

impl FromStr for Currency {
    type Err = PaytrailError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "SEK" => Ok(Currency::Sek),
            _ => Err(PaytrailError::ValidationError(format!(
                "Unsupported currency {s:?}, only EUR and SEK are supported"
            ))),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language and number/date presentation used on the payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "fi_FI")]
    FiFi,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "sv_SE")]
    SvSe,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::FiFi => "fi_FI",
            Locale::EnUs => "en_US",
            Locale::SvSe => "sv_SE",
        }
    }
}

impl FromStr for Locale {
    type Err = PaytrailError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fi_FI" => Ok(Locale::FiFi),
            "en_US" => Ok(Locale::EnUs),
            "sv_SE" => Ok(Locale::SvSe),
            _ => Err(PaytrailError::ValidationError(format!(
                "Given locale is unsupported: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every payment variant.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    order_number: String,
    url_set: ReturnUrlSet,
    reference_number: String,
    description: String,
    currency: Currency,
    locale: Locale,
}

impl PaymentDetails {
    pub fn new(order_number: impl Into<String>, url_set: ReturnUrlSet) -> Self {
        Self {
            order_number: order_number.into(),
            url_set,
            reference_number: String::new(),
            description: String::new(),
            currency: Currency::default(),
            locale: Locale::default(),
        }
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn url_set(&self) -> &ReturnUrlSet {
        &self.url_set
    }

    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// A payment that can be submitted to the gateway.
///
/// Shared getters and setters are provided on top of [`PaymentDetails`], so a
/// variant only has to expose its details and build its own wire payload.
pub trait Payment: Send + Sync {
    fn details(&self) -> &PaymentDetails;

    fn details_mut(&mut self) -> &mut PaymentDetails;

    /// Builds the JSON body expected by `POST /api-payment/create`.
    fn to_wire_payload(&self) -> Result<serde_json::Value>;

    fn order_number(&self) -> &str {
        self.details().order_number()
    }

    fn url_set(&self) -> &ReturnUrlSet {
        self.details().url_set()
    }

    /// Sets a custom reference number.
    ///
    /// Only used for payment methods running on the merchant's own contract;
    /// for all others the gateway generates the reference number itself.
    fn set_reference_number(&mut self, reference_number: impl Into<String>)
    where
        Self: Sized,
    {
        self.details_mut().reference_number = reference_number.into();
    }

    fn reference_number(&self) -> &str {
        self.details().reference_number()
    }

    /// Sets a private description, visible only in the merchant's panel.
    fn set_description(&mut self, description: impl Into<String>)
    where
        Self: Sized,
    {
        self.details_mut().description = description.into();
    }

    fn description(&self) -> &str {
        self.details().description()
    }

    fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.details_mut().locale = locale.parse()?;
        Ok(())
    }

    fn locale(&self) -> Locale {
        self.details().locale()
    }

    fn set_currency(&mut self, currency: &str) -> Result<()> {
        self.details_mut().currency = currency.parse()?;
        Ok(())
    }

    fn currency(&self) -> Currency {
        self.details().currency()
    }
}

/// A payment described by its total price only.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePayment {
    details: PaymentDetails,
    price: Decimal,
}

impl SimplePayment {
    pub fn new(order_number: impl Into<String>, url_set: ReturnUrlSet, price: Decimal) -> Self {
        Self {
            details: PaymentDetails::new(order_number, url_set),
            price,
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Payment for SimplePayment {
    fn details(&self) -> &PaymentDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut PaymentDetails {
        &mut self.details
    }

    fn to_wire_payload(&self) -> Result<serde_json::Value> {
        let envelope = PaymentEnvelope::new(&self.details, SimpleBody { price: self.price });
        Ok(serde_json::to_value(envelope)?)
    }
}

/// A payment with a contact and individual product rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemizedPayment {
    details: PaymentDetails,
    contact: Contact,
    items: Vec<LineItem>,
    include_vat: bool,
}

impl ItemizedPayment {
    pub fn new(order_number: impl Into<String>, url_set: ReturnUrlSet, contact: Contact) -> Self {
        Self {
            details: PaymentDetails::new(order_number, url_set),
            contact,
            items: Vec::new(),
            include_vat: true,
        }
    }

    /// Appends a product row.
    ///
    /// Identical products should be grouped via the quantity; the gateway
    /// accepts at most [`MAX_LINE_ITEMS`] rows.
    pub fn add_line_item(&mut self, item: LineItem) -> Result<()> {
        if self.items.len() >= MAX_LINE_ITEMS {
            return Err(PaytrailError::ValidationError(format!(
                "Too many products: the gateway accepts up to {MAX_LINE_ITEMS} product rows, \
                 group identical products using the quantity"
            )));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// Selects whether line item prices include VAT (the default) or not.
    pub fn set_include_vat(&mut self, include_vat: bool) {
        self.include_vat = include_vat;
    }

    pub fn include_vat(&self) -> bool {
        self.include_vat
    }
}

impl Payment for ItemizedPayment {
    fn details(&self) -> &PaymentDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut PaymentDetails {
        &mut self.details
    }

    fn to_wire_payload(&self) -> Result<serde_json::Value> {
        let body = ItemizedBody {
            order_details: OrderDetailsWire::new(self.include_vat, &self.contact, &self.items),
        };
        Ok(serde_json::to_value(PaymentEnvelope::new(&self.details, body))?)
    }
}
