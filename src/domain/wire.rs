//! Borrowed views of the payment types in the exact JSON shape of
//! `POST /api-payment/create`.

use super::contact::Contact;
use super::line_item::{ItemType, LineItem, serialize_item_type};
use super::payment::{Currency, Locale, PaymentDetails};
use super::url_set::ReturnUrlSet;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentEnvelope<'a, B: Serialize> {
    order_number: &'a str,
    reference_number: &'a str,
    description: &'a str,
    currency: Currency,
    locale: Locale,
    url_set: UrlSetWire<'a>,
    #[serde(flatten)]
    body: B,
}

impl<'a, B: Serialize> PaymentEnvelope<'a, B> {
    pub(crate) fn new(details: &'a PaymentDetails, body: B) -> Self {
        Self {
            order_number: details.order_number(),
            reference_number: details.reference_number(),
            description: details.description(),
            currency: details.currency(),
            locale: details.locale(),
            url_set: UrlSetWire::from(details.url_set()),
            body,
        }
    }
}

#[derive(Serialize)]
struct UrlSetWire<'a> {
    success: &'a str,
    failure: &'a str,
    pending: Option<&'a str>,
    notification: &'a str,
}

impl<'a> From<&'a ReturnUrlSet> for UrlSetWire<'a> {
    fn from(urls: &'a ReturnUrlSet) -> Self {
        Self {
            success: &urls.success_url,
            failure: &urls.failure_url,
            pending: urls.pending_url.as_deref(),
            notification: &urls.notification_url,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct SimpleBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) price: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemizedBody<'a> {
    pub(crate) order_details: OrderDetailsWire<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderDetailsWire<'a> {
    #[serde(serialize_with = "serialize_flag")]
    include_vat: bool,
    contact: ContactWire<'a>,
    products: Vec<ProductWire<'a>>,
}

impl<'a> OrderDetailsWire<'a> {
    pub(crate) fn new(include_vat: bool, contact: &'a Contact, items: &'a [LineItem]) -> Self {
        Self {
            include_vat,
            contact: ContactWire::from(contact),
            products: items.iter().map(ProductWire::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactWire<'a> {
    telephone: &'a str,
    mobile: &'a str,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    company_name: &'a str,
    address: AddressWire<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressWire<'a> {
    street: &'a str,
    postal_code: &'a str,
    postal_office: &'a str,
    country: &'a str,
}

impl<'a> From<&'a Contact> for ContactWire<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            telephone: &contact.telephone,
            mobile: &contact.mobile,
            email: &contact.email,
            first_name: &contact.first_name,
            last_name: &contact.last_name,
            company_name: &contact.company,
            address: AddressWire {
                street: &contact.street,
                postal_code: &contact.postal_code,
                postal_office: &contact.postal_office,
                country: &contact.country,
            },
        }
    }
}

#[derive(Serialize)]
struct ProductWire<'a> {
    title: &'a str,
    code: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    vat: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    discount: Decimal,
    #[serde(rename = "type", serialize_with = "serialize_item_type")]
    item_type: ItemType,
}

impl<'a> From<&'a LineItem> for ProductWire<'a> {
    fn from(item: &'a LineItem) -> Self {
        Self {
            title: item.title(),
            code: item.code(),
            amount: item.quantity(),
            price: item.price(),
            vat: item.vat(),
            discount: item.discount(),
            item_type: item.item_type(),
        }
    }
}

// The gateway expects 1/0 rather than a JSON boolean.
fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}
