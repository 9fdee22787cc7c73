mod common;

use common::{contact, line_item, url_set};
use paytrail_rest::{ItemizedPayment, Payment, SimplePayment};
use rust_decimal_macros::dec;
use serde_json::Value;
use std::collections::BTreeSet;

fn keys(value: &Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn test_simple_payload_has_exact_keys() {
    let payment = SimplePayment::new("1001", url_set(), dec!(25.50));
    let encoded = serde_json::to_string(&payment.to_wire_payload().unwrap()).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(
        keys(&decoded),
        BTreeSet::from([
            "orderNumber",
            "referenceNumber",
            "description",
            "currency",
            "locale",
            "urlSet",
            "price",
        ])
    );
    assert_eq!(
        keys(&decoded["urlSet"]),
        BTreeSet::from(["success", "failure", "pending", "notification"])
    );
    assert_eq!(decoded["price"].as_f64(), Some(25.5));
}

#[test]
fn test_itemized_payload_has_exact_keys() {
    let mut payment = ItemizedPayment::new("1002", url_set(), contact());
    payment.add_line_item(line_item("Book")).unwrap();
    let payload = payment.to_wire_payload().unwrap();

    assert_eq!(
        keys(&payload),
        BTreeSet::from([
            "orderNumber",
            "referenceNumber",
            "description",
            "currency",
            "locale",
            "urlSet",
            "orderDetails",
        ])
    );

    let details = &payload["orderDetails"];
    assert_eq!(keys(details), BTreeSet::from(["includeVat", "contact", "products"]));
    assert_eq!(details["includeVat"], Value::from(1));
    assert_eq!(
        keys(&details["contact"]),
        BTreeSet::from([
            "telephone",
            "mobile",
            "email",
            "firstName",
            "lastName",
            "companyName",
            "address",
        ])
    );
    assert_eq!(
        keys(&details["contact"]["address"]),
        BTreeSet::from(["street", "postalCode", "postalOffice", "country"])
    );
    assert_eq!(
        keys(&details["products"][0]),
        BTreeSet::from(["title", "code", "amount", "price", "vat", "discount", "type"])
    );
}

#[test]
fn test_itemized_payload_keeps_every_item_in_order() {
    let mut payment = ItemizedPayment::new("1003", url_set(), contact());
    let titles = ["First", "Second", "Third"];
    for title in titles {
        payment.add_line_item(line_item(title)).unwrap();
    }

    let payload = payment.to_wire_payload().unwrap();
    let products = payload["orderDetails"]["products"].as_array().unwrap();
    let serialized: Vec<&str> = products
        .iter()
        .map(|product| product["title"].as_str().unwrap())
        .collect();
    assert_eq!(serialized, titles);
}

#[test]
fn test_payload_reflects_setters() {
    let mut payment = SimplePayment::new("1004", url_set(), dec!(10));
    payment.set_currency("SEK").unwrap();
    payment.set_locale("sv_SE").unwrap();
    payment.set_description("internal note");

    let payload = payment.to_wire_payload().unwrap();
    assert_eq!(payload["currency"], "SEK");
    assert_eq!(payload["locale"], "sv_SE");
    assert_eq!(payload["description"], "internal note");
    assert_eq!(payload["referenceNumber"], "");
}
