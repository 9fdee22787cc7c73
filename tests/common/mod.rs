#![allow(dead_code)]

use paytrail_rest::infrastructure::in_memory::StubTransport;
use paytrail_rest::{ClientConfig, Contact, ItemType, LineItem, PaytrailClient, ReturnUrlSet};
use rust_decimal_macros::dec;

pub const MERCHANT_ID: &str = "13466";
pub const MERCHANT_SECRET: &str = "6pKF4jkv97zmqBJ3ZL8gUw5DfT2NMQ";

pub fn url_set() -> ReturnUrlSet {
    ReturnUrlSet::new(
        "https://shop.example/success",
        "https://shop.example/failure",
        "https://shop.example/notify",
    )
}

pub fn contact() -> Contact {
    Contact::new(
        "Test",
        "Person",
        "test.person@example.com",
        "Test street 1",
        "00100",
        "Helsinki",
        "FI",
    )
    .with_telephone("040 123 4567")
}

pub fn line_item(title: &str) -> LineItem {
    LineItem::new(title, "SKU", dec!(1), dec!(9.90), dec!(24), dec!(0), ItemType::Normal)
        .expect("valid line item")
}

pub fn stub_client(stub: &StubTransport) -> PaytrailClient {
    PaytrailClient::with_transport(
        ClientConfig::new(MERCHANT_ID, MERCHANT_SECRET),
        Box::new(stub.clone()),
    )
    .expect("valid config")
}
