//! Payment data model, wire payloads and the transport port.

pub mod callback;
pub mod contact;
pub mod line_item;
pub mod payment;
pub mod ports;
pub mod result;
pub mod url_set;
mod wire;
