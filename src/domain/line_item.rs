use crate::error::{PaytrailError, Result};
use rust_decimal::Decimal;
use serde::Serializer;

/// Kind of product row, sent to the gateway as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemType {
    #[default]
    Normal = 1,
    Postal = 2,
    Handling = 3,
}

impl ItemType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

pub(crate) fn serialize_item_type<S>(
    item_type: &ItemType,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(item_type.code())
}

/// One product row of an itemized payment.
///
/// Quantity, unit price, VAT percentage and discount percentage are
/// validated to be non-negative at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    title: String,
    code: String,
    quantity: Decimal,
    price: Decimal,
    vat: Decimal,
    discount: Decimal,
    item_type: ItemType,
}

impl LineItem {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
        vat: Decimal,
        discount: Decimal,
        item_type: ItemType,
    ) -> Result<Self> {
        for (name, value) in [
            ("quantity", quantity),
            ("price", price),
            ("vat", vat),
            ("discount", discount),
        ] {
            if value < Decimal::ZERO {
                return Err(PaytrailError::ValidationError(format!(
                    "Line item {name} must not be negative, got {value}"
                )));
            }
        }

        Ok(Self {
            title: title.into(),
            code: code.into(),
            quantity,
            price,
            vat,
            discount,
            item_type,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn vat(&self) -> Decimal {
        self.vat
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_validation() {
        let book = |quantity, discount| {
            LineItem::new("Book", "B1", quantity, dec!(9.90), dec!(24), discount, ItemType::Normal)
        };

        assert!(book(dec!(1), dec!(0)).is_ok());
        assert!(matches!(
            book(dec!(-1), dec!(0)),
            Err(PaytrailError::ValidationError(_))
        ));
        assert!(matches!(
            book(dec!(1), dec!(-0.5)),
            Err(PaytrailError::ValidationError(_))
        ));
    }

    #[test]
    fn test_item_type_codes() {
        assert_eq!(ItemType::Normal.code(), 1);
        assert_eq!(ItemType::Postal.code(), 2);
        assert_eq!(ItemType::Handling.code(), 3);
        assert_eq!(ItemType::default(), ItemType::Normal);
    }
}
