//! Typed view over a product's custom fields.
//!
//! Products carry a handful of known fields (`stock`, `price`, `brand`)
//! on top of the open field map. [`ProductFields`] parses the known ones
//! and keeps everything else in `extra`.

use serde::{Deserialize, Serialize};

use super::{ContentRef, CustomFields, FieldValue};
use crate::domain::foundation::ValidationError;

pub const STOCK_FIELD: &str = "stock";
pub const PRICE_FIELD: &str = "price";
pub const BRAND_FIELD: &str = "brand";

/// Currency all prices are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

/// Known product fields plus an extension map for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    /// Units on hand. A missing field counts as zero.
    pub stock: u64,
    pub price: Option<f64>,
    pub brand: Option<ContentRef>,
    pub currency: Currency,
    pub extra: CustomFields,
}

impl ProductFields {
    /// Parses the known fields out of a product's field map.
    pub fn from_fields(fields: &CustomFields) -> Result<Self, ValidationError> {
        let mut extra = fields.clone();

        let stock = match extra.remove(STOCK_FIELD) {
            None | Some(FieldValue::Null) => 0,
            Some(value) => parse_stock(&value)?,
        };

        let price = match extra.remove(PRICE_FIELD) {
            None | Some(FieldValue::Null) => None,
            Some(value) => Some(value.as_f64().ok_or_else(|| {
                ValidationError::invalid_format(PRICE_FIELD, "expected a number")
            })?),
        };

        let brand = match extra.remove(BRAND_FIELD) {
            None | Some(FieldValue::Null) => None,
            Some(value) => Some(value.as_reference().ok_or_else(|| {
                ValidationError::invalid_format(BRAND_FIELD, "expected a content reference")
            })?),
        };

        Ok(Self {
            stock,
            price,
            brand,
            currency: Currency::Eur,
            extra,
        })
    }

    /// Flattens back into a field map.
    pub fn into_fields(self) -> CustomFields {
        let mut fields = self.extra;
        fields.insert(STOCK_FIELD.to_string(), stock_value(self.stock));
        if let Some(price) = self.price {
            fields.insert(PRICE_FIELD.to_string(), FieldValue::Number(price));
        }
        if let Some(brand) = self.brand {
            fields.insert(BRAND_FIELD.to_string(), FieldValue::Reference(brand));
        }
        fields
    }
}

/// Reads a stock level, rejecting negatives and non-integers.
pub fn parse_stock(value: &FieldValue) -> Result<u64, ValidationError> {
    let raw = value
        .as_i64()
        .ok_or_else(|| ValidationError::invalid_format(STOCK_FIELD, "expected an integer"))?;
    u64::try_from(raw).map_err(|_| ValidationError::out_of_range(STOCK_FIELD, 0, i64::MAX, raw))
}

/// Field value for a stock level.
pub fn stock_value(stock: u64) -> FieldValue {
    FieldValue::Integer(i64::try_from(stock).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentKind;
    use crate::domain::foundation::ContentId;

    fn brand_ref() -> ContentRef {
        ContentRef::new(ContentKind::Brand, ContentId::new(3))
    }

    #[test]
    fn parses_known_fields_and_keeps_extras() {
        let mut fields = CustomFields::new();
        fields.insert("stock".into(), FieldValue::Integer(10));
        fields.insert("price".into(), FieldValue::Number(249.9));
        fields.insert("brand".into(), FieldValue::Reference(brand_ref()));
        fields.insert("colour".into(), FieldValue::from("black"));

        let product = ProductFields::from_fields(&fields).unwrap();

        assert_eq!(product.stock, 10);
        assert_eq!(product.price, Some(249.9));
        assert_eq!(product.brand, Some(brand_ref()));
        assert_eq!(product.currency.code(), "EUR");
        assert_eq!(product.extra.len(), 1);
        assert!(product.extra.contains_key("colour"));
    }

    #[test]
    fn missing_stock_counts_as_zero() {
        let product = ProductFields::from_fields(&CustomFields::new()).unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.price, None);
        assert_eq!(product.brand, None);
    }

    #[test]
    fn accepts_numeric_text_stock() {
        let mut fields = CustomFields::new();
        fields.insert("stock".into(), FieldValue::from("12"));
        assert_eq!(ProductFields::from_fields(&fields).unwrap().stock, 12);
    }

    #[test]
    fn rejects_negative_stock() {
        let mut fields = CustomFields::new();
        fields.insert("stock".into(), FieldValue::Integer(-2));
        let err = ProductFields::from_fields(&fields).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: -2, .. }));
    }

    #[test]
    fn rejects_brand_that_is_not_a_reference() {
        let mut fields = CustomFields::new();
        fields.insert("brand".into(), FieldValue::from("Acme"));
        assert!(ProductFields::from_fields(&fields).is_err());
    }

    #[test]
    fn into_fields_restores_known_fields() {
        let mut fields = CustomFields::new();
        fields.insert("stock".into(), FieldValue::Integer(4));
        fields.insert("brand".into(), FieldValue::Reference(brand_ref()));
        fields.insert("colour".into(), FieldValue::from("black"));

        let restored = ProductFields::from_fields(&fields).unwrap().into_fields();
        assert_eq!(restored, fields);
    }
}
