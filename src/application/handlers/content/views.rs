//! Response views for content queries.
//!
//! Views are what the API hands out: items with their custom fields
//! resolved and delivery filters applied. They serialise directly into
//! the response body.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::content::filters::strip_size_attributes;
use crate::domain::content::{
    parse_stock, ContentError, ContentItem, ContentKind, ContentRef, Currency, CustomFields,
    FieldValue, BRAND_FIELD, PRICE_FIELD, STOCK_FIELD,
};
use crate::domain::foundation::ContentId;
use crate::ports::ContentReader;

/// Keys the product view adds on top of the stored fields.
const AMOUNT_KEY: &str = "amount";
const CURRENCY_KEY: &str = "currency";

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub id: ContentId,
    pub title: String,
    pub content: String,
    pub date: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
    pub custom_fields: CustomFields,
}

impl PostView {
    pub fn from_item(item: ContentItem) -> Self {
        Self {
            id: item.id,
            content: strip_size_attributes(&item.content),
            title: item.title,
            date: item.published_at,
            categories: item.categories,
            custom_fields: item.fields,
        }
    }
}

/// The brand a product points at, reduced to what the storefront shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSummary {
    pub id: ContentId,
    pub title: String,
}

/// Product custom fields with the brand resolved and pricing attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFieldsView {
    /// `None` when the stored value is unreadable; it is then served as
    /// stored through `extra`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub brand: Option<BrandSummary>,
    pub amount: Option<f64>,
    pub currency: Currency,
    #[serde(flatten)]
    pub extra: CustomFields,
}

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: ContentId,
    pub title: String,
    pub content: String,
    pub date: Option<DateTime<Utc>>,
    pub custom_fields: ProductFieldsView,
}

/// How a known product field read from the stored map.
enum KnownField<T> {
    Missing,
    Parsed(T),
    /// Present but unreadable; left in the map untouched.
    Raw,
}

/// Takes a known field out of `fields` if it parses. Unreadable values
/// stay in the map so they are served as stored.
fn take_known<T>(
    fields: &mut CustomFields,
    name: &str,
    parse: impl FnOnce(&FieldValue) -> Option<T>,
) -> KnownField<T> {
    let known = match fields.get(name) {
        None | Some(FieldValue::Null) => KnownField::Missing,
        Some(value) => parse(value).map_or(KnownField::Raw, KnownField::Parsed),
    };
    if !matches!(known, KnownField::Raw) {
        fields.remove(name);
    }
    known
}

impl ProductView {
    /// Builds the view from a product and its already resolved brand.
    ///
    /// Never fails: a stock or price that does not parse is served as
    /// stored with a null `amount`, so one bad product cannot take a
    /// listing down with it.
    pub fn from_item(item: ContentItem, brand: Option<BrandSummary>) -> Self {
        let mut extra = item.fields;
        extra.remove(AMOUNT_KEY);
        extra.remove(CURRENCY_KEY);
        extra.remove(BRAND_FIELD);

        let stock = match take_known(&mut extra, STOCK_FIELD, |v| parse_stock(v).ok()) {
            KnownField::Missing => Some(0),
            KnownField::Parsed(stock) => Some(stock),
            KnownField::Raw => {
                tracing::warn!(product_id = %item.id, "Product stock is unreadable, serving raw value");
                None
            }
        };

        let price = match take_known(&mut extra, PRICE_FIELD, FieldValue::as_f64) {
            KnownField::Missing => None,
            KnownField::Parsed(price) => Some(price),
            KnownField::Raw => {
                tracing::warn!(product_id = %item.id, "Product price is not a number, amount omitted");
                None
            }
        };

        Self {
            id: item.id,
            content: strip_size_attributes(&item.content),
            title: item.title,
            date: item.published_at,
            custom_fields: ProductFieldsView {
                stock,
                price,
                brand,
                amount: price,
                currency: Currency::Eur,
                extra,
            },
        }
    }
}

/// The brand reference stored on a product, if it is one.
pub(crate) fn brand_reference(item: &ContentItem) -> Option<ContentRef> {
    let value = item.field(BRAND_FIELD)?;
    let reference = value.as_reference();
    if reference.is_none() && !value.is_null() {
        tracing::warn!(product_id = %item.id, "Product brand is not a content reference");
    }
    reference
}

/// Looks up the brand a product references.
///
/// A dangling reference, or one pointing at something other than a brand,
/// resolves to `None`.
pub(crate) async fn resolve_brand(
    reader: &dyn ContentReader,
    reference: Option<ContentRef>,
) -> Result<Option<BrandSummary>, ContentError> {
    let Some(reference) = reference else {
        return Ok(None);
    };

    let brand = reader
        .get(reference.id)
        .await?
        .filter(|item| item.kind == ContentKind::Brand);

    if brand.is_none() {
        tracing::debug!(brand_id = %reference.id, "Brand reference does not resolve");
    }

    Ok(brand.map(|item| BrandSummary {
        id: item.id,
        title: item.title,
    }))
}

/// Builds a product view, resolving its brand through `reader`.
pub(crate) async fn product_view(
    reader: &dyn ContentReader,
    item: ContentItem,
) -> Result<ProductView, ContentError> {
    let brand = resolve_brand(reader, brand_reference(&item)).await?;
    Ok(ProductView::from_item(item, brand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn post_view_strips_image_sizes() {
        let item = ContentItem::new(ContentId::new(1), ContentKind::Post, "Hello")
            .unwrap()
            .with_content(r#"<img width="10" height="10" src="/x.png">"#)
            .with_category("News")
            .published(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());

        let view = PostView::from_item(item);

        assert_eq!(view.content, r#"<img src="/x.png">"#);
        assert_eq!(view.categories, vec!["News".to_string()]);
        assert!(view.date.is_some());
    }

    #[test]
    fn product_view_adds_amount_and_currency() {
        let item = ContentItem::new(ContentId::new(2), ContentKind::Product, "Watch")
            .unwrap()
            .with_field("stock", 5i64)
            .with_field("price", 199.0)
            .with_field("strap", "leather");
        let brand = BrandSummary {
            id: ContentId::new(3),
            title: "Acme".to_string(),
        };

        let view = ProductView::from_item(item, Some(brand));
        let json = serde_json::to_value(&view.custom_fields).unwrap();

        assert_eq!(
            json,
            json!({
                "stock": 5,
                "price": 199.0,
                "brand": {"id": 3, "title": "Acme"},
                "amount": 199.0,
                "currency": "EUR",
                "strap": "leather"
            })
        );
    }

    #[test]
    fn product_view_without_price_or_brand() {
        let item = ContentItem::new(ContentId::new(2), ContentKind::Product, "Watch").unwrap();

        let json = serde_json::to_value(ProductView::from_item(item, None)).unwrap();

        assert_eq!(json["custom_fields"]["brand"], json!(null));
        assert_eq!(json["custom_fields"]["amount"], json!(null));
        assert!(json["custom_fields"].get("price").is_none());
    }

    #[test]
    fn unreadable_price_is_served_raw_without_amount() {
        let item = ContentItem::new(ContentId::new(2), ContentKind::Product, "Watch")
            .unwrap()
            .with_field("stock", 5i64)
            .with_field("price", "199,90");

        let json = serde_json::to_value(ProductView::from_item(item, None)).unwrap();

        assert_eq!(json["custom_fields"]["price"], json!("199,90"));
        assert_eq!(json["custom_fields"]["amount"], json!(null));
        assert_eq!(json["custom_fields"]["stock"], json!(5));
    }

    #[test]
    fn unreadable_stock_is_served_raw() {
        let item = ContentItem::new(ContentId::new(2), ContentKind::Product, "Watch")
            .unwrap()
            .with_field("stock", -3i64)
            .with_field("price", 10.0);

        let view = ProductView::from_item(item, None);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(view.custom_fields.stock, None);
        assert_eq!(json["custom_fields"]["stock"], json!(-3));
        assert_eq!(json["custom_fields"]["amount"], json!(10.0));
    }

    #[test]
    fn non_reference_brand_resolves_to_nothing() {
        let item = ContentItem::new(ContentId::new(2), ContentKind::Product, "Watch")
            .unwrap()
            .with_field("brand", "Acme");

        assert_eq!(brand_reference(&item), None);
        let json = serde_json::to_value(ProductView::from_item(item, None)).unwrap();
        assert_eq!(json["custom_fields"]["brand"], json!(null));
    }
}
