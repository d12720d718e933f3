//! Canonical record shapes and the normalizers that produce them.
//!
//! The backing API shifted field-naming conventions more than once
//! (camelCase, snake_case, legacy names, nested join rows). Instead of a
//! migration, every read path funnels through these functions so the rest
//! of the system only ever sees one shape. All of them are pure and total:
//! missing or malformed fields degrade to `None` / `""` / `0`, never an
//! error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::aliases::{
    ITEM_QTY_KEYS, ITEM_TOTAL_KEYS, ORDER_COUNT_KEYS, ORDER_DATE_KEYS, ORDER_ID_KEYS,
    ORDER_ITEMS_IN_KEYS, ORDER_NUMBER_KEYS, ORDER_STATUS_KEYS, ORDER_TOTAL_KEYS, PRODUCT_ID_KEYS,
    PRODUCT_NAME_KEYS, PRODUCT_PRICE_KEYS,
};
use super::value::{first_present, parse_id, to_number};

pub const DEFAULT_ORDER_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub product_id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
    pub qty: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Option<i64>,
    pub order_number: String,
    pub date: Option<String>,
    pub products_count: f64,
    pub final_price: f64,
    pub status: String,
    pub items: Vec<OrderItemRecord>,
}

pub fn normalize_product(record: &Value) -> ProductRecord {
    let empty = Map::new();
    let record = record.as_object().unwrap_or(&empty);

    ProductRecord {
        id: first_present(record, PRODUCT_ID_KEYS).and_then(parse_id),
        name: first_present(record, PRODUCT_NAME_KEYS)
            .map(text)
            .unwrap_or_default(),
        unit_price: first_present(record, PRODUCT_PRICE_KEYS)
            .map(|v| to_number(v, 0.0))
            .unwrap_or(0.0),
    }
}

pub fn normalize_order_item(record: &Value) -> OrderItemRecord {
    let empty = Map::new();
    let item = record.as_object().unwrap_or(&empty);

    // Older revisions nest the product row (`Product`/`product`) and the
    // join row (`OrderProduct`); identity, name and price fall through to
    // them in this exact order.
    let product = first_present(item, &["Product", "product"]).and_then(Value::as_object);
    let join = first_present(item, &["OrderProduct"]).and_then(Value::as_object);

    let product_id = first_present(item, &["productId", "product_id", "id"])
        .or_else(|| product.and_then(|p| first_present(p, &["id"])))
        .or_else(|| join.and_then(|j| first_present(j, &["productId", "product_id"])))
        .and_then(parse_id);

    let name = first_present(item, &["name", "productName"])
        .or_else(|| product.and_then(|p| first_present(p, &["name"])))
        .or_else(|| first_present(item, &["ProductName"]))
        .map(text)
        .unwrap_or_default();

    let unit_price_source = first_present(item, &["unitPrice", "unit_price"])
        .or_else(|| product.and_then(|p| first_present(p, &["unitPrice", "unit_price", "price"])))
        .or_else(|| first_present(item, &["price", "unitprice"]));
    let unit_price = unit_price_source.map(|v| to_number(v, 0.0)).unwrap_or(0.0);

    let qty = first_present(item, ITEM_QTY_KEYS)
        .map(|v| to_number(v, 0.0))
        .unwrap_or(0.0);

    let total_price = first_present(item, ITEM_TOTAL_KEYS)
        .map(|v| to_number(v, 0.0))
        .unwrap_or(unit_price * qty);

    OrderItemRecord {
        product_id,
        name,
        unit_price,
        qty,
        total_price,
    }
}

pub fn normalize_order(record: &Value) -> OrderRecord {
    let empty = Map::new();
    let order = record.as_object().unwrap_or(&empty);

    let items: Vec<OrderItemRecord> = first_present(order, ORDER_ITEMS_IN_KEYS)
        .and_then(Value::as_array)
        .map(|raw| raw.iter().map(normalize_order_item).collect())
        .unwrap_or_default();

    let products_count = first_present(order, ORDER_COUNT_KEYS)
        .map(|v| to_number(v, 0.0))
        .unwrap_or_else(|| items.iter().map(|it| it.qty).sum());

    // No derivation from items here: the order total may carry discounts
    // or fees the line items cannot reconstruct.
    let final_price = first_present(order, ORDER_TOTAL_KEYS)
        .map(|v| to_number(v, 0.0))
        .unwrap_or(0.0);

    OrderRecord {
        id: first_present(order, ORDER_ID_KEYS).and_then(parse_id),
        order_number: first_present(order, ORDER_NUMBER_KEYS)
            .map(text)
            .unwrap_or_default(),
        date: first_present(order, ORDER_DATE_KEYS).and_then(optional_text),
        products_count,
        final_price,
        status: first_present(order, ORDER_STATUS_KEYS)
            .map(text)
            .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string()),
        items,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn product_defaults_when_empty() {
        let record = normalize_product(&json!({}));

        assert_eq!(record.id, None);
        assert_eq!(record.name, "");
        assert_eq!(record.unit_price, 0.0);
    }

    #[test]
    fn product_price_aliases_resolve_to_same_value() {
        for key in ["unitPrice", "unit_price", "price", "productPrice"] {
            let record = normalize_product(&json!({key: 10}));
            assert_eq!(record.unit_price, 10.0, "alias {key}");
        }
    }

    #[test]
    fn product_alias_priority_is_left_to_right() {
        let record = normalize_product(&json!({
            "price": 3,
            "unit_price": 2,
            "unitPrice": 1,
        }));
        assert_eq!(record.unit_price, 1.0);

        let record = normalize_product(&json!({"title": "Legacy", "product_name": "Mid"}));
        assert_eq!(record.name, "Mid");
    }

    #[test]
    fn product_normalization_is_idempotent() {
        let once = normalize_product(&json!({
            "product_id": "7",
            "productName": "Widget",
            "price": "19.99",
        }));
        let twice = normalize_product(&serde_json::to_value(&once).unwrap());

        assert_eq!(once, twice);
    }

    #[test]
    fn product_price_coercion_is_permissive() {
        assert_eq!(normalize_product(&json!({"price": "12.50"})).unit_price, 12.5);
        assert_eq!(normalize_product(&json!({"price": "oops"})).unit_price, 0.0);
        assert_eq!(normalize_product(&json!({"price": null, "unit_price": 4})).unit_price, 4.0);
    }

    #[test]
    fn item_total_derives_from_unit_price_and_qty() {
        let item = normalize_order_item(&json!({"productId": 1, "unitPrice": 5, "qty": 3}));

        assert_eq!(item.total_price, 15.0);
    }

    #[test]
    fn item_explicit_total_wins_over_derivation() {
        let item = normalize_order_item(&json!({
            "productId": 1,
            "unitPrice": 5,
            "qty": 3,
            "total_price": 12.5,
        }));

        assert_eq!(item.total_price, 12.5);
    }

    #[test]
    fn item_reads_nested_product_row() {
        let item = normalize_order_item(&json!({
            "qty": 2,
            "Product": {"id": 9, "name": "Bolt", "price": 1.25},
        }));

        assert_eq!(item.product_id, Some(9));
        assert_eq!(item.name, "Bolt");
        assert_eq!(item.unit_price, 1.25);
        assert_eq!(item.total_price, 2.5);
    }

    #[test]
    fn item_reads_join_row_identity() {
        let item = normalize_order_item(&json!({
            "quantity": 1,
            "OrderProduct": {"product_id": 4},
        }));

        assert_eq!(item.product_id, Some(4));
    }

    #[test]
    fn item_own_keys_beat_nested_ones() {
        let item = normalize_order_item(&json!({
            "productId": 1,
            "unit_price": 2,
            "product": {"id": 99, "price": 50},
            "qty": 1,
        }));

        assert_eq!(item.product_id, Some(1));
        assert_eq!(item.unit_price, 2.0);
    }

    #[test]
    fn order_items_first_present_collection_wins_not_merged() {
        let order = normalize_order(&json!({
            "orderItems": [{"productId": 1, "qty": 1}],
            "products": [{"productId": 2, "qty": 2}, {"productId": 3, "qty": 3}],
        }));

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, Some(1));
    }

    #[test]
    fn order_tolerates_non_array_items() {
        let order = normalize_order(&json!({"items": "not-a-list", "order_number": "A9"}));

        assert_eq!(order.items, vec![]);
        assert_eq!(order.order_number, "A9");
    }

    #[test]
    fn order_products_count_falls_back_to_item_qty_sum() {
        let order = normalize_order(&json!({
            "items": [{"productId": 1, "qty": 2}, {"productId": 2, "qty": 3}],
        }));

        assert_eq!(order.products_count, 5.0);
    }

    #[test]
    fn order_explicit_count_wins_over_sum() {
        let order = normalize_order(&json!({
            "products_count": 9,
            "items": [{"productId": 1, "qty": 2}],
        }));

        assert_eq!(order.products_count, 9.0);
    }

    #[test]
    fn order_final_price_has_no_item_fallback() {
        let order = normalize_order(&json!({
            "items": [{"productId": 1, "unitPrice": 10, "qty": 2}],
        }));

        assert_eq!(order.final_price, 0.0);

        let order = normalize_order(&json!({"total_amount": 25.5}));
        assert_eq!(order.final_price, 25.5);
    }

    #[test]
    fn order_status_defaults_to_pending() {
        assert_eq!(normalize_order(&json!({})).status, "Pending");
        assert_eq!(normalize_order(&json!({"state": "Completed"})).status, "Completed");
        assert_eq!(
            normalize_order(&json!({"orderStatus": "InProgress"})).status,
            "InProgress"
        );
    }

    #[test]
    fn order_date_resolves_from_timestamp_aliases() {
        let order = normalize_order(&json!({"created_at": "2024-05-01 10:00:00"}));
        assert_eq!(order.date.as_deref(), Some("2024-05-01 10:00:00"));

        let order = normalize_order(&json!({"updatedAt": "later", "date": "first"}));
        assert_eq!(order.date.as_deref(), Some("first"));
    }

    #[test]
    fn order_normalization_is_idempotent() {
        let once = normalize_order(&json!({
            "order_id": 3,
            "order_number": "A1",
            "createdAt": "2024-05-01",
            "final_price": "44.5",
            "OrderItems": [{"Product": {"id": 1, "name": "X", "price": 2}, "quantity": 2}],
        }));
        let twice = normalize_order(&serde_json::to_value(&once).unwrap());

        assert_eq!(once, twice);
    }
}
