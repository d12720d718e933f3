//! Outbound payload builders, the inverse of normalization. Rather than
//! negotiating which naming convention the current backend revision
//! expects, every known key variant is populated with the same value.
//! Payloads are tiny, so the redundancy costs nothing and survives a
//! backend convention shift without a lockstep deploy.

use serde_json::{Map, Value, json};

use super::aliases::ORDER_ITEMS_OUT_KEYS;
use super::value::to_number;

/// Draft of an order as edited by a caller, before serialization.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub order_number: String,
    pub items: Vec<OrderItemDraft>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderItemDraft {
    pub product_id: Option<i64>,
    pub qty: f64,
}

pub fn serialize_product_input(name: &str, unit_price: f64) -> Value {
    let price = if unit_price.is_finite() { unit_price } else { 0.0 };

    json!({
        "name": name,
        "unitPrice": price,
        "unit_price": price,
        "price": price,
    })
}

pub fn serialize_order_payload(draft: &OrderDraft) -> Value {
    let items: Vec<Value> = draft
        .items
        .iter()
        .map(|item| {
            let qty = to_number(&json!(item.qty), 0.0);
            json!({
                "productId": item.product_id,
                "product_id": item.product_id,
                "qty": qty,
                "quantity": qty,
            })
        })
        .collect();

    let mut payload = Map::new();
    payload.insert("orderNumber".into(), json!(draft.order_number));
    payload.insert("order_number".into(), json!(draft.order_number));

    for key in ORDER_ITEMS_OUT_KEYS {
        payload.insert((*key).into(), Value::Array(items.clone()));
    }

    // An absent (or blank) status emits no status keys at all: "leave the
    // status alone" and "set it to something" must stay distinguishable.
    if let Some(status) = draft.status.as_deref().filter(|s| !s.is_empty()) {
        payload.insert("status".into(), json!(status));
        payload.insert("order_status".into(), json!(status));
        payload.insert("state".into(), json!(status));
    }

    Value::Object(payload)
}

pub fn build_status_payload(status: &str) -> Value {
    json!({
        "status": status,
        "order_status": status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_input_broadcasts_every_price_key() {
        let payload = serialize_product_input("X", 9.5);

        assert_eq!(payload["name"], "X");
        assert_eq!(payload["unitPrice"], 9.5);
        assert_eq!(payload["unit_price"], 9.5);
        assert_eq!(payload["price"], 9.5);
    }

    #[test]
    fn product_input_zeroes_non_finite_prices() {
        let payload = serialize_product_input("X", f64::NAN);

        assert_eq!(payload["price"], 0.0);
    }

    #[test]
    fn order_payload_populates_all_collection_keys_identically() {
        let draft = OrderDraft {
            order_number: "A1".into(),
            items: vec![OrderItemDraft {
                product_id: Some(1),
                qty: 2.0,
            }],
            status: Some("Completed".into()),
        };

        let payload = serialize_order_payload(&draft);

        let expected_item = serde_json::json!({
            "productId": 1,
            "product_id": 1,
            "qty": 2.0,
            "quantity": 2.0,
        });
        for key in ORDER_ITEMS_OUT_KEYS {
            assert_eq!(payload[*key], serde_json::json!([expected_item]), "key {key}");
        }

        assert_eq!(payload["orderNumber"], "A1");
        assert_eq!(payload["order_number"], "A1");
        assert_eq!(payload["status"], "Completed");
        assert_eq!(payload["order_status"], "Completed");
        assert_eq!(payload["state"], "Completed");
    }

    #[test]
    fn order_payload_without_status_emits_no_status_keys() {
        let draft = OrderDraft {
            order_number: "A1".into(),
            items: vec![],
            status: None,
        };

        let payload = serialize_order_payload(&draft);
        let object = payload.as_object().unwrap();

        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("order_status"));
        assert!(!object.contains_key("state"));
    }

    #[test]
    fn order_payload_blank_status_counts_as_absent() {
        let draft = OrderDraft {
            order_number: "A1".into(),
            items: vec![],
            status: Some(String::new()),
        };

        let payload = serialize_order_payload(&draft);

        assert!(!payload.as_object().unwrap().contains_key("status"));
    }

    #[test]
    fn status_payload_carries_both_keys() {
        let payload = build_status_payload("InProgress");

        assert_eq!(payload["status"], "InProgress");
        assert_eq!(payload["order_status"], "InProgress");
    }

    #[test]
    fn serialized_payload_round_trips_through_the_normalizer() {
        let draft = OrderDraft {
            order_number: "B7".into(),
            items: vec![OrderItemDraft {
                product_id: Some(3),
                qty: 4.0,
            }],
            status: Some("Pending".into()),
        };

        let order = crate::record::normalize_order(&serialize_order_payload(&draft));

        assert_eq!(order.order_number, "B7");
        assert_eq!(order.status, "Pending");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, Some(3));
        assert_eq!(order.items[0].qty, 4.0);
    }
}
