use crate::model::OrderLine;
use serde::{Deserialize, Serialize};
use shared::model::Order;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct OrderItemResponse {
    #[serde(rename = "product_id")]
    pub product_id: i32,
    pub name: String,
    #[serde(rename = "unit_price")]
    pub unit_price: f64,
    pub qty: i32,
    #[serde(rename = "total_price")]
    pub total_price: f64,
}

// joined line to response
impl From<OrderLine> for OrderItemResponse {
    fn from(value: OrderLine) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            name: value.name,
            unit_price: value.unit_price,
            qty: value.qty,
            total_price: value.unit_price * value.qty as f64,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "order_number")]
    pub order_number: String,
    pub status: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "products_count")]
    pub products_count: i64,
    #[serde(rename = "final_price")]
    pub final_price: f64,
    #[serde(rename = "order_items")]
    pub order_items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, lines: Vec<OrderLine>) -> Self {
        let order_items: Vec<OrderItemResponse> =
            lines.into_iter().map(OrderItemResponse::from).collect();

        let products_count = order_items.iter().map(|item| item.qty as i64).sum();
        let final_price = order_items.iter().map(|item| item.total_price).sum();

        OrderResponse {
            id: order.id,
            order_number: order.order_number,
            status: order.status,
            created_at: order.created_at.map(|dt| dt.to_string()),
            products_count,
            final_price,
            order_items,
        }
    }
}
