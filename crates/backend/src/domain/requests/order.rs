use serde::{Deserialize, Serialize};
use shared::model::OrderStatus;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order number is required"))]
    #[serde(rename = "order_number")]
    pub order_number: String,

    /// Absent when the caller did not set a status; creation defaults to
    /// `Pending` downstream.
    pub status: Option<String>,

    #[validate(length(min = 1, message = "An order needs at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UpdateOrderRequest {
    #[validate(length(min = 1, message = "Order number is required"))]
    #[serde(rename = "order_number")]
    pub order_number: String,

    /// Absent means "leave the stored status alone".
    pub status: Option<String>,

    #[validate(length(min = 1, message = "An order needs at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1, message = "Each item needs a product id"))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Item qty must be a positive integer"))]
    pub qty: i32,
}

/// Typed row the command repository writes, after validation resolved
/// the status enum.
#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub order_number: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemRecordRequest {
    pub product_id: i32,
    pub qty: i32,
}
