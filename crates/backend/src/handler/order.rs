use crate::{
    abstract_trait::order::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderItemRequest, CreateOrderRequest, UpdateOrderRequest},
        response::OrderResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use serde_json::{Value, json};
use shared::{
    errors::HttpError,
    record::{ORDER_STATUS_KEYS, OrderItemRecord, first_present, normalize_order},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Status straight off the wire, bypassing the normalizer's `Pending`
/// default: an absent status means "do not touch it" on updates.
fn explicit_status(body: &Value) -> Option<String> {
    body.as_object()
        .and_then(|record| first_present(record, ORDER_STATUS_KEYS))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn item_requests(items: &[OrderItemRecord]) -> Vec<CreateOrderItemRequest> {
    items
        .iter()
        .map(|item| CreateOrderItemRequest {
            product_id: item
                .product_id
                .and_then(|id| i32::try_from(id).ok())
                .unwrap_or(0),
            qty: integral_qty(item.qty),
        })
        .collect()
}

// Fractional or out-of-range quantities map to 0 so validation rejects
// them with a message instead of silently truncating.
fn integral_qty(qty: f64) -> i32 {
    if qty.fract() == 0.0 {
        i32::try_from(qty as i64).unwrap_or(0)
    } else {
        0
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders with their lines", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.get_orders().await?;
    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service.get_order(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Order number already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let record = normalize_order(&body);
    let req = CreateOrderRequest {
        order_number: record.order_number.trim().to_string(),
        status: explicit_status(&body),
        items: item_requests(&record.items),
    };

    let order = service.create_order(&req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Order replaced", body = OrderResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let record = normalize_order(&body);
    let req = UpdateOrderRequest {
        order_number: record.order_number.trim().to_string(),
        status: explicit_status(&body),
        items: item_requests(&record.items),
    };

    let order = service.update_order(id, &req).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let status = explicit_status(&body)
        .ok_or_else(|| HttpError::BadRequest("Order status is required".to_string()))?;

    let order = service.update_status(id, &status).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = serde_json::Value),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order(id).await?;
    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
