use crate::{
    abstract_trait::product::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use shared::{errors::HttpError, record::normalize_product};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.get_products().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.get_product(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    // Bodies arrive with every historical price key populated, so they go
    // through the normalizer rather than a fixed-shape deserialize.
    let record = normalize_product(&body);
    let req = CreateProductRequest {
        name: record.name.trim().to_string(),
        price: record.unit_price,
    };

    let product = service.create_product(&req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let record = normalize_product(&body);
    let req = UpdateProductRequest {
        name: record.name.trim().to_string(),
        price: record.unit_price,
    };

    let product = service.update_product(id, &req).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = serde_json::Value),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
