mod order;
mod product;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::update_order_status,
        order::delete_order,
    ),
    tags(
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
