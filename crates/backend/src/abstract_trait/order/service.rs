use crate::domain::{
    requests::{CreateOrderRequest, UpdateOrderRequest},
    response::OrderResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn get_orders(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn get_order(&self, id: i32) -> Result<OrderResponse, ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError>;
    async fn update_status(&self, id: i32, status: &str) -> Result<OrderResponse, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<(), ServiceError>;
}
