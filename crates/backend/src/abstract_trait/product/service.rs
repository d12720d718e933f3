use crate::domain::{
    requests::{CreateProductRequest, UpdateProductRequest},
    response::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn get_products(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn get_product(&self, id: i32) -> Result<ProductResponse, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
