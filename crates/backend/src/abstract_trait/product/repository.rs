use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Product};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}
