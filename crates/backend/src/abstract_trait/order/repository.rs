use crate::domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest};
use crate::model::OrderLine;
use async_trait::async_trait;
use shared::{
    errors::RepositoryError,
    model::{Order, OrderStatus},
};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLine>, RepositoryError>;
    async fn find_all_lines(&self) -> Result<Vec<OrderLine>, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order row and every line in one transaction.
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<Order, RepositoryError>;

    /// Rewrites the order row and replaces its full line set in one
    /// transaction.
    async fn replace_order(
        &self,
        id: i32,
        req: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<Order, RepositoryError>;

    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, RepositoryError>;
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}
