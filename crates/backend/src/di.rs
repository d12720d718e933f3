use crate::abstract_trait::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService,
};
use crate::abstract_trait::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService,
};
use crate::repository::order::{OrderCommandRepository, OrderQueryRepository};
use crate::repository::product::{ProductCommandRepository, ProductQueryRepository};
use crate::service::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
use crate::service::product::{ProductCommandService, ProductQueryService};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo.clone()));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo,
            product_query_repo.clone(),
        ));
        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repo.clone()));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
                command: order_command_repo,
                query: order_query_repo,
                product_query: product_query_repo,
            }));

        Self {
            product_query,
            product_command,
            order_query,
            order_command,
        }
    }
}
