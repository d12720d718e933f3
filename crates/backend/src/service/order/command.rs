use crate::abstract_trait::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandServiceTrait,
};
use crate::abstract_trait::product::DynProductQueryRepository;
use crate::domain::requests::{
    CreateOrderItemRecordRequest, CreateOrderItemRequest, CreateOrderRecordRequest,
    CreateOrderRequest, UpdateOrderRequest,
};
use crate::domain::response::OrderResponse;
use crate::service::validation_messages;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use shared::model::OrderStatus;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    product_query: DynProductQueryRepository,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub product_query: DynProductQueryRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            command,
            query,
            product_query,
        } = deps;

        Self {
            command,
            query,
            product_query,
        }
    }

    /// Pre-checks line products so an unknown product surfaces as a 400
    /// with its id, rather than a raw foreign-key failure.
    async fn ensure_products_exist(
        &self,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<(), ServiceError> {
        for item in items {
            self.product_query
                .find_by_id(item.product_id)
                .await?
                .ok_or_else(|| {
                    ServiceError::Validation(vec![format!("Unknown product {}", item.product_id)])
                })?;
        }
        Ok(())
    }

    async fn load_response(&self, order: shared::model::Order) -> Result<OrderResponse, ServiceError> {
        let lines = self.query.find_lines(order.id).await?;
        Ok(OrderResponse::from_parts(order, lines))
    }
}

fn resolve_status(status: Option<&str>, fallback: OrderStatus) -> Result<OrderStatus, ServiceError> {
    match status {
        None => Ok(fallback),
        Some(value) => value
            .parse::<OrderStatus>()
            .map_err(|err| ServiceError::Validation(vec![err.to_string()])),
    }
}

fn record_items(items: &[CreateOrderItemRequest]) -> Vec<CreateOrderItemRecordRequest> {
    items
        .iter()
        .map(|item| CreateOrderItemRecordRequest {
            product_id: item.product_id,
            qty: item.qty,
        })
        .collect()
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;

        info!("🏗️ Creating order {:?}", req.order_number);

        let status = resolve_status(req.status.as_deref(), OrderStatus::default())?;
        let items = record_items(&req.items);
        self.ensure_products_exist(&items).await?;

        let record = CreateOrderRecordRequest {
            order_number: req.order_number.trim().to_string(),
            status,
        };

        let order = self.command.create_order(&record, &items).await?;
        self.load_response(order).await
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;

        let existing = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        // A payload without a status leaves the stored one untouched.
        let fallback = existing.status.parse().unwrap_or_default();
        let status = resolve_status(req.status.as_deref(), fallback)?;

        let items = record_items(&req.items);
        self.ensure_products_exist(&items).await?;

        let record = CreateOrderRecordRequest {
            order_number: req.order_number.trim().to_string(),
            status,
        };

        let order = self.command.replace_order(id, &record, &items).await?;
        self.load_response(order).await
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<OrderResponse, ServiceError> {
        let status = status
            .parse::<OrderStatus>()
            .map_err(|err| ServiceError::Validation(vec![err.to_string()]))?;

        let order = self.command.update_status(id, status).await?;
        self.load_response(order).await
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete_order(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{
        MockOrderCommandRepo, MockOrderQueryRepo, MockProductQueryRepo, line, order, product,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn service(
        command: MockOrderCommandRepo,
        query: MockOrderQueryRepo,
        product_query: MockProductQueryRepo,
    ) -> OrderCommandService {
        OrderCommandService::new(OrderCommandServiceDeps {
            command: Arc::new(command),
            query: Arc::new(query),
            product_query: Arc::new(product_query),
        })
    }

    fn create_request(items: Vec<CreateOrderItemRequest>) -> CreateOrderRequest {
        CreateOrderRequest {
            order_number: "A1".into(),
            status: None,
            items,
        }
    }

    #[tokio::test]
    async fn create_rejects_an_order_without_items() {
        let service = service(
            MockOrderCommandRepo::new(),
            MockOrderQueryRepo::new(),
            MockProductQueryRepo::new(),
        );

        let err = service
            .create_order(&create_request(vec![]))
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, vec!["An order needs at least one item".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_an_unknown_status() {
        let service = service(
            MockOrderCommandRepo::new(),
            MockOrderQueryRepo::new(),
            MockProductQueryRepo::new(),
        );

        let mut req = create_request(vec![CreateOrderItemRequest {
            product_id: 1,
            qty: 1,
        }]);
        req.status = Some("Shipped".into());

        let err = service.create_order(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_an_unknown_product() {
        let mut product_query = MockProductQueryRepo::new();
        product_query.expect_find_by_id().return_once(|_| Ok(None));

        let service = service(
            MockOrderCommandRepo::new(),
            MockOrderQueryRepo::new(),
            product_query,
        );

        let err = service
            .create_order(&create_request(vec![CreateOrderItemRequest {
                product_id: 9,
                qty: 1,
            }]))
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, vec!["Unknown product 9".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_defaults_status_to_pending_and_returns_lines() {
        let mut product_query = MockProductQueryRepo::new();
        product_query
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id, "Widget", 5.0))));

        let mut command = MockOrderCommandRepo::new();
        command
            .expect_create_order()
            .withf(|record, items| {
                record.status == OrderStatus::Pending && items.len() == 1 && items[0].qty == 3
            })
            .return_once(|_, _| Ok(order(11, "A1", "Pending")));

        let mut query = MockOrderQueryRepo::new();
        query
            .expect_find_lines()
            .return_once(|_| Ok(vec![line(11, 1, 5.0, 3)]));

        let service = service(command, query, product_query);

        let response = service
            .create_order(&create_request(vec![CreateOrderItemRequest {
                product_id: 1,
                qty: 3,
            }]))
            .await
            .unwrap();

        assert_eq!(response.id, 11);
        assert_eq!(response.status, "Pending");
        assert_eq!(response.products_count, 3);
        assert_eq!(response.final_price, 15.0);
    }

    #[tokio::test]
    async fn update_requires_an_existing_order() {
        let mut query = MockOrderQueryRepo::new();
        query.expect_find_by_id().return_once(|_| Ok(None));

        let service = service(
            MockOrderCommandRepo::new(),
            query,
            MockProductQueryRepo::new(),
        );

        let err = service
            .update_order(
                5,
                &UpdateOrderRequest {
                    order_number: "A1".into(),
                    status: None,
                    items: vec![CreateOrderItemRequest {
                        product_id: 1,
                        qty: 1,
                    }],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn update_status_validates_the_enum() {
        let service = service(
            MockOrderCommandRepo::new(),
            MockOrderQueryRepo::new(),
            MockProductQueryRepo::new(),
        );

        let err = service.update_status(1, "Cancelled").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_status_returns_the_refreshed_order() {
        let mut command = MockOrderCommandRepo::new();
        command
            .expect_update_status()
            .withf(|id, status| *id == 4 && *status == OrderStatus::Completed)
            .return_once(|_, _| Ok(order(4, "A4", "Completed")));

        let mut query = MockOrderQueryRepo::new();
        query.expect_find_lines().return_once(|_| Ok(vec![]));

        let service = service(command, query, MockProductQueryRepo::new());

        let response = service.update_status(4, "Completed").await.unwrap();
        assert_eq!(response.status, "Completed");
    }
}
