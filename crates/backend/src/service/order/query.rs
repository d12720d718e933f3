use crate::abstract_trait::order::{DynOrderQueryRepository, OrderQueryServiceTrait};
use crate::domain::response::OrderResponse;
use crate::model::OrderLine;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::collections::HashMap;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn get_orders(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self.query.find_all().await?;

        let mut lines_by_order: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        for order_line in self.query.find_all_lines().await? {
            lines_by_order
                .entry(order_line.order_id)
                .or_default()
                .push(order_line);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let lines = lines_by_order.remove(&order.id).unwrap_or_default();
                OrderResponse::from_parts(order, lines)
            })
            .collect())
    }

    async fn get_order(&self, id: i32) -> Result<OrderResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let lines = self.query.find_lines(id).await?;
        Ok(OrderResponse::from_parts(order, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{MockOrderQueryRepo, line, order};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn get_orders_groups_lines_per_order() {
        let mut repo = MockOrderQueryRepo::new();
        repo.expect_find_all()
            .return_once(|| Ok(vec![order(1, "A1", "Pending"), order(2, "A2", "Completed")]));
        repo.expect_find_all_lines().return_once(|| {
            Ok(vec![
                line(1, 10, 2.0, 1),
                line(2, 11, 3.0, 2),
                line(1, 12, 1.0, 4),
            ])
        });

        let service = OrderQueryService::new(Arc::new(repo));

        let orders = service.get_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_items.len(), 2);
        assert_eq!(orders[0].products_count, 5);
        assert_eq!(orders[1].order_items.len(), 1);
        assert_eq!(orders[1].final_price, 6.0);
    }

    #[tokio::test]
    async fn get_order_surfaces_not_found() {
        let mut repo = MockOrderQueryRepo::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let service = OrderQueryService::new(Arc::new(repo));

        let err = service.get_order(42).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
