use crate::abstract_trait::order::OrderQueryRepositoryTrait;
use crate::model::OrderLine;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Order};
use tracing::{error, info};

const SELECT_ORDER: &str = "SELECT id, order_number, status, created_at FROM orders";

const SELECT_LINES: &str = "SELECT op.order_id, op.product_id, p.name, \
     CAST(p.price AS DOUBLE) AS unit_price, op.qty \
     FROM order_products op \
     JOIN products p ON p.id = op.product_id";

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching all orders");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "{SELECT_ORDER} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(&format!("{SELECT_ORDER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(order)
    }

    async fn find_lines(&self, order_id: i32) -> Result<Vec<OrderLine>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderLine>(&format!(
            "{SELECT_LINES} WHERE op.order_id = ? ORDER BY op.id"
        ))
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch lines for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn find_all_lines(&self) -> Result<Vec<OrderLine>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderLine>(&format!("{SELECT_LINES} ORDER BY op.id"))
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order lines: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(lines)
    }
}
