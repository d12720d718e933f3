use crate::abstract_trait::order::OrderCommandRepositoryTrait;
use crate::domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderStatus},
};
use sqlx::{MySql, Transaction};
use tracing::{error, info};

const SELECT_ORDER: &str = "SELECT id, order_number, status, created_at FROM orders WHERE id = ?";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn insert_lines(
        tx: &mut Transaction<'_, MySql>,
        order_id: i32,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<(), RepositoryError> {
        for item in items {
            sqlx::query("INSERT INTO order_products (order_id, product_id, qty) VALUES (?, ?, ?)")
                .bind(order_id)
                .bind(item.product_id)
                .bind(item.qty)
                .execute(&mut **tx)
                .await
                .map_err(|err| {
                    error!(
                        "❌ Failed to insert line (product {}) for order {}: {:?}",
                        item.product_id, order_id, err
                    );
                    RepositoryError::from(err)
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("INSERT INTO orders (order_number, status) VALUES (?, ?)")
            .bind(&req.order_number)
            .bind(req.status.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order {:?}: {:?}",
                    req.order_number, err
                );
                RepositoryError::from(err)
            })?;

        let order_id = result.last_insert_id() as i32;

        Self::insert_lines(&mut tx, order_id, items).await?;

        let order = sqlx::query_as::<_, Order>(SELECT_ORDER)
            .bind(order_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} with {} lines",
            order.id,
            items.len()
        );
        Ok(order)
    }

    async fn replace_order(
        &self,
        id: i32,
        req: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("UPDATE orders SET order_number = ?, status = ? WHERE id = ?")
            .bind(&req.order_number)
            .bind(req.status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to update order {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        sqlx::query("DELETE FROM order_products WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        Self::insert_lines(&mut tx, id, items).await?;

        let order = sqlx::query_as::<_, Order>(SELECT_ORDER)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Replaced order ID {} with {} lines", id, items.len());
        Ok(order)
    }

    async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update status of order {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        let order = sqlx::query_as::<_, Order>(SELECT_ORDER)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order {} status set to {}", id, status);
        Ok(order)
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Lines cascade with the order row.
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted order {}", id);
        Ok(())
    }
}
