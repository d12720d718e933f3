use crate::abstract_trait::product::ProductCommandRepositoryTrait;
use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Product};
use tracing::{error, info};

const SELECT_PRODUCT: &str =
    "SELECT id, name, CAST(price AS DOUBLE) AS price, created_at FROM products WHERE id = ?";

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(&req.name)
            .bind(req.price)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {:?}: {:?}", req.name, err);
                RepositoryError::from(err)
            })?;

        let id = result.last_insert_id() as i32;

        let product = sqlx::query_as::<_, Product>(SELECT_PRODUCT)
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        info!("✅ Created product ID {}", product.id);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&req.name)
            .bind(req.price)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        let product = sqlx::query_as::<_, Product>(SELECT_PRODUCT)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Order lines referencing the product go with it (ON DELETE CASCADE).
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted product {}", id);
        Ok(())
    }
}
