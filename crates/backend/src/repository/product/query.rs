use crate::abstract_trait::product::ProductQueryRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Product};
use tracing::{error, info};

const SELECT_PRODUCT: &str =
    "SELECT id, name, CAST(price AS DOUBLE) AS price, created_at FROM products";

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCT} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(product)
    }
}
