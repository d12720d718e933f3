use crate::abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait};
use crate::domain::response::ProductResponse;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn get_products(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn get_product(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{MockProductQueryRepo, product};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn get_product_maps_missing_row_to_not_found() {
        let mut repo = MockProductQueryRepo::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let service = ProductQueryService::new(Arc::new(repo));

        let err = service.get_product(99).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn get_products_maps_rows_to_responses() {
        let mut repo = MockProductQueryRepo::new();
        repo.expect_find_all()
            .return_once(|| Ok(vec![product(1, "Widget", 19.99)]));

        let service = ProductQueryService::new(Arc::new(repo));

        let products = service.get_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].price, 19.99);
    }
}
