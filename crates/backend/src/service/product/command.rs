use crate::abstract_trait::product::{
    DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
};
use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use crate::domain::response::ProductResponse;
use crate::service::validation_messages;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    query: DynProductQueryRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, query: DynProductQueryRepository) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;

        info!("🏗️ Creating product {:?}", req.name);

        let product = self.command.create_product(req).await?;
        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        req.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;

        self.query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let product = self.command.update_product(id, req).await?;
        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete_product(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{
        MockProductCommandRepo, MockProductQueryRepo, product,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn service(
        command: MockProductCommandRepo,
        query: MockProductQueryRepo,
    ) -> ProductCommandService {
        ProductCommandService::new(Arc::new(command), Arc::new(query))
    }

    #[tokio::test]
    async fn create_rejects_empty_name_before_touching_the_repository() {
        let service = service(MockProductCommandRepo::new(), MockProductQueryRepo::new());

        let err = service
            .create_product(&CreateProductRequest {
                name: String::new(),
                price: 10.0,
            })
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, vec!["Product name is required".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_non_positive_price() {
        let service = service(MockProductCommandRepo::new(), MockProductQueryRepo::new());

        let err = service
            .create_product(&CreateProductRequest {
                name: "Widget".into(),
                price: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_returns_the_stored_row() {
        let mut command = MockProductCommandRepo::new();
        command
            .expect_create_product()
            .return_once(|_| Ok(product(7, "Widget", 19.99)));

        let service = service(command, MockProductQueryRepo::new());

        let response = service
            .create_product(&CreateProductRequest {
                name: "Widget".into(),
                price: 19.99,
            })
            .await
            .unwrap();

        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Widget");
        assert_eq!(response.price, 19.99);
    }

    #[tokio::test]
    async fn update_requires_an_existing_product() {
        let mut query = MockProductQueryRepo::new();
        query.expect_find_by_id().return_once(|_| Ok(None));

        let service = service(MockProductCommandRepo::new(), query);

        let err = service
            .update_product(
                3,
                &UpdateProductRequest {
                    name: "Widget".into(),
                    price: 5.0,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
