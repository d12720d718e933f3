use serde::{Deserialize, Serialize};
use shared::model::Product;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
