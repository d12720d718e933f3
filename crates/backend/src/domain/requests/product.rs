use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a number greater than 0"))]
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a number greater than 0"))]
    pub price: f64,
}
