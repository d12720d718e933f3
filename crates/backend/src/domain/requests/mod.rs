mod order;
mod product;

pub use self::order::{
    CreateOrderItemRequest, CreateOrderRequest, CreateOrderItemRecordRequest,
    CreateOrderRecordRequest, UpdateOrderRequest,
};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
