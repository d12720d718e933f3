mod order;
mod order_product;
mod product;

pub use self::order::{Order, OrderStatus, ParseOrderStatusError};
pub use self::order_product::OrderProduct;
pub use self::product::Product;
