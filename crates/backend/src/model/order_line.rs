use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One order line joined against the products table. Line name and price
/// come from the current product row at read time; the join can never
/// dangle because deleting a product cascades its lines away.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLine {
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub unit_price: f64,
    pub qty: i32,
}
