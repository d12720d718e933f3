use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct OrderProduct {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub qty: i32,
    pub created_at: Option<NaiveDateTime>,
}
