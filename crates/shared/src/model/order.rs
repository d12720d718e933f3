use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Order lifecycle state. The column stores the display form; inbound
/// values are validated through `FromStr` at the write boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "InProgress" => Ok(OrderStatus::InProgress),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("Shipped".parse::<OrderStatus>().is_err());
        assert!("pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
