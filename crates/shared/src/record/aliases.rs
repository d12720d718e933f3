//! Every historical key name observed for a logical field, in resolution
//! priority order. The normalizer reads through these lists front to back;
//! the serializer broadcasts to the same names. Keeping them in one place
//! prevents the two directions from drifting apart.

pub const PRODUCT_ID_KEYS: &[&str] = &["id", "productId", "product_id", "ID"];
pub const PRODUCT_NAME_KEYS: &[&str] = &["name", "productName", "product_name", "title"];
pub const PRODUCT_PRICE_KEYS: &[&str] = &[
    "unitPrice",
    "unit_price",
    "price",
    "unitprice",
    "productPrice",
    "product_price",
];

pub const ITEM_QTY_KEYS: &[&str] = &["qty", "quantity", "count", "amount"];
pub const ITEM_TOTAL_KEYS: &[&str] = &["totalPrice", "total_price"];

pub const ORDER_ID_KEYS: &[&str] = &["id", "orderId", "order_id"];
pub const ORDER_NUMBER_KEYS: &[&str] = &["orderNumber", "order_number", "number", "orderNo", "code"];
pub const ORDER_STATUS_KEYS: &[&str] = &["status", "orderStatus", "state"];
pub const ORDER_DATE_KEYS: &[&str] = &[
    "date",
    "createdAt",
    "created_at",
    "datetime",
    "updatedAt",
    "updated_at",
];
pub const ORDER_COUNT_KEYS: &[&str] = &[
    "productsCount",
    "products_count",
    "itemsCount",
    "items_count",
    "totalProducts",
    "total_products",
];
pub const ORDER_TOTAL_KEYS: &[&str] = &[
    "finalPrice",
    "final_price",
    "total",
    "totalPrice",
    "amount",
    "total_amount",
];

/// Inbound collection keys an order's line items may arrive under.
/// First present wins; lists are never merged.
pub const ORDER_ITEMS_IN_KEYS: &[&str] = &[
    "items",
    "orderItems",
    "OrderItems",
    "products",
    "OrderProducts",
    "order_items",
];

/// Outbound collection keys an order payload populates, all pointing at
/// the same serialized item array.
pub const ORDER_ITEMS_OUT_KEYS: &[&str] = &[
    "items",
    "orderItems",
    "order_items",
    "products",
    "orderProducts",
    "order_products",
];
