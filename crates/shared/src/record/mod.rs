mod aliases;
mod normalize;
mod serialize;
mod value;

pub use self::aliases::*;
pub use self::normalize::{
    OrderItemRecord, OrderRecord, ProductRecord, normalize_order, normalize_order_item,
    normalize_product,
};
pub use self::serialize::{
    OrderDraft, OrderItemDraft, build_status_payload, serialize_order_payload,
    serialize_product_input,
};
pub use self::value::{first_present, parse_id, to_number};
