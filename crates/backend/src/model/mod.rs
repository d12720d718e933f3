mod order_line;

pub use self::order_line::OrderLine;
