pub mod order_status;
pub mod timestamp;

pub use order_status::{status_text, OrderStatus};
