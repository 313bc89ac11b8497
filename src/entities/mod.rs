pub mod order;
pub mod tracking_history;
