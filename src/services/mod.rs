pub mod orders;

pub use orders::OrderService;
