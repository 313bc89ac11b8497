pub mod orders;

pub use orders::{
    OrderDetail, OrderSummary, ScheduleAction, ScheduleRequest, ScheduleResult, TrackingRecord,
};
