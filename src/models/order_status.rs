use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Lifecycle stage of an order, stored as its snake_case code.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Returned,
}

impl OrderStatus {
    /// Human-readable label shown next to the raw code.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Awaiting pickup",
            OrderStatus::PickedUp => "Picked up",
            OrderStatus::InTransit => "In transit",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Failed => "Delivery failed",
            OrderStatus::Returned => "Returned",
        }
    }

    /// Still moving through the network, so the delivery estimate lies ahead.
    pub fn is_in_flight(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending
                | OrderStatus::PickedUp
                | OrderStatus::InTransit
                | OrderStatus::OutForDelivery
        )
    }

    /// A delivery appointment may only be booked while the parcel is in transit
    /// or already out for delivery.
    pub fn is_schedulable(self) -> bool {
        matches!(self, OrderStatus::InTransit | OrderStatus::OutForDelivery)
    }
}

/// Maps a stored status code to its label, falling back to the raw code.
pub fn status_text(code: &str) -> String {
    OrderStatus::from_str(code)
        .map(|status| status.label().to_string())
        .unwrap_or_else(|_| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip_through_strings() {
        for status in OrderStatus::iter() {
            let code = status.to_string();
            assert_eq!(OrderStatus::from_str(&code).unwrap(), status);
            assert_eq!(status.as_ref(), code);
        }
        assert_eq!(OrderStatus::OutForDelivery.as_ref(), "out_for_delivery");
        assert_eq!(OrderStatus::PickedUp.as_ref(), "picked_up");
    }

    #[test]
    fn status_text_uses_label_table() {
        assert_eq!(status_text("in_transit"), "In transit");
        assert_eq!(status_text("returned"), "Returned");
    }

    #[test]
    fn status_text_falls_back_to_raw_code() {
        assert_eq!(status_text("lost_at_sea"), "lost_at_sea");
        assert_eq!(status_text(""), "");
    }

    #[test]
    fn only_transit_stages_are_schedulable() {
        let schedulable: Vec<_> = OrderStatus::iter().filter(|s| s.is_schedulable()).collect();
        assert_eq!(
            schedulable,
            vec![OrderStatus::InTransit, OrderStatus::OutForDelivery]
        );
    }

    #[test]
    fn terminal_stages_are_not_in_flight() {
        assert!(OrderStatus::Pending.is_in_flight());
        assert!(OrderStatus::OutForDelivery.is_in_flight());
        assert!(!OrderStatus::Delivered.is_in_flight());
        assert!(!OrderStatus::Failed.is_in_flight());
        assert!(!OrderStatus::Returned.is_in_flight());
    }
}
