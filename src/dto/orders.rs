use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::entities::{order, tracking_history};
use crate::models::{status_text, timestamp::parse_timestamp};

/// One checkpoint in an order's tracking history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackingRecord {
    /// Status code at this checkpoint
    pub status: String,
    pub location: String,
    pub description: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl From<tracking_history::Model> for TrackingRecord {
    fn from(model: tracking_history::Model) -> Self {
        Self {
            status: model.status,
            location: model.location,
            description: model.description,
            timestamp: model.timestamp,
        }
    }
}

/// Full order view returned by the lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "order_id": "ORD20251102001",
    "customer_name": "Zhang Wei",
    "customer_phone": "+8613812345678",
    "pickup_address": "88 Zhongshan Road, Tianhe, Guangzhou",
    "delivery_address": "12 Renmin Road, Chaoyang, Beijing",
    "package_type": "Documents",
    "status": "in_transit",
    "status_text": "In transit",
    "current_location": "Guangzhou Sorting Hub",
    "estimated_delivery": "2025-11-04 18:00:00",
    "scheduled_time": null,
    "tracking_history": []
}))]
pub struct OrderDetail {
    pub order_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub package_type: String,
    pub status: String,
    /// Human-readable status, or the raw code when it is unknown
    pub status_text: String,
    pub current_location: Option<String>,
    pub estimated_delivery: Option<String>,
    pub scheduled_time: Option<String>,
    /// Ordered oldest first
    pub tracking_history: Vec<TrackingRecord>,
}

impl OrderDetail {
    pub fn from_model(model: order::Model, tracking: Vec<tracking_history::Model>) -> Self {
        Self {
            status_text: status_text(&model.status),
            order_id: model.order_id,
            customer_name: model.customer_name,
            customer_phone: model.customer_phone,
            pickup_address: model.pickup_address,
            delivery_address: model.delivery_address,
            package_type: model.package_type,
            status: model.status,
            current_location: model.current_location,
            estimated_delivery: model.estimated_delivery,
            scheduled_time: model.scheduled_time,
            tracking_history: tracking.into_iter().map(TrackingRecord::from).collect(),
        }
    }
}

/// Order summary used by the phone lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    pub order_id: String,
    pub status: String,
    pub status_text: String,
    pub delivery_address: String,
    pub estimated_delivery: Option<String>,
}

impl From<order::Model> for OrderSummary {
    fn from(model: order::Model) -> Self {
        Self {
            status_text: status_text(&model.status),
            order_id: model.order_id,
            status: model.status,
            delivery_address: model.delivery_address,
            estimated_delivery: model.estimated_delivery,
        }
    }
}

/// What the customer is doing with the appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleAction {
    Confirm,
    Change,
    /// Any other value is accepted and reported generically
    #[serde(other)]
    Other,
}

impl ScheduleAction {
    pub fn message(self) -> &'static str {
        match self {
            ScheduleAction::Confirm => "Delivery time confirmed",
            ScheduleAction::Change => "Delivery time changed",
            ScheduleAction::Other => "Delivery time updated",
        }
    }
}

/// Request body for confirming or changing a delivery appointment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "scheduled_time": "2025-11-03 14:30:00",
    "action": "confirm"
}))]
pub struct ScheduleRequest {
    /// Appointment time, `YYYY-MM-DD HH:MM:SS` (24-hour)
    #[validate(custom = "validate_schedule_time")]
    pub scheduled_time: String,
    pub action: ScheduleAction,
}

fn validate_schedule_time(value: &str) -> Result<(), ValidationError> {
    if parse_timestamp(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("scheduled_time");
        err.message = Some("Expected YYYY-MM-DD HH:MM:SS".into());
        Err(err)
    }
}

/// Outcome of a scheduling call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResult {
    pub order_id: String,
    pub scheduled_time: String,
    /// Status after the call; `in_transit` orders advance to `out_for_delivery`
    pub status: String,
    pub status_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_actions_fall_back_to_other() {
        let req: ScheduleRequest = serde_json::from_value(json!({
            "scheduled_time": "2025-11-03 14:30:00",
            "action": "reschedule"
        }))
        .unwrap();
        assert_eq!(req.action, ScheduleAction::Other);
        assert_eq!(req.action.message(), "Delivery time updated");
    }

    #[test]
    fn action_messages() {
        assert_eq!(ScheduleAction::Confirm.message(), "Delivery time confirmed");
        assert_eq!(ScheduleAction::Change.message(), "Delivery time changed");
    }

    #[test]
    fn schedule_time_must_match_format() {
        let ok = ScheduleRequest {
            scheduled_time: "2025-11-03 14:30:00".into(),
            action: ScheduleAction::Confirm,
        };
        assert!(ok.validate().is_ok());

        let bad = ScheduleRequest {
            scheduled_time: "2025-13-40 99:99:99".into(),
            action: ScheduleAction::Confirm,
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("scheduled_time"));
    }

    #[test]
    fn detail_maps_unknown_status_to_raw_code() {
        let model = order::Model {
            order_id: "ORD20251102001".into(),
            customer_name: "Li Na".into(),
            customer_phone: "+8613800000000".into(),
            pickup_address: "1 A Road, X, Shanghai".into(),
            delivery_address: "2 B Road, Y, Beijing".into(),
            package_type: "Documents".into(),
            status: "held_at_customs".into(),
            current_location: None,
            estimated_delivery: None,
            scheduled_time: None,
            created_at: "2025-11-01 08:00:00".into(),
            updated_at: "2025-11-01 09:00:00".into(),
        };
        let detail = OrderDetail::from_model(model, Vec::new());
        assert_eq!(detail.status_text, "held_at_customs");
        assert!(detail.tracking_history.is_empty());
    }
}
