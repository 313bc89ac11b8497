use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single shipment, keyed by its public order code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub package_type: String,
    /// Raw status code; see `models::OrderStatus` for the known values.
    pub status: String,
    pub current_location: Option<String>,
    pub estimated_delivery: Option<String>,
    pub scheduled_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tracking_history::Entity")]
    TrackingHistory,
}

impl Related<super::tracking_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
