use std::str::FromStr;
use std::sync::Arc;

use sea_orm::{
    sea_query::Expr, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    db::DbPool,
    dto::orders::{OrderDetail, OrderSummary, ScheduleRequest, ScheduleResult},
    entities::{order, tracking_history},
    errors::ServiceError,
    models::{status_text, timestamp::now_timestamp, OrderStatus},
};

/// Order lookups and delivery scheduling over the orders store
#[derive(Clone)]
pub struct OrderService {
    db: Arc<DbPool>,
}

impl OrderService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Fetches an order together with its tracking history, oldest checkpoint first.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<OrderDetail, ServiceError> {
        let db = &*self.db;

        let order = order::Entity::find_by_id(order_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(order_id))?;

        let tracking = tracking_history::Entity::find()
            .filter(tracking_history::Column::OrderId.eq(order_id))
            .order_by_asc(tracking_history::Column::Timestamp)
            .order_by_asc(tracking_history::Column::Id)
            .all(db)
            .await?;

        Ok(OrderDetail::from_model(order, tracking))
    }

    /// Lists summaries of every order placed under `phone`, newest first.
    /// An unknown phone yields an empty list.
    #[instrument(skip(self))]
    pub async fn orders_by_phone(&self, phone: &str) -> Result<Vec<OrderSummary>, ServiceError> {
        let orders = order::Entity::find()
            .filter(order::Column::CustomerPhone.eq(phone))
            .order_by_desc(order::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(orders.into_iter().map(OrderSummary::from).collect())
    }

    /// Confirms or changes the delivery appointment for an order.
    ///
    /// Checks run in order: the order must exist, must be `in_transit` or
    /// `out_for_delivery`, and the requested time must be well formed. An
    /// `in_transit` order advances to `out_for_delivery`. No tracking record
    /// is appended.
    #[instrument(skip(self, request), fields(scheduled_time = %request.scheduled_time))]
    pub async fn schedule_delivery(
        &self,
        order_id: &str,
        request: &ScheduleRequest,
    ) -> Result<ScheduleResult, ServiceError> {
        let db = &*self.db;

        let order = order::Entity::find_by_id(order_id.to_string())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(order_id))?;

        let current = OrderStatus::from_str(&order.status).ok();
        if !current.is_some_and(OrderStatus::is_schedulable) {
            return Err(ServiceError::InvalidState {
                current_status: order.status,
            });
        }

        request
            .validate()
            .map_err(|_| ServiceError::InvalidFormat {
                value: request.scheduled_time.clone(),
            })?;

        let txn = db.begin().await?;

        order::Entity::update_many()
            .col_expr(
                order::Column::ScheduledTime,
                Expr::value(request.scheduled_time.clone()),
            )
            .col_expr(order::Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(order::Column::OrderId.eq(order_id))
            .exec(&txn)
            .await?;

        let new_status = if current == Some(OrderStatus::InTransit) {
            order::Entity::update_many()
                .col_expr(
                    order::Column::Status,
                    Expr::value(OrderStatus::OutForDelivery.to_string()),
                )
                .filter(order::Column::OrderId.eq(order_id))
                .exec(&txn)
                .await?;
            OrderStatus::OutForDelivery.to_string()
        } else {
            order.status
        };

        txn.commit().await?;

        info!(order_id, status = %new_status, "delivery scheduled");

        Ok(ScheduleResult {
            order_id: order_id.to_string(),
            scheduled_time: request.scheduled_time.clone(),
            status_text: status_text(&new_status),
            status: new_status,
        })
    }

    /// Total number of orders in the store.
    pub async fn count_orders(&self) -> Result<u64, ServiceError> {
        Ok(order::Entity::find().count(&*self.db).await?)
    }
}
