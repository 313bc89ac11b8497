//! Demo data seeding for the orders store.

pub mod catalog;
pub mod generator;

use rand::Rng;
use sea_orm::{EntityTrait, Set, TransactionTrait};
use tracing::info;

pub use generator::{SeedGenerator, SeedOrder, SeedTracking};

use crate::{
    db::DbPool,
    entities::{order, tracking_history},
    errors::ServiceError,
    models::timestamp::format_timestamp,
};

pub const DEFAULT_ORDER_COUNT: usize = 35;

/// Rows written by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub orders: usize,
    pub tracking_records: usize,
}

/// Deletes every tracking record, then every order.
pub async fn reset(db: &DbPool) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let tracking = tracking_history::Entity::delete_many().exec(&txn).await?;
    let orders = order::Entity::delete_many().exec(&txn).await?;
    txn.commit().await?;

    info!(
        "Removed {} orders and {} tracking records",
        orders.rows_affected, tracking.rows_affected
    );
    Ok(())
}

/// Generates `count` orders and persists them with their tracking history.
///
/// The whole batch is written in one transaction; a failure leaves the store untouched.
pub async fn seed_database<R: Rng>(
    db: &DbPool,
    generator: &mut SeedGenerator<R>,
    count: usize,
) -> Result<SeedReport, ServiceError> {
    info!("Generating {} demo orders...", count);

    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for (i, seed) in generator.generate(count).into_iter().enumerate() {
        let SeedOrder {
            status,
            order: model,
            tracking,
        } = seed;

        info!(
            "  [{}/{}] order {} - {} - {}",
            i + 1,
            count,
            model.order_id,
            model.customer_name,
            status.label()
        );

        let order_id = model.order_id.clone();
        order::Entity::insert(order_active_model(model))
            .exec_without_returning(&txn)
            .await?;
        report.orders += 1;

        let rows: Vec<_> = tracking
            .into_iter()
            .map(|event| tracking_history::ActiveModel {
                order_id: Set(order_id.clone()),
                status: Set(event.status.to_string()),
                location: Set(event.location),
                description: Set(event.description.to_string()),
                timestamp: Set(format_timestamp(event.timestamp)),
                ..Default::default()
            })
            .collect();
        report.tracking_records += rows.len();

        if !rows.is_empty() {
            tracking_history::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }
    }

    txn.commit().await?;

    info!(
        "Seeded {} orders with {} tracking records",
        report.orders, report.tracking_records
    );
    Ok(report)
}

fn order_active_model(model: order::Model) -> order::ActiveModel {
    order::ActiveModel {
        order_id: Set(model.order_id),
        customer_name: Set(model.customer_name),
        customer_phone: Set(model.customer_phone),
        pickup_address: Set(model.pickup_address),
        delivery_address: Set(model.delivery_address),
        package_type: Set(model.package_type),
        status: Set(model.status),
        current_location: Set(model.current_location),
        estimated_delivery: Set(model.estimated_delivery),
        scheduled_time: Set(model.scheduled_time),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
    }
}
