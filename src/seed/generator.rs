//! Synthetic orders and matching tracking histories.
//!
//! The generator is pure: it draws from the supplied RNG and measures every
//! offset from a fixed `now`, so a seeded RNG reproduces the same batch.

use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use super::catalog::{
    service_point, sorting_hub, City, CITIES, CUSTOMER_NAMES, PACKAGE_TYPES, PHONE_PREFIXES,
    STATUS_WEIGHTS, STREETS,
};
use crate::entities::order;
use crate::models::{timestamp::format_timestamp, OrderStatus};

/// A tracking checkpoint before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTracking {
    pub status: OrderStatus,
    pub location: String,
    pub description: &'static str,
    pub timestamp: NaiveDateTime,
}

/// One generated order row plus its history, oldest checkpoint first.
#[derive(Debug, Clone)]
pub struct SeedOrder {
    pub status: OrderStatus,
    pub order: order::Model,
    pub tracking: Vec<SeedTracking>,
}

pub struct SeedGenerator<R: Rng> {
    rng: R,
    now: NaiveDateTime,
}

impl<R: Rng> SeedGenerator<R> {
    pub fn new(rng: R, now: NaiveDateTime) -> Self {
        Self { rng, now }
    }

    /// Generates orders numbered `1..=count`.
    pub fn generate(&mut self, count: usize) -> Vec<SeedOrder> {
        (1..=count).map(|index| self.order(index)).collect()
    }

    /// Generates the order with 1-based batch position `index`.
    pub fn order(&mut self, index: usize) -> SeedOrder {
        let order_id = self.order_code(index);
        let customer_name = self.pick(&CUSTOMER_NAMES).to_string();
        let customer_phone = self.phone();

        let (pickup, delivery) = self.city_pair();
        let pickup_address = self.address(pickup);
        let delivery_address = self.address(delivery);
        let package_type = self.pick(&PACKAGE_TYPES).to_string();

        let status = self.pick_status();

        let created_at = self.now
            - Duration::days(self.rng.gen_range(0..=10))
            - Duration::hours(self.rng.gen_range(0..=23));
        let updated_at = created_at + self.hours(1..=48);

        let current_location = match status {
            OrderStatus::Pending | OrderStatus::Returned => service_point(pickup.name),
            OrderStatus::PickedUp => sorting_hub(pickup.name),
            OrderStatus::InTransit => sorting_hub(delivery.name),
            OrderStatus::OutForDelivery | OrderStatus::Delivered | OrderStatus::Failed => {
                service_point(delivery.name)
            }
        };

        let estimated_delivery = if status.is_in_flight() {
            self.now + Duration::days(self.rng.gen_range(1..=3))
        } else {
            updated_at
        };

        let scheduled_time = (status == OrderStatus::OutForDelivery && self.rng.gen_bool(0.5))
            .then(|| self.now + Duration::days(1) + self.hours(9..=18));

        let tracking = self.tracking(status, pickup, delivery, created_at);

        SeedOrder {
            status,
            order: order::Model {
                order_id,
                customer_name,
                customer_phone,
                pickup_address,
                delivery_address,
                package_type,
                status: status.to_string(),
                current_location: Some(current_location),
                estimated_delivery: Some(format_timestamp(estimated_delivery)),
                scheduled_time: scheduled_time.map(format_timestamp),
                created_at: format_timestamp(created_at),
                updated_at: format_timestamp(updated_at),
            },
            tracking,
        }
    }

    /// Weighted draw over the status table: cumulative sum against a uniform roll.
    pub fn pick_status(&mut self) -> OrderStatus {
        let total: u32 = STATUS_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = self.rng.gen_range(0..total);
        for (status, weight) in STATUS_WEIGHTS {
            if roll < weight {
                return status;
            }
            roll -= weight;
        }
        // Unreachable while the roll stays below the weight total.
        OrderStatus::InTransit
    }

    fn order_code(&mut self, index: usize) -> String {
        let day = self.now - Duration::days(self.rng.gen_range(0..=10));
        format!("ORD{}{:03}", day.format("%Y%m%d"), index)
    }

    fn phone(&mut self) -> String {
        let prefix = self.pick(&PHONE_PREFIXES);
        let suffix: String = (0..8)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect();
        format!("+86{prefix}{suffix}")
    }

    /// Pickup and delivery cities, never the same.
    fn city_pair(&mut self) -> (&'static City, &'static City) {
        let pickup = self.rng.gen_range(0..CITIES.len());
        let mut delivery = self.rng.gen_range(0..CITIES.len() - 1);
        if delivery >= pickup {
            delivery += 1;
        }
        (&CITIES[pickup], &CITIES[delivery])
    }

    fn address(&mut self, city: &City) -> String {
        let district = self.pick(city.districts);
        let street = self.pick(&STREETS);
        let number: u32 = self.rng.gen_range(1..=9999);
        format!("{number} {street}, {district}, {}", city.name)
    }

    fn tracking(
        &mut self,
        status: OrderStatus,
        pickup: &City,
        delivery: &City,
        created_at: NaiveDateTime,
    ) -> Vec<SeedTracking> {
        let mut history = Vec::new();
        let mut push = |status, location, description, timestamp| {
            history.push(SeedTracking {
                status,
                location,
                description,
                timestamp,
            })
        };

        if status == OrderStatus::Pending {
            push(
                OrderStatus::Pending,
                service_point(pickup.name),
                "Order created, awaiting pickup",
                created_at,
            );
            return history;
        }

        let mut ts = created_at + self.hours(1..=4);
        push(
            OrderStatus::PickedUp,
            service_point(pickup.name),
            "Picked up by courier",
            ts,
        );

        if status != OrderStatus::PickedUp {
            ts += self.hours(3..=6);
            push(
                OrderStatus::InTransit,
                sorting_hub(pickup.name),
                "Arrived at sorting hub",
                ts,
            );

            ts += self.hours(12..=24);
            push(
                OrderStatus::InTransit,
                sorting_hub(delivery.name),
                "Arrived at destination sorting hub",
                ts,
            );
        }

        if matches!(
            status,
            OrderStatus::OutForDelivery | OrderStatus::Delivered | OrderStatus::Failed
        ) {
            ts += self.hours(2..=4);
            push(
                OrderStatus::OutForDelivery,
                service_point(delivery.name),
                "Courier out for delivery",
                ts,
            );
        }

        match status {
            OrderStatus::Delivered => {
                ts += self.hours(1..=3);
                push(
                    OrderStatus::Delivered,
                    service_point(delivery.name),
                    "Delivered, signed for by recipient",
                    ts,
                );
            }
            OrderStatus::Failed => {
                ts += self.hours(1..=2);
                push(
                    OrderStatus::Failed,
                    service_point(delivery.name),
                    "Delivery failed, recipient not at home",
                    ts,
                );
            }
            OrderStatus::Returned => {
                ts += self.hours(1..=2);
                push(
                    OrderStatus::Failed,
                    service_point(delivery.name),
                    "Repeated delivery attempts failed",
                    ts,
                );

                ts += Duration::days(self.rng.gen_range(1..=3));
                push(
                    OrderStatus::Returned,
                    service_point(pickup.name),
                    "Returned to sender",
                    ts,
                );
            }
            _ => {}
        }

        history
    }

    fn hours(&mut self, range: RangeInclusive<i64>) -> Duration {
        Duration::hours(self.rng.gen_range(range))
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }
}
