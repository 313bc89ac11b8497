use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251102_000001_create_orders_table::Migration),
            Box::new(m20251102_000002_create_tracking_history_table::Migration),
            Box::new(m20251102_000003_add_lookup_indexes::Migration),
        ]
    }
}

mod m20251102_000001_create_orders_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20251102_000001_create_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Timestamps stay TEXT (`YYYY-MM-DD HH:MM:SS`) so they sort lexically.
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::OrderId)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::CustomerName).string().not_null())
                        .col(ColumnDef::new(Orders::CustomerPhone).string().not_null())
                        .col(ColumnDef::new(Orders::PickupAddress).string().not_null())
                        .col(ColumnDef::new(Orders::DeliveryAddress).string().not_null())
                        .col(ColumnDef::new(Orders::PackageType).string().not_null())
                        .col(ColumnDef::new(Orders::Status).string().not_null())
                        .col(ColumnDef::new(Orders::CurrentLocation).string().null())
                        .col(ColumnDef::new(Orders::EstimatedDelivery).string().null())
                        .col(ColumnDef::new(Orders::ScheduledTime).string().null())
                        .col(ColumnDef::new(Orders::CreatedAt).string().not_null())
                        .col(ColumnDef::new(Orders::UpdatedAt).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Orders {
        Table,
        OrderId,
        CustomerName,
        CustomerPhone,
        PickupAddress,
        DeliveryAddress,
        PackageType,
        Status,
        CurrentLocation,
        EstimatedDelivery,
        ScheduledTime,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20251102_000002_create_tracking_history_table {

    use super::m20251102_000001_create_orders_table::Orders;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20251102_000002_create_tracking_history_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TrackingHistory::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TrackingHistory::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TrackingHistory::OrderId).string().not_null())
                        .col(ColumnDef::new(TrackingHistory::Status).string().not_null())
                        .col(ColumnDef::new(TrackingHistory::Location).string().not_null())
                        .col(
                            ColumnDef::new(TrackingHistory::Description)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TrackingHistory::Timestamp)
                                .string()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tracking_history_order_id")
                                .from(TrackingHistory::Table, TrackingHistory::OrderId)
                                .to(Orders::Table, Orders::OrderId),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TrackingHistory::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum TrackingHistory {
        Table,
        Id,
        OrderId,
        Status,
        Location,
        Description,
        Timestamp,
    }
}

mod m20251102_000003_add_lookup_indexes {

    use super::m20251102_000001_create_orders_table::Orders;
    use super::m20251102_000002_create_tracking_history_table::TrackingHistory;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20251102_000003_add_lookup_indexes"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_customer_phone")
                        .table(Orders::Table)
                        .col(Orders::CustomerPhone)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_tracking_history_order_id_timestamp")
                        .table(TrackingHistory::Table)
                        .col(TrackingHistory::OrderId)
                        .col(TrackingHistory::Timestamp)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_index(
                    Index::drop()
                        .name("idx_tracking_history_order_id_timestamp")
                        .table(TrackingHistory::Table)
                        .to_owned(),
                )
                .await?;

            manager
                .drop_index(
                    Index::drop()
                        .name("idx_orders_customer_phone")
                        .table(Orders::Table)
                        .to_owned(),
                )
                .await
        }
    }
}
