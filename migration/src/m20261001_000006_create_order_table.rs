use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_restaurant_table::Restaurant;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_len(Order::OrderType, 16))
                    .col(string_len(Order::OrderStatus, 16).default("OPEN"))
                    .col(string_len(Order::PaymentStatus, 16).default("UNPAID"))
                    .col(integer(Order::RestaurantId))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_restaurant_id")
                            .from(Order::Table, Order::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_restaurant_id")
                    .table(Order::Table)
                    .col(Order::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    OrderType,
    OrderStatus,
    PaymentStatus,
    RestaurantId,
    CreatedAt,
    UpdatedAt,
}
