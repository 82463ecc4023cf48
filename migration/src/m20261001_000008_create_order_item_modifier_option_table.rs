use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000005_create_modifier_option_table::ModifierOption,
    m20261001_000007_create_order_item_table::OrderItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItemModifierOption::Table)
                    .if_not_exists()
                    .col(integer(OrderItemModifierOption::OrderItemId))
                    .col(integer(OrderItemModifierOption::ModifierOptionId))
                    .col(integer(OrderItemModifierOption::Quantity).default(1))
                    .col(string(OrderItemModifierOption::OptionName))
                    .col(double(OrderItemModifierOption::OptionPrice))
                    // One row per (order item, modifier option)
                    .primary_key(
                        Index::create()
                            .col(OrderItemModifierOption::OrderItemId)
                            .col(OrderItemModifierOption::ModifierOptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_modifier_option_order_item_id")
                            .from(
                                OrderItemModifierOption::Table,
                                OrderItemModifierOption::OrderItemId,
                            )
                            .to(OrderItem::Table, OrderItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_modifier_option_modifier_option_id")
                            .from(
                                OrderItemModifierOption::Table,
                                OrderItemModifierOption::ModifierOptionId,
                            )
                            .to(ModifierOption::Table, ModifierOption::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(OrderItemModifierOption::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItemModifierOption {
    Table,
    OrderItemId,
    ModifierOptionId,
    Quantity,
    OptionName,
    OptionPrice,
}
