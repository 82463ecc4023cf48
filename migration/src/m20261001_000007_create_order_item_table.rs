use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_menu_item_table::MenuItem, m20261001_000006_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::Quantity).default(1))
                    .col(text_null(OrderItem::SpecialInstructions))
                    .col(string(OrderItem::ItemName))
                    .col(double(OrderItem::ItemPrice))
                    .col(integer(OrderItem::MenuItemId))
                    .col(integer(OrderItem::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_menu_item_id")
                            .from(OrderItem::Table, OrderItem::MenuItemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    Quantity,
    SpecialInstructions,
    ItemName,
    ItemPrice,
    MenuItemId,
    OrderId,
}
