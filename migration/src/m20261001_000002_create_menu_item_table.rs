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
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string_len(MenuItem::Name, 255))
                    .col(string_len(MenuItem::Description, 1000).default(""))
                    .col(double(MenuItem::Price))
                    .col(boolean(MenuItem::IsAvailable).default(true))
                    .col(integer(MenuItem::RestaurantId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_restaurant_id")
                            .from(MenuItem::Table, MenuItem::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    Name,
    Description,
    Price,
    IsAvailable,
    RestaurantId,
}
