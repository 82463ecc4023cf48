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
                    .table(Modifier::Table)
                    .if_not_exists()
                    .col(pk_auto(Modifier::Id))
                    .col(string_len(Modifier::Name, 255))
                    .col(boolean(Modifier::Required).default(false))
                    .col(boolean(Modifier::MultiSelect).default(false))
                    .col(integer(Modifier::Max).default(1))
                    .col(integer(Modifier::RestaurantId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_modifier_restaurant_id")
                            .from(Modifier::Table, Modifier::RestaurantId)
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
            .drop_table(Table::drop().table(Modifier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Modifier {
    Table,
    Id,
    Name,
    Required,
    MultiSelect,
    Max,
    RestaurantId,
}
