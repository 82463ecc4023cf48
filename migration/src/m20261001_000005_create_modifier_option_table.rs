use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_modifier_table::Modifier;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModifierOption::Table)
                    .if_not_exists()
                    .col(pk_auto(ModifierOption::Id))
                    .col(string_len(ModifierOption::Name, 255))
                    .col(double(ModifierOption::Price).default(0.0))
                    .col(boolean(ModifierOption::Available).default(true))
                    .col(boolean(ModifierOption::PreSelect).default(false))
                    .col(integer(ModifierOption::ModifierId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_modifier_option_modifier_id")
                            .from(ModifierOption::Table, ModifierOption::ModifierId)
                            .to(Modifier::Table, Modifier::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModifierOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModifierOption {
    Table,
    Id,
    Name,
    Price,
    Available,
    PreSelect,
    ModifierId,
}
