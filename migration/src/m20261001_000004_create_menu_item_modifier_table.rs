use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000002_create_menu_item_table::MenuItem,
    m20261001_000003_create_modifier_table::Modifier,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItemModifier::Table)
                    .if_not_exists()
                    .col(integer(MenuItemModifier::MenuItemId))
                    .col(integer(MenuItemModifier::ModifierId))
                    .primary_key(
                        Index::create()
                            .col(MenuItemModifier::MenuItemId)
                            .col(MenuItemModifier::ModifierId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_modifier_menu_item_id")
                            .from(MenuItemModifier::Table, MenuItemModifier::MenuItemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_modifier_modifier_id")
                            .from(MenuItemModifier::Table, MenuItemModifier::ModifierId)
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
            .drop_table(Table::drop().table(MenuItemModifier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItemModifier {
    Table,
    MenuItemId,
    ModifierId,
}
