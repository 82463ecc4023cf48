use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item_modifier")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub modifier_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MenuItem,
    #[sea_orm(
        belongs_to = "super::modifier::Entity",
        from = "Column::ModifierId",
        to = "super::modifier::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Modifier,
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl Related<super::modifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modifier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
