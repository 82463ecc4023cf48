use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "modifier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub required: bool,
    pub multi_select: bool,
    pub max: i32,
    pub restaurant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Restaurant,
    #[sea_orm(has_many = "super::modifier_option::Entity")]
    ModifierOption,
    #[sea_orm(has_many = "super::menu_item_modifier::Entity")]
    MenuItemModifier,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::modifier_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModifierOption.def()
    }
}

impl Related<super::menu_item_modifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemModifier.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::menu_item_modifier::Relation::MenuItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::menu_item_modifier::Relation::Modifier.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
