use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub is_available: bool,
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
    #[sea_orm(has_many = "super::menu_item_modifier::Entity")]
    MenuItemModifier,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::menu_item_modifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItemModifier.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::modifier::Entity> for Entity {
    fn to() -> RelationDef {
        super::menu_item_modifier::Relation::Modifier.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::menu_item_modifier::Relation::MenuItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
