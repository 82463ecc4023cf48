use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quantity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_instructions: Option<String>,
    pub item_name: String,
    #[sea_orm(column_type = "Double")]
    pub item_price: f64,
    pub menu_item_id: i32,
    pub order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::menu_item::Entity",
        from = "Column::MenuItemId",
        to = "super::menu_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    MenuItem,
    #[sea_orm(has_many = "super::order_item_modifier_option::Entity")]
    OrderItemModifierOption,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuItem.def()
    }
}

impl Related<super::order_item_modifier_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItemModifierOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
