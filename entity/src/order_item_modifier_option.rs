use sea_orm::entity::prelude::*;

/// One selected modifier option on an order item.
///
/// The composite primary key makes (order item, modifier option) unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_item_modifier_option")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub modifier_option_id: i32,
    pub quantity: i32,
    pub option_name: String,
    #[sea_orm(column_type = "Double")]
    pub option_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_item::Entity",
        from = "Column::OrderItemId",
        to = "super::order_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    OrderItem,
    #[sea_orm(
        belongs_to = "super::modifier_option::Entity",
        from = "Column::ModifierOptionId",
        to = "super::modifier_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ModifierOption,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl Related<super::modifier_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModifierOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
