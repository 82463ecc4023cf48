use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modifier_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub available: bool,
    pub pre_select: bool,
    pub modifier_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::modifier::Entity",
        from = "Column::ModifierId",
        to = "super::modifier::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Modifier,
    #[sea_orm(has_many = "super::order_item_modifier_option::Entity")]
    OrderItemModifierOption,
}

impl Related<super::modifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modifier.def()
    }
}

impl Related<super::order_item_modifier_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItemModifierOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
