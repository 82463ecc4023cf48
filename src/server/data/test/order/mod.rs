use crate::server::{
    data::order::OrderRepository,
    error::order::{OrderError, OrderErrorKind, WriteStage},
    model::order::{
        CreateOrderParams, OrderItemModifierOptionParams, OrderItemParams, UpdateOrderParams,
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated_by_restaurant;
mod update;

/// Builds an item insert command snapshotting the given menu item.
fn item_params(
    menu_item: &entity::menu_item::Model,
    quantity: i32,
    modifier_options: Vec<OrderItemModifierOptionParams>,
) -> OrderItemParams {
    OrderItemParams {
        menu_item_id: menu_item.id,
        quantity,
        special_instructions: None,
        item_name: menu_item.name.clone(),
        item_price: menu_item.price,
        modifier_options,
    }
}

/// Builds a selection insert command snapshotting the given option.
fn option_params(
    option: &entity::modifier_option::Model,
    quantity: i32,
) -> OrderItemModifierOptionParams {
    OrderItemModifierOptionParams {
        modifier_option_id: option.id,
        quantity,
        option_name: option.name.clone(),
        option_price: option.price,
    }
}

/// Builds an open, unpaid takeout order command.
fn order_params(restaurant_id: i32, items: Vec<OrderItemParams>) -> CreateOrderParams {
    CreateOrderParams {
        order_type: OrderType::Takeout,
        order_status: OrderStatus::Open,
        payment_status: PaymentStatus::Unpaid,
        restaurant_id,
        items,
    }
}

/// Inserts a selection row directly.
async fn insert_selection(
    db: &DatabaseConnection,
    order_item_id: i32,
    option: &entity::modifier_option::Model,
    quantity: i32,
) -> Result<(), DbErr> {
    entity::order_item_modifier_option::ActiveModel {
        order_item_id: ActiveValue::Set(order_item_id),
        modifier_option_id: ActiveValue::Set(option.id),
        quantity: ActiveValue::Set(quantity),
        option_name: ActiveValue::Set(option.name.clone()),
        option_price: ActiveValue::Set(option.price),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Counts rows of the three order tables.
async fn count_order_rows(db: &DatabaseConnection) -> Result<(u64, u64, u64), DbErr> {
    Ok((
        entity::prelude::Order::find().count(db).await?,
        entity::prelude::OrderItem::find().count(db).await?,
        entity::prelude::OrderItemModifierOption::find()
            .count(db)
            .await?,
    ))
}
