use crate::server::{
    error::{
        catalog::CatalogError,
        order::{OrderError, OrderErrorKind},
        AppError,
    },
    model::order::{CreateOrderInput, ModifierSelectionInput, OrderLineInput, UpdateOrderParams},
    service::order::OrderService,
};
use entity::sea_orm_active_enums::{OrderStatus, OrderType, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_paginated_by_restaurant;
mod update;

/// Catalog shared by the order service tests.
///
/// A burger offering a required "Size" group (max 2) with Small and Large, and an optional
/// "Sauce" group (max 1) with Ketchup. Fries has no groups.
struct Catalog {
    restaurant: entity::restaurant::Model,
    burger: entity::menu_item::Model,
    fries: entity::menu_item::Model,
    size: entity::modifier::Model,
    small: entity::modifier_option::Model,
    large: entity::modifier_option::Model,
    ketchup: entity::modifier_option::Model,
}

async fn seed_catalog(db: &DatabaseConnection) -> Result<Catalog, DbErr> {
    let restaurant = factory::create_restaurant(db).await?;
    let burger = factory::menu_item::MenuItemFactory::new(db, restaurant.id)
        .name("Burger")
        .price(9.5)
        .build()
        .await?;
    let fries = factory::menu_item::MenuItemFactory::new(db, restaurant.id)
        .name("Fries")
        .price(3.0)
        .build()
        .await?;

    let size = factory::modifier::ModifierFactory::new(db, restaurant.id)
        .name("Size")
        .required(true)
        .multi_select(true)
        .max(2)
        .build()
        .await?;
    let sauce = factory::modifier::ModifierFactory::new(db, restaurant.id)
        .name("Sauce")
        .max(1)
        .build()
        .await?;
    factory::attach_modifier(db, burger.id, size.id).await?;
    factory::attach_modifier(db, burger.id, sauce.id).await?;

    let small = factory::modifier_option::ModifierOptionFactory::new(db, size.id)
        .name("Small")
        .price(0.0)
        .build()
        .await?;
    let large = factory::modifier_option::ModifierOptionFactory::new(db, size.id)
        .name("Large")
        .price(1.5)
        .build()
        .await?;
    let ketchup = factory::modifier_option::ModifierOptionFactory::new(db, sauce.id)
        .name("Ketchup")
        .price(0.25)
        .build()
        .await?;

    Ok(Catalog {
        restaurant,
        burger,
        fries,
        size,
        small,
        large,
        ketchup,
    })
}

fn line(
    menu_item: &entity::menu_item::Model,
    quantity: i32,
    selections: &[(&entity::modifier_option::Model, i32)],
) -> OrderLineInput {
    OrderLineInput {
        menu_item_id: menu_item.id,
        quantity,
        special_instructions: None,
        modifier_selections: selections
            .iter()
            .map(|(option, quantity)| ModifierSelectionInput {
                modifier_option_id: option.id,
                quantity: *quantity,
            })
            .collect(),
    }
}

fn input(restaurant_id: i32, lines: Vec<OrderLineInput>) -> CreateOrderInput {
    CreateOrderInput {
        order_type: OrderType::DineIn,
        restaurant_id,
        lines,
    }
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
