//! Builds persistence commands from a validated order request.

use std::collections::HashMap;

use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus};

use crate::server::{
    error::order::OrderError,
    model::{
        menu_item::MenuItem,
        modifier_option::ModifierOption,
        order::{
            CreateOrderInput, CreateOrderParams, OrderItemModifierOptionParams, OrderItemParams,
        },
    },
};

/// Builds the insert command for a validated order, snapshotting current names and prices.
///
/// New orders always start `Open` and `Unpaid`. Produces one item per requested line and
/// one selection per requested option, in request order.
///
/// # Returns
/// - `Ok(CreateOrderParams)` - The insert command
/// - `Err(OrderError)` - A referenced catalog row is missing from the fetched maps
pub fn assemble_order(
    input: CreateOrderInput,
    menu_items: &HashMap<i32, MenuItem>,
    modifier_options: &HashMap<i32, ModifierOption>,
) -> Result<CreateOrderParams, OrderError> {
    let items = input
        .lines
        .into_iter()
        .map(|line| {
            let menu_item = menu_items
                .get(&line.menu_item_id)
                .ok_or(OrderError::MenuItemNotFound {
                    menu_item_id: line.menu_item_id,
                })?;

            let modifier_options = line
                .modifier_selections
                .into_iter()
                .map(|selection| {
                    let option = modifier_options.get(&selection.modifier_option_id).ok_or(
                        OrderError::ModifierOptionNotFound {
                            modifier_option_id: selection.modifier_option_id,
                        },
                    )?;

                    Ok(OrderItemModifierOptionParams {
                        modifier_option_id: option.id,
                        quantity: selection.quantity,
                        option_name: option.name.clone(),
                        option_price: option.price,
                    })
                })
                .collect::<Result<Vec<_>, OrderError>>()?;

            Ok(OrderItemParams {
                menu_item_id: menu_item.id,
                quantity: line.quantity,
                special_instructions: line.special_instructions,
                item_name: menu_item.name.clone(),
                item_price: menu_item.price,
                modifier_options,
            })
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    Ok(CreateOrderParams {
        order_type: input.order_type,
        order_status: OrderStatus::Open,
        payment_status: PaymentStatus::Unpaid,
        restaurant_id: input.restaurant_id,
        items,
    })
}
