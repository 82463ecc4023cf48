//! Admissibility checks for requested order lines.
//!
//! Runs entirely in memory against catalog rows fetched beforehand. Lines are checked
//! independently, in request order, and the first violation rejects the whole order.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::server::{
    error::order::OrderError,
    model::{menu_item::MenuItem, modifier_option::ModifierOption, order::OrderLineInput},
};

/// Validates every requested line against the fetched catalog.
///
/// # Arguments
/// - `restaurant_id` - Restaurant the order is placed at
/// - `lines` - Requested lines, in request order
/// - `menu_items` - Menu items referenced by the lines, with modifier groups loaded
/// - `modifier_options` - Modifier options referenced by the lines
///
/// # Returns
/// - `Ok(())` - Every line is admissible
/// - `Err(OrderError)` - The first violation found
pub fn validate_order_lines(
    restaurant_id: i32,
    lines: &[OrderLineInput],
    menu_items: &HashMap<i32, MenuItem>,
    modifier_options: &HashMap<i32, ModifierOption>,
) -> Result<(), OrderError> {
    for line in lines {
        validate_line(restaurant_id, line, menu_items, modifier_options)?;
    }

    Ok(())
}

fn validate_line(
    restaurant_id: i32,
    line: &OrderLineInput,
    menu_items: &HashMap<i32, MenuItem>,
    modifier_options: &HashMap<i32, ModifierOption>,
) -> Result<(), OrderError> {
    let menu_item_id = line.menu_item_id;

    let menu_item = menu_items
        .get(&menu_item_id)
        .ok_or(OrderError::MenuItemNotFound { menu_item_id })?;

    if menu_item.restaurant_id != restaurant_id {
        return Err(OrderError::MenuItemWrongRestaurant {
            menu_item_id,
            restaurant_id,
        });
    }

    if !menu_item.is_available {
        return Err(OrderError::MenuItemUnavailable { menu_item_id });
    }

    let groups = menu_item
        .modifiers
        .as_ref()
        .ok_or(OrderError::ModifiersNotLoaded { menu_item_id })?;
    let group_ids: HashSet<i32> = groups.iter().map(|group| group.id).collect();

    let mut seen = HashSet::new();
    // modifier group id -> summed selected quantity
    let mut selected_by_group: BTreeMap<i32, i32> = BTreeMap::new();

    for selection in &line.modifier_selections {
        let modifier_option_id = selection.modifier_option_id;

        let option = modifier_options
            .get(&modifier_option_id)
            .ok_or(OrderError::ModifierOptionNotFound { modifier_option_id })?;

        if !option.available {
            return Err(OrderError::ModifierOptionUnavailable { modifier_option_id });
        }

        if !group_ids.contains(&option.modifier_id) {
            return Err(OrderError::ModifierOptionNotOnMenuItem {
                modifier_option_id,
                menu_item_id,
            });
        }

        if !seen.insert(modifier_option_id) {
            return Err(OrderError::DuplicateModifierOption {
                modifier_option_id,
                menu_item_id,
            });
        }

        let selected = selected_by_group.entry(option.modifier_id).or_insert(0);
        *selected = selected.saturating_add(selection.quantity);
    }

    if let Some(group) = groups
        .iter()
        .find(|group| group.required && !selected_by_group.contains_key(&group.id))
    {
        return Err(OrderError::RequiredGroupMissing {
            modifier_id: group.id,
            modifier_name: group.name.clone(),
            menu_item_id,
        });
    }

    for (&modifier_id, &selected) in &selected_by_group {
        let group = menu_item
            .modifier(modifier_id)
            .ok_or(OrderError::GroupNotLoaded {
                modifier_id,
                menu_item_id,
            })?;

        if selected > group.max || selected < group.min() {
            return Err(OrderError::GroupSelectionOutOfRange {
                modifier_id,
                modifier_name: group.name.clone(),
                menu_item_id,
                selected,
                min: group.min(),
                max: group.max,
            });
        }
    }

    Ok(())
}
