//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules, including ID
//! generation and convenience methods for creating entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a menu item with one modifier group and one option attached.
///
/// This is a convenience method that creates:
/// 1. Restaurant
/// 2. Menu item
/// 3. Modifier group (optional, max 1)
/// 4. Menu item to modifier group link
/// 5. Modifier option in that group
///
/// All entities are created with default values. Use the individual factories if you need
/// to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((restaurant, menu_item, modifier, option))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_menu_item_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::restaurant::Model,
        entity::menu_item::Model,
        entity::modifier::Model,
        entity::modifier_option::Model,
    ),
    DbErr,
> {
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let menu_item = crate::factory::menu_item::create_menu_item(db, restaurant.id).await?;
    let modifier = crate::factory::modifier::create_modifier(db, restaurant.id).await?;
    crate::factory::modifier::attach_modifier(db, menu_item.id, modifier.id).await?;
    let option = crate::factory::modifier_option::create_modifier_option(db, modifier.id).await?;

    Ok((restaurant, menu_item, modifier, option))
}
