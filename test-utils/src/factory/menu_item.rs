//! Menu item factory for creating test menu item entities.
//!
//! This module provides factory methods for creating menu item entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
///
/// Default values are sourced from the menu_item fixture, with a unique name per instance.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::menu_item::MenuItemFactory;
///
/// let fries = MenuItemFactory::new(&db, restaurant.id)
///     .name("Fries")
///     .price(3.25)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::menu_item::Model,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - Restaurant the menu item belongs to
    ///
    /// # Returns
    /// - `MenuItemFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::menu_item::entity_builder()
            .restaurant_id(restaurant_id)
            .name(format!("Menu Item {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the menu item name.
    ///
    /// # Arguments
    /// - `name` - Display name for the menu item
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the unit price.
    ///
    /// # Arguments
    /// - `price` - Current price of one unit
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets whether the menu item can currently be ordered.
    ///
    /// # Arguments
    /// - `is_available` - Availability flag
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_available(mut self, is_available: bool) -> Self {
        self.entity.is_available = is_available;
        self
    }

    /// Builds and inserts the menu item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_item::Model)` - Created menu item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            price: ActiveValue::Set(self.entity.price),
            is_available: ActiveValue::Set(self.entity.is_available),
            restaurant_id: ActiveValue::Set(self.entity.restaurant_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item with default values for the specified restaurant.
///
/// Shorthand for `MenuItemFactory::new(db, restaurant_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `restaurant_id` - Restaurant the menu item belongs to
///
/// # Returns
/// - `Ok(entity::menu_item::Model)` - Created menu item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_menu_item(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, restaurant_id).build().await
}
