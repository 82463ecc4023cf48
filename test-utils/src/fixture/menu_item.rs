//! Menu item fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating menu item entity models without database insertion.
//! These are useful for unit testing order validation and for providing consistent default
//! values to the menu item factory.

use entity::menu_item;

/// Default test menu item name.
pub const DEFAULT_NAME: &str = "Burger";

/// Default test menu item description.
pub const DEFAULT_DESCRIPTION: &str = "Beef patty on a brioche bun";

/// Default menu item price.
pub const DEFAULT_PRICE: f64 = 9.5;

/// Default restaurant ID for menu items.
pub const DEFAULT_RESTAURANT_ID: i32 = 1;

/// Creates a menu item entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Burger"`
/// - description: `"Beef patty on a brioche bun"`
/// - price: `9.5`
/// - is_available: `true`
/// - restaurant_id: `1`
///
/// # Returns
/// - `menu_item::Model` - In-memory menu item entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let item = fixture::menu_item::entity();
/// assert_eq!(item.name, "Burger");
/// assert!(item.is_available);
/// ```
pub fn entity() -> menu_item::Model {
    menu_item::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        price: DEFAULT_PRICE,
        is_available: true,
        restaurant_id: DEFAULT_RESTAURANT_ID,
    }
}

/// Creates a menu item entity builder for customization.
///
/// # Returns
/// - `MenuItemEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let fries = fixture::menu_item::entity_builder()
///     .id(2)
///     .name("Fries")
///     .price(3.0)
///     .build();
/// ```
pub fn entity_builder() -> MenuItemEntityBuilder {
    MenuItemEntityBuilder::default()
}

/// Builder for creating customized menu item entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct MenuItemEntityBuilder {
    id: i32,
    name: String,
    description: String,
    price: f64,
    is_available: bool,
    restaurant_id: i32,
}

impl Default for MenuItemEntityBuilder {
    fn default() -> Self {
        let model = entity();
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            is_available: model.is_available,
            restaurant_id: model.restaurant_id,
        }
    }
}

impl MenuItemEntityBuilder {
    /// Sets the menu item ID.
    ///
    /// # Arguments
    /// - `id` - Menu item ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the menu item name.
    ///
    /// # Arguments
    /// - `name` - Display name for the menu item
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the menu item description.
    ///
    /// # Arguments
    /// - `description` - Free-form description text
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the unit price.
    ///
    /// # Arguments
    /// - `price` - Current price of one unit
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets whether the menu item can currently be ordered.
    ///
    /// # Arguments
    /// - `is_available` - Availability flag
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Sets the owning restaurant ID.
    ///
    /// # Arguments
    /// - `restaurant_id` - Restaurant the menu item belongs to
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn restaurant_id(mut self, restaurant_id: i32) -> Self {
        self.restaurant_id = restaurant_id;
        self
    }

    /// Builds and returns the menu item entity model.
    ///
    /// # Returns
    /// - `menu_item::Model` - In-memory menu item entity
    pub fn build(self) -> menu_item::Model {
        menu_item::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            is_available: self.is_available,
            restaurant_id: self.restaurant_id,
        }
    }
}
