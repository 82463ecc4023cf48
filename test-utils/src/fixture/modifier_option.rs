//! Modifier option fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating modifier option entity models without database
//! insertion.

use entity::modifier_option;

/// Default test modifier option name.
pub const DEFAULT_NAME: &str = "Regular";

/// Default modifier option price.
pub const DEFAULT_PRICE: f64 = 0.0;

/// Default owning modifier group ID.
pub const DEFAULT_MODIFIER_ID: i32 = 1;

/// Creates a modifier option entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Regular"`
/// - price: `0.0`
/// - available: `true`
/// - pre_select: `false`
/// - modifier_id: `1`
///
/// # Returns
/// - `modifier_option::Model` - In-memory modifier option entity
pub fn entity() -> modifier_option::Model {
    modifier_option::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        price: DEFAULT_PRICE,
        available: true,
        pre_select: false,
        modifier_id: DEFAULT_MODIFIER_ID,
    }
}

/// Creates a modifier option entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let large = fixture::modifier_option::entity_builder()
///     .id(2)
///     .name("Large")
///     .price(1.5)
///     .build();
/// ```
pub fn entity_builder() -> ModifierOptionEntityBuilder {
    ModifierOptionEntityBuilder {
        entity: entity(),
    }
}

/// Builder for creating customized modifier option entity models.
pub struct ModifierOptionEntityBuilder {
    entity: modifier_option::Model,
}

impl ModifierOptionEntityBuilder {
    /// Sets the modifier option ID.
    ///
    /// # Arguments
    /// - `id` - Modifier option ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the option name.
    ///
    /// # Arguments
    /// - `name` - Display name for the option
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the option price.
    ///
    /// # Arguments
    /// - `price` - Surcharge for one unit of the option
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets whether the option can currently be selected.
    ///
    /// # Arguments
    /// - `available` - Availability flag
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn available(mut self, available: bool) -> Self {
        self.entity.available = available;
        self
    }

    /// Sets the owning modifier group ID.
    ///
    /// # Arguments
    /// - `modifier_id` - Modifier group the option belongs to
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn modifier_id(mut self, modifier_id: i32) -> Self {
        self.entity.modifier_id = modifier_id;
        self
    }

    /// Builds and returns the modifier option entity model.
    pub fn build(self) -> modifier_option::Model {
        self.entity
    }
}
