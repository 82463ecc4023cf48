//! Restaurant fixtures for creating in-memory test data.

use entity::restaurant;

/// Default test restaurant name.
pub const DEFAULT_NAME: &str = "Test Diner";

/// Default ISO currency code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Creates a restaurant entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Diner"`
/// - currency: `"USD"`
pub fn entity() -> restaurant::Model {
    entity_builder().build()
}

/// Creates a restaurant entity builder for customization.
pub fn entity_builder() -> RestaurantEntityBuilder {
    RestaurantEntityBuilder::default()
}

/// Builder for creating customized restaurant entity models.
pub struct RestaurantEntityBuilder {
    id: i32,
    name: String,
    currency: String,
}

impl Default for RestaurantEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl RestaurantEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn build(self) -> restaurant::Model {
        restaurant::Model {
            id: self.id,
            name: self.name,
            currency: self.currency,
        }
    }
}
