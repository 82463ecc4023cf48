//! Modifier group fixtures for creating in-memory test data.

use entity::modifier;

/// Default test modifier group name.
pub const DEFAULT_NAME: &str = "Size";

/// Default maximum total selected quantity.
pub const DEFAULT_MAX: i32 = 1;

/// Default restaurant ID for modifier groups.
pub const DEFAULT_RESTAURANT_ID: i32 = 1;

/// Creates a modifier group entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Size"`
/// - required: `false`
/// - multi_select: `false`
/// - max: `1`
/// - restaurant_id: `1`
///
/// # Returns
/// - `modifier::Model` - In-memory modifier group entity
pub fn entity() -> modifier::Model {
    modifier::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        required: false,
        multi_select: false,
        max: DEFAULT_MAX,
        restaurant_id: DEFAULT_RESTAURANT_ID,
    }
}

/// Creates a modifier group entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let size = fixture::modifier::entity_builder()
///     .required(true)
///     .max(2)
///     .build();
/// ```
pub fn entity_builder() -> ModifierEntityBuilder {
    ModifierEntityBuilder {
        entity: entity(),
    }
}

/// Builder for creating customized modifier group entity models.
pub struct ModifierEntityBuilder {
    entity: modifier::Model,
}

impl ModifierEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets whether at least one option of the group must be selected.
    pub fn required(mut self, required: bool) -> Self {
        self.entity.required = required;
        self
    }

    pub fn multi_select(mut self, multi_select: bool) -> Self {
        self.entity.multi_select = multi_select;
        self
    }

    /// Sets the maximum total quantity selectable across the group's options.
    pub fn max(mut self, max: i32) -> Self {
        self.entity.max = max;
        self
    }

    pub fn restaurant_id(mut self, restaurant_id: i32) -> Self {
        self.entity.restaurant_id = restaurant_id;
        self
    }

    pub fn build(self) -> modifier::Model {
        self.entity
    }
}
