//! Modifier group factory for creating test modifier entities.
//!
//! Also provides `attach_modifier` for linking a group to a menu item through the
//! `menu_item_modifier` junction table.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test modifier groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::modifier::ModifierFactory;
///
/// let size = ModifierFactory::new(&db, restaurant.id)
///     .name("Size")
///     .required(true)
///     .max(2)
///     .build()
///     .await?;
/// ```
pub struct ModifierFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::modifier::Model,
}

impl<'a> ModifierFactory<'a> {
    /// Creates a new ModifierFactory with default values from fixture.
    ///
    /// Defaults to an optional, single-select group with `max` of 1.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - Restaurant the group belongs to
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::modifier::entity_builder()
            .restaurant_id(restaurant_id)
            .name(format!("Modifier {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets whether at least one option must be selected.
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

    /// Builds and inserts the modifier group into the database.
    ///
    /// # Returns
    /// - `Ok(entity::modifier::Model)` - Created modifier group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::modifier::Model, DbErr> {
        entity::modifier::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            required: ActiveValue::Set(self.entity.required),
            multi_select: ActiveValue::Set(self.entity.multi_select),
            max: ActiveValue::Set(self.entity.max),
            restaurant_id: ActiveValue::Set(self.entity.restaurant_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a modifier group with default values for the specified restaurant.
///
/// Shorthand for `ModifierFactory::new(db, restaurant_id).build().await`.
pub async fn create_modifier(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::modifier::Model, DbErr> {
    ModifierFactory::new(db, restaurant_id).build().await
}

/// Links a modifier group to a menu item.
///
/// # Arguments
/// - `db` - Database connection
/// - `menu_item_id` - Menu item that offers the group
/// - `modifier_id` - Modifier group to offer
///
/// # Returns
/// - `Ok(entity::menu_item_modifier::Model)` - Created junction row
/// - `Err(DbErr)` - Database error during insert (e.g. the link already exists)
pub async fn attach_modifier(
    db: &DatabaseConnection,
    menu_item_id: i32,
    modifier_id: i32,
) -> Result<entity::menu_item_modifier::Model, DbErr> {
    entity::menu_item_modifier::ActiveModel {
        menu_item_id: ActiveValue::Set(menu_item_id),
        modifier_id: ActiveValue::Set(modifier_id),
    }
    .insert(db)
    .await
}
