//! Modifier option factory for creating test modifier option entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test modifier options with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::modifier_option::ModifierOptionFactory;
///
/// let large = ModifierOptionFactory::new(&db, size.id)
///     .name("Large")
///     .price(1.5)
///     .build()
///     .await?;
/// ```
pub struct ModifierOptionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::modifier_option::Model,
}

impl<'a> ModifierOptionFactory<'a> {
    /// Creates a new ModifierOptionFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `modifier_id` - Modifier group the option belongs to
    ///
    /// # Returns
    /// - `ModifierOptionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, modifier_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::modifier_option::entity_builder()
            .modifier_id(modifier_id)
            .name(format!("Option {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the option name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the option price.
    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets whether the option can currently be selected.
    pub fn available(mut self, available: bool) -> Self {
        self.entity.available = available;
        self
    }

    pub fn pre_select(mut self, pre_select: bool) -> Self {
        self.entity.pre_select = pre_select;
        self
    }

    /// Builds and inserts the modifier option entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::modifier_option::Model)` - Created modifier option entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::modifier_option::Model, DbErr> {
        entity::modifier_option::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            price: ActiveValue::Set(self.entity.price),
            available: ActiveValue::Set(self.entity.available),
            pre_select: ActiveValue::Set(self.entity.pre_select),
            modifier_id: ActiveValue::Set(self.entity.modifier_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a modifier option with default values for the specified group.
///
/// Shorthand for `ModifierOptionFactory::new(db, modifier_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `modifier_id` - Modifier group the option belongs to
///
/// # Returns
/// - `Ok(entity::modifier_option::Model)` - Created modifier option entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_modifier_option(
    db: &DatabaseConnection,
    modifier_id: i32,
) -> Result<entity::modifier_option::Model, DbErr> {
    ModifierOptionFactory::new(db, modifier_id).build().await
}
