//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Night Owl")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::restaurant::Model,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::restaurant::entity_builder()
            .name(format!("Restaurant {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.entity.currency = currency.into();
        self
    }

    /// Builds and inserts the restaurant entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - Created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            currency: ActiveValue::Set(self.entity.currency),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// Shorthand for `RestaurantFactory::new(db).build().await`.
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
