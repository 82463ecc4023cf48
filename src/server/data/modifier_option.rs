use std::collections::{BTreeSet, HashMap};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{
    data::menu_item::ensure_all_found, error::catalog::CatalogError,
    model::modifier_option::ModifierOption,
};

pub struct ModifierOptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModifierOptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every requested modifier option or fails.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, ModifierOption>)` - Every requested option keyed by id
    /// - `Err(CatalogError::NotFound)` - At least one id does not exist
    /// - `Err(CatalogError::Db)` - Database error
    pub async fn get_by_ids_strict(
        &self,
        ids: &BTreeSet<i32>,
    ) -> Result<HashMap<i32, ModifierOption>, CatalogError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let options = entity::prelude::ModifierOption::find()
            .filter(entity::modifier_option::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        ensure_all_found("modifier option", ids.len(), options.len())?;

        Ok(options
            .into_iter()
            .map(|option| (option.id, ModifierOption::from_entity(option)))
            .collect())
    }
}
