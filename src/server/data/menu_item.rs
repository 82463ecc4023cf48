use std::collections::{BTreeSet, HashMap};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::catalog::CatalogError, model::menu_item::MenuItem};

/// Fails when a strict batch lookup returned fewer rows than distinct ids requested.
///
/// # Arguments
/// - `entity` - Name of the catalog entity, used in the error message
/// - `requested` - Number of distinct ids requested
/// - `found` - Number of rows returned
///
/// # Returns
/// - `Ok(())` - Every requested id was found
/// - `Err(CatalogError::NotFound)` - At least one id was missing
pub fn ensure_all_found(
    entity: &'static str,
    requested: usize,
    found: usize,
) -> Result<(), CatalogError> {
    if found < requested {
        return Err(CatalogError::NotFound {
            entity,
            requested,
            found,
        });
    }

    Ok(())
}

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every requested menu item or fails.
    ///
    /// When `with_modifiers` is set, each item's modifier groups are loaded through the
    /// `menu_item_modifier` junction and `MenuItem::modifiers` is `Some`; otherwise it is
    /// `None`. An empty id set returns an empty map without querying.
    ///
    /// # Arguments
    /// - `ids` - Distinct menu item ids
    /// - `with_modifiers` - Whether to load the items' modifier groups
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, MenuItem>)` - Every requested item keyed by id
    /// - `Err(CatalogError::NotFound)` - At least one id does not exist
    /// - `Err(CatalogError::Db)` - Database error
    pub async fn get_by_ids_strict(
        &self,
        ids: &BTreeSet<i32>,
        with_modifiers: bool,
    ) -> Result<HashMap<i32, MenuItem>, CatalogError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(ids.iter().copied()));

        let items: Vec<MenuItem> = if with_modifiers {
            query
                .find_with_related(entity::prelude::Modifier)
                .order_by_asc(entity::menu_item::Column::Id)
                .order_by_asc(entity::modifier::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(item, modifiers)| MenuItem::from_entity(item, Some(modifiers)))
                .collect()
        } else {
            query
                .order_by_asc(entity::menu_item::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|item| MenuItem::from_entity(item, None))
                .collect()
        };

        ensure_all_found("menu item", ids.len(), items.len())?;

        Ok(items.into_iter().map(|item| (item.id, item)).collect())
    }
}
