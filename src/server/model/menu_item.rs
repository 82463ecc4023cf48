//! Catalog menu items and their modifier groups as seen by order creation.

/// Modifier group attached to a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub id: i32,
    pub name: String,
    /// Whether at least one option must be selected.
    pub required: bool,
    pub multi_select: bool,
    /// Maximum total quantity selectable across the group's options.
    pub max: i32,
    pub restaurant_id: i32,
}

impl Modifier {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::modifier::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            required: entity.required,
            multi_select: entity.multi_select,
            max: entity.max,
            restaurant_id: entity.restaurant_id,
        }
    }

    /// Minimum total quantity that must be selected from this group.
    pub fn min(&self) -> i32 {
        if self.required {
            1
        } else {
            0
        }
    }
}

/// Menu item with its modifier groups optionally loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
    pub restaurant_id: i32,
    /// Modifier groups offered by the item.
    ///
    /// `None` when the item was fetched without its groups, which is distinct from an item
    /// that offers no groups (`Some` of an empty list).
    pub modifiers: Option<Vec<Modifier>>,
}

impl MenuItem {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The menu item entity
    /// - `modifiers` - The item's modifier group entities, if they were loaded
    ///
    /// # Returns
    /// - `MenuItem` - The converted domain model
    pub fn from_entity(
        entity: entity::menu_item::Model,
        modifiers: Option<Vec<entity::modifier::Model>>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            is_available: entity.is_available,
            restaurant_id: entity.restaurant_id,
            modifiers: modifiers
                .map(|groups| groups.into_iter().map(Modifier::from_entity).collect()),
        }
    }

    /// Finds a loaded modifier group by id.
    pub fn modifier(&self, modifier_id: i32) -> Option<&Modifier> {
        self.modifiers
            .as_ref()?
            .iter()
            .find(|modifier| modifier.id == modifier_id)
    }
}
