/// Concrete choice within a modifier group.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierOption {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub pre_select: bool,
    /// Owning modifier group.
    pub modifier_id: i32,
}

impl ModifierOption {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::modifier_option::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            available: entity.available,
            pre_select: entity.pre_select,
            modifier_id: entity.modifier_id,
        }
    }
}
