pub use super::menu_item::Entity as MenuItem;
pub use super::menu_item_modifier::Entity as MenuItemModifier;
pub use super::modifier::Entity as Modifier;
pub use super::modifier_option::Entity as ModifierOption;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::order_item_modifier_option::Entity as OrderItemModifierOption;
pub use super::restaurant::Entity as Restaurant;
