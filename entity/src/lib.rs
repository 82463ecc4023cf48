//! `SeaORM` entities for the back-office schema.

pub mod prelude;

pub mod menu_item;
pub mod menu_item_modifier;
pub mod modifier;
pub mod modifier_option;
pub mod order;
pub mod order_item;
pub mod order_item_modifier_option;
pub mod restaurant;
pub mod sea_orm_active_enums;
