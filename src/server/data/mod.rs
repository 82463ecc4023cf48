//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for the order
//! core. Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Catalog repositories are read-only; the order
//! repository owns the transactional write and the hydrated read.

pub mod menu_item;
pub mod modifier_option;
pub mod order;
