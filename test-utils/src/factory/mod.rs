//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting catalog and order rows with sensible
//! defaults, reducing boilerplate in tests. Defaults come from the matching `fixture` module.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let restaurant = factory::create_restaurant(&db).await?;
//!     let burger = factory::create_menu_item(&db, restaurant.id).await?;
//!     let size = factory::modifier::ModifierFactory::new(&db, restaurant.id)
//!         .name("Size")
//!         .required(true)
//!         .max(2)
//!         .build()
//!         .await?;
//!     factory::attach_modifier(&db, burger.id, size.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `restaurant` - Create restaurant entities
//! - `menu_item` - Create menu item entities
//! - `modifier` - Create modifier groups and attach them to menu items
//! - `modifier_option` - Create modifier option entities
//! - `order` - Create order headers and order items directly, bypassing validation
//! - `helpers` - ID generation and convenience methods for creating entities with dependencies

pub mod helpers;
pub mod menu_item;
pub mod modifier;
pub mod modifier_option;
pub mod order;
pub mod restaurant;

// Re-export commonly used factory functions for concise usage
pub use menu_item::create_menu_item;
pub use modifier::{attach_modifier, create_modifier};
pub use modifier_option::create_modifier_option;
pub use order::{create_order, create_order_item};
pub use restaurant::create_restaurant;
