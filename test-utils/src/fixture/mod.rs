//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Exercise order validation without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let burger = fixture::menu_item::entity();
//!
//! // Create with custom fields
//! let sold_out = fixture::menu_item::entity_builder()
//!     .is_available(false)
//!     .build();
//! ```

pub mod menu_item;
pub mod modifier;
pub mod modifier_option;
pub mod restaurant;

pub use menu_item::{entity as menu_item_entity, entity_builder as menu_item_entity_builder};
pub use modifier::{entity as modifier_entity, entity_builder as modifier_entity_builder};
pub use modifier_option::{
    entity as modifier_option_entity, entity_builder as modifier_option_entity_builder,
};
pub use restaurant::{entity as restaurant_entity, entity_builder as restaurant_entity_builder};
