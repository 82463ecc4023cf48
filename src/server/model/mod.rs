//! Domain models and operation parameters.
//!
//! Domain models are converted from entities at the repository boundary with `from_entity`
//! and into DTOs at the controller boundary with `into_dto`.

pub mod menu_item;
pub mod modifier_option;
pub mod order;
