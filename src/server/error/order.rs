//! Order creation failures.
//!
//! `OrderError` tags every way creating an order can fail. The tag is exposed through
//! `OrderError::kind()` for logging and tests, while the HTTP response is the same
//! 500 for every kind.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::catalog::CatalogError};

/// Message returned to clients for every order creation failure.
pub const CREATE_ORDER_FAILED: &str = "Failed to create order";

/// Coarse classification of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderErrorKind {
    /// A referenced catalog row does not exist.
    NotFound,
    /// The request is well formed but violates an ordering rule.
    BusinessRule,
    /// The database rejected a write on a unique or foreign key constraint.
    StorageInvariant,
    /// Any other database failure.
    Storage,
    /// Inconsistent internal state, indicating a bug.
    Internal,
}

impl fmt::Display for OrderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::BusinessRule => "business_rule",
            Self::StorageInvariant => "storage_invariant",
            Self::Storage => "storage",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Progress of the transactional order write.
///
/// Each variant names the last step that completed before a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Started,
    HeaderWritten,
    ItemsWritten,
    ModifiersWritten,
    Committed,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Started => "started",
            Self::HeaderWritten => "header written",
            Self::ItemsWritten => "items written",
            Self::ModifiersWritten => "modifiers written",
            Self::Committed => "committed",
        };
        f.write_str(name)
    }
}

/// Failure of the transactional order write, with the stage it had reached.
#[derive(Error, Debug)]
#[error("order write failed after stage '{stage}': {source}")]
pub struct OrderWriteError {
    pub stage: WriteStage,
    #[source]
    pub source: DbErr,
}

impl OrderWriteError {
    pub fn new(stage: WriteStage, source: DbErr) -> Self {
        Self { stage, source }
    }

    /// Whether the database refused the write on a unique or foreign key constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self.source.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_))
        )
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    /// The request contained no order lines.
    #[error("order must contain at least one item")]
    EmptyOrder,

    /// Strict catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("menu item {menu_item_id} not found")]
    MenuItemNotFound { menu_item_id: i32 },

    #[error("menu item {menu_item_id} does not belong to restaurant {restaurant_id}")]
    MenuItemWrongRestaurant {
        menu_item_id: i32,
        restaurant_id: i32,
    },

    #[error("menu item {menu_item_id} is not available")]
    MenuItemUnavailable { menu_item_id: i32 },

    /// Menu item was fetched without its modifier groups.
    #[error("modifier groups were not loaded for menu item {menu_item_id}")]
    ModifiersNotLoaded { menu_item_id: i32 },

    #[error("modifier option {modifier_option_id} not found")]
    ModifierOptionNotFound { modifier_option_id: i32 },

    #[error("modifier option {modifier_option_id} is not available")]
    ModifierOptionUnavailable { modifier_option_id: i32 },

    #[error("modifier option {modifier_option_id} is not valid for menu item {menu_item_id}")]
    ModifierOptionNotOnMenuItem {
        modifier_option_id: i32,
        menu_item_id: i32,
    },

    #[error("modifier option {modifier_option_id} selected more than once for menu item {menu_item_id}")]
    DuplicateModifierOption {
        modifier_option_id: i32,
        menu_item_id: i32,
    },

    #[error("required modifier group '{modifier_name}' is missing for menu item {menu_item_id}")]
    RequiredGroupMissing {
        modifier_id: i32,
        modifier_name: String,
        menu_item_id: i32,
    },

    #[error(
        "modifier group '{modifier_name}' for menu item {menu_item_id}: selected {selected}, must be between {min} and {max}"
    )]
    GroupSelectionOutOfRange {
        modifier_id: i32,
        modifier_name: String,
        menu_item_id: i32,
        selected: i32,
        min: i32,
        max: i32,
    },

    /// Selections reference a group absent from the item's loaded groups.
    #[error("modifier group {modifier_id} not loaded for menu item {menu_item_id}")]
    GroupNotLoaded { modifier_id: i32, menu_item_id: i32 },

    #[error(transparent)]
    Write(#[from] OrderWriteError),

    #[error(transparent)]
    Storage(#[from] DbErr),

    /// The committed order could not be read back.
    #[error("order {order_id} not found after commit")]
    MissingAfterCommit { order_id: i32 },
}

impl OrderError {
    pub fn kind(&self) -> OrderErrorKind {
        match self {
            Self::Catalog(CatalogError::NotFound { .. })
            | Self::MenuItemNotFound { .. }
            | Self::ModifierOptionNotFound { .. } => OrderErrorKind::NotFound,
            Self::Catalog(CatalogError::Db(_)) | Self::Storage(_) => OrderErrorKind::Storage,
            Self::EmptyOrder
            | Self::MenuItemWrongRestaurant { .. }
            | Self::MenuItemUnavailable { .. }
            | Self::ModifierOptionUnavailable { .. }
            | Self::ModifierOptionNotOnMenuItem { .. }
            | Self::DuplicateModifierOption { .. }
            | Self::RequiredGroupMissing { .. }
            | Self::GroupSelectionOutOfRange { .. } => OrderErrorKind::BusinessRule,
            Self::Write(err) if err.is_constraint_violation() => OrderErrorKind::StorageInvariant,
            Self::Write(_) => OrderErrorKind::Storage,
            Self::ModifiersNotLoaded { .. }
            | Self::GroupNotLoaded { .. }
            | Self::MissingAfterCommit { .. } => OrderErrorKind::Internal,
        }
    }
}

/// Converts order creation errors into HTTP responses.
///
/// Every kind maps to 500 with the same body; the kind and detail are only logged.
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        match self.kind() {
            OrderErrorKind::NotFound | OrderErrorKind::BusinessRule => {
                tracing::warn!(kind = %self.kind(), "Order rejected: {}", self)
            }
            kind => tracing::error!(kind = %kind, "Order creation failed: {}", self),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: CREATE_ORDER_FAILED.to_string(),
            }),
        )
            .into_response()
    }
}
