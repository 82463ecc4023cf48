//! Order composition, validation and management.
//!
//! Creating an order runs, within one request:
//!
//! 1. **Catalog lookup** - strict batch fetch of the referenced menu items (with their modifier
//!    groups) and modifier options
//! 2. **Validation** - in-memory admissibility check (`validate`)
//! 3. **Assembly** - insert command with snapshotted names and prices (`assemble`)
//! 4. **Transactional write** - header, items and selections in one transaction
//! 5. **Read back** - the committed order, hydrated
//!
//! The catalog is read outside the write transaction. A catalog row changed between the
//! lookup and the commit is not detected.

pub mod assemble;
pub mod validate;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        menu_item::MenuItemRepository, modifier_option::ModifierOptionRepository,
        order::OrderRepository,
    },
    error::{order::OrderError, AppError},
    model::order::{CreateOrderInput, Order, PaginatedOrders, UpdateOrderParams},
};

use self::{assemble::assemble_order, validate::validate_order_lines};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order after validating it against the current catalog.
    ///
    /// # Arguments
    /// - `input` - Structurally valid order request
    ///
    /// # Returns
    /// - `Ok(Order)` - The committed order, read back with items and selections
    /// - `Err(OrderError)` - Rejection or failure, tagged by `OrderError::kind()`
    pub async fn create(&self, input: CreateOrderInput) -> Result<Order, OrderError> {
        if input.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        tracing::debug!(
            restaurant_id = input.restaurant_id,
            lines = input.lines.len(),
            "Creating order"
        );

        let menu_items = MenuItemRepository::new(self.db)
            .get_by_ids_strict(&input.menu_item_ids(), true)
            .await?;
        let modifier_options = ModifierOptionRepository::new(self.db)
            .get_by_ids_strict(&input.modifier_option_ids())
            .await?;

        validate_order_lines(
            input.restaurant_id,
            &input.lines,
            &menu_items,
            &modifier_options,
        )?;

        let params = assemble_order(input, &menu_items, &modifier_options)?;

        let repo = OrderRepository::new(self.db);
        let order_id = repo.create(params).await?;

        let order = repo
            .get_by_id(order_id)
            .await?
            .ok_or(OrderError::MissingAfterCommit { order_id })?;

        tracing::info!(
            order_id,
            restaurant_id = order.restaurant_id,
            items = order.items.len(),
            "Order created"
        );

        Ok(order)
    }

    /// Gets an order by ID with its items and selections.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets paginated orders for a restaurant, newest first.
    pub async fn get_paginated_by_restaurant(
        &self,
        restaurant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "entries must be at least 1".to_string(),
            ));
        }
        if page.checked_mul(per_page).is_none() {
            return Err(AppError::BadRequest(
                "page is out of range for the given entries".to_string(),
            ));
        }

        let repo = OrderRepository::new(self.db);

        let (orders, total) = repo
            .get_paginated_by_restaurant(restaurant_id, page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedOrders {
            orders,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Patches an order's type, status or payment status.
    ///
    /// Never re-validates the order against the catalog.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - Order not found
    /// - `Err(AppError::BadRequest)` - The patch contains no fields
    pub async fn update(&self, params: UpdateOrderParams) -> Result<Option<Order>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "at least one of order_type, order_status or payment_status is required"
                    .to_string(),
            ));
        }

        let repo = OrderRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes an order with its items and selections.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - Order not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
