use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    error::order::{OrderWriteError, WriteStage},
    model::order::{CreateOrderParams, Order, OrderItem, UpdateOrderParams},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a new order, its items and their selected options in one transaction.
    ///
    /// The header is inserted first, then every item, then every selection. On failure the
    /// transaction is rolled back and the error carries the last stage that completed. A
    /// transaction dropped before commit, for example when the request is cancelled, is
    /// rolled back as well.
    ///
    /// # Arguments
    /// - `params` - Assembled insert command
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the committed order
    /// - `Err(OrderWriteError)` - Database error, with the stage reached
    pub async fn create(&self, params: CreateOrderParams) -> Result<i32, OrderWriteError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OrderWriteError::new(WriteStage::Started, e))?;

        match Self::write(&txn, params).await {
            Ok(order_id) => {
                txn.commit()
                    .await
                    .map_err(|e| OrderWriteError::new(WriteStage::ModifiersWritten, e))?;

                tracing::debug!(order_id, stage = %WriteStage::Committed, "Order written");

                Ok(order_id)
            }
            Err(err) => {
                tracing::warn!(stage = %err.stage, "Rolling back order write: {}", err.source);

                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back order write: {}", rollback_err);
                }

                Err(err)
            }
        }
    }

    async fn write(
        txn: &DatabaseTransaction,
        params: CreateOrderParams,
    ) -> Result<i32, OrderWriteError> {
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_type: ActiveValue::Set(params.order_type),
            order_status: ActiveValue::Set(params.order_status),
            payment_status: ActiveValue::Set(params.payment_status),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await
        .map_err(|e| OrderWriteError::new(WriteStage::Started, e))?;

        let mut selections = Vec::new();

        for item in params.items {
            let order_item = entity::order_item::ActiveModel {
                id: ActiveValue::NotSet,
                quantity: ActiveValue::Set(item.quantity),
                special_instructions: ActiveValue::Set(item.special_instructions),
                item_name: ActiveValue::Set(item.item_name),
                item_price: ActiveValue::Set(item.item_price),
                menu_item_id: ActiveValue::Set(item.menu_item_id),
                order_id: ActiveValue::Set(order.id),
            }
            .insert(txn)
            .await
            .map_err(|e| OrderWriteError::new(WriteStage::HeaderWritten, e))?;

            for option in item.modifier_options {
                selections.push(entity::order_item_modifier_option::ActiveModel {
                    order_item_id: ActiveValue::Set(order_item.id),
                    modifier_option_id: ActiveValue::Set(option.modifier_option_id),
                    quantity: ActiveValue::Set(option.quantity),
                    option_name: ActiveValue::Set(option.option_name),
                    option_price: ActiveValue::Set(option.option_price),
                });
            }
        }

        for selection in selections {
            selection
                .insert(txn)
                .await
                .map_err(|e| OrderWriteError::new(WriteStage::ItemsWritten, e))?;
        }

        Ok(order.id)
    }

    /// Gets an order by ID with its items and their selected options.
    ///
    /// Items are returned in creation order; each item's selections are ordered by
    /// modifier option id.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The hydrated order
    /// - `Ok(None)` - Order not found
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(hydrate(self.db, vec![order]).await?.pop())
    }

    /// Gets paginated orders for a restaurant, newest first.
    ///
    /// # Arguments
    /// - `restaurant_id` - Restaurant to list orders for
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Hydrated orders of the page and total order count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated_by_restaurant(
        &self,
        restaurant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((hydrate(self.db, orders).await?, total))
    }

    /// Patches an order's type, status and payment status.
    ///
    /// Only fields present in `params` are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated, hydrated order
    /// - `Ok(None)` - Order not found
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateOrderParams) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = order.into_active_model();

        if let Some(order_type) = params.order_type {
            active_model.order_type = ActiveValue::Set(order_type);
        }
        if let Some(order_status) = params.order_status {
            active_model.order_status = ActiveValue::Set(order_status);
        }
        if let Some(payment_status) = params.payment_status {
            active_model.payment_status = ActiveValue::Set(payment_status);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let order = active_model.update(self.db).await?;

        Ok(hydrate(self.db, vec![order]).await?.pop())
    }

    /// Deletes an order; its items and their selections cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - Order not found
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Loads items and selections for the given order headers.
///
/// Runs at most two queries regardless of the number of orders and preserves the order of
/// `orders`.
async fn hydrate<C: ConnectionTrait>(
    db: &C,
    orders: Vec<entity::order::Model>,
) -> Result<Vec<Order>, DbErr> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();

    let items = entity::prelude::OrderItem::find()
        .filter(entity::order_item::Column::OrderId.is_in(order_ids))
        .order_by_asc(entity::order_item::Column::Id)
        .all(db)
        .await?;

    let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

    let mut options_by_item: HashMap<i32, Vec<entity::order_item_modifier_option::Model>> =
        HashMap::new();
    if !item_ids.is_empty() {
        let options = entity::prelude::OrderItemModifierOption::find()
            .filter(entity::order_item_modifier_option::Column::OrderItemId.is_in(item_ids))
            .order_by_asc(entity::order_item_modifier_option::Column::OrderItemId)
            .order_by_asc(entity::order_item_modifier_option::Column::ModifierOptionId)
            .all(db)
            .await?;

        for option in options {
            options_by_item
                .entry(option.order_item_id)
                .or_default()
                .push(option);
        }
    }

    let mut items_by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
    for item in items {
        let options = options_by_item.remove(&item.id).unwrap_or_default();
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(OrderItem::from_entity(item, options));
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = items_by_order.remove(&order.id).unwrap_or_default();
            Order::from_entity(order, items)
        })
        .collect())
}
