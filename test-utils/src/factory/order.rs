//! Order factory for creating test order rows directly.
//!
//! These factories insert rows without going through order validation. Use them to seed
//! orders for read, update and delete tests.

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, OrderType, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order headers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, restaurant.id)
///     .order_type(OrderType::Delivery)
///     .payment_status(PaymentStatus::Paid)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    order_type: OrderType,
    order_status: OrderStatus,
    payment_status: PaymentStatus,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_type: `DineIn`
    /// - order_status: `Open`
    /// - payment_status: `Unpaid`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - Restaurant the order belongs to
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        Self {
            db,
            restaurant_id,
            order_type: OrderType::DineIn,
            order_status: OrderStatus::Open,
            payment_status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        }
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn order_status(mut self, order_status: OrderStatus) -> Self {
        self.order_status = order_status;
        self
    }

    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Sets the creation timestamp, used to control listing order.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order header into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_type: ActiveValue::Set(self.order_type),
            order_status: ActiveValue::Set(self.order_status),
            payment_status: ActiveValue::Set(self.payment_status),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open, unpaid dine-in order for the specified restaurant.
///
/// Shorthand for `OrderFactory::new(db, restaurant_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, restaurant_id).build().await
}

/// Creates an order item snapshotting the given menu item's name and price.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order the item belongs to
/// - `menu_item` - Menu item to snapshot
/// - `quantity` - Ordered quantity
///
/// # Returns
/// - `Ok(entity::order_item::Model)` - Created order item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        id: ActiveValue::NotSet,
        quantity: ActiveValue::Set(quantity),
        special_instructions: ActiveValue::Set(None),
        item_name: ActiveValue::Set(menu_item.name.clone()),
        item_price: ActiveValue::Set(menu_item.price),
        menu_item_id: ActiveValue::Set(menu_item.id),
        order_id: ActiveValue::Set(order_id),
    }
    .insert(db)
    .await
}
