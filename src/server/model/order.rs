//! Order domain models and parameters.
//!
//! Provides the hydrated order snapshot returned by the order reader, the validated input
//! accepted by order creation, the persistence commands built by the assembler, and the
//! parameters for patching and listing orders.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, OrderType, PaymentStatus};

use crate::{
    model::order::{
        CreateOrderDto, OrderDto, OrderItemDto, OrderItemModifierOptionDto, OrderStatusDto,
        OrderTypeDto, PaginatedOrdersDto, PaymentStatusDto, UpdateOrderDto,
    },
    server::error::AppError,
};

/// Maximum length, in characters, of a line's special instructions.
pub const MAX_SPECIAL_INSTRUCTIONS_LEN: usize = 255;

impl From<OrderTypeDto> for OrderType {
    fn from(dto: OrderTypeDto) -> Self {
        match dto {
            OrderTypeDto::DineIn => OrderType::DineIn,
            OrderTypeDto::Takeout => OrderType::Takeout,
            OrderTypeDto::Delivery => OrderType::Delivery,
        }
    }
}

impl From<OrderType> for OrderTypeDto {
    fn from(value: OrderType) -> Self {
        match value {
            OrderType::DineIn => OrderTypeDto::DineIn,
            OrderType::Takeout => OrderTypeDto::Takeout,
            OrderType::Delivery => OrderTypeDto::Delivery,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Open => OrderStatus::Open,
            OrderStatusDto::Confirmed => OrderStatus::Confirmed,
            OrderStatusDto::Completed => OrderStatus::Completed,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Open => OrderStatusDto::Open,
            OrderStatus::Confirmed => OrderStatusDto::Confirmed,
            OrderStatus::Completed => OrderStatusDto::Completed,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(dto: PaymentStatusDto) -> Self {
        match dto {
            PaymentStatusDto::Unpaid => PaymentStatus::Unpaid,
            PaymentStatusDto::Pending => PaymentStatus::Pending,
            PaymentStatusDto::Paid => PaymentStatus::Paid,
            PaymentStatusDto::Refunded => PaymentStatus::Refunded,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Unpaid => PaymentStatusDto::Unpaid,
            PaymentStatus::Pending => PaymentStatusDto::Pending,
            PaymentStatus::Paid => PaymentStatusDto::Paid,
            PaymentStatus::Refunded => PaymentStatusDto::Refunded,
        }
    }
}

/// Selected modifier option on a persisted order item, with its snapshotted name and price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemModifierOption {
    pub modifier_option_id: i32,
    pub quantity: i32,
    pub option_name: String,
    pub option_price: f64,
}

impl OrderItemModifierOption {
    pub fn from_entity(entity: entity::order_item_modifier_option::Model) -> Self {
        Self {
            modifier_option_id: entity.modifier_option_id,
            quantity: entity.quantity,
            option_name: entity.option_name,
            option_price: entity.option_price,
        }
    }

    pub fn into_dto(self) -> OrderItemModifierOptionDto {
        OrderItemModifierOptionDto {
            modifier_option_id: self.modifier_option_id,
            quantity: self.quantity,
            option_name: self.option_name,
            option_price: self.option_price,
        }
    }
}

/// Persisted order line with its snapshotted name and price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
    pub item_name: String,
    pub item_price: f64,
    pub modifier_options: Vec<OrderItemModifierOption>,
}

impl OrderItem {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The order item entity
    /// - `modifier_options` - Selection entities belonging to this item
    pub fn from_entity(
        entity: entity::order_item::Model,
        modifier_options: Vec<entity::order_item_modifier_option::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            menu_item_id: entity.menu_item_id,
            quantity: entity.quantity,
            special_instructions: entity.special_instructions,
            item_name: entity.item_name,
            item_price: entity.item_price,
            modifier_options: modifier_options
                .into_iter()
                .map(OrderItemModifierOption::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            menu_item_id: self.menu_item_id,
            quantity: self.quantity,
            special_instructions: self.special_instructions,
            item_name: self.item_name,
            item_price: self.item_price,
            modifier_options: self
                .modifier_options
                .into_iter()
                .map(OrderItemModifierOption::into_dto)
                .collect(),
        }
    }
}

/// Hydrated order: header, items in creation order, and each item's selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_type: OrderType,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Converts an order entity and its already converted items to a domain model.
    pub fn from_entity(entity: entity::order::Model, items: Vec<OrderItem>) -> Self {
        Self {
            id: entity.id,
            order_type: entity.order_type,
            order_status: entity.order_status,
            payment_status: entity.payment_status,
            restaurant_id: entity.restaurant_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            items,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_type: self.order_type.into(),
            order_status: self.order_status.into(),
            payment_status: self.payment_status.into(),
            restaurant_id: self.restaurant_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            order_items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// Page of hydrated orders with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            orders: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// One requested modifier option on an order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSelectionInput {
    pub modifier_option_id: i32,
    pub quantity: i32,
}

/// One requested order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineInput {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
    pub modifier_selections: Vec<ModifierSelectionInput>,
}

/// Structurally valid order creation request.
///
/// Quantities are at least 1 and special instructions fit the column. Whether the request is
/// admissible against the catalog is decided later by the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderInput {
    pub order_type: OrderType,
    pub restaurant_id: i32,
    pub lines: Vec<OrderLineInput>,
}

impl CreateOrderInput {
    /// Converts the request DTO, rejecting structurally invalid payloads.
    ///
    /// An empty list of order items is accepted here; the order service rejects it.
    ///
    /// # Returns
    /// - `Ok(CreateOrderInput)` - Structurally valid input
    /// - `Err(AppError::BadRequest)` - A quantity below 1 or overlong special instructions
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        let lines = dto
            .order_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if item.quantity < 1 {
                    return Err(AppError::BadRequest(format!(
                        "order_items[{}].quantity must be at least 1",
                        index
                    )));
                }

                let special_instructions = item.special_instructions.filter(|s| !s.is_empty());
                if let Some(text) = &special_instructions {
                    if text.chars().count() > MAX_SPECIAL_INSTRUCTIONS_LEN {
                        return Err(AppError::BadRequest(format!(
                            "order_items[{}].special_instructions must be at most {} characters",
                            index, MAX_SPECIAL_INSTRUCTIONS_LEN
                        )));
                    }
                }

                let modifier_selections = item
                    .modifier_options
                    .into_iter()
                    .enumerate()
                    .map(|(option_index, option)| {
                        if option.quantity < 1 {
                            return Err(AppError::BadRequest(format!(
                                "order_items[{}].modifier_options[{}].quantity must be at least 1",
                                index, option_index
                            )));
                        }

                        Ok(ModifierSelectionInput {
                            modifier_option_id: option.modifier_option_id,
                            quantity: option.quantity,
                        })
                    })
                    .collect::<Result<Vec<_>, AppError>>()?;

                Ok(OrderLineInput {
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                    special_instructions,
                    modifier_selections,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Self {
            order_type: dto.order_type.into(),
            restaurant_id: dto.restaurant_id,
            lines,
        })
    }

    /// Distinct menu item ids referenced by the request, in ascending order.
    pub fn menu_item_ids(&self) -> BTreeSet<i32> {
        self.lines.iter().map(|line| line.menu_item_id).collect()
    }

    /// Distinct modifier option ids referenced by the request, in ascending order.
    pub fn modifier_option_ids(&self) -> BTreeSet<i32> {
        self.lines
            .iter()
            .flat_map(|line| line.modifier_selections.iter())
            .map(|selection| selection.modifier_option_id)
            .collect()
    }
}

/// Insert command for one selected modifier option.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemModifierOptionParams {
    pub modifier_option_id: i32,
    pub quantity: i32,
    pub option_name: String,
    pub option_price: f64,
}

/// Insert command for one order item and its selections.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemParams {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
    pub item_name: String,
    pub item_price: f64,
    pub modifier_options: Vec<OrderItemModifierOptionParams>,
}

/// Complete insert command for a new order, written in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub order_type: OrderType,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub restaurant_id: i32,
    pub items: Vec<OrderItemParams>,
}

/// Parameters for patching an existing order's header.
///
/// Only provided fields are updated. Items, selections and the restaurant never change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrderParams {
    pub id: i32,
    pub order_type: Option<OrderType>,
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
}

impl UpdateOrderParams {
    pub fn from_dto(id: i32, dto: UpdateOrderDto) -> Self {
        Self {
            id,
            order_type: dto.order_type.map(Into::into),
            order_status: dto.order_status.map(Into::into),
            payment_status: dto.payment_status.map(Into::into),
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.order_type.is_none() && self.order_status.is_none() && self.payment_status.is_none()
    }
}
