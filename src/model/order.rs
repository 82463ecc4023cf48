use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderTypeDto {
    DineIn,
    Takeout,
    Delivery,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    Open,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatusDto {
    Unpaid,
    Pending,
    Paid,
    Refunded,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub order_type: OrderTypeDto,
    pub restaurant_id: i32,
    #[serde(default)]
    pub order_items: Vec<CreateOrderItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderItemDto {
    pub menu_item_id: i32,
    pub quantity: i32,
    #[serde(default, alias = "notes")]
    pub special_instructions: Option<String>,
    #[serde(default, alias = "modifiers")]
    pub modifier_options: Vec<ModifierSelectionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModifierSelectionDto {
    #[serde(alias = "modifier_id")]
    pub modifier_option_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateOrderDto {
    #[serde(default)]
    pub order_type: Option<OrderTypeDto>,
    #[serde(default)]
    pub order_status: Option<OrderStatusDto>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatusDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemModifierOptionDto {
    pub modifier_option_id: i32,
    pub quantity: i32,
    pub option_name: String,
    pub option_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
    pub item_name: String,
    pub item_price: f64,
    pub modifier_options: Vec<OrderItemModifierOptionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_type: OrderTypeDto,
    pub order_status: OrderStatusDto,
    pub payment_status: PaymentStatusDto,
    pub restaurant_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order_items: Vec<OrderItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedOrdersDto {
    pub orders: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
