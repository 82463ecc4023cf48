use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, PaginatedOrdersDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::order::{CreateOrderInput, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
        util::parse::parse_json_body,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

#[derive(Deserialize)]
pub struct ListOrdersParams {
    pub restaurant_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Create a new order.
///
/// Validates the requested lines against the current catalog and stores the order with
/// snapshotted names and prices. Every rejection by the order core, whether a missing menu
/// item or a modifier rule violation, is reported as a 500 with a fixed message; the
/// specific reason is logged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Order type, restaurant and requested lines
///
/// # Returns
/// - `201 Created` - The stored order with items and selections
/// - `400 Bad Request` - Malformed body, unknown order type, quantity below 1 or overlong
///   special instructions
/// - `500 Internal Server Error` - The order was rejected or could not be stored
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = OrderDto),
        (status = 400, description = "Invalid order payload", body = ErrorDto),
        (status = 500, description = "Failed to create order", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_json_body(payload)?;

    // Structural checks happen before the order core
    let input = CreateOrderInput::from_dto(payload)?;

    let service = OrderService::new(&state.db);

    let order = service.create(input).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get paginated orders for a restaurant.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Restaurant ID and pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Page of orders, newest first
/// - `400 Bad Request` - Missing `restaurant_id`, `entries` of 0 or a page beyond the
///   addressable range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("restaurant_id" = i32, Query, description = "Restaurant ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 400, description = "Missing restaurant_id or invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersParams>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant_id = params
        .restaurant_id
        .ok_or_else(|| AppError::BadRequest("restaurant_id is required".to_string()))?;

    let service = OrderService::new(&state.db);

    let orders = service
        .get_paginated_by_restaurant(restaurant_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Get a specific order by ID.
///
/// # Returns
/// - `200 OK` - The order with items and selections
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    match service.get_by_id(order_id).await? {
        Some(order) => Ok((StatusCode::OK, Json(order.into_dto()))),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Update an order's type, status or payment status.
///
/// Items, selections and the restaurant cannot be changed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `order_id` - Order to update
/// - `payload` - Fields to change; omitted fields keep their value
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Malformed body or no fields given
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Invalid update payload", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
    payload: Result<Json<UpdateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_json_body(payload)?;

    let service = OrderService::new(&state.db);

    let params = UpdateOrderParams::from_dto(order_id, payload);

    match service.update(params).await? {
        Some(order) => Ok((StatusCode::OK, Json(order.into_dto()))),
        None => Err(AppError::NotFound("Order not found".to_string())),
    }
}

/// Delete an order with its items and selections.
///
/// # Returns
/// - `204 No Content` - Order deleted
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted order"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    if service.delete(order_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Order not found".to_string()))
    }
}
