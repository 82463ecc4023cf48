use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        order::{
            CreateOrderDto, CreateOrderItemDto, ModifierSelectionDto, OrderDto, OrderItemDto,
            OrderItemModifierOptionDto, OrderStatusDto, OrderTypeDto, PaginatedOrdersDto,
            PaymentStatusDto, UpdateOrderDto,
        },
    },
    server::{
        config::Config,
        controller::{
            health::{self, health},
            order::{self, create_order, delete_order, get_order_by_id, get_orders, update_order},
        },
        error::AppError,
        startup,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        order::create_order,
        order::get_orders,
        order::get_order_by_id,
        order::update_order,
        order::delete_order,
        health::health,
    ),
    components(schemas(
        CreateOrderDto,
        CreateOrderItemDto,
        ModifierSelectionDto,
        UpdateOrderDto,
        OrderDto,
        OrderItemDto,
        OrderItemModifierOptionDto,
        PaginatedOrdersDto,
        OrderTypeDto,
        OrderStatusDto,
        PaymentStatusDto,
        ErrorDto,
        HealthDto,
    )),
    tags(
        (name = "order", description = "Order creation and management"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Backoffice API",
        description = "Restaurant back-office order service"
    )
)]
pub struct ApiDoc;

/// API routes and documentation, without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(get_orders).post(create_order))
        .route(
            "/api/orders/{order_id}",
            get(get_order_by_id)
                .patch(update_order)
                .delete(delete_order),
        )
        .route("/api/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Complete application: routes, state, request timeout, tracing and CORS.
///
/// A request exceeding the timeout is answered with 408 and its handler future is dropped,
/// rolling back any open transaction.
pub fn app(state: AppState, config: &Config) -> Result<Router, AppError> {
    Ok(router()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(startup::cors_layer(config)?))
}
