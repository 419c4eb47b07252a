//! Order and ingredient endpoints.
//!
//! - `POST /api/createOrder`          store a new order, returns it with its id
//! - `GET  /api/getOrder/{orderId}`   fetch an order, `null` when unknown
//! - `GET  /api/getIngredients`       list the ingredient catalog
//! - `POST /api`                      list the ingredient catalog
//!
//! Requests on paths that are not listed here answer 405.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pizzeria_core::domain::order::{NewOrder, Order};
use pizzeria_core::domain::product::Product;
use tracing::{debug, info};

use crate::{error::ApiError, health, state::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/createOrder", post(create_order))
        .route("/api/getOrder/{order_id}", get(get_order))
        .route("/api/getIngredients", get(get_ingredients))
        .route("/api", post(list_ingredients))
        .with_state(state)
}

/// Full application: api routes plus `/health`, with a 405 fallback.
pub fn app(state: AppState) -> Router {
    router(state.clone()).merge(health::router(state.catalog)).fallback(route_not_mapped)
}

async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(details) = payload?;
    let order = Order::new(details);
    let correlation_id = order.order_id().to_string();
    let order = state
        .orders
        .create(order)
        .await
        .map_err(|error| ApiError::from_repository(error, correlation_id))?;

    info!(
        event_name = "api.order.created",
        correlation_id = %order.order_id(),
        order_id = %order.order_id(),
        pizza_count = order.pizzas().map_or(0, <[String]>::len),
        "order created"
    );

    Ok(Json(order))
}

async fn get_order(
    State(state): State<AppState>,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Option<Order>>, ApiError> {
    let Path(order_id) = order_id?;
    let order = state
        .orders
        .get(&order_id)
        .await
        .map_err(|error| ApiError::from_repository(error, order_id.as_str()))?;

    info!(
        event_name = "api.order.lookup",
        correlation_id = %order_id,
        order_id = %order_id,
        found = order.is_some(),
        "order lookup"
    );

    Ok(Json(order))
}

async fn get_ingredients(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    catalog_snapshot(&state).await
}

async fn list_ingredients(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    catalog_snapshot(&state).await
}

async fn catalog_snapshot(state: &AppState) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.get_all().await?;
    debug!(event_name = "api.catalog.listed", product_count = products.len(), "catalog listed");
    Ok(Json(products))
}

async fn route_not_mapped() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
