use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use pizzeria_db::ProductCatalog;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    catalog: Arc<dyn ProductCatalog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(catalog: Arc<dyn ProductCatalog>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { catalog })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(state.catalog.as_ref()).await;
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "pizzeria-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn catalog_check(catalog: &dyn ProductCatalog) -> HealthCheck {
    match catalog.get_all().await {
        Ok(products) if products.is_empty() => {
            HealthCheck { status: "degraded", detail: "catalog has no products".to_string() }
        }
        Ok(products) => HealthCheck {
            status: "ready",
            detail: format!("catalog holds {} products", products.len()),
        },
        Err(error) => {
            HealthCheck { status: "degraded", detail: format!("catalog read failed: {error}") }
        }
    }
}
