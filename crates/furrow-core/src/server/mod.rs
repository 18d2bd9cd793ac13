//! HTTP planning service.
//!
//! Serves the two operations [`crate::remote::HttpPlanApi`] consumes, plus
//! a plan lookup and a liveness root:
//!
//! | route                                | response                     |
//! |--------------------------------------|------------------------------|
//! | `GET /`                              | `{ok, msg}`                  |
//! | `POST /api/plans`                    | created plan                 |
//! | `GET /api/plans/{id}`                | stored plan or 404           |
//! | `POST /api/plans/{id}/observations`  | `{ok, feedback}`             |
//!
//! Plans live in a [`PlanStore`] and vanish when the process exits.

use std::{future::Future, net::SocketAddr};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{
    advisor::ObservationAdvisor,
    error::{FurrowError, Result},
    generator::{short_id, PlanGenerator},
    models::{CultivationPlan, Observation, ObservationFeedback},
    params::CreatePlan,
};

pub mod store;

pub use store::PlanStore;

/// Feedback text for observations on unknown plans.
pub const PLAN_NOT_FOUND: &str = "Plan not found.";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl From<FurrowError> for AppError {
    fn from(err: FurrowError) -> Self {
        let status = match err {
            FurrowError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            FurrowError::PlanNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(store: PlanStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/plans", post(create_plan))
        .route("/api/plans/{id}", get(get_plan))
        .route("/api/plans/{id}/observations", post(add_observation))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Serve on `bind:port` until Ctrl-C.
///
/// # Errors
///
/// Returns `FurrowError::Configuration` for an unparsable address or when
/// the address cannot be bound.
pub async fn run_serve(bind: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .map_err(|e| FurrowError::Configuration {
            message: format!("Invalid listen address {bind}:{port}: {e}"),
        })?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FurrowError::Configuration {
            message: format!("Failed to bind {addr}: {e}"),
        })?;
    serve_with_shutdown(listener, PlanStore::new(), shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: tokio::net::TcpListener,
    store: PlanStore,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().ok();
    if let Some(addr) = addr {
        info!("furrow serve listening on http://{addr}");
    }
    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| FurrowError::Configuration {
            message: format!("Server error: {e}"),
        })?;
    info!("furrow serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> impl IntoResponse {
    Json(json!({ "ok": true, "msg": "Furrow planning API" }))
}

async fn create_plan(
    State(store): State<PlanStore>,
    body: std::result::Result<Json<CreatePlan>, JsonRejection>,
) -> std::result::Result<Json<CultivationPlan>, AppError> {
    let Json(params) = body?;
    let input = params.validate()?;
    let plan = PlanGenerator::generate_with_id(&input, short_id());
    info!("Created plan {} for {}", plan.id, plan.crop);
    store.insert(plan.clone()).await;
    Ok(Json(plan))
}

async fn get_plan(
    State(store): State<PlanStore>,
    Path(id): Path<String>,
) -> std::result::Result<Json<CultivationPlan>, AppError> {
    store
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::from(FurrowError::PlanNotFound { id }))
}

async fn add_observation(
    State(store): State<PlanStore>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Observation>, JsonRejection>,
) -> std::result::Result<Json<ObservationFeedback>, AppError> {
    let Json(observation) = body?;
    let Some(plan) = store.get(&id).await else {
        warn!("Observation for unknown plan {id}");
        return Ok(Json(ObservationFeedback::rejected(PLAN_NOT_FOUND)));
    };
    Ok(Json(ObservationFeedback::accepted(ObservationAdvisor::advise(
        &plan,
        &observation,
    ))))
}
