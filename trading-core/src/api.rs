// trading-core/src/api.rs
// HTTP surface exposing one simulation run per request

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use trading_common::data::types::{DataError, SimulationReport};

use crate::config::SimulationSettings;
use crate::exchange::PriceSource;
use crate::simulation::{HoldClock, SimulationConfig, SimulationError, SimulationRunner};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PriceSource>,
    pub clock: Arc<dyn HoldClock>,
    pub settings: Arc<SimulationSettings>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn PriceSource>,
        clock: Arc<dyn HoldClock>,
        settings: SimulationSettings,
    ) -> Self {
        Self {
            source,
            clock,
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ai-trading/simulate", get(run_simulation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn run_simulation(
    State(state): State<AppState>,
) -> Result<Json<SimulationReport>, ApiError> {
    let assets = state.settings.asset_symbols()?;
    info!("Running simulation request for {} assets", assets.len());

    // fresh runner per request so concurrent requests never share history
    let mut runner = SimulationRunner::new(
        Arc::clone(&state.source),
        Arc::clone(&state.clock),
        SimulationConfig::from_settings(&state.settings),
    );
    let report = runner.run(&assets, state.settings.iterations).await?;

    Ok(Json(report))
}

/// Maps simulation failures onto HTTP responses
pub struct ApiError(SimulationError);

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        ApiError(err)
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        ApiError(SimulationError::Data(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SimulationError::Exchange(_) | SimulationError::MissingExitQuote(_) => {
                StatusCode::BAD_GATEWAY
            }
            SimulationError::Config(_) | SimulationError::Data(_) => StatusCode::BAD_REQUEST,
        };
        let recoverable = self.0.is_recoverable();
        error!(
            "Simulation request failed (recoverable: {}): {}",
            recoverable, self.0
        );

        let body = json!({ "error": self.0.to_string(), "recoverable": recoverable });
        (status, Json(body)).into_response()
    }
}
