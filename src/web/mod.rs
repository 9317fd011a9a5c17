//! Web API module for Typescale.
//!
//! A small stateless REST API over the scale engine, so editors and build
//! tools can request scales without shelling out to the CLI.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/steps` - Step labels and proportional multipliers
//! - `GET /api/config` - Configured defaults
//! - `POST /api/scale` - Generate a scale with optional overrides
//! - `POST /api/clamp` - Derive a single clamp expression
//!
//! Every request is computed from scratch; the server keeps no scale state.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::{Config, ScaleDefaults};
use crate::export::{build_declarations, render_root_block, validate_prefix};
use crate::models::step::{all_steps, Step};
use crate::models::{ScaleConfig, ViewportParams};
use crate::scale::{derive_clamp, ScaleError, ScaleState};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (defaults for every request)
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// API Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// One entry of the step table.
#[derive(Debug, Serialize, Deserialize)]
pub struct StepInfo {
    /// Position in the scale.
    pub index: usize,
    /// Label (e.g. "lg").
    pub label: String,
    /// Multiplier used in proportional mode.
    pub multiplier: f64,
    /// Whether this is the `base` step.
    pub pivot: bool,
}

/// Step table response.
#[derive(Debug, Serialize, Deserialize)]
pub struct StepsResponse {
    /// Every supported step in order.
    pub steps: Vec<StepInfo>,
}

/// Configured defaults.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Scale defaults.
    pub scale: ScaleDefaults,
    /// Viewport defaults.
    pub viewport: ViewportParams,
    /// Custom-property prefix.
    pub prefix: String,
}

/// Scale generation request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScaleRequest {
    /// Parameters; missing fields take the configured defaults.
    pub config: Option<serde_json::Value>,
    /// Manual sizes keyed by step label or index.
    pub overrides: BTreeMap<String, f64>,
}

/// One declaration in a scale response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeclarationResponse {
    /// Step label.
    pub label: String,
    /// Custom property name.
    pub property: String,
    /// Effective size in root units.
    pub size: f64,
    /// Whether the size was set manually.
    pub overridden: bool,
    /// Rendered clamp expression.
    pub clamp: String,
}

/// Scale generation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaleResponse {
    /// Labels in order.
    pub labels: Vec<String>,
    /// Effective sizes (overrides applied).
    pub sizes: Vec<f64>,
    /// Average spacing (curve mode only).
    pub step_size: Option<f64>,
    /// Per-step declarations.
    pub declarations: Vec<DeclarationResponse>,
    /// Complete `:root` block.
    pub css: String,
}

/// Clamp derivation request.
#[derive(Debug, Deserialize)]
pub struct ClampRequest {
    /// Size at the narrowest viewport.
    pub value: f64,
    /// Size at the widest viewport before growth (defaults to `value`).
    pub max_value: Option<f64>,
    /// Viewport fields; missing fields take the configured viewport.
    pub viewport: Option<serde_json::Value>,
}

/// Clamp derivation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClampResponse {
    /// Rendered expression.
    pub expression: String,
    /// Lower bound.
    pub min: f64,
    /// Upper bound (growth applied).
    pub max: f64,
    /// Viewport-relative slope.
    pub slope_vw: f64,
    /// Root-unit intercept.
    pub intercept: f64,
}

/// API error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(error: ApiError) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(error))
}

impl From<ScaleError> for ApiError {
    fn from(err: ScaleError) -> Self {
        Self::new(err.to_string())
    }
}

fn rejected(rejection: &JsonRejection) -> (StatusCode, Json<ApiError>) {
    bad_request(ApiError::with_details(
        "Invalid request body",
        rejection.body_text(),
    ))
}

// ============================================================================
// Request helpers
// ============================================================================

/// Overlays the fields present in `partial` onto `defaults`.
///
/// Nested objects merge field by field, so `{"viewport": {"growth": 0}}`
/// keeps the configured viewport range.
fn overlay_defaults<T>(
    defaults: &T,
    partial: Option<serde_json::Value>,
    name: &str,
) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(defaults)
        .map_err(|e| ApiError::with_details("Failed to encode defaults", e.to_string()))?;

    if let Some(partial) = partial {
        let serde_json::Value::Object(fields) = partial else {
            return Err(ApiError::new(format!("{name} must be a JSON object")));
        };
        if let Some(target) = merged.as_object_mut() {
            for (key, value) in fields {
                match (target.get_mut(&key), value) {
                    (Some(serde_json::Value::Object(base)), serde_json::Value::Object(nested)) => {
                        base.extend(nested);
                    }
                    (_, value) => {
                        target.insert(key, value);
                    }
                }
            }
        }
    }

    serde_json::from_value(merged)
        .map_err(|e| ApiError::with_details(format!("Invalid {name}"), e.to_string()))
}

/// Resolves an override key given as an index or a label.
fn resolve_step_key(key: &str) -> Result<usize, ApiError> {
    key.parse::<usize>()
        .ok()
        .or_else(|| Step::by_label(key).map(|s| s.index))
        .ok_or_else(|| ApiError::new(format!("unknown step '{key}'")))
}

/// Resolves every override key, rejecting two keys that name the same step.
fn resolve_overrides(overrides: &BTreeMap<String, f64>) -> Result<BTreeMap<usize, f64>, ApiError> {
    let mut resolved = BTreeMap::new();
    let mut keys: BTreeMap<usize, &str> = BTreeMap::new();
    for (key, value) in overrides {
        let index = resolve_step_key(key)?;
        if let Some(previous) = keys.insert(index, key) {
            return Err(ApiError::new(format!(
                "overrides '{previous}' and '{key}' name the same step"
            )));
        }
        resolved.insert(index, *value);
    }
    Ok(resolved)
}

fn build_scale(
    config: &ScaleConfig,
    overrides: &BTreeMap<String, f64>,
) -> Result<ScaleResponse, ApiError> {
    validate_prefix(&config.prefix)?;
    let overrides = resolve_overrides(overrides)?;

    let mut state = ScaleState::from_config(config)?;
    for (index, value) in overrides {
        state = state.with_override(index, value)?;
    }

    let declarations = build_declarations(&state, &config.viewport)?;
    let css = render_root_block(&config.prefix, &declarations);

    Ok(ScaleResponse {
        labels: state.labels().iter().map(ToString::to_string).collect(),
        sizes: state.sizes(),
        step_size: state.step_size(),
        declarations: declarations
            .iter()
            .map(|d| DeclarationResponse {
                label: d.label.to_string(),
                property: d.property(&config.prefix),
                size: d.size,
                overridden: d.overridden,
                clamp: d.clamp.to_string(),
            })
            .collect(),
        css,
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/steps - Step labels and proportional multipliers.
async fn list_steps() -> Json<StepsResponse> {
    Json(StepsResponse {
        steps: all_steps()
            .map(|step| StepInfo {
                index: step.index,
                label: step.label.to_string(),
                multiplier: step.multiplier(),
                pivot: step.is_pivot(),
            })
            .collect(),
    })
}

/// GET /api/config - Configured defaults.
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        scale: state.config.scale.clone(),
        viewport: state.config.viewport,
        prefix: state.config.output.prefix.clone(),
    })
}

/// POST /api/scale - Generate a scale.
async fn generate_scale(
    State(state): State<AppState>,
    payload: Result<Json<ScaleRequest>, JsonRejection>,
) -> ApiResult<ScaleResponse> {
    let Json(request) = payload.map_err(|r| rejected(&r))?;

    let config = overlay_defaults(&state.config.scale_config(), request.config, "scale configuration")
        .map_err(bad_request)?;
    debug!(?config, overrides = request.overrides.len(), "generating scale");

    build_scale(&config, &request.overrides)
        .map(Json)
        .map_err(bad_request)
}

/// POST /api/clamp - Derive one clamp expression.
async fn derive_clamp_expression(
    State(state): State<AppState>,
    payload: Result<Json<ClampRequest>, JsonRejection>,
) -> ApiResult<ClampResponse> {
    let Json(request) = payload.map_err(|r| rejected(&r))?;

    let viewport =
        overlay_defaults(&state.config.viewport, request.viewport, "viewport").map_err(bad_request)?;
    let max_value = request.max_value.unwrap_or(request.value);
    let clamp = derive_clamp(request.value, max_value, &viewport)
        .map_err(|e| bad_request(e.into()))?;

    Ok(Json(ClampResponse {
        expression: clamp.to_string(),
        min: clamp.min,
        max: clamp.max,
        slope_vw: clamp.slope_vw,
        intercept: clamp.intercept,
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server is meant to run locally next to an editor.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/steps", get(list_steps))
        .route("/api/config", get(get_config))
        .route("/api/scale", post(generate_scale))
        .route("/api/clamp", post(derive_clamp_expression))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting Typescale web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
