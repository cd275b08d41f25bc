//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::FilterField;
use crate::geocode::GeocodeError;
use crate::kepco::KepcoError;
use crate::query::{QueryEngine, QueryError, QueryParameters};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Default map centre: Seoul City Hall.
const DEFAULT_CENTER: (f64, f64) = (37.5665, 126.9780);

/// Default search radius in kilometres.
const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/filters", get(filter_options))
        .route("/api/search", post(search_stations))
        .route("/api/geocode", get(geocode_address))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page with the search form.
async fn index_page() -> Result<Response, AppError> {
    let template = IndexTemplate {
        default_latitude: DEFAULT_CENTER.0,
        default_longitude: DEFAULT_CENTER.1,
        default_radius_km: DEFAULT_RADIUS_KM,
    };

    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// All stations in the current repository snapshot.
async fn list_stations(State(state): State<AppState>) -> Result<Json<StationsResponse>, AppError> {
    let repository = state.stations.repository().await?;

    let stations: Vec<StationResult> = repository
        .all_records()
        .iter()
        .map(StationResult::from_record)
        .collect();

    Ok(Json(StationsResponse {
        count: stations.len(),
        stations,
    }))
}

/// Distinct values for every categorical field.
///
/// This is what a UI expands "select all" into; missing values appear as
/// the "unknown" category and are selectable like any other.
async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptionsResponse>, AppError> {
    let repository = state.stations.repository().await?;

    let filters = FilterField::ALL
        .into_iter()
        .map(|field| {
            let values = repository.distinct_values(field).into_iter().collect();
            (field.as_str().to_string(), values)
        })
        .collect();

    Ok(Json(FilterOptionsResponse { filters }))
}

/// Proximity search: reference point, radius, and categorical filters in;
/// distance-annotated stations out, nearest first.
async fn search_stations(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let mut params = QueryParameters::new(req.latitude, req.longitude, req.radius_km)?;

    for (name, values) in req.filters {
        let field: FilterField = name.parse().map_err(|_| AppError::BadRequest {
            message: format!("Unknown filter field: {}", name),
        })?;
        params = params.with_filter(field, values);
    }

    let repository = state.stations.repository().await?;
    let result = QueryEngine::new(&repository).query(&params);

    let reference = params.reference();
    let stations: Vec<SearchHitResult> = result
        .iter()
        .map(|hit| SearchHitResult::from_hit(hit, reference))
        .collect();

    Ok(Json(SearchResponse {
        count: stations.len(),
        stations,
    }))
}

/// Resolve a free-text address to a coordinate.
async fn geocode_address(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>, AppError> {
    if query.q.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Address must not be empty".to_string(),
        });
    }

    let coordinate = state.geocoder.geocode(&query.q).await?;

    Ok(Json(GeocodeResponse {
        latitude: coordinate.latitude(),
        longitude: coordinate.longitude(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidParameter(message) => AppError::BadRequest { message },
        }
    }
}

impl From<KepcoError> for AppError {
    fn from(e: KepcoError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::NotFound => AppError::NotFound {
                message: "Address not found".to_string(),
            },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
