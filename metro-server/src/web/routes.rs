//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tokio::task::JoinError;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, Network, StationId};
use crate::planner;
use crate::storage::{self, NetworkFileError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/network", get(network_status))
        .route("/api/network/reload", post(reload_network))
        .route("/api/lines", get(list_lines))
        .route("/api/stations", get(search_stations))
        .route("/api/interchanges", get(interchanges))
        .route("/api/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the loaded network.
async fn network_status(State(state): State<AppState>) -> Json<NetworkStatus> {
    let snapshot = state.snapshot().await;
    let network = &snapshot.network;

    Json(NetworkStatus {
        generation: snapshot.generation,
        loaded_at: snapshot.loaded_at.to_rfc3339(),
        lines: network.line_count(),
        stations: network.station_count(),
        segments: network.segment_count(),
        cached_routes: state.cache.entry_count(),
    })
}

/// Re-read the network file and swap it in.
async fn reload_network(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let Some(path) = state.source.clone() else {
        return Err(AppError::BadRequest {
            message: "No network file configured".to_string(),
        });
    };

    let network = tokio::task::spawn_blocking(move || storage::load(&path)).await??;
    let snapshot = state.replace(network).await;

    info!(
        generation = snapshot.generation,
        stations = snapshot.network.station_count(),
        "reloaded network"
    );

    Ok(Json(ReloadResponse {
        generation: snapshot.generation,
        lines: snapshot.network.line_count(),
        stations: snapshot.network.station_count(),
    }))
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let snapshot = state.snapshot().await;
    let network = &snapshot.network;

    let lines = network
        .lines()
        .map(|(id, line)| LineResult {
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: network.stations().filter(|(_, s)| s.serves(id)).count(),
        })
        .collect();

    Json(LinesResponse { lines })
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let query = req.q.trim().to_lowercase();
    let snapshot = state.snapshot().await;
    let network = &snapshot.network;

    let stations = network
        .stations()
        .filter(|(_, s)| s.name().to_lowercase().contains(&query))
        .filter_map(|(id, _)| StationResult::from_station(network, id))
        .take(limit)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Interchange stations between two lines.
async fn interchanges(
    State(state): State<AppState>,
    Query(req): Query<InterchangeRequest>,
) -> Result<Json<InterchangeResponse>, AppError> {
    let snapshot = state.snapshot().await;
    let network = &snapshot.network;

    let line_id = |name: &str| {
        network.line_id(name).ok_or_else(|| AppError::NotFound {
            message: format!("Unknown line: {name}"),
        })
    };
    let line1 = line_id(&req.line1)?;
    let line2 = line_id(&req.line2)?;

    let stations = network
        .interchange_stations(line1, line2)?
        .filter_map(|id| network.station(id).map(|s| s.name().to_string()))
        .collect();

    Ok(Json(InterchangeResponse {
        line1: req.line1,
        line2: req.line2,
        stations,
    }))
}

/// Find a route between two named stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let snapshot = state.snapshot().await;
    let start = lookup_station(&snapshot.network, &req.from)?;
    let end = lookup_station(&snapshot.network, &req.to)?;

    let plan = match state.cache.get(snapshot.generation, start, end).await {
        Some(plan) => {
            debug!(from = %req.from, to = %req.to, "route cache hit");
            plan
        }
        None => {
            let network = Arc::clone(&snapshot.network);
            let plan = tokio::task::spawn_blocking(move || {
                planner::Router::new(&network).plan(start, end)
            })
            .await?;
            let plan = Arc::new(plan);
            state
                .cache
                .insert(snapshot.generation, start, end, Arc::clone(&plan))
                .await;
            plan
        }
    };

    Ok(Json(RouteResponse::from_plan(
        &snapshot.network,
        &req.from,
        &req.to,
        &plan,
    )))
}

fn lookup_station(network: &Network, name: &str) -> Result<StationId, AppError> {
    network.station_id(name).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown station: {name}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<NetworkFileError> for AppError {
    fn from(e: NetworkFileError) -> Self {
        AppError::Internal {
            message: format!("Failed to load network: {e}"),
        }
    }
}

impl From<JoinError> for AppError {
    fn from(e: JoinError) -> Self {
        AppError::Internal {
            message: format!("Background task failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = status.as_u16(), "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::domain::{Color, Position};
    use tempfile::tempdir;

    /// L1: Alpha - Bravo - Xray - Yankee, L2: Xray - Charlie - Delta,
    /// plus an isolated station Zulu.
    fn sample_network() -> Network {
        let mut n = Network::new();
        let l1 = n.add_line("L1", Color::from_argb(0xFFFF0000)).unwrap();
        let l2 = n.add_line("L2", Color::from_argb(0xFF0000FF)).unwrap();
        let [a, b, x, c, d] = ["Alpha", "Bravo", "Xray", "Charlie", "Delta"]
            .map(|name| n.add_station(name, Position::default()).unwrap());
        n.add_station("Zulu", Position::default()).unwrap();
        let y = n.add_station("Yankee", Position::default()).unwrap();
        n.connect(l1, a, b, 2.0).unwrap();
        n.connect(l1, b, x, 2.0).unwrap();
        n.connect(l1, x, y, 2.0).unwrap();
        n.connect(l2, x, c, 3.0).unwrap();
        n.connect(l2, c, d, 3.0).unwrap();
        n
    }

    fn state() -> AppState {
        AppState::new(sample_network(), &CacheConfig::default(), None)
    }

    fn route_query(from: &str, to: &str) -> Query<RouteRequest> {
        Query(RouteRequest {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn route_found_and_cached() {
        let state = state();

        let Json(response) = find_route(State(state.clone()), route_query("Alpha", "Delta"))
            .await
            .unwrap();

        assert_eq!(response.tier.as_deref(), Some("one_transfer"));
        assert_eq!(response.stations, ["Alpha", "Bravo", "Xray", "Charlie", "Delta"]);
        assert_eq!(response.transfers, 1);

        let snapshot = state.snapshot().await;
        let start = snapshot.network.station_id("Alpha").unwrap();
        let end = snapshot.network.station_id("Delta").unwrap();
        assert!(state.cache.get(snapshot.generation, start, end).await.is_some());
    }

    #[tokio::test]
    async fn route_to_unreachable_station_is_empty() {
        let Json(response) = find_route(State(state()), route_query("Alpha", "Zulu"))
            .await
            .unwrap();

        assert_eq!(response.tier, None);
        assert!(response.segments.is_empty());
        assert!(response.stations.is_empty());
    }

    #[tokio::test]
    async fn route_with_unknown_station_is_not_found() {
        let err = find_route(State(state()), route_query("Alpha", "Nowhere"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { message } if message.contains("Nowhere")));
    }

    #[tokio::test]
    async fn station_search_is_case_insensitive_and_limited() {
        let Json(response) = search_stations(
            State(state()),
            Query(StationSearchRequest {
                q: "A".to_string(),
                limit: Some(2),
            }),
        )
        .await;

        let names: Vec<_> = response.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Bravo"]);
    }

    #[tokio::test]
    async fn station_search_reports_lines() {
        let Json(response) = search_stations(
            State(state()),
            Query(StationSearchRequest {
                q: "xray".to_string(),
                limit: None,
            }),
        )
        .await;

        assert_eq!(response.stations.len(), 1);
        assert_eq!(response.stations[0].lines, ["L1", "L2"]);
    }

    #[tokio::test]
    async fn lines_listing() {
        let Json(response) = list_lines(State(state())).await;

        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.lines[0].name, "L1");
        assert_eq!(response.lines[0].color, "#FFFF0000");
        assert_eq!(response.lines[0].stations, 4);
        assert_eq!(response.lines[1].stations, 3);
    }

    #[tokio::test]
    async fn interchange_listing() {
        let Json(response) = interchanges(
            State(state()),
            Query(InterchangeRequest {
                line1: "L1".to_string(),
                line2: "L2".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.stations, ["Xray"]);
    }

    #[tokio::test]
    async fn interchange_with_unknown_line_is_not_found() {
        let err = interchanges(
            State(state()),
            Query(InterchangeRequest {
                line1: "L1".to_string(),
                line2: "L9".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn network_status_counts() {
        let Json(status) = network_status(State(state())).await;

        assert_eq!(status.generation, 1);
        assert_eq!(status.lines, 2);
        assert_eq!(status.stations, 7);
        assert_eq!(status.segments, 10);
    }

    #[tokio::test]
    async fn reload_without_source_is_bad_request() {
        let err = reload_network(State(state())).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn reload_swaps_network_and_clears_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        storage::save(&sample_network(), &path).unwrap();
        let state = AppState::new(sample_network(), &CacheConfig::default(), Some(path.clone()));

        let Json(before) = find_route(State(state.clone()), route_query("Alpha", "Delta"))
            .await
            .unwrap();
        assert_eq!(before.tier.as_deref(), Some("one_transfer"));

        let snapshot = state.snapshot().await;
        let alpha = snapshot.network.station_id("Alpha").unwrap();
        let delta = snapshot.network.station_id("Delta").unwrap();
        assert!(state.cache.get(1, alpha, delta).await.is_some());

        // An express line now runs straight from Alpha to Delta.
        let mut updated = sample_network();
        let express = updated.add_line("Express", Color::BLACK).unwrap();
        updated.connect(express, alpha, delta, 5.0).unwrap();
        storage::save(&updated, &path).unwrap();

        let Json(response) = reload_network(State(state.clone())).await.unwrap();
        assert_eq!(response.generation, 2);
        assert_eq!(response.lines, 3);
        assert!(state.cache.get(1, alpha, delta).await.is_none());

        let Json(after) = find_route(State(state.clone()), route_query("Alpha", "Delta"))
            .await
            .unwrap();
        assert_eq!(after.tier.as_deref(), Some("direct"));
        assert_eq!(after.stations, ["Alpha", "Delta"]);
        assert!(state.cache.get(2, alpha, delta).await.is_some());
    }

    #[tokio::test]
    async fn reload_into_empty_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        storage::save(&sample_network(), &path).unwrap();

        let state = AppState::new(Network::new(), &CacheConfig::default(), Some(path));
        let Json(response) = reload_network(State(state.clone())).await.unwrap();

        assert_eq!(response.generation, 2);
        assert_eq!(response.stations, 7);

        let Json(route) = find_route(State(state), route_query("Alpha", "Bravo"))
            .await
            .unwrap();
        assert_eq!(route.tier.as_deref(), Some("direct"));
    }

    #[tokio::test]
    async fn reload_with_broken_file_is_internal_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(&path, "not json").unwrap();

        let state = AppState::new(sample_network(), &CacheConfig::default(), Some(path));
        let err = reload_network(State(state.clone())).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        // The old network keeps serving.
        assert_eq!(state.snapshot().await.generation, 1);
    }

    #[test]
    fn error_status_codes() {
        let cases = [
            (
                AppError::BadRequest {
                    message: "bad".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound {
                    message: "missing".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Internal {
                    message: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
