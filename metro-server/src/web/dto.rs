//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Network, Segment, StationId};
use crate::planner::RoutePlan;

/// Request to find a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub from: String,

    /// End station name
    pub to: String,
}

/// A route between two stations.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Start station name
    pub from: String,

    /// End station name
    pub to: String,

    /// Search stage that found the route (absent when there is none)
    pub tier: Option<String>,

    /// Number of line changes
    pub transfers: usize,

    /// Sum of segment weights (minutes)
    pub total_weight: f32,

    /// Stations visited in order
    pub stations: Vec<String>,

    /// Segments in travel order
    pub segments: Vec<SegmentResult>,
}

/// One hop of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Line name
    pub line: String,

    /// Line colour as `#AARRGGBB`
    pub color: String,

    /// Source station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Running time (minutes)
    pub weight: f32,
}

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query (case-insensitive substring)
    #[serde(default)]
    pub q: String,

    /// Maximum results
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Drawing position
    pub x: i32,
    pub y: i32,

    /// Lines serving the station
    pub lines: Vec<String>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line in the line listing.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line name
    pub name: String,

    /// Line colour as `#AARRGGBB`
    pub color: String,

    /// Number of stations served
    pub stations: usize,
}

/// Response for the line listing.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request for interchange stations between two lines.
#[derive(Debug, Deserialize)]
pub struct InterchangeRequest {
    pub line1: String,
    pub line2: String,
}

/// Interchange stations between two lines.
#[derive(Debug, Serialize)]
pub struct InterchangeResponse {
    pub line1: String,
    pub line2: String,
    pub stations: Vec<String>,
}

/// Summary of the loaded network.
#[derive(Debug, Serialize)]
pub struct NetworkStatus {
    /// Reload counter
    pub generation: u64,

    /// When the network was installed (RFC 3339)
    pub loaded_at: String,

    pub lines: usize,
    pub stations: usize,
    pub segments: usize,

    /// Route plans currently cached
    pub cached_routes: u64,
}

/// Response for a network reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub generation: u64,
    pub lines: usize,
    pub stations: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

fn station_name(network: &Network, id: StationId) -> String {
    network
        .station(id)
        .map(|s| s.name().to_string())
        .unwrap_or_default()
}

impl SegmentResult {
    /// Create from a domain Segment.
    pub fn from_segment(network: &Network, segment: &Segment) -> Self {
        let line = network.line(segment.line);
        Self {
            line: line.map(|l| l.name().to_string()).unwrap_or_default(),
            color: line.map(|l| l.color().to_string()).unwrap_or_default(),
            from: station_name(network, segment.from),
            to: station_name(network, segment.to),
            weight: segment.weight,
        }
    }
}

impl RouteResponse {
    /// Create from a route plan.
    pub fn from_plan(network: &Network, from: &str, to: &str, plan: &RoutePlan) -> Self {
        let route = &plan.route;
        Self {
            from: from.to_string(),
            to: to.to_string(),
            tier: plan.tier.map(|t| t.as_str().to_string()),
            transfers: route.transfer_count(),
            total_weight: route.total_weight(),
            stations: route
                .stations()
                .into_iter()
                .map(|id| station_name(network, id))
                .collect(),
            segments: route
                .segments()
                .iter()
                .map(|s| SegmentResult::from_segment(network, s))
                .collect(),
        }
    }
}

impl StationResult {
    /// Create from a station id.
    pub fn from_station(network: &Network, id: StationId) -> Option<Self> {
        let station = network.station(id)?;
        Some(Self {
            name: station.name().to_string(),
            x: station.position().x,
            y: station.position().y,
            lines: station
                .lines()
                .into_iter()
                .filter_map(|l| network.line(l).map(|line| line.name().to_string()))
                .collect(),
        })
    }
}
