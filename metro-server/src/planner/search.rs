//! Tiered route search.
//!
//! Riders prefer staying on one line over changing, so the router asks
//! three questions in turn and stops at the first that has an answer:
//!
//! 1. Is there a direct route on a line serving both stations?
//! 2. Is there a route with exactly one change at an interchange station?
//! 3. Otherwise, what is the shortest route, and of those, which needs
//!    the fewest changes?

use std::fmt;

use tracing::debug;

use crate::domain::{LineId, Network, Route, StationId};

use super::bfs::shortest_routes;
use super::rank::{fewest_transfers, shortest};

/// Which stage of the search produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTier {
    /// Single line, no changes.
    Direct,
    /// Exactly one change at an interchange station.
    OneTransfer,
    /// Shortest route overall, fewest changes among equals.
    Shortest,
}

impl SearchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchTier::Direct => "direct",
            SearchTier::OneTransfer => "one_transfer",
            SearchTier::Shortest => "shortest",
        }
    }
}

impl fmt::Display for SearchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a route search: the route and the tier that found it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePlan {
    /// Best route found; empty if there is none.
    pub route: Route,

    /// Tier that produced the route, `None` when the route is empty.
    pub tier: Option<SearchTier>,
}

impl RoutePlan {
    /// A plan with no route.
    pub fn none() -> Self {
        Self::default()
    }

    fn found(route: Route, tier: SearchTier) -> Self {
        if route.is_empty() {
            Self::none()
        } else {
            Self {
                route,
                tier: Some(tier),
            }
        }
    }
}

/// Route finder over a borrowed network.
///
/// The router holds no state of its own; the same query against the same
/// network always gives the same route.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    network: &'a Network,
}

impl<'a> Router<'a> {
    /// Create a router for a network.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Find the best route from `start` to `end`.
    ///
    /// Returns the empty route if either station is unknown, if they are
    /// the same station, or if no route exists.
    pub fn find_route(&self, start: StationId, end: StationId) -> Route {
        self.plan(start, end).route
    }

    /// Find the best route between two stations given by name.
    ///
    /// Unknown names give the empty route.
    pub fn find_route_by_name(&self, start: &str, end: &str) -> Route {
        match (self.network.station_id(start), self.network.station_id(end)) {
            (Some(start), Some(end)) => self.find_route(start, end),
            _ => Route::empty(),
        }
    }

    /// Find the best route and report which tier produced it.
    pub fn plan(&self, start: StationId, end: StationId) -> RoutePlan {
        if self.network.station(start).is_none() || self.network.station(end).is_none() {
            return RoutePlan::none();
        }
        if start == end {
            return RoutePlan::none();
        }

        let direct = self.find_direct(start, end);
        if !direct.is_empty() {
            debug!(segments = direct.len(), "found direct route");
            return RoutePlan::found(direct, SearchTier::Direct);
        }

        let one_transfer = self.find_one_transfer(start, end);
        if !one_transfer.is_empty() {
            debug!(segments = one_transfer.len(), "found one-transfer route");
            return RoutePlan::found(one_transfer, SearchTier::OneTransfer);
        }

        let fallback = self.find_fewest_transfers(start, end);
        debug!(
            segments = fallback.len(),
            transfers = fallback.transfer_count(),
            "shortest route fallback"
        );
        RoutePlan::found(fallback, SearchTier::Shortest)
    }

    /// Shortest route on any single line serving both stations.
    fn find_direct(&self, start: StationId, end: StationId) -> Route {
        let end_lines = self.network.lines_at(end);
        let common: Vec<LineId> = self
            .network
            .lines_at(start)
            .into_iter()
            .filter(|line| end_lines.contains(line))
            .collect();

        if common.is_empty() {
            return Route::empty();
        }

        let candidates = common
            .into_iter()
            .flat_map(|line| shortest_routes(self.network, start, end, Some(line)));
        shortest(candidates)
    }

    /// Shortest route that rides one line to an interchange and a second
    /// line from there.
    fn find_one_transfer(&self, start: StationId, end: StationId) -> Route {
        let mut candidates: Vec<Route> = Vec::new();
        let end_lines = self.network.lines_at(end);

        for start_line in self.network.lines_at(start) {
            for &end_line in end_lines.iter().filter(|&&l| l != start_line) {
                let Ok(interchanges) = self.network.interchange_stations(start_line, end_line)
                else {
                    continue;
                };

                for interchange in interchanges {
                    let first_halves =
                        shortest_routes(self.network, start, interchange, Some(start_line));
                    let second_halves =
                        shortest_routes(self.network, interchange, end, Some(end_line));

                    for first in &first_halves {
                        for second in &second_halves {
                            candidates.push(first.merge(second));
                        }
                    }
                }
            }
        }

        shortest(candidates)
    }

    /// Among the shortest routes on any lines, the one with fewest changes.
    fn find_fewest_transfers(&self, start: StationId, end: StationId) -> Route {
        fewest_transfers(shortest_routes(self.network, start, end, None))
    }
}

/// Find the best route from `start` to `end` in `network`.
///
/// Shorthand for `Router::new(network).find_route(start, end)`.
pub fn find_route(network: &Network, start: StationId, end: StationId) -> Route {
    Router::new(network).find_route(start, end)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
