//! Route planner.
//!
//! This module implements the core algorithm that answers:
//! "what is the best way to ride from this station to that one?"
//!
//! The search prefers a direct ride on one line, then a ride with one
//! change at an interchange station, and only then falls back to the
//! shortest route with the fewest changes.

mod bfs;
mod rank;
mod search;

pub use bfs::shortest_routes;
pub use rank::{fewest_transfers, shortest};
pub use search::{RoutePlan, Router, SearchTier, find_route};
