//! Domain types for the metro route planner.
//!
//! This module contains the network model: lines, stations, the directed
//! segments between them, and routes built from those segments. Stations
//! and lines live in an arena owned by [`Network`] and are referred to by
//! id everywhere else.

mod error;
mod line;
mod network;
mod route;
mod segment;
mod station;

pub use error::DomainError;
pub use line::{Color, Line, LineId};
pub use network::{Interchanges, Network};
pub use route::Route;
pub use segment::{RenderHint, Segment};
pub use station::{Position, Station, StationId};
