//! Route types.
//!
//! A `Route` is a rider's journey through the network: the segments
//! travelled, in order. Routes are values. Extending one produces a new
//! route and leaves the original untouched, so partial routes queued
//! during search never alias each other.

use super::{LineId, Segment, StationId};

/// An ordered journey made of segments.
///
/// An empty route means "no route": the start and end are the same
/// station, or not connected at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    segments: Vec<Segment>,
}

impl Route {
    /// The empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a route from segments without checking that they connect.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this is the empty route.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new route with `segment` added at the end.
    pub fn append(&self, segment: Segment) -> Route {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Route { segments }
    }

    /// Returns a new route: this route followed by `other`.
    ///
    /// No check is made that `other` starts where this route ends.
    pub fn merge(&self, other: &Route) -> Route {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Route { segments }
    }

    /// Number of times the line changes between consecutive segments.
    ///
    /// Returning to a line after leaving it counts as another transfer.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::{Network, Position, Color};
    ///
    /// let mut network = Network::new();
    /// let red = network.add_line("Red", Color::BLACK).unwrap();
    /// let blue = network.add_line("Blue", Color::BLACK).unwrap();
    /// let a = network.add_station("A", Position::default()).unwrap();
    /// let b = network.add_station("B", Position::default()).unwrap();
    /// let c = network.add_station("C", Position::default()).unwrap();
    /// network.connect(red, a, b, 1.0).unwrap();
    /// network.connect(blue, b, c, 1.0).unwrap();
    ///
    /// let route = network.route_through(&[(red, a, b), (blue, b, c)]).unwrap();
    /// assert_eq!(route.transfer_count(), 1);
    /// ```
    pub fn transfer_count(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }

    /// Returns true if any segment starts or ends at `station`.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.segments.iter().any(|s| s.touches(station))
    }

    /// The first station, if the route is not empty.
    pub fn origin(&self) -> Option<StationId> {
        self.segments.first().map(|s| s.from)
    }

    /// The last station, if the route is not empty.
    pub fn destination(&self) -> Option<StationId> {
        self.segments.last().map(|s| s.to)
    }

    /// Stations visited in order: the origin, then each segment's destination.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            stations.push(first.from);
        }
        stations.extend(self.segments.iter().map(|s| s.to));
        stations
    }

    /// Distinct lines ridden, in order of first use.
    pub fn lines(&self) -> Vec<LineId> {
        let mut lines: Vec<LineId> = Vec::new();
        for segment in &self.segments {
            if !lines.contains(&segment.line) {
                lines.push(segment.line);
            }
        }
        lines
    }

    /// Sum of segment weights.
    pub fn total_weight(&self) -> f32 {
        self.segments.iter().map(|s| s.weight).sum()
    }

    /// Returns true if each segment starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments.windows(2).all(|pair| pair[0].to == pair[1].from)
    }
}
