//! The transit network.
//!
//! A `Network` owns every line and station. Stations own their outgoing
//! segments, and segments refer to lines and stations by id, so there
//! are no reference cycles between the three.

use std::collections::HashMap;

use super::{Color, DomainError, Line, LineId, Position, Route, Segment, Station, StationId};

/// Lines and stations of a transit system.
///
/// Names are unique per kind. Ids are dense indices handed out in
/// insertion order, and iteration always follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    lines: Vec<Line>,
    line_ids: HashMap<String, LineId>,
    stations: Vec<Station>,
    station_ids: HashMap<String, StationId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLine` if a line with this name already exists.
    pub fn add_line(&mut self, name: &str, color: Color) -> Result<LineId, DomainError> {
        if self.line_ids.contains_key(name) {
            return Err(DomainError::DuplicateLine(name.to_string()));
        }
        let id = LineId(self.lines.len() as u32);
        self.lines.push(Line::new(name.to_string(), color));
        self.line_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Add a station with no segments.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStation` if a station with this name already exists.
    pub fn add_station(&mut self, name: &str, position: Position) -> Result<StationId, DomainError> {
        if self.station_ids.contains_key(name) {
            return Err(DomainError::DuplicateStation(name.to_string()));
        }
        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station::new(name.to_string(), position));
        self.station_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Append a segment to its source station's outgoing list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the line or either station is not
    /// part of this network.
    pub fn add_segment(&mut self, segment: Segment) -> Result<(), DomainError> {
        if self.line(segment.line).is_none() {
            return Err(DomainError::InvalidArgument("line"));
        }
        if self.station(segment.to).is_none() {
            return Err(DomainError::InvalidArgument("to"));
        }
        let from = self
            .stations
            .get_mut(segment.from.index())
            .ok_or(DomainError::InvalidArgument("from"))?;
        from.push_segment(segment);
        Ok(())
    }

    /// Add the segment pair `a -> b` and `b -> a` on `line`.
    pub fn connect(
        &mut self,
        line: LineId,
        a: StationId,
        b: StationId,
        weight: f32,
    ) -> Result<(), DomainError> {
        let forward = Segment::new(line, a, b).with_weight(weight);
        self.add_segment(forward)?;
        self.add_segment(forward.reversed())
    }

    /// Change a line's display colour.
    pub fn set_line_color(&mut self, line: LineId, color: Color) -> Result<(), DomainError> {
        let line = self
            .lines
            .get_mut(line.index())
            .ok_or(DomainError::InvalidArgument("line"))?;
        line.set_color(color);
        Ok(())
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.index())
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Resolve a line name to its id.
    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.line_ids.get(name).copied()
    }

    /// Resolve a station name to its id.
    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_ids.get(name).copied()
    }

    /// Look up a line by name.
    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.line_id(name).and_then(|id| self.line(id))
    }

    /// Look up a station by name.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.station_id(name).and_then(|id| self.station(id))
    }

    /// All lines with their ids, in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (LineId(i as u32), line))
    }

    /// All stations with their ids, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, station)| (StationId(i as u32), station))
    }

    /// Every segment in the network: stations in insertion order, each
    /// station's segments in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.stations.iter().flat_map(|s| s.segments().iter())
    }

    /// Outgoing segments of a station (empty for an unknown id).
    pub fn segments_from(&self, station: StationId) -> &[Segment] {
        self.station(station).map(Station::segments).unwrap_or(&[])
    }

    /// Distinct lines served by a station, in first-seen order.
    pub fn lines_at(&self, station: StationId) -> Vec<LineId> {
        self.station(station).map(Station::lines).unwrap_or_default()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.stations.iter().map(|s| s.segments().len()).sum()
    }

    /// Returns true if the network has no stations and no lines.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.lines.is_empty()
    }

    /// Stations where a rider can change between `line1` and `line2`.
    ///
    /// A station qualifies when it has more than two outgoing segments
    /// (a plain stop on one line has exactly two, one per direction) and
    /// serves both lines. The sequence is lazy and follows station
    /// insertion order; clone it to walk it again.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either line is not part of this network.
    pub fn interchange_stations(
        &self,
        line1: LineId,
        line2: LineId,
    ) -> Result<Interchanges<'_>, DomainError> {
        if self.line(line1).is_none() {
            return Err(DomainError::InvalidArgument("line1"));
        }
        if self.line(line2).is_none() {
            return Err(DomainError::InvalidArgument("line2"));
        }
        // Same line: nothing to change between, start exhausted.
        let next = if line1 == line2 { self.stations.len() } else { 0 };
        Ok(Interchanges {
            stations: &self.stations,
            line1,
            line2,
            next,
        })
    }

    /// Build a route by looking up each `(line, from, to)` hop.
    ///
    /// Returns `None` if any hop has no matching segment.
    pub fn route_through(&self, hops: &[(LineId, StationId, StationId)]) -> Option<Route> {
        let mut route = Route::empty();
        for &(line, from, to) in hops {
            let segment = self
                .segments_from(from)
                .iter()
                .find(|s| s.line == line && s.to == to)?;
            route = route.append(*segment);
        }
        Some(route)
    }

    /// Segments whose reverse (same line, swapped ends) is missing.
    pub fn missing_reverse_segments(&self) -> Vec<Segment> {
        self.segments()
            .filter(|seg| {
                !self
                    .segments_from(seg.to)
                    .iter()
                    .any(|back| back.line == seg.line && back.to == seg.from)
            })
            .copied()
            .collect()
    }
}

/// Lazy sequence of interchange stations between two lines.
///
/// Produced by [`Network::interchange_stations`].
#[derive(Debug, Clone)]
pub struct Interchanges<'a> {
    stations: &'a [Station],
    line1: LineId,
    line2: LineId,
    next: usize,
}

impl Iterator for Interchanges<'_> {
    type Item = StationId;

    fn next(&mut self) -> Option<StationId> {
        while self.next < self.stations.len() {
            let idx = self.next;
            self.next += 1;

            let station = &self.stations[idx];
            if station.segments().len() > 2
                && station.serves(self.line1)
                && station.serves(self.line2)
            {
                return Some(StationId(idx as u32));
            }
        }
        None
    }
}
