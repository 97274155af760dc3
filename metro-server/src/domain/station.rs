//! Station types.

use std::fmt;

use super::{LineId, Segment};

/// Stable identifier of a station within its [`Network`](super::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(crate) u32);

impl StationId {
    /// Returns the arena index of this station.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a station is drawn. Never interpreted by the router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A stop in the network, e.g. "Nanjing West Road".
///
/// A station owns its outgoing segments. Their order is the order they
/// were added, and the router explores them in exactly that order, so it
/// decides which of several equally good routes wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    position: Position,
    segments: Vec<Segment>,
}

impl Station {
    pub(crate) fn new(name: String, position: Position) -> Self {
        Self {
            name,
            position,
            segments: Vec::new(),
        }
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the drawing position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the outgoing segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if any outgoing segment runs on `line`.
    pub fn serves(&self, line: LineId) -> bool {
        self.segments.iter().any(|s| s.line == line)
    }

    /// Distinct lines of the outgoing segments, in first-seen order.
    pub fn lines(&self) -> Vec<LineId> {
        let mut lines: Vec<LineId> = Vec::new();
        for segment in &self.segments {
            if !lines.contains(&segment.line) {
                lines.push(segment.line);
            }
        }
        lines
    }

    pub(crate) fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
