//! Segment types.
//!
//! A `Segment` is one directed hop between adjacent stations on a line.
//! It is small and `Copy`, so routes can hold segments by value.

use super::{LineId, StationId};

/// How a segment is drawn. Carried for renderers, ignored by routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderHint {
    /// The only line between its two stations.
    #[default]
    Single,
    /// First of two lines sharing the same track.
    ParallelFirst,
    /// Second of two lines sharing the same track.
    ParallelSecond,
    /// Return direction of a drawn segment; not drawn itself.
    Reverse,
}

impl RenderHint {
    /// Decode the numeric marker used by network files.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(RenderHint::Single),
            1 => Some(RenderHint::ParallelFirst),
            2 => Some(RenderHint::ParallelSecond),
            -1 => Some(RenderHint::Reverse),
            _ => None,
        }
    }

    /// Returns the numeric marker used by network files.
    pub fn code(self) -> i32 {
        match self {
            RenderHint::Single => 0,
            RenderHint::ParallelFirst => 1,
            RenderHint::ParallelSecond => 2,
            RenderHint::Reverse => -1,
        }
    }
}

/// A directed connection from one station to the next on a line.
///
/// # Invariants
///
/// The network is expected to hold the reverse segment (same line,
/// stations swapped) for every segment. Loading validates this; the
/// router relies on it without checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Line this segment belongs to
    pub line: LineId,
    /// Source station
    pub from: StationId,
    /// Destination station
    pub to: StationId,
    /// Running time in minutes
    pub weight: f32,
    /// Drawing marker
    pub hint: RenderHint,
}

impl Segment {
    /// Creates a segment with zero weight and the default render hint.
    pub fn new(line: LineId, from: StationId, to: StationId) -> Self {
        Self {
            line,
            from,
            to,
            weight: 0.0,
            hint: RenderHint::Single,
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the render hint.
    pub fn with_hint(mut self, hint: RenderHint) -> Self {
        self.hint = hint;
        self
    }

    /// The segment running the other way on the same line.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }

    /// Returns true if `station` is either end of this segment.
    pub fn touches(&self, station: StationId) -> bool {
        self.from == station || self.to == station
    }
}
