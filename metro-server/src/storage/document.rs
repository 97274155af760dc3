//! Serialized form of a network.
//!
//! The layout follows the saved-graph files of the desktop map editor:
//! a list of lines, and a list of stations each carrying its outgoing
//! segments by destination and line name.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Color, Network, Position, RenderHint, Segment};

use super::error::NetworkFileError;

/// A complete network document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub lines: Vec<LineDto>,

    #[serde(default)]
    pub stations: Vec<StationDto>,
}

/// A line entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDto {
    pub name: String,

    /// Signed ARGB colour
    #[serde(default = "default_color")]
    pub color: i32,
}

/// A station entry with its outgoing segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDto {
    pub name: String,

    #[serde(default)]
    pub x: i32,

    #[serde(default)]
    pub y: i32,

    #[serde(default)]
    pub segments: Vec<SegmentDto>,
}

/// An outgoing segment, named by destination station and line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDto {
    pub to: String,

    pub line: String,

    /// Render marker code
    #[serde(default)]
    pub flag: i32,

    /// Running time in minutes
    #[serde(default)]
    pub weight: f32,
}

fn default_color() -> i32 {
    Color::BLACK.to_signed()
}

impl NetworkDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NetworkFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, NetworkFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Capture a network as a document.
    pub fn from_network(network: &Network) -> Self {
        let lines = network
            .lines()
            .map(|(_, line)| LineDto {
                name: line.name().to_string(),
                color: line.color().to_signed(),
            })
            .collect();

        let stations = network
            .stations()
            .map(|(_, station)| StationDto {
                name: station.name().to_string(),
                x: station.position().x,
                y: station.position().y,
                segments: station
                    .segments()
                    .iter()
                    .filter_map(|seg| {
                        Some(SegmentDto {
                            to: network.station(seg.to)?.name().to_string(),
                            line: network.line(seg.line)?.name().to_string(),
                            flag: seg.hint.code(),
                            weight: seg.weight,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { lines, stations }
    }

    /// Build and validate a network from this document.
    ///
    /// Stations are created before any segment, so segments may refer
    /// to stations listed later in the file. Every segment must have a
    /// reverse partner on the same line.
    ///
    /// # Errors
    ///
    /// Returns `Err` on duplicate names, references to undeclared lines
    /// or stations, unknown render markers, or a missing reverse segment.
    pub fn into_network(self) -> Result<Network, NetworkFileError> {
        let mut network = Network::new();

        for line in &self.lines {
            network.add_line(&line.name, Color::from_signed(line.color))?;
        }

        let station_ids = self
            .stations
            .iter()
            .map(|station| network.add_station(&station.name, Position::new(station.x, station.y)))
            .collect::<Result<Vec<_>, _>>()?;

        for (station, &from) in self.stations.iter().zip(&station_ids) {
            for seg in &station.segments {
                let to = network.station_id(&seg.to).ok_or_else(|| {
                    NetworkFileError::UnknownStation {
                        station: station.name.clone(),
                        to: seg.to.clone(),
                    }
                })?;
                let line =
                    network
                        .line_id(&seg.line)
                        .ok_or_else(|| NetworkFileError::UnknownLine {
                            station: station.name.clone(),
                            line: seg.line.clone(),
                        })?;
                let hint =
                    RenderHint::from_code(seg.flag).ok_or_else(|| NetworkFileError::UnknownFlag {
                        station: station.name.clone(),
                        flag: seg.flag,
                    })?;

                network.add_segment(
                    Segment::new(line, from, to)
                        .with_weight(seg.weight)
                        .with_hint(hint),
                )?;
            }
        }

        if let Some(seg) = network.missing_reverse_segments().first() {
            let name_of_station = |id| {
                network
                    .station(id)
                    .map(|s| s.name().to_string())
                    .unwrap_or_default()
            };
            return Err(NetworkFileError::MissingReverse {
                line: network
                    .line(seg.line)
                    .map(|l| l.name().to_string())
                    .unwrap_or_default(),
                from: name_of_station(seg.from),
                to: name_of_station(seg.to),
            });
        }

        debug!(
            lines = network.line_count(),
            stations = network.station_count(),
            segments = network.segment_count(),
            "built network from document"
        );

        Ok(network)
    }
}
