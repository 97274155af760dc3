//! Import of the desktop map editor's XML save files.
//!
//! The editor writes a `<MetroGraph>` root with `Lines/Line` and
//! `Nodes/Node/Link` elements, all data carried in attributes. Viewport
//! attributes on the root (`ScrollX`, `ScrollY`, `ZoomScale`) are ignored.
//! The text must be UTF-8; the editor's declared encoding is not honoured.

use serde::Deserialize;

use super::document::{LineDto, NetworkDocument, SegmentDto, StationDto};
use super::error::NetworkFileError;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename = "MetroGraph")]
struct MetroGraphXml {
    #[serde(rename = "Lines", default)]
    lines: LinesXml,
    #[serde(rename = "Nodes", default)]
    nodes: NodesXml,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct LinesXml {
    #[serde(rename = "Line", default)]
    lines: Vec<LineXml>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct LineXml {
    #[serde(rename = "@Name")]
    name: String,
    #[serde(rename = "@Color")]
    color: i32,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct NodesXml {
    #[serde(rename = "Node", default)]
    nodes: Vec<NodeXml>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct NodeXml {
    #[serde(rename = "@Name")]
    name: String,
    #[serde(rename = "@X")]
    x: i32,
    #[serde(rename = "@Y")]
    y: i32,
    #[serde(rename = "Link", default)]
    links: Vec<LinkXml>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct LinkXml {
    #[serde(rename = "@To")]
    to: String,
    #[serde(rename = "@Line")]
    line: String,
    #[serde(rename = "@Flag")]
    flag: i32,
    #[serde(rename = "@Weight")]
    weight: f32,
}

impl NetworkDocument {
    /// Parse a document from the map editor's XML format.
    ///
    /// The result goes through the same validation as JSON documents
    /// when turned into a network.
    pub fn from_xml(xml: &str) -> Result<Self, NetworkFileError> {
        let graph: MetroGraphXml = quick_xml::de::from_str(xml)?;
        Ok(graph.into_document())
    }
}

impl MetroGraphXml {
    fn into_document(self) -> NetworkDocument {
        let lines = self
            .lines
            .lines
            .into_iter()
            .map(|l| LineDto {
                name: l.name,
                color: l.color,
            })
            .collect();

        let stations = self
            .nodes
            .nodes
            .into_iter()
            .map(|n| StationDto {
                name: n.name,
                x: n.x,
                y: n.y,
                segments: n
                    .links
                    .into_iter()
                    .map(|link| SegmentDto {
                        to: link.to,
                        line: link.line,
                        flag: link.flag,
                        weight: link.weight,
                    })
                    .collect(),
            })
            .collect();

        NetworkDocument { lines, stations }
    }
}
