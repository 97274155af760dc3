//! Loading and saving networks.
//!
//! Networks are stored as JSON documents (see [`NetworkDocument`]). Files
//! saved by the desktop map editor (`.xml`) can be loaded too, but are
//! never written. The loader is the one place the bidirectionality of
//! segments is checked; the planner trusts whatever network it is given.

mod document;
mod error;
mod xml;

use std::path::Path;

use tracing::info;

use crate::domain::Network;

pub use document::{LineDto, NetworkDocument, SegmentDto, StationDto};
pub use error::NetworkFileError;

/// Load and validate a network file.
///
/// Files with an `.xml` extension are read as map editor files, anything
/// else as JSON.
pub fn load(path: &Path) -> Result<Network, NetworkFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NetworkFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = if is_xml(path) {
        NetworkDocument::from_xml(&contents)?
    } else {
        NetworkDocument::from_json(&contents)?
    };
    let network = document.into_network()?;

    info!(
        path = %path.display(),
        lines = network.line_count(),
        stations = network.station_count(),
        "loaded network"
    );

    Ok(network)
}

fn is_xml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

/// Save a network as a JSON file.
///
/// Creates parent directories if they don't exist.
pub fn save(network: &Network, path: &Path) -> Result<(), NetworkFileError> {
    let io_error = |source| NetworkFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let json = NetworkDocument::from_network(network).to_json()?;
    std::fs::write(path, json).map_err(io_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, Position, RenderHint, Segment};
    use tempfile::tempdir;

    fn sample() -> Network {
        let mut n = Network::new();
        let red = n.add_line("Red", Color::from_argb(0xFFFF0000)).unwrap();
        let blue = n.add_line("Blue", Color::from_argb(0xFF0000FF)).unwrap();
        let a = n.add_station("A", Position::new(1, 2)).unwrap();
        let b = n.add_station("B", Position::new(3, 4)).unwrap();
        let c = n.add_station("C", Position::new(5, 6)).unwrap();
        n.connect(red, a, b, 2.0).unwrap();
        let forward = Segment::new(blue, b, c)
            .with_weight(3.5)
            .with_hint(RenderHint::ParallelFirst);
        n.add_segment(forward).unwrap();
        n.add_segment(forward.reversed().with_hint(RenderHint::Reverse))
            .unwrap();
        n
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        let network = sample();

        save(&network, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.line_count(), 2);
        assert_eq!(loaded.station_count(), 3);
        assert_eq!(loaded.segments().collect::<Vec<_>>(), network.segments().collect::<Vec<_>>());
        assert_eq!(loaded.station_by_name("C").unwrap().position(), Position::new(5, 6));
        assert_eq!(
            loaded.line_by_name("Blue").unwrap().color(),
            Color::from_argb(0xFF0000FF)
        );
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("network.json");

        save(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn loads_editor_xml_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shanghai.XML");
        std::fs::write(
            &path,
            r#"<?xml version="1.0" encoding="gb2312"?>
<MetroGraph ScrollX="0" ScrollY="0" ZoomScale="100">
  <Lines><Line Name="Red" Color="-65536"/></Lines>
  <Nodes>
    <Node Name="A" X="1" Y="2"><Link To="B" Line="Red" Flag="0" Weight="2"/></Node>
    <Node Name="B" X="3" Y="4"><Link To="A" Line="Red" Flag="-1" Weight="2"/></Node>
  </Nodes>
</MetroGraph>"#,
        )
        .unwrap();

        let network = load(&path).unwrap();
        assert_eq!(network.station_count(), 2);
        assert_eq!(network.segment_count(), 2);
        assert_eq!(network.station_by_name("B").unwrap().position(), Position::new(3, 4));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/path/network.json")).unwrap_err();
        assert!(matches!(err, NetworkFileError::Io { .. }));
    }

    #[test]
    fn invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{ "stations": [ { "name": 5 } ] }"#).unwrap();

        assert!(matches!(load(&path), Err(NetworkFileError::Json(_))));
    }
}
