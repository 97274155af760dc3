//! Network file error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur when loading or saving a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkFileError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid network document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is not a valid map editor XML file
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    /// A segment points at a station that is not declared
    #[error("station {station}: segment to unknown station {to}")]
    UnknownStation { station: String, to: String },

    /// A segment names a line that is not declared
    #[error("station {station}: segment on unknown line {line}")]
    UnknownLine { station: String, line: String },

    /// A segment carries a render marker we don't know
    #[error("station {station}: unknown segment flag {flag}")]
    UnknownFlag { station: String, flag: i32 },

    /// Building the network failed (e.g. duplicate names)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A segment has no partner running the other way
    #[error("segment {line}:{from}->{to} has no reverse segment")]
    MissingReverse {
        line: String,
        from: String,
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkFileError::UnknownStation {
            station: "A".into(),
            to: "Q".into(),
        };
        assert_eq!(err.to_string(), "station A: segment to unknown station Q");

        let err = NetworkFileError::MissingReverse {
            line: "L1".into(),
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "segment L1:A->B has no reverse segment");

        let err = NetworkFileError::Domain(DomainError::DuplicateLine("L1".into()));
        assert_eq!(err.to_string(), "duplicate line: L1");

        let err = NetworkFileError::Io {
            path: PathBuf::from("/tmp/net.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "I/O error on /tmp/net.json: missing");
    }
}
