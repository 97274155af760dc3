//! Domain error types.
//!
//! These errors represent invalid references and key collisions while
//! building or querying a network. They are distinct from file/IO errors.

/// Domain-level errors for network construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A line or station reference that must exist does not
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A line with this name is already part of the network
    #[error("duplicate line: {0}")]
    DuplicateLine(String),

    /// A station with this name is already part of the network
    #[error("duplicate station: {0}")]
    DuplicateStation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidArgument("line1");
        assert_eq!(err.to_string(), "invalid argument: line1");

        let err = DomainError::DuplicateLine("Line 2".into());
        assert_eq!(err.to_string(), "duplicate line: Line 2");

        let err = DomainError::DuplicateStation("People's Square".into());
        assert_eq!(err.to_string(), "duplicate station: People's Square");
    }
}
