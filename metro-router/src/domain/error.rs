//! Domain error types.
//!
//! These errors represent invalid networks and queries naming stations
//! that do not exist. They are distinct from file and argument errors.

use super::{InvalidStationName, StationName};

/// Domain-level errors for network construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A station with this name was already declared
    #[error("station {0} is declared more than once")]
    DuplicateStation(StationName),

    /// No station with this name exists in the network
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The station name is not valid
    #[error(transparent)]
    InvalidName(#[from] InvalidStationName),
}
