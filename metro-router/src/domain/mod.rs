//! Domain types for the metro router.
//!
//! Station names and colours are validated at construction time, so code
//! that receives these types can trust their validity.

mod colour;
mod error;
mod station;

pub use colour::Colour;
pub use error::DomainError;
pub use station::{InvalidStationName, StationName};
