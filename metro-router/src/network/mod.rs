//! Metro network model and its text loader.
//!
//! A [`Network`] holds the stations and their undirected connections. It is
//! built once and then only read; route queries keep their own search state,
//! so one network can serve any number of queries.

mod loader;
mod model;

pub use loader::{LoadError, load_network, parse_network};
pub use model::{Network, StationIdx};
