//! Minimum-stop route planner.
//!
//! This module answers: "On a train of this colour, which stations do I
//! stop at on the way from A to B, making as few stops as possible?"
//!
//! The search is a Dijkstra variant over the station graph where entering a
//! station costs one stop if the train stops there and nothing if it runs
//! straight through.

mod config;
mod route;
mod search;
mod stops;

pub use config::ColourScheme;
pub use route::{Route, RouteOutcome};
pub use search::{RouteRequest, Router, find_route};
pub use stops::stops;
