//! Route results.

use std::fmt;

use serde::Serialize;

use crate::domain::{Colour, StationName};

/// The stations a passenger stops at, from origin to destination inclusive.
///
/// Stations the train runs through without stopping are not listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    stations: Vec<StationName>,
}

impl Route {
    /// Create a route from its stops in travel order.
    ///
    /// # Panics
    ///
    /// Panics if `stations` is empty; a route always has an origin.
    pub fn new(stations: Vec<StationName>) -> Self {
        assert!(!stations.is_empty(), "a route needs at least one station");
        Self { stations }
    }

    /// The stops in travel order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Number of stops after leaving the origin.
    pub fn stop_count(&self) -> usize {
        self.stations.len() - 1
    }

    /// The station the passenger boards at.
    pub fn origin(&self) -> &StationName {
        &self.stations[0]
    }

    /// The station the passenger leaves the network at.
    pub fn destination(&self) -> &StationName {
        &self.stations[self.stations.len() - 1]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{station}")?;
        }
        Ok(())
    }
}

/// Every way a route query can end.
///
/// None of these are errors: a colour mismatch or a disconnected network is
/// an ordinary answer to the question asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Origin and destination are the same station.
    AlreadyThere { station: StationName },

    /// A minimum-stop route was found.
    Found { route: Route },

    /// Trains of this colour never stop at the destination.
    UnreachableByColour {
        station: StationName,
        colour: Colour,
    },

    /// The destination is not connected to the origin.
    NoPath { from: StationName, to: StationName },
}

impl RouteOutcome {
    /// The route travelled, if the destination can be reached.
    ///
    /// Being already there is the single-station route.
    pub fn route(&self) -> Option<Route> {
        match self {
            RouteOutcome::AlreadyThere { station } => Some(Route::new(vec![station.clone()])),
            RouteOutcome::Found { route } => Some(route.clone()),
            RouteOutcome::UnreachableByColour { .. } | RouteOutcome::NoPath { .. } => None,
        }
    }

    /// Returns true if the destination can be reached.
    pub fn is_reachable(&self) -> bool {
        matches!(
            self,
            RouteOutcome::AlreadyThere { .. } | RouteOutcome::Found { .. }
        )
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::AlreadyThere { station } => write!(f, "{station}"),
            RouteOutcome::Found { route } => write!(f, "{route}"),
            RouteOutcome::UnreachableByColour { station, colour } => write!(
                f,
                "It's not possible to reach {station} on a train of colour {colour}!"
            ),
            RouteOutcome::NoPath { from, to } => {
                write!(f, "There are no routes between {from} and {to}!")
            }
        }
    }
}
