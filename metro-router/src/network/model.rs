//! Arena-backed station graph.

use std::collections::HashMap;

use crate::domain::{Colour, DomainError, StationName};

/// Index of a station inside a [`Network`].
///
/// Indices are only meaningful for the network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIdx(pub(crate) usize);

#[derive(Debug, Clone)]
struct Station {
    name: StationName,
    colour: Colour,
    /// Adjacent stations in the order their connections were added.
    neighbors: Vec<StationIdx>,
}

/// A metro network of colour-tagged stations.
///
/// Connections are symmetric: if A connects to B, B connects to A.
/// Every connection endpoint is a declared station.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationName, StationIdx>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station.
    ///
    /// Returns [`DomainError::DuplicateStation`] if a station with the same
    /// name already exists; the existing declaration is left untouched.
    pub fn add_station(
        &mut self,
        name: StationName,
        colour: Colour,
    ) -> Result<StationIdx, DomainError> {
        if self.index.contains_key(&name) {
            return Err(DomainError::DuplicateStation(name));
        }

        let idx = StationIdx(self.stations.len());
        self.index.insert(name.clone(), idx);
        self.stations.push(Station {
            name,
            colour,
            neighbors: Vec::new(),
        });
        Ok(idx)
    }

    /// Connect two declared stations in both directions.
    ///
    /// Adding the same connection twice has no further effect.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<(), DomainError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;

        self.link(a, b);
        self.link(b, a);
        Ok(())
    }

    fn link(&mut self, from: StationIdx, to: StationIdx) {
        let neighbors = &mut self.stations[from.0].neighbors;
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }

    /// Names of the stations adjacent to `name`, in connection order.
    pub fn neighbors_of(&self, name: &str) -> Result<Vec<&StationName>, DomainError> {
        let idx = self.lookup(name)?;
        Ok(self.neighbors(idx).iter().map(|&n| self.name(n)).collect())
    }

    /// The colour of the station called `name`.
    pub fn colour_of(&self, name: &str) -> Result<&Colour, DomainError> {
        let idx = self.lookup(name)?;
        Ok(self.colour(idx))
    }

    /// Returns true if a station called `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All station names, in declaration order.
    pub fn station_names(&self) -> impl Iterator<Item = &StationName> + '_ {
        self.stations.iter().map(|s| &s.name)
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station has been declared.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Resolve a station name to its index.
    pub fn lookup(&self, name: &str) -> Result<StationIdx, DomainError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::UnknownStation(name.to_string()))
    }

    pub(crate) fn name(&self, idx: StationIdx) -> &StationName {
        &self.stations[idx.0].name
    }

    pub(crate) fn colour(&self, idx: StationIdx) -> &Colour {
        &self.stations[idx.0].colour
    }

    pub(crate) fn neighbors(&self, idx: StationIdx) -> &[StationIdx] {
        &self.stations[idx.0].neighbors
    }
}
