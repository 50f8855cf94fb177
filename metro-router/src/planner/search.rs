//! Minimum-stop route search.
//!
//! Dijkstra over the station graph with 0/1 weights: moving into a station
//! costs one if the train stops there and zero if it passes through. Search
//! state lives in per-query arrays indexed by [`StationIdx`], never on the
//! network itself.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::config::ColourScheme;
use super::route::{Route, RouteOutcome};
use super::stops::stops;
use crate::domain::{Colour, DomainError};
use crate::network::{Network, StationIdx};

/// A route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Name of the origin station.
    pub start: String,

    /// Name of the destination station.
    pub end: String,

    /// Colour of the train; [`Colour::any`] for one that stops everywhere.
    pub colour: Colour,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(start: impl Into<String>, end: impl Into<String>, colour: Colour) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            colour,
        }
    }
}

/// Queue entry: (stops so far, push sequence, station).
///
/// The push sequence breaks ties first-in first-out, so among equally short
/// routes the one discovered first wins.
type QueueEntry = Reverse<(usize, u64, StationIdx)>;

/// Per-query search state.
struct SearchState {
    /// Best known stop count from the origin.
    distance: Vec<Option<usize>>,

    /// Station each best distance was reached from.
    parent: Vec<Option<StationIdx>>,

    /// Stations whose distance is final.
    visited: Vec<bool>,

    queue: BinaryHeap<QueueEntry>,
    pushes: u64,
}

impl SearchState {
    fn new(stations: usize, start: StationIdx) -> Self {
        let mut state = Self {
            distance: vec![None; stations],
            parent: vec![None; stations],
            visited: vec![false; stations],
            queue: BinaryHeap::new(),
            pushes: 0,
        };
        state.distance[start.0] = Some(0);
        state.push(start, 0);
        state
    }

    fn push(&mut self, station: StationIdx, distance: usize) {
        self.queue.push(Reverse((distance, self.pushes, station)));
        self.pushes += 1;
    }

    fn improves(&self, station: StationIdx, candidate: usize) -> bool {
        self.distance[station.0].is_none_or(|best| candidate < best)
    }
}

/// Route planner over a borrowed network.
pub struct Router<'a> {
    network: &'a Network,
    scheme: &'a ColourScheme,
}

impl<'a> Router<'a> {
    /// Create a new router.
    pub fn new(network: &'a Network, scheme: &'a ColourScheme) -> Self {
        Self { network, scheme }
    }

    /// Find the route with the fewest stops.
    ///
    /// Fails only when the request names a station that does not exist.
    /// Station names are checked before anything else, so a query from an
    /// unknown station to itself is an error rather than a one-station route.
    pub fn find_route(&self, request: &RouteRequest) -> Result<RouteOutcome, DomainError> {
        let start = self.network.lookup(&request.start)?;
        let end = self.network.lookup(&request.end)?;
        let colour = &request.colour;

        debug!(
            start = %request.start,
            end = %request.end,
            colour = %colour,
            "Finding route"
        );

        if start == end {
            return Ok(RouteOutcome::AlreadyThere {
                station: self.network.name(start).clone(),
            });
        }

        if !self.stops_at(colour, end) {
            debug!(end = %request.end, colour = %colour, "Train never stops at destination");
            return Ok(RouteOutcome::UnreachableByColour {
                station: self.network.name(end).clone(),
                colour: colour.clone(),
            });
        }

        let mut state = SearchState::new(self.network.len(), start);

        while let Some(Reverse((distance, _, current))) = state.queue.pop() {
            // A station can sit in the queue more than once; only its first pop counts.
            if state.visited[current.0] {
                continue;
            }
            state.visited[current.0] = true;

            trace!(
                station = %self.network.name(current),
                distance,
                "Expanding station"
            );

            for &next in self.network.neighbors(current) {
                if state.visited[next.0] {
                    continue;
                }

                let weight = usize::from(self.stops_at(colour, next));
                let candidate = distance + weight;

                if state.improves(next, candidate) {
                    state.distance[next.0] = Some(candidate);
                    state.parent[next.0] = Some(current);

                    // Nothing still queued is below `distance`, and the
                    // destination always costs a stop, so this is final.
                    if next == end {
                        let route = self.track_route(&state, start, end, colour);
                        debug!(
                            stops = route.stop_count(),
                            pushes = state.pushes,
                            "Route found"
                        );
                        return Ok(RouteOutcome::Found { route });
                    }

                    state.push(next, candidate);
                }
            }
        }

        debug!(pushes = state.pushes, "Search exhausted without reaching destination");

        Ok(RouteOutcome::NoPath {
            from: self.network.name(start).clone(),
            to: self.network.name(end).clone(),
        })
    }

    fn stops_at(&self, colour: &Colour, station: StationIdx) -> bool {
        stops(self.scheme, colour, self.network.colour(station))
    }

    /// Walk parent links back from `end`, keeping the stations the train stops at.
    ///
    /// # Panics
    ///
    /// Panics if the parent chain does not lead back to `start`. The search
    /// only calls this after setting a parent for every station it reached,
    /// so a broken chain is a bug in the search itself.
    fn track_route(
        &self,
        state: &SearchState,
        start: StationIdx,
        end: StationIdx,
        colour: &Colour,
    ) -> Route {
        let mut stations = vec![self.network.name(end).clone()];
        let mut current = end;
        let mut steps = 0;

        while current != start {
            current = match state.parent[current.0] {
                Some(parent) => parent,
                None => panic!(
                    "corrupt search state: {} has no parent",
                    self.network.name(current)
                ),
            };

            steps += 1;
            assert!(
                steps <= self.network.len(),
                "corrupt search state: parent chain from {} does not reach {}",
                self.network.name(end),
                self.network.name(start)
            );

            if current == start || self.stops_at(colour, current) {
                stations.push(self.network.name(current).clone());
            }
        }

        stations.reverse();
        Route::new(stations)
    }
}

/// Find the route with the fewest stops from `start` to `end` on a train of `colour`.
///
/// Convenience wrapper around [`Router::find_route`].
///
/// # Examples
///
/// ```
/// use metro_router::domain::Colour;
/// use metro_router::network::parse_network;
/// use metro_router::planner::{ColourScheme, find_route};
///
/// let network = parse_network("A,\nB,red\nC,green\nD,\n\nA,B\nB,C\nC,D\n").unwrap();
/// let scheme = ColourScheme::default();
///
/// let outcome = find_route(&network, &scheme, "A", "D", Colour::new("red")).unwrap();
/// assert_eq!(outcome.to_string(), "A->B->D");
/// ```
pub fn find_route(
    network: &Network,
    scheme: &ColourScheme,
    start: &str,
    end: &str,
    colour: Colour,
) -> Result<RouteOutcome, DomainError> {
    Router::new(network, scheme).find_route(&RouteRequest::new(start, end, colour))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
