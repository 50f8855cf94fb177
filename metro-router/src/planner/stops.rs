//! The stop rule.

use super::ColourScheme;
use crate::domain::Colour;

/// Returns true if a train of colour `train` stops at a station of colour
/// `station`.
///
/// A train stops when the colours match, when the station is neutral, or
/// when the train itself is neutral.
pub fn stops(scheme: &ColourScheme, train: &Colour, station: &Colour) -> bool {
    train == station || !scheme.is_tagged(station) || !scheme.is_tagged(train)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(s: &str) -> Colour {
        Colour::new(s)
    }

    #[test]
    fn matching_colours_stop() {
        let scheme = ColourScheme::default();
        assert!(stops(&scheme, &colour("red"), &colour("red")));
        assert!(stops(&scheme, &colour("green"), &colour("green")));
    }

    #[test]
    fn mismatched_tagged_colours_pass_through() {
        let scheme = ColourScheme::default();
        assert!(!stops(&scheme, &colour("red"), &colour("green")));
        assert!(!stops(&scheme, &colour("green"), &colour("red")));
    }

    #[test]
    fn neutral_station_serves_everyone() {
        let scheme = ColourScheme::default();
        assert!(stops(&scheme, &colour("red"), &Colour::any()));
        assert!(stops(&scheme, &colour("green"), &colour("blue")));
    }

    #[test]
    fn neutral_train_stops_everywhere() {
        let scheme = ColourScheme::default();
        assert!(stops(&scheme, &Colour::any(), &colour("red")));
        assert!(stops(&scheme, &Colour::any(), &colour("green")));
        assert!(stops(&scheme, &colour("blue"), &colour("green")));
    }

    #[test]
    fn follows_the_configured_scheme() {
        let scheme = ColourScheme::new(["blue", "yellow"]);
        assert!(!stops(&scheme, &colour("blue"), &colour("yellow")));
        // red is neutral under this scheme
        assert!(stops(&scheme, &colour("red"), &colour("green")));
    }
}
