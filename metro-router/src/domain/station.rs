//! Station name type.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name {name:?}: {reason}")]
pub struct InvalidStationName {
    name: String,
    reason: &'static str,
}

/// The unique name of a station in a network.
///
/// Names are non-empty, carry no surrounding whitespace and never contain
/// a comma (the field separator of the network file format).
///
/// # Examples
///
/// ```
/// use metro_router::domain::StationName;
///
/// let a = StationName::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("A,B").is_err());
/// assert!(StationName::parse(" A").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let reject = |reason| InvalidStationName {
            name: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(reject("must not be empty"));
        }
        if s.contains(',') {
            return Err(reject("must not contain a comma"));
        }
        if s.trim() != s {
            return Err(reject("must not have surrounding whitespace"));
        }

        Ok(StationName(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(StationName::parse("A").is_ok());
        assert!(StationName::parse("Baker Street").is_ok());
        assert!(StationName::parse("Ñuñoa").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationName::parse("").is_err());
    }

    #[test]
    fn reject_comma() {
        assert!(StationName::parse("A,B").is_err());
        assert!(StationName::parse(",").is_err());
    }

    #[test]
    fn reject_surrounding_whitespace() {
        assert!(StationName::parse(" A").is_err());
        assert!(StationName::parse("A ").is_err());
        assert!(StationName::parse("\tA").is_err());
    }

    #[test]
    fn error_display() {
        let err = StationName::parse("A,B").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station name \"A,B\": must not contain a comma"
        );
    }

    #[test]
    fn display_and_debug() {
        let name = StationName::parse("Central").unwrap();
        assert_eq!(format!("{}", name), "Central");
        assert_eq!(format!("{:?}", name), "StationName(Central)");
    }

    #[test]
    fn hash_lookup_by_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(StationName::parse("A").unwrap(), 1);
        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.get("B"), None);
    }
}
