//! Train and station colours.

use std::fmt;

use serde::Serialize;

/// A colour label carried by a station or a train.
///
/// Colours are free-form. Whether a colour takes part in stop matching is
/// decided by the [`ColourScheme`](crate::planner::ColourScheme) in use, not
/// by the colour itself. The empty colour is the "any colour" train.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Colour(String);

impl Colour {
    /// Create a colour from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Colour(label.into())
    }

    /// The empty colour, used for trains that stop everywhere.
    pub fn any() -> Self {
        Colour::default()
    }

    /// Returns true for the empty colour.
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the colour label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Colour {
    fn from(label: &str) -> Self {
        Colour::new(label)
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour({})", self.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
