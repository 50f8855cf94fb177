//! Colour configuration for the route planner.

use crate::domain::Colour;

/// The set of colours that take part in stop matching.
///
/// A station or train whose colour is outside this set is neutral: neutral
/// stations are served by every train and neutral trains stop everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourScheme {
    tagged: Vec<Colour>,
}

impl ColourScheme {
    /// Create a scheme with the given tagged colours.
    ///
    /// Duplicates and the empty colour are dropped; the empty colour always
    /// means "any colour".
    pub fn new<I, C>(tagged: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Colour>,
    {
        let mut colours: Vec<Colour> = Vec::new();
        for colour in tagged.into_iter().map(Into::into) {
            if !colour.is_any() && !colours.contains(&colour) {
                colours.push(colour);
            }
        }
        Self { tagged: colours }
    }

    /// Returns true if `colour` takes part in stop matching.
    pub fn is_tagged(&self, colour: &Colour) -> bool {
        self.tagged.contains(colour)
    }

    /// The tagged colours, in the order they were given.
    pub fn tagged(&self) -> &[Colour] {
        &self.tagged
    }
}

impl Default for ColourScheme {
    fn default() -> Self {
        Self::new(["red", "green"])
    }
}
