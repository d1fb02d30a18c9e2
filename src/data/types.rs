//! Venue and team value types.
//!
//! Both are immutable once built and compare structurally, so they can be
//! used directly as map keys. Names are reference-counted, which keeps the
//! per-gene clones made by the genetic operators cheap.

use std::fmt;
use std::sync::Arc;

/// A match location, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Venue {
    name: Arc<str>,
}

impl Venue {
    /// Creates a venue with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// The venue name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A competitor with a fixed home venue.
///
/// Equality and hashing cover both the name and the home venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Team {
    name: Arc<str>,
    home: Venue,
}

impl Team {
    /// Creates a team playing its home matches at `home`.
    pub fn new(name: impl Into<Arc<str>>, home: Venue) -> Self {
        Self {
            name: name.into(),
            home,
        }
    }

    /// The team name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The team's home venue.
    pub fn home(&self) -> &Venue {
        &self.home
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
