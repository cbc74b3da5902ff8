//! Station identity and naming types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Identifier for a station.
///
/// Section endpoints refer to stations by id, so everything the chain does
/// is id-based. The full [`Station`] record only matters when presenting a
/// line to a caller.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::StationId;
///
/// let id = StationId::new(1);
/// assert_eq!(id.as_u64(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-blank station display name.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::StationName;
///
/// let name = StationName::new("gangnam").unwrap();
/// assert_eq!(name.as_str(), "gangnam");
///
/// // Blank names are rejected
/// assert!(StationName::new("").is_err());
/// assert!(StationName::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Create a station name.
    ///
    /// The name must contain at least one non-whitespace character.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidStationName> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(InvalidStationName {
                reason: "must not be blank",
            });
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = InvalidStationName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
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

/// A station on the network.
///
/// Two stations are equal when their ids are equal. The display name is
/// not part of identity, so a renamed station still compares equal to its
/// earlier self.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::{Station, StationId, StationName};
///
/// let gangnam = Station::new(StationId::new(1), StationName::new("gangnam").unwrap());
/// assert_eq!(gangnam.id(), StationId::new(1));
/// assert_eq!(gangnam.name().as_str(), "gangnam");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: StationName,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: StationName) -> Self {
        Self { id, name }
    }

    /// Returns the station id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the station name.
    pub fn name(&self) -> &StationName {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
