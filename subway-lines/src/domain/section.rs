//! Sections: directed edges between adjacent stations on a line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Distance, LineId, StationId};

/// Error returned when constructing an invalid section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: {reason}")]
pub struct InvalidSection {
    reason: &'static str,
}

/// Identifier for a persisted section.
///
/// Sections produced by merging two neighbours have no id until storage
/// assigns one, so [`Section`] carries `Option<SectionId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(u64);

impl SectionId {
    /// Create a section id from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge from an up station to a down station on one line.
///
/// The direction follows the line's own up/down orientation: the up
/// station is the one closer to the line's top endpoint. Distances are
/// between the two endpoints only, not cumulative along the line.
///
/// # Invariants
///
/// * The up and down stations are distinct.
/// * The distance is strictly positive (guaranteed by [`Distance`]).
///
/// # Examples
///
/// ```
/// use subway_lines::domain::{Distance, LineId, Section, SectionId, StationId};
///
/// let section = Section::new(
///     Some(SectionId::new(1)),
///     LineId::new(2),
///     StationId::new(1),
///     StationId::new(2),
///     Distance::new(10).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(section.up_station_id(), StationId::new(1));
/// assert_eq!(section.down_station_id(), StationId::new(2));
/// assert_eq!(section.distance().as_u64(), 10);
///
/// // A section cannot loop back to its own up station
/// assert!(
///     Section::new(
///         None,
///         LineId::new(2),
///         StationId::new(1),
///         StationId::new(1),
///         Distance::new(10).unwrap(),
///     )
///     .is_err()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SectionRepr")]
pub struct Section {
    id: Option<SectionId>,
    line_id: LineId,
    up_station_id: StationId,
    down_station_id: StationId,
    distance: Distance,
}

impl Section {
    /// Create a section between two distinct stations.
    ///
    /// # Errors
    ///
    /// Returns an error when the up and down stations are the same.
    pub fn new(
        id: Option<SectionId>,
        line_id: LineId,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: Distance,
    ) -> Result<Self, InvalidSection> {
        if up_station_id == down_station_id {
            return Err(InvalidSection {
                reason: "up and down stations must differ",
            });
        }

        Ok(Self {
            id,
            line_id,
            up_station_id,
            down_station_id,
            distance,
        })
    }

    /// Returns the persisted id, if any.
    pub fn id(&self) -> Option<SectionId> {
        self.id
    }

    /// Returns the id of the line this section belongs to.
    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    /// Returns the up-side endpoint.
    pub fn up_station_id(&self) -> StationId {
        self.up_station_id
    }

    /// Returns the down-side endpoint.
    pub fn down_station_id(&self) -> StationId {
        self.down_station_id
    }

    /// Returns the distance between the two endpoints.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns true when both sections leave the same up station.
    pub fn has_same_up_station(&self, other: &Section) -> bool {
        self.up_station_id == other.up_station_id
    }

    /// Returns true when both sections arrive at the same down station.
    pub fn has_same_down_station(&self, other: &Section) -> bool {
        self.down_station_id == other.down_station_id
    }

    /// Returns true when the station is one of this section's endpoints.
    pub fn touches(&self, station: StationId) -> bool {
        self.up_station_id == station || self.down_station_id == station
    }
}

/// Mirror of [`Section`] used to validate on deserialize.
#[derive(Deserialize)]
struct SectionRepr {
    #[serde(default)]
    id: Option<SectionId>,
    line_id: LineId,
    up_station_id: StationId,
    down_station_id: StationId,
    distance: Distance,
}

impl TryFrom<SectionRepr> for Section {
    type Error = InvalidSection;

    fn try_from(repr: SectionRepr) -> Result<Self, Self::Error> {
        Self::new(
            repr.id,
            repr.line_id,
            repr.up_station_id,
            repr.down_station_id,
            repr.distance,
        )
    }
}
