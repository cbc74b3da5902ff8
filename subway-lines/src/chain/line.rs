//! A line aggregate: identity and presentation attributes plus the chain.

use serde::{Deserialize, Serialize};

use crate::chain::{ChainError, Sections};
use crate::domain::{LineColor, LineId, LineName, Section, StationId};

/// A named, coloured line together with its section chain.
///
/// `Line` is a thin aggregate: all structural work is delegated to
/// [`Sections`]. It exists so callers can carry a line's identity and
/// presentation attributes alongside the chain they mutate, and persist
/// the whole thing as one value.
///
/// # Examples
///
/// ```
/// use subway_lines::chain::Line;
/// use subway_lines::domain::{Distance, LineColor, LineId, LineName, Section, StationId};
///
/// let mut line = Line::new(
///     LineId::new(2),
///     LineName::new("line 2").unwrap(),
///     LineColor::new("bg-green-600").unwrap(),
/// );
///
/// let section = Section::new(
///     None,
///     line.id(),
///     StationId::new(1),
///     StationId::new(2),
///     Distance::new(10).unwrap(),
/// )
/// .unwrap();
/// line.add_section(section).unwrap();
///
/// assert_eq!(line.station_ids().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    id: LineId,
    name: LineName,
    color: LineColor,
    sections: Sections,
}

impl Line {
    /// Create a line with an empty chain.
    pub fn new(id: LineId, name: LineName, color: LineColor) -> Self {
        Self {
            id,
            name,
            color,
            sections: Sections::new(),
        }
    }

    /// Create a line from persisted attributes and sections.
    pub fn with_sections(
        id: LineId,
        name: LineName,
        color: LineColor,
        sections: Sections,
    ) -> Self {
        Self {
            id,
            name,
            color,
            sections,
        }
    }

    /// Returns the line id.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Returns the line name.
    pub fn name(&self) -> &LineName {
        &self.name
    }

    /// Returns the line colour.
    pub fn color(&self) -> &LineColor {
        &self.color
    }

    /// Returns the line's section chain.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Replace the line's display name.
    pub fn rename(&mut self, name: LineName) {
        self.name = name;
    }

    /// Replace the line's colour.
    pub fn recolor(&mut self, color: LineColor) {
        self.color = color;
    }

    /// Add a section to the line's chain.
    ///
    /// See [`Sections::insert`] for placement and errors.
    pub fn add_section(&mut self, section: Section) -> Result<(), ChainError> {
        self.sections.insert(section)
    }

    /// Remove a station from the line's chain.
    ///
    /// See [`Sections::remove_station`] for merge behaviour and errors.
    pub fn remove_station(&mut self, station: StationId) -> Result<(), ChainError> {
        self.sections.remove_station(station)
    }

    /// Returns the line's stations from the top endpoint to the bottom.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.sections.sorted_station_ids()
    }

    /// Consumes the line, returning its section chain.
    pub fn into_sections(self) -> Sections {
        self.sections
    }
}
