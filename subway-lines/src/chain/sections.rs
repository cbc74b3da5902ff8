//! The ordered section chain for one line.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chain::ChainError;
use crate::chain::rules::{add_rules, contains_station, top_station};
use crate::domain::{Section, StationId};

/// The section chain for one line.
///
/// Holds the line's sections as a single simple path from a top endpoint
/// to a bottom endpoint. A chain is built empty, or from persisted
/// sections via `From<Vec<Section>>`, which trusts the stored set to
/// already form a valid chain. All mutation goes through [`insert`] and
/// [`remove_station`], which either fully succeed or fail leaving the
/// chain exactly as it was.
///
/// # Invariants
///
/// * The sections form exactly one simple path: no branching, no cycle,
///   no repeated station.
/// * A non-empty chain has exactly one top endpoint and one bottom
///   endpoint.
///
/// # Examples
///
/// ```
/// use subway_lines::chain::Sections;
/// use subway_lines::domain::{Distance, LineId, Section, StationId};
///
/// fn section(up: u64, down: u64, distance: u64) -> Section {
///     Section::new(
///         None,
///         LineId::new(2),
///         StationId::new(up),
///         StationId::new(down),
///         Distance::new(distance).unwrap(),
///     )
///     .unwrap()
/// }
///
/// let mut sections = Sections::new();
/// sections.insert(section(1, 2, 10)).unwrap();
/// sections.insert(section(2, 3, 10)).unwrap();
///
/// // Station 4 goes between stations 1 and 2
/// sections.insert(section(1, 4, 4)).unwrap();
///
/// let ids: Vec<u64> = sections
///     .sorted_station_ids()
///     .iter()
///     .map(|id| id.as_u64())
///     .collect();
/// assert_eq!(ids, vec![1, 4, 2, 3]);
/// ```
///
/// [`insert`]: Sections::insert
/// [`remove_station`]: Sections::remove_station
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections in the chain.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true when the chain has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the sections as stored.
    ///
    /// Storage order is not meaningful; use [`sorted_sections`] for
    /// top-to-bottom order.
    ///
    /// [`sorted_sections`]: Sections::sorted_sections
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    /// Consumes the chain, returning the underlying sections.
    pub fn into_inner(self) -> Vec<Section> {
        self.sections
    }

    /// Returns true when the station is an endpoint of any section.
    pub fn contains_station(&self, station: StationId) -> bool {
        contains_station(&self.sections, station)
    }

    /// Insert a section into the chain.
    ///
    /// An empty chain accepts any section. Otherwise exactly one endpoint
    /// of the candidate must already be on the line, and the first
    /// matching rule places it: extending the top or bottom endpoint, or
    /// splitting the existing section that shares the candidate's up or
    /// down station (see [`add_rules`]).
    ///
    /// # Errors
    ///
    /// * [`ChainError::NoInsertionPoint`] when both endpoints, or neither
    ///   endpoint, are already on the line.
    /// * [`ChainError::SectionTooLong`] when a split would not leave a
    ///   positive-length remainder.
    pub fn insert(&mut self, section: Section) -> Result<(), ChainError> {
        if self.sections.is_empty() {
            debug!(section = ?section, "Starting a new chain");
            self.sections.push(section);
            return Ok(());
        }

        let has_up = self.contains_station(section.up_station_id());
        let has_down = self.contains_station(section.down_station_id());

        if has_up && has_down {
            return Err(ChainError::NoInsertionPoint {
                reason: "both endpoints are already on the line",
            });
        }

        for rule in add_rules() {
            trace!(rule = rule.name(), "Evaluating insertion rule");
            if rule.is_satisfied_by(&self.sections, &section) {
                debug!(rule = rule.name(), section = ?section, "Inserting section");
                return rule.apply(&mut self.sections, section);
            }
        }

        Err(ChainError::NoInsertionPoint {
            reason: "neither endpoint is on the line",
        })
    }

    /// Remove a station from the chain.
    ///
    /// Removing an endpoint drops its only section. Removing an interior
    /// station merges its two neighbouring sections into one spanning
    /// section whose distance is the sum of the two; the merged section
    /// has no id until storage assigns one.
    ///
    /// # Errors
    ///
    /// * [`ChainError::ChainNotFound`] when the chain has fewer than two
    ///   sections. A single-section chain cannot lose a station without
    ///   ceasing to be a chain; delete the whole line instead.
    /// * [`ChainError::StationNotFound`] when the station is not on the
    ///   line.
    /// * [`ChainError::DistanceOverflow`] when the merged section's
    ///   distance would overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_lines::chain::Sections;
    /// use subway_lines::domain::{Distance, LineId, Section, StationId};
    ///
    /// fn section(up: u64, down: u64, distance: u64) -> Section {
    ///     Section::new(
    ///         None,
    ///         LineId::new(2),
    ///         StationId::new(up),
    ///         StationId::new(down),
    ///         Distance::new(distance).unwrap(),
    ///     )
    ///     .unwrap()
    /// }
    ///
    /// let mut sections = Sections::new();
    /// sections.insert(section(1, 2, 10)).unwrap();
    /// sections.insert(section(2, 3, 10)).unwrap();
    ///
    /// // Removing the interior station merges its neighbours
    /// sections.remove_station(StationId::new(2)).unwrap();
    ///
    /// assert_eq!(sections.len(), 1);
    /// assert_eq!(sections.as_slice()[0].distance(), Distance::new(20).unwrap());
    /// ```
    pub fn remove_station(&mut self, station: StationId) -> Result<(), ChainError> {
        if self.sections.len() < 2 {
            return Err(ChainError::ChainNotFound);
        }

        let incoming = self
            .sections
            .iter()
            .position(|section| section.down_station_id() == station);
        let outgoing = self
            .sections
            .iter()
            .position(|section| section.up_station_id() == station);

        match (incoming, outgoing) {
            (None, None) => Err(ChainError::StationNotFound(station)),
            (None, Some(index)) => {
                debug!(station = %station, "Removing the top endpoint");
                self.sections.remove(index);
                Ok(())
            }
            (Some(index), None) => {
                debug!(station = %station, "Removing the bottom endpoint");
                self.sections.remove(index);
                Ok(())
            }
            (Some(incoming), Some(outgoing)) => {
                let merged = self.merge_neighbors(incoming, outgoing)?;
                debug!(station = %station, merged = ?merged, "Merging around an interior station");

                let lower = incoming.min(outgoing);
                let higher = incoming.max(outgoing);
                self.sections.remove(higher);
                self.sections.remove(lower);
                self.sections.insert(lower, merged);
                Ok(())
            }
        }
    }

    /// Returns the sections ordered from the top endpoint to the bottom
    /// endpoint.
    ///
    /// A pure projection: the chain is not modified, and repeated calls
    /// return the same order. An empty chain produces an empty vec.
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let by_up: HashMap<StationId, &Section> = self
            .sections
            .iter()
            .map(|section| (section.up_station_id(), section))
            .collect();

        let mut ordered = Vec::with_capacity(self.sections.len());
        let Some(mut current) = top_station(&self.sections) else {
            return ordered;
        };

        while let Some(section) = by_up.get(&current) {
            ordered.push(*section);
            current = section.down_station_id();

            // Bound the walk so a malformed persisted chain cannot loop
            if ordered.len() == self.sections.len() {
                break;
            }
        }

        ordered
    }

    /// Returns the station ids in order from the top endpoint to the
    /// bottom endpoint.
    ///
    /// A non-empty chain of `n` sections yields `n + 1` stations; an
    /// empty chain yields none.
    pub fn sorted_station_ids(&self) -> Vec<StationId> {
        let ordered = self.sorted_sections();

        let Some(first) = ordered.first() else {
            return Vec::new();
        };

        let mut stations = Vec::with_capacity(ordered.len() + 1);
        stations.push(first.up_station_id());
        stations.extend(ordered.iter().map(|section| section.down_station_id()));
        stations
    }

    /// Merge the two sections around an interior station into one.
    fn merge_neighbors(&self, incoming: usize, outgoing: usize) -> Result<Section, ChainError> {
        let incoming = &self.sections[incoming];
        let outgoing = &self.sections[outgoing];

        let distance = incoming
            .distance()
            .checked_add(outgoing.distance())
            .ok_or(ChainError::DistanceOverflow {
                incoming: incoming.distance(),
                outgoing: outgoing.distance(),
            })?;

        // Safe: on a simple path the stations two hops apart are distinct
        Ok(Section::new(
            None,
            incoming.line_id(),
            incoming.up_station_id(),
            outgoing.down_station_id(),
            distance,
        )
        .expect("merged endpoints must differ on a valid chain"))
    }
}

impl From<Vec<Section>> for Sections {
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}
