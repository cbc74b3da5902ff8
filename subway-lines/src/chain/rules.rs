//! Insertion rules for grafting a section onto a chain.
//!
//! Each rule recognises one topological case: extending an endpoint, or
//! splitting an existing section at a shared station. [`Sections::insert`]
//! consults the rules in a fixed order and applies the first match.
//!
//! [`Sections::insert`]: crate::chain::Sections::insert

use crate::chain::ChainError;
use crate::domain::{Section, StationId};

/// One way a candidate section can be admitted into a chain.
///
/// `is_satisfied_by` decides whether the rule applies to the candidate;
/// `apply` performs the insertion. `apply` re-checks its own preconditions
/// and fails without touching the chain when they do not hold, so a failed
/// application never leaves a partially mutated chain behind.
pub trait SectionAddRule {
    /// Short rule name, used in logs.
    fn name(&self) -> &'static str;

    /// Returns true when this rule knows how to insert the candidate.
    fn is_satisfied_by(&self, sections: &[Section], candidate: &Section) -> bool;

    /// Insert the candidate into the ordered chain.
    ///
    /// # Errors
    ///
    /// Fails when the candidate cannot be placed by this rule, or when a
    /// split would not leave a positive-length remainder.
    fn apply(&self, sections: &mut Vec<Section>, candidate: Section) -> Result<(), ChainError>;
}

/// The insertion rules in evaluation order.
///
/// Endpoint extensions are recognised before splits. For any candidate
/// with exactly one endpoint already on a valid chain, exactly one rule
/// matches; the fixed order makes first-match dispatch deterministic.
pub fn add_rules() -> [&'static dyn SectionAddRule; 4] {
    [
        &TopStationExtension,
        &BottomStationExtension,
        &UpStationExists,
        &DownStationExists,
    ]
}

/// Prepends a candidate arriving at the chain's top endpoint.
#[derive(Debug, Clone, Copy)]
pub struct TopStationExtension;

impl SectionAddRule for TopStationExtension {
    fn name(&self) -> &'static str {
        "top station extension"
    }

    fn is_satisfied_by(&self, sections: &[Section], candidate: &Section) -> bool {
        top_station(sections) == Some(candidate.down_station_id())
            && !contains_station(sections, candidate.up_station_id())
    }

    fn apply(&self, sections: &mut Vec<Section>, candidate: Section) -> Result<(), ChainError> {
        if !self.is_satisfied_by(sections, &candidate) {
            return Err(ChainError::NoInsertionPoint {
                reason: "candidate does not extend the top endpoint",
            });
        }

        sections.insert(0, candidate);
        Ok(())
    }
}

/// Appends a candidate departing from the chain's bottom endpoint.
#[derive(Debug, Clone, Copy)]
pub struct BottomStationExtension;

impl SectionAddRule for BottomStationExtension {
    fn name(&self) -> &'static str {
        "bottom station extension"
    }

    fn is_satisfied_by(&self, sections: &[Section], candidate: &Section) -> bool {
        bottom_station(sections) == Some(candidate.up_station_id())
            && !contains_station(sections, candidate.down_station_id())
    }

    fn apply(&self, sections: &mut Vec<Section>, candidate: Section) -> Result<(), ChainError> {
        if !self.is_satisfied_by(sections, &candidate) {
            return Err(ChainError::NoInsertionPoint {
                reason: "candidate does not extend the bottom endpoint",
            });
        }

        sections.push(candidate);
        Ok(())
    }
}

/// Splits the section that shares the candidate's up station.
///
/// The candidate takes over the shared up station; the rest of the split
/// section becomes a new remainder running from the candidate's down
/// station to the split section's old down station.
#[derive(Debug, Clone, Copy)]
pub struct UpStationExists;

impl SectionAddRule for UpStationExists {
    fn name(&self) -> &'static str {
        "split at shared up station"
    }

    fn is_satisfied_by(&self, sections: &[Section], candidate: &Section) -> bool {
        sections
            .iter()
            .any(|section| section.has_same_up_station(candidate))
    }

    fn apply(&self, sections: &mut Vec<Section>, candidate: Section) -> Result<(), ChainError> {
        let index = sections
            .iter()
            .position(|section| section.has_same_up_station(&candidate))
            .ok_or(ChainError::NoInsertionPoint {
                reason: "no section shares the candidate's up station",
            })?;

        let existing = &sections[index];
        let remainder_distance = existing
            .distance()
            .checked_sub(candidate.distance())
            .ok_or(ChainError::SectionTooLong {
                existing: existing.distance(),
                candidate: candidate.distance(),
            })?;

        let remainder = Section::new(
            existing.id(),
            existing.line_id(),
            candidate.down_station_id(),
            existing.down_station_id(),
            remainder_distance,
        )
        .map_err(|_| ChainError::NoInsertionPoint {
            reason: "candidate has the same endpoints as the section it splits",
        })?;

        // The remainder keeps the split section's id.
        sections[index] = candidate;
        sections.insert(index + 1, remainder);
        Ok(())
    }
}

/// Splits the section that shares the candidate's down station.
///
/// The candidate takes over the shared down station; the rest of the
/// split section becomes a new remainder running from the split section's
/// old up station to the candidate's up station.
#[derive(Debug, Clone, Copy)]
pub struct DownStationExists;

impl SectionAddRule for DownStationExists {
    fn name(&self) -> &'static str {
        "split at shared down station"
    }

    fn is_satisfied_by(&self, sections: &[Section], candidate: &Section) -> bool {
        sections
            .iter()
            .any(|section| section.has_same_down_station(candidate))
    }

    fn apply(&self, sections: &mut Vec<Section>, candidate: Section) -> Result<(), ChainError> {
        let index = sections
            .iter()
            .position(|section| section.has_same_down_station(&candidate))
            .ok_or(ChainError::NoInsertionPoint {
                reason: "no section shares the candidate's down station",
            })?;

        let existing = &sections[index];
        let remainder_distance = existing
            .distance()
            .checked_sub(candidate.distance())
            .ok_or(ChainError::SectionTooLong {
                existing: existing.distance(),
                candidate: candidate.distance(),
            })?;

        let remainder = Section::new(
            existing.id(),
            existing.line_id(),
            existing.up_station_id(),
            candidate.up_station_id(),
            remainder_distance,
        )
        .map_err(|_| ChainError::NoInsertionPoint {
            reason: "candidate has the same endpoints as the section it splits",
        })?;

        // The remainder keeps the split section's id.
        sections[index] = remainder;
        sections.insert(index + 1, candidate);
        Ok(())
    }
}

/// Returns true when the station is an endpoint of any section.
pub(super) fn contains_station(sections: &[Section], station: StationId) -> bool {
    sections.iter().any(|section| section.touches(station))
}

/// The chain's top endpoint: the up station that no section arrives at.
///
/// Returns `None` for an empty chain.
pub(super) fn top_station(sections: &[Section]) -> Option<StationId> {
    sections.iter().map(Section::up_station_id).find(|up| {
        !sections
            .iter()
            .any(|section| section.down_station_id() == *up)
    })
}

/// The chain's bottom endpoint: the down station that no section leaves.
///
/// Returns `None` for an empty chain.
pub(super) fn bottom_station(sections: &[Section]) -> Option<StationId> {
    sections.iter().map(Section::down_station_id).find(|down| {
        !sections
            .iter()
            .any(|section| section.up_station_id() == *down)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Distance, LineId, SectionId};

    fn section(id: u64, up: u64, down: u64, distance: u64) -> Section {
        Section::new(
            Some(SectionId::new(id)),
            LineId::new(2),
            StationId::new(up),
            StationId::new(down),
            Distance::new(distance).unwrap(),
        )
        .unwrap()
    }

    fn unsaved(up: u64, down: u64, distance: u64) -> Section {
        Section::new(
            None,
            LineId::new(2),
            StationId::new(up),
            StationId::new(down),
            Distance::new(distance).unwrap(),
        )
        .unwrap()
    }

    /// 1 -> 2 -> 3 with two sections of length 10.
    fn chain() -> Vec<Section> {
        vec![section(1, 1, 2, 10), section(2, 2, 3, 10)]
    }

    #[test]
    fn endpoints_of_chain() {
        let sections = chain();
        assert_eq!(top_station(&sections), Some(StationId::new(1)));
        assert_eq!(bottom_station(&sections), Some(StationId::new(3)));
    }

    #[test]
    fn endpoints_of_empty_chain() {
        assert_eq!(top_station(&[]), None);
        assert_eq!(bottom_station(&[]), None);
    }

    #[test]
    fn contains_only_chain_stations() {
        let sections = chain();
        assert!(contains_station(&sections, StationId::new(1)));
        assert!(contains_station(&sections, StationId::new(2)));
        assert!(contains_station(&sections, StationId::new(3)));
        assert!(!contains_station(&sections, StationId::new(4)));
    }

    #[test]
    fn top_extension_prepends() {
        let mut sections = chain();
        let candidate = unsaved(9, 1, 4);

        assert!(TopStationExtension.is_satisfied_by(&sections, &candidate));
        TopStationExtension
            .apply(&mut sections, candidate.clone())
            .unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], candidate);
        assert_eq!(top_station(&sections), Some(StationId::new(9)));
    }

    #[test]
    fn top_extension_rejects_unrelated_candidate() {
        let mut sections = chain();
        let before = sections.clone();
        let candidate = unsaved(3, 4, 4);

        assert!(!TopStationExtension.is_satisfied_by(&sections, &candidate));
        let err = TopStationExtension
            .apply(&mut sections, candidate)
            .unwrap_err();

        assert!(matches!(err, ChainError::NoInsertionPoint { .. }));
        assert_eq!(sections, before);
    }

    #[test]
    fn bottom_extension_appends() {
        let mut sections = chain();
        let candidate = unsaved(3, 4, 4);

        assert!(BottomStationExtension.is_satisfied_by(&sections, &candidate));
        BottomStationExtension
            .apply(&mut sections, candidate.clone())
            .unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2], candidate);
        assert_eq!(bottom_station(&sections), Some(StationId::new(4)));
    }

    #[test]
    fn bottom_extension_rejects_unrelated_candidate() {
        let mut sections = chain();
        let before = sections.clone();
        let candidate = unsaved(9, 1, 4);

        assert!(!BottomStationExtension.is_satisfied_by(&sections, &candidate));
        assert!(
            BottomStationExtension
                .apply(&mut sections, candidate)
                .is_err()
        );
        assert_eq!(sections, before);
    }

    #[test]
    fn up_split_replaces_and_keeps_remainder_id() {
        let mut sections = chain();
        let candidate = unsaved(1, 4, 4);

        assert!(UpStationExists.is_satisfied_by(&sections, &candidate));
        UpStationExists
            .apply(&mut sections, candidate.clone())
            .unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], candidate);

        let remainder = &sections[1];
        assert_eq!(remainder.id(), Some(SectionId::new(1)));
        assert_eq!(remainder.up_station_id(), StationId::new(4));
        assert_eq!(remainder.down_station_id(), StationId::new(2));
        assert_eq!(remainder.distance(), Distance::new(6).unwrap());
    }

    #[test]
    fn up_split_rejects_equal_distance() {
        let mut sections = chain();
        let before = sections.clone();

        let err = UpStationExists
            .apply(&mut sections, unsaved(1, 4, 10))
            .unwrap_err();

        assert_eq!(
            err,
            ChainError::SectionTooLong {
                existing: Distance::new(10).unwrap(),
                candidate: Distance::new(10).unwrap(),
            }
        );
        assert_eq!(sections, before);
    }

    #[test]
    fn up_split_rejects_longer_candidate() {
        let mut sections = chain();
        let before = sections.clone();

        let err = UpStationExists
            .apply(&mut sections, unsaved(1, 4, 12))
            .unwrap_err();

        assert!(matches!(err, ChainError::SectionTooLong { .. }));
        assert_eq!(sections, before);
    }

    #[test]
    fn down_split_replaces_and_keeps_remainder_id() {
        let mut sections = chain();
        let candidate = unsaved(4, 3, 4);

        assert!(DownStationExists.is_satisfied_by(&sections, &candidate));
        DownStationExists
            .apply(&mut sections, candidate.clone())
            .unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2], candidate);

        let remainder = &sections[1];
        assert_eq!(remainder.id(), Some(SectionId::new(2)));
        assert_eq!(remainder.up_station_id(), StationId::new(2));
        assert_eq!(remainder.down_station_id(), StationId::new(4));
        assert_eq!(remainder.distance(), Distance::new(6).unwrap());
    }

    #[test]
    fn down_split_rejects_equal_distance() {
        let mut sections = chain();
        let before = sections.clone();

        let err = DownStationExists
            .apply(&mut sections, unsaved(4, 3, 10))
            .unwrap_err();

        assert!(matches!(err, ChainError::SectionTooLong { .. }));
        assert_eq!(sections, before);
    }

    #[test]
    fn exactly_one_rule_matches_each_case() {
        let sections = chain();

        let cases = [
            (unsaved(9, 1, 4), "top station extension"),
            (unsaved(3, 4, 4), "bottom station extension"),
            (unsaved(1, 4, 4), "split at shared up station"),
            (unsaved(4, 3, 4), "split at shared down station"),
        ];

        for (candidate, expected) in cases {
            let matching: Vec<&'static str> = add_rules()
                .into_iter()
                .filter(|rule| rule.is_satisfied_by(&sections, &candidate))
                .map(|rule| rule.name())
                .collect();
            assert_eq!(matching, vec![expected]);
        }
    }

    #[test]
    fn no_rule_matches_disconnected_candidate() {
        let sections = chain();
        let candidate = unsaved(8, 9, 4);

        assert!(
            add_rules()
                .into_iter()
                .all(|rule| !rule.is_satisfied_by(&sections, &candidate))
        );
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<&'static str> = add_rules().into_iter().map(|rule| rule.name()).collect();
        assert_eq!(
            names,
            vec![
                "top station extension",
                "bottom station extension",
                "split at shared up station",
                "split at shared down station",
            ]
        );
    }
}
