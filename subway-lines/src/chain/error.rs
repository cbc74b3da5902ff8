//! Chain mutation error types.
//!
//! These errors represent rejected insertions and deletions on a section
//! chain. Every rejection leaves the chain exactly as it was.

use crate::domain::{Distance, StationId};

/// Errors from mutating a section chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// No insertion rule accepts the candidate section
    #[error("no insertion point: {reason}")]
    NoInsertionPoint { reason: &'static str },

    /// A splitting candidate is at least as long as the section it splits
    #[error("cannot split a section of length {existing} with a section of length {candidate}")]
    SectionTooLong {
        existing: Distance,
        candidate: Distance,
    },

    /// The chain is too short to remove a station from
    #[error("no section chain exists for this line")]
    ChainNotFound,

    /// The station is not on this line
    #[error("station {0} is not on this line")]
    StationNotFound(StationId),

    /// Merging the sections around a removed station would overflow
    #[error("cannot merge sections of length {incoming} and {outgoing}: distance overflow")]
    DistanceOverflow {
        incoming: Distance,
        outgoing: Distance,
    },
}
