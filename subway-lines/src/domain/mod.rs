//! Domain types for subway lines.
//!
//! Everything here is validated at construction: a value of one of these
//! types always satisfies its own invariants, so the chain logic in
//! [`crate::chain`] never has to re-check them.

mod distance;
mod line;
mod section;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use line::{InvalidLineColor, InvalidLineName, LineColor, LineId, LineName};
pub use section::{InvalidSection, Section, SectionId};
pub use station::{InvalidStationName, Station, StationId, StationName};
