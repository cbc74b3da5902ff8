//! Section chain maintenance for one line.
//!
//! A line's sections form a single simple path. [`Sections`] owns that
//! path and exposes the two structural mutations: inserting a section
//! (dispatched to the first matching [`SectionAddRule`]) and removing a
//! station (dropping an endpoint section, or merging the two sections
//! around an interior station). [`Line`] bundles a chain with the line's
//! identity and presentation attributes.

mod error;
mod line;
mod rules;
mod sections;

pub use error::ChainError;
pub use line::Line;
pub use rules::{
    BottomStationExtension, DownStationExists, SectionAddRule, TopStationExtension,
    UpStationExists, add_rules,
};
pub use sections::Sections;
