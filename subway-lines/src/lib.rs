//! Ordered section chains for subway lines.
//!
//! A library that models a transit line as a branchless chain of
//! stations joined by weighted sections, and keeps that chain valid
//! while sections are inserted and stations removed.

pub mod chain;
pub mod domain;
