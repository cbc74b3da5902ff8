//! Line identity, naming, and colour types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid line name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line name: {reason}")]
pub struct InvalidLineName {
    reason: &'static str,
}

/// Error returned when constructing an invalid line colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line colour: {reason}")]
pub struct InvalidLineColor {
    reason: &'static str,
}

/// Identifier for a line.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::LineId;
///
/// let id = LineId::new(2);
/// assert_eq!(id.as_u64(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Create a line id from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-blank line display name.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::LineName;
///
/// let name = LineName::new("line 2").unwrap();
/// assert_eq!(name.as_str(), "line 2");
///
/// assert!(LineName::new("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineName(String);

impl LineName {
    /// Create a line name.
    ///
    /// The name must contain at least one non-whitespace character.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidLineName> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(InvalidLineName {
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

impl TryFrom<String> for LineName {
    type Error = InvalidLineName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<LineName> for String {
    fn from(name: LineName) -> Self {
        name.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-blank line colour label, e.g. `bg-green-600`.
///
/// The colour is an opaque label as far as this crate is concerned; only
/// blankness is rejected.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::LineColor;
///
/// let color = LineColor::new("bg-green-600").unwrap();
/// assert_eq!(color.as_str(), "bg-green-600");
///
/// assert!(LineColor::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineColor(String);

impl LineColor {
    /// Create a line colour.
    ///
    /// The label must contain at least one non-whitespace character.
    pub fn new(color: impl Into<String>) -> Result<Self, InvalidLineColor> {
        let color = color.into();

        if color.trim().is_empty() {
            return Err(InvalidLineColor {
                reason: "must not be blank",
            });
        }

        Ok(Self(color))
    }

    /// Returns the colour as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the colour, returning the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for LineColor {
    type Error = InvalidLineColor;

    fn try_from(color: String) -> Result<Self, Self::Error> {
        Self::new(color)
    }
}

impl From<LineColor> for String {
    fn from(color: LineColor) -> Self {
        color.0
    }
}

impl fmt::Debug for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineColor({})", self.0)
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
