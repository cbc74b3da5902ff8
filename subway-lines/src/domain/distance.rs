//! Positive distances between adjacent stations.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: {reason}")]
pub struct InvalidDistance {
    reason: &'static str,
}

/// The length of a section, always strictly positive.
///
/// Sections connect two distinct stations, so a zero-length section is
/// meaningless. This type guarantees that any `Distance` value is positive
/// by construction, which lets split arithmetic rely on subtraction only
/// ever producing another valid `Distance`.
///
/// # Examples
///
/// ```
/// use subway_lines::domain::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// assert_eq!(ten.as_u64(), 10);
///
/// // Zero is rejected
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Distance(u64);

impl Distance {
    /// Create a distance from a raw value.
    ///
    /// The value must be at least 1.
    pub fn new(value: u64) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance {
                reason: "must be at least 1",
            });
        }

        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Add another distance, returning `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract another distance, returning the remainder.
    ///
    /// Returns `None` unless the remainder would be strictly positive,
    /// so `a.checked_sub(b)` succeeds exactly when `b < a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_lines::domain::Distance;
    ///
    /// let seven = Distance::new(7).unwrap();
    /// let four = Distance::new(4).unwrap();
    ///
    /// assert_eq!(seven.checked_sub(four), Some(Distance::new(3).unwrap()));
    ///
    /// // No positive remainder is left
    /// assert_eq!(four.checked_sub(four), None);
    /// assert_eq!(four.checked_sub(seven), None);
    /// ```
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        if other.0 >= self.0 {
            return None;
        }

        Some(Self(self.0 - other.0))
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("distance overflow")
    }
}

impl TryFrom<u64> for Distance {
    type Error = InvalidDistance;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Distance> for u64 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
